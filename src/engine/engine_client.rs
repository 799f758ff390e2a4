use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use clap::Parser;

use super::clause::{parse_packet, Clause};
use crate::base::base_bot::BaseBot;
use crate::error::ClientError;
use crate::game::poker_moves::PokerMove;
use crate::game::poker_state::{GameState, PokerState, RoundState, TerminalState};
use crate::strategy::StrategyKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host to connect to
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Decision policy to play with
    #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
    pub strategy: StrategyKind,

    /// Seed for randomized strategies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Port to connect to
    pub port: u16,
}

/// What the client knows between packets.
#[derive(Debug)]
struct Session {
    game_state: GameState,
    round_state: Option<PokerState>,
    active: usize,
    /// Set until the next hand arrives; packets are only acknowledged meanwhile.
    round_pending: bool,
}

impl Session {
    fn new() -> Self {
        Session {
            game_state: GameState::default(),
            round_state: None,
            active: 0,
            round_pending: true,
        }
    }

    /// Applies one clause. Returns `false` once the engine says to quit.
    fn apply<T: BaseBot>(&mut self, clause: Clause, pokerbot: &mut T) -> Result<bool, ClientError> {
        match clause {
            Clause::Time(clock) => self.game_state.game_clock = clock,
            Clause::Seat(active) => self.active = active,
            Clause::Hand(cards) => {
                let mut hands = [Vec::new(), Vec::new()];
                hands[self.active] = cards;
                let round_state = RoundState::opening(hands);
                if self.round_pending {
                    pokerbot.handle_new_round(&self.game_state, &round_state, self.active);
                    self.round_pending = false;
                }
                self.round_state = Some(PokerState::Round(round_state));
            }
            Clause::Move(action) => match self.round_state.take() {
                Some(PokerState::Round(round_state)) => {
                    self.round_state = Some(round_state.proceed(action));
                }
                other => {
                    self.round_state = other;
                    return Err(ClientError::NoRound(action.code()));
                }
            },
            Clause::Board(cards) => match &mut self.round_state {
                Some(PokerState::Round(round_state)) => round_state.deck = cards,
                Some(PokerState::Terminal(terminal_state)) => terminal_state.previous_state.deck = cards,
                None => return Err(ClientError::NoRound(format!("B{}", cards.join(",")))),
            },
            Clause::Opponent(cards) => match &mut self.round_state {
                Some(PokerState::Terminal(terminal_state)) => {
                    terminal_state.previous_state.hands[1 - self.active] = cards;
                }
                _ => return Err(ClientError::NotTerminal(format!("O{}", cards.join(",")))),
            },
            Clause::Delta(delta) => {
                let previous_state = match self.round_state.take() {
                    Some(PokerState::Terminal(terminal_state)) => terminal_state.previous_state,
                    other => {
                        self.round_state = other;
                        return Err(ClientError::NotTerminal(format!("D{}", delta)));
                    }
                };
                let mut deltas = [-delta, -delta];
                deltas[self.active] = delta;
                let terminal_state = TerminalState { deltas, previous_state };

                self.game_state.bankroll += delta;
                pokerbot.handle_round_over(&self.game_state, &terminal_state, self.active);
                self.game_state.round_num += 1;
                self.round_state = Some(PokerState::Terminal(terminal_state));
                self.round_pending = true;
            }
            Clause::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// The move to send back once a packet has been applied.
    fn respond<T: BaseBot>(&self, pokerbot: &mut T) -> Result<PokerMove, ClientError> {
        if self.round_pending {
            // acknowledge
            return Ok(PokerMove::Check);
        }
        match &self.round_state {
            Some(PokerState::Round(round_state)) => {
                if self.active != round_state.active() {
                    return Err(ClientError::OutOfTurn {
                        active: self.active,
                        button: round_state.button,
                    });
                }
                Ok(pokerbot.get_action(&self.game_state, round_state, self.active))
            }
            Some(PokerState::Terminal(_)) => Err(ClientError::RoundOver),
            None => Err(ClientError::NoRound("action request".to_string())),
        }
    }
}

/// Plays one game against the engine on behalf of `pokerbot`.
///
/// Every packet is one line of clauses and gets exactly one line back.
pub struct EngineClient<T: BaseBot, R: BufRead, W: Write> {
    pokerbot: T,
    reader: R,
    writer: W,
}

impl<T: BaseBot, R: BufRead, W: Write> EngineClient<T, R, W> {
    pub fn new(pokerbot: T, reader: R, writer: W) -> Self {
        EngineClient { pokerbot, reader, writer }
    }

    pub fn bot(&self) -> &T {
        &self.pokerbot
    }

    pub fn into_parts(self) -> (T, W) {
        (self.pokerbot, self.writer)
    }

    pub fn send(&mut self, action: PokerMove) -> Result<(), ClientError> {
        writeln!(self.writer, "{}", action.code())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Runs until the engine quits or closes the connection.
    pub fn run(&mut self) -> Result<(), ClientError> {
        let mut session = Session::new();
        let mut line = String::new();

        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                log::info!("engine closed the connection");
                return Ok(());
            }
            log::debug!("<- {}", line.trim_end());

            for clause in parse_packet(&line)? {
                if !session.apply(clause, &mut self.pokerbot)? {
                    log::info!(
                        "game over after {} rounds, bankroll {}",
                        session.game_state.round_num - 1,
                        session.game_state.bankroll
                    );
                    return Ok(());
                }
            }

            let action = session.respond(&mut self.pokerbot)?;
            log::debug!("-> {}", action.code());
            self.send(action)?;
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run_bot<T: BaseBot>(pokerbot: T, args: &Args) -> Result<(), ClientError> {
    let stream = TcpStream::connect((args.host.as_str(), args.port))?;
    stream.set_nodelay(true)?;
    log::info!("connected to {}:{}", args.host, args.port);

    let reader = BufReader::new(stream.try_clone()?);
    let mut client = EngineClient::new(pokerbot, reader, stream);
    client.run()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert_matches::assert_matches;

    use super::*;
    use crate::error::ClauseError;

    /// Folds every hand.
    #[derive(Default)]
    struct Folder {
        rounds: Vec<(i32, i32)>,
        final_boards: Vec<Vec<String>>,
    }

    impl BaseBot for Folder {
        fn handle_new_round(&mut self, _: &GameState, _: &RoundState, _: usize) {}

        fn handle_round_over(&mut self, game_state: &GameState, terminal_state: &TerminalState, active: usize) {
            self.rounds.push((game_state.round_num, terminal_state.deltas[active]));
            self.final_boards.push(terminal_state.previous_state.deck.clone());
        }

        fn get_action(&mut self, _: &GameState, _: &RoundState, _: usize) -> PokerMove {
            PokerMove::Fold
        }
    }

    fn play(transcript: &str) -> (Result<(), ClientError>, Folder, String) {
        let mut client = EngineClient::new(Folder::default(), Cursor::new(transcript.as_bytes()), Vec::new());
        let result = client.run();
        let (bot, out) = client.into_parts();
        (result, bot, String::from_utf8(out).unwrap())
    }

    #[test]
    fn small_blind_folds_then_acks() {
        let (result, bot, out) = play("T30. P0 HAs,Kd\nT29.9 P0 HAs,Kd F D-1\nQ\n");
        assert!(result.is_ok());
        assert_eq!(out, "F\nK\n");
        assert_eq!(bot.rounds, vec![(1, -1)]);
    }

    #[test]
    fn arguments_parse_with_defaults() {
        let args = Args::try_parse_from(["pokerbot", "--strategy", "passive", "5555"]).unwrap();
        assert_eq!(args.host, "localhost");
        assert_eq!(args.port, 5555);
        assert_eq!(args.strategy, StrategyKind::Passive);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn end_of_input_is_a_clean_stop() {
        let (result, _, out) = play("");
        assert!(result.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn refuses_to_act_out_of_turn() {
        let (result, _, _) = play("T30. P1 H2c,2d\n");
        assert_matches!(result, Err(ClientError::OutOfTurn { active: 1, button: 0 }));
    }

    #[test]
    fn payoff_needs_a_finished_round() {
        let (result, _, _) = play("T30. P0 H2c,2d D5\n");
        assert_matches!(result, Err(ClientError::NotTerminal(_)));

        let (result, _, _) = play("T30. P0 K\n");
        assert_matches!(result, Err(ClientError::NoRound(_)));
    }

    #[test]
    fn malformed_packets_surface_as_clause_errors() {
        let (result, _, _) = play("T30. P0 H2c,2d X\n");
        assert_matches!(result, Err(ClientError::Clause(_)));

        let (result, _, _) = play("T30. P1 H2c,2d F D-2147483648\n");
        assert_matches!(result, Err(ClientError::Clause(ClauseError::BadNumber(_))));

        let (result, _, _) = play("T30. P1 H2c,2d R-2147483648\n");
        assert_matches!(result, Err(ClientError::Clause(ClauseError::BadNumber(_))));
    }

    #[test]
    fn board_after_the_end_lands_on_the_last_live_state() {
        let transcript = "T30. P1 H2c,2d F B5s,6s,7s D1\nQ\n";
        let mut client = EngineClient::new(Folder::default(), Cursor::new(transcript.as_bytes()), Vec::new());
        client.run().unwrap();

        assert_eq!(client.bot().rounds, vec![(1, 1)]);
        assert_eq!(client.bot().final_boards, vec![vec!["5s", "6s", "7s"]]);
        let (_, out) = client.into_parts();
        assert_eq!(out, b"K\n");
    }
}
