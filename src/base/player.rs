use std::fmt;

use super::base_bot::BaseBot;
use crate::game::poker_moves::PokerMove;
use crate::game::poker_state::{GameState, RoundState, TerminalState, BIG_BLIND};
use crate::strategy::Strategy;

/// Bookkeeping a player carries from round to round.
///
/// Everything here is copied out of the engine's snapshots; no snapshot is
/// kept past the callback that delivered it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub rounds_started: u32,
    pub rounds_finished: u32,
    pub decisions: u32,
    /// Decisions taken in the round in progress.
    pub round_decisions: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Rounds where the opponent's cards were shown.
    pub showdowns: u32,
    /// Times this seat had to act facing a bet or raise.
    pub bets_faced: u32,
    /// Moves the strategy proposed that had to be rewritten.
    pub corrections: u32,
    pub net: i32,
    pub last_bankroll: i32,
}

impl Ledger {
    /// Share of decisions where the opponent had bet into this seat.
    pub fn opponent_aggression(&self) -> f64 {
        if self.decisions == 0 {
            0.0
        } else {
            self.bets_faced as f64 / self.decisions as f64
        }
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rounds {} net {:+} w/l/t {}/{}/{} showdowns {} aggression {:.2}",
            self.rounds_finished,
            self.net,
            self.wins,
            self.losses,
            self.ties,
            self.showdowns,
            self.opponent_aggression()
        )
    }
}

/// A [`BaseBot`] that hands decisions to a [`Strategy`] and only ever
/// returns legal moves.
pub struct Player<S: Strategy> {
    strategy: S,
    ledger: Ledger,
}

impl<S: Strategy> Player<S> {
    pub fn new(strategy: S) -> Self {
        log::info!("new game with {} strategy", strategy.name());
        Player {
            strategy,
            ledger: Ledger::default(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The blinds are forced, so a big blind preflop is not an opponent bet.
    fn facing_bet(round_state: &RoundState) -> bool {
        let continue_cost = round_state.continue_cost();
        continue_cost > 0 && !(round_state.street == 0 && round_state.pips[1 - round_state.active()] == BIG_BLIND)
    }
}

impl<S: Strategy> BaseBot for Player<S> {
    fn handle_new_round(&mut self, game_state: &GameState, round_state: &RoundState, active: usize) {
        self.ledger.rounds_started += 1;
        self.ledger.round_decisions = 0;
        self.ledger.last_bankroll = game_state.bankroll;
        log::debug!(
            "round {} seat {} hand {:?} clock {:.3}",
            game_state.round_num,
            active,
            round_state.hands[active],
            game_state.game_clock
        );
    }

    fn handle_round_over(&mut self, game_state: &GameState, terminal_state: &TerminalState, active: usize) {
        let delta = terminal_state.deltas[active];
        let ledger = &mut self.ledger;
        ledger.rounds_finished += 1;
        ledger.net += delta;
        ledger.last_bankroll = game_state.bankroll;
        match delta {
            d if d > 0 => ledger.wins += 1,
            d if d < 0 => ledger.losses += 1,
            _ => ledger.ties += 1,
        }
        if !terminal_state.previous_state.hands[1 - active].is_empty() {
            ledger.showdowns += 1;
        }
        log::debug!("round {} over, delta {:+}", game_state.round_num, delta);
        if ledger.rounds_finished % 100 == 0 {
            log::info!("{}", ledger);
        }
    }

    fn get_action(&mut self, game_state: &GameState, round_state: &RoundState, active: usize) -> PokerMove {
        self.ledger.decisions += 1;
        self.ledger.round_decisions += 1;
        if Self::facing_bet(round_state) {
            self.ledger.bets_faced += 1;
        }

        let proposed = self.strategy.decide(game_state, round_state, active);
        let action = round_state.legalize(proposed);
        if action != proposed {
            self.ledger.corrections += 1;
            log::warn!(
                "{} proposed {} which is not legal here, playing {}",
                self.strategy.name(),
                proposed,
                action
            );
        }
        log::debug!("seat {} street {} plays {}", active, round_state.street, action);
        action
    }
}
