use std::str::FromStr;

use crate::error::ClauseError;
use crate::game::poker_moves::PokerMove;
use crate::game::poker_state::STARTING_STACK;

/// No payoff or raise can move more chips than both stacks hold.
const MAX_CHIPS: i32 = 2 * STARTING_STACK;

/// One space-separated token of an engine packet.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `T`: seconds left on this player's clock.
    Time(f64),
    /// `P`: the seat this player occupies for the round.
    Seat(usize),
    /// `H`: this player's hole cards; starts a round.
    Hand(Vec<String>),
    /// `F`, `C`, `K`, `R`: a move by whichever seat was to act.
    Move(PokerMove),
    /// `B`: every board card revealed so far.
    Board(Vec<String>),
    /// `O`: the opponent's hole cards, shown at showdown.
    Opponent(Vec<String>),
    /// `D`: this player's payoff for the round.
    Delta(i32),
    /// `Q`: the game is over.
    Quit,
}

fn cards(rest: &str) -> Vec<String> {
    rest.split(',').filter(|c| !c.is_empty()).map(String::from).collect()
}

impl FromStr for Clause {
    type Err = ClauseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.chars().next().ok_or(ClauseError::Empty)?;
        let rest = &s[code.len_utf8()..];
        let bad_number = || ClauseError::BadNumber(s.to_string());

        match code {
            'T' => rest.parse().map(Clause::Time).map_err(|_| bad_number()),
            'P' => {
                let seat: usize = rest.parse().map_err(|_| bad_number())?;
                if seat > 1 {
                    return Err(ClauseError::BadSeat(seat));
                }
                Ok(Clause::Seat(seat))
            }
            'H' => Ok(Clause::Hand(cards(rest))),
            'B' => Ok(Clause::Board(cards(rest))),
            'O' => Ok(Clause::Opponent(cards(rest))),
            'D' => match rest.parse::<i32>() {
                Ok(delta) if (-MAX_CHIPS..=MAX_CHIPS).contains(&delta) => Ok(Clause::Delta(delta)),
                _ => Err(bad_number()),
            },
            'Q' => Ok(Clause::Quit),
            'F' | 'C' | 'K' | 'R' => match s.parse::<PokerMove>()? {
                PokerMove::Raise(amount) if !(0..=MAX_CHIPS).contains(&amount) => Err(bad_number()),
                action => Ok(Clause::Move(action)),
            },
            other => Err(ClauseError::UnknownCode(other)),
        }
    }
}

/// Splits a packet line into clauses, skipping blank tokens.
pub fn parse_packet(line: &str) -> Result<Vec<Clause>, ClauseError> {
    line.split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_a_full_packet() {
        let clauses = parse_packet("T29.871 P1 H9s,Tc R6 C B2h,3h,Jd\n").unwrap();
        assert_eq!(
            clauses,
            vec![
                Clause::Time(29.871),
                Clause::Seat(1),
                Clause::Hand(vec!["9s".into(), "Tc".into()]),
                Clause::Move(PokerMove::Raise(6)),
                Clause::Move(PokerMove::Call),
                Clause::Board(vec!["2h".into(), "3h".into(), "Jd".into()]),
            ]
        );
    }

    #[test]
    fn engine_sends_zero_clock_as_trailing_dot() {
        assert_eq!("T0.".parse::<Clause>().unwrap(), Clause::Time(0.0));
    }

    #[test]
    fn payoff_and_quit() {
        assert_eq!(parse_packet("O4c,4d D-12").unwrap().last(), Some(&Clause::Delta(-12)));
        assert_eq!(parse_packet("Q").unwrap(), vec![Clause::Quit]);
        assert!(parse_packet("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_clauses() {
        assert_matches!(parse_packet("P2"), Err(ClauseError::BadSeat(2)));
        assert_matches!(parse_packet("Pone"), Err(ClauseError::BadNumber(_)));
        assert_matches!(parse_packet("T1.0 Z"), Err(ClauseError::UnknownCode('Z')));
        assert_matches!(parse_packet("Dlots"), Err(ClauseError::BadNumber(_)));
        assert_matches!(parse_packet("Rmax"), Err(ClauseError::BadNumber(_)));
    }

    #[test]
    fn rejects_chip_counts_no_table_can_hold() {
        assert_matches!(parse_packet("D-2147483648"), Err(ClauseError::BadNumber(_)));
        assert_matches!(parse_packet("D801"), Err(ClauseError::BadNumber(_)));
        assert_matches!(parse_packet("R-2147483648"), Err(ClauseError::BadNumber(_)));
        assert_matches!(parse_packet("R-1"), Err(ClauseError::BadNumber(_)));
        assert_eq!(
            parse_packet("D-800 R400").unwrap(),
            vec![Clause::Delta(-800), Clause::Move(PokerMove::Raise(400))]
        );
    }
}
