use std::fmt;
use std::str::FromStr;

use crate::error::ClauseError;

/// A move the player sends to the engine.
///
/// `Raise` carries the total pip the player is raising *to*, not the
/// increment. Bets and raises are the same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokerMove {
    Fold,
    Call,
    Check,
    Raise(i32),
}

/// The shape of a move without its amount, as listed in a legal action set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveKind {
    Fold,
    Call,
    Check,
    Raise,
}

impl PokerMove {
    pub fn kind(&self) -> MoveKind {
        match self {
            PokerMove::Fold => MoveKind::Fold,
            PokerMove::Call => MoveKind::Call,
            PokerMove::Check => MoveKind::Check,
            PokerMove::Raise(_) => MoveKind::Raise,
        }
    }

    /// Wire code understood by the engine: `F`, `C`, `K` or `R<amount>`.
    pub fn code(&self) -> String {
        match self {
            PokerMove::Fold => "F".to_string(),
            PokerMove::Call => "C".to_string(),
            PokerMove::Check => "K".to_string(),
            PokerMove::Raise(amount) => format!("R{}", amount),
        }
    }
}

impl FromStr for PokerMove {
    type Err = ClauseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.chars().next().ok_or(ClauseError::Empty)?;
        let rest = &s[first.len_utf8()..];
        match first {
            'F' => Ok(PokerMove::Fold),
            'C' => Ok(PokerMove::Call),
            'K' => Ok(PokerMove::Check),
            'R' => rest
                .parse()
                .map(PokerMove::Raise)
                .map_err(|_| ClauseError::BadNumber(s.to_string())),
            other => Err(ClauseError::UnknownCode(other)),
        }
    }
}

impl fmt::Display for PokerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokerMove::Fold => write!(f, "Fold"),
            PokerMove::Call => write!(f, "Call"),
            PokerMove::Check => write!(f, "Check"),
            PokerMove::Raise(amount) => write!(f, "Raise({})", amount),
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveKind::Fold => "fold",
            MoveKind::Call => "call",
            MoveKind::Check => "check",
            MoveKind::Raise => "raise",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn wire_codes() {
        assert_eq!(PokerMove::Fold.code(), "F");
        assert_eq!(PokerMove::Call.code(), "C");
        assert_eq!(PokerMove::Check.code(), "K");
        assert_eq!(PokerMove::Raise(14).code(), "R14");
    }

    #[test]
    fn parses_engine_codes() {
        assert_eq!("K".parse::<PokerMove>().unwrap(), PokerMove::Check);
        assert_eq!("R250".parse::<PokerMove>().unwrap(), PokerMove::Raise(250));
        assert_matches!("R".parse::<PokerMove>(), Err(ClauseError::BadNumber(_)));
        assert_matches!("Rx1".parse::<PokerMove>(), Err(ClauseError::BadNumber(_)));
        assert_matches!("X".parse::<PokerMove>(), Err(ClauseError::UnknownCode('X')));
        assert_matches!("".parse::<PokerMove>(), Err(ClauseError::Empty));
    }

    #[test]
    fn kind_drops_amount() {
        assert_eq!(PokerMove::Raise(9).kind(), MoveKind::Raise);
        assert_eq!(PokerMove::Fold.kind(), MoveKind::Fold);
    }
}
