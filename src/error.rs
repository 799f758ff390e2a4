//! Error types

/// A single engine clause could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClauseError {
    #[error("empty clause")]
    Empty,
    #[error("unknown clause code {0:?}")]
    UnknownCode(char),
    #[error("malformed number in clause {0:?}")]
    BadNumber(String),
    #[error("seat {0} is out of range")]
    BadSeat(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("engine connection failed")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Clause(#[from] ClauseError),
    /// An action or board clause arrived before any hand was dealt.
    #[error("clause {0:?} arrived outside of a round")]
    NoRound(String),
    /// Showdown or payoff information arrived while the round was still live.
    #[error("clause {0:?} requires a finished round")]
    NotTerminal(String),
    /// The engine asked for a move after the round ended but sent no payoff.
    #[error("action requested after the round ended")]
    RoundOver,
    #[error("asked to act as seat {active} but button {button} is on the other seat")]
    OutOfTurn { active: usize, button: i32 },
}
