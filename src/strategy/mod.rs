//! Interchangeable decision policies for [`Player`](crate::base::player::Player).

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::poker_moves::PokerMove;
use crate::game::poker_state::{GameState, RoundState};

mod aggressive;
mod passive;
mod random;

pub use self::aggressive::Aggressive;
pub use self::passive::Passive;
pub use self::random::RandomStrategy;

/// Picks a move for the seat to act.
///
/// The answer does not have to be legal; the player legalizes it before it
/// reaches the engine. Policies that stay legal on their own never get
/// rewritten.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn decide(&mut self, game_state: &GameState, round_state: &RoundState, active: usize) -> PokerMove;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decide(&mut self, game_state: &GameState, round_state: &RoundState, active: usize) -> PokerMove {
        (**self).decide(game_state, round_state, active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum StrategyKind {
    /// Check when free, call otherwise.
    Passive,
    /// Min-raise whenever allowed.
    Aggressive,
    /// Coin-flip raises, calls and folds.
    #[default]
    Random,
}

impl StrategyKind {
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Passive => Box::new(Passive),
            StrategyKind::Aggressive => Box::new(Aggressive),
            StrategyKind::Random => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Box::new(RandomStrategy::new(rng))
            }
        }
    }
}
