use super::Strategy;
use crate::game::poker_moves::{MoveKind, PokerMove};
use crate::game::poker_state::{GameState, RoundState};

/// Min-raises at every chance, otherwise checks or calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggressive;

impl Strategy for Aggressive {
    fn name(&self) -> &'static str {
        "aggressive"
    }

    fn decide(&mut self, _game_state: &GameState, round_state: &RoundState, _active: usize) -> PokerMove {
        let legal_actions = round_state.legal_actions();
        if legal_actions.contains(&MoveKind::Raise) {
            let (min_raise, _) = round_state.raise_bounds();
            PokerMove::Raise(min_raise)
        } else if legal_actions.contains(&MoveKind::Check) {
            PokerMove::Check
        } else {
            PokerMove::Call
        }
    }
}
