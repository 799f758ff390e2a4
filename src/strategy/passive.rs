use super::Strategy;
use crate::game::poker_moves::{MoveKind, PokerMove};
use crate::game::poker_state::{GameState, RoundState};

/// Never puts in a chip it does not have to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passive;

impl Strategy for Passive {
    fn name(&self) -> &'static str {
        "passive"
    }

    fn decide(&mut self, _game_state: &GameState, round_state: &RoundState, _active: usize) -> PokerMove {
        if round_state.legal_actions().contains(&MoveKind::Check) {
            PokerMove::Check
        } else {
            PokerMove::Call
        }
    }
}
