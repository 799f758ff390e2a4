use rand::rngs::StdRng;
use rand::Rng;

use super::Strategy;
use crate::game::poker_moves::{MoveKind, PokerMove};
use crate::game::poker_state::{GameState, RoundState};

const RAISE_PROBABILITY: f64 = 0.4;
const FOLD_PROBABILITY: f64 = 0.2;

/// Min-raises 40% of the time it may, checks when free, and otherwise folds
/// one time in five.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(rng: StdRng) -> Self {
        RandomStrategy { rng }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&mut self, _game_state: &GameState, round_state: &RoundState, active: usize) -> PokerMove {
        let legal_actions = round_state.legal_actions();
        log::trace!(
            "seat {} street {} pips {:?} stacks {:?} board {:?}",
            active,
            round_state.street,
            round_state.pips,
            round_state.stacks,
            round_state.board()
        );

        if legal_actions.contains(&MoveKind::Raise) && self.rng.gen::<f64>() < RAISE_PROBABILITY {
            let (min_raise, _) = round_state.raise_bounds();
            return PokerMove::Raise(min_raise);
        }

        if legal_actions.contains(&MoveKind::Check) {
            return PokerMove::Check;
        }

        if self.rng.gen::<f64>() < FOLD_PROBABILITY {
            return PokerMove::Fold;
        }

        PokerMove::Call
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn never_folds_when_checking_is_free() {
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(42));
        let game = GameState::default();
        let mut option = RoundState::opening([Vec::new(), Vec::new()]);
        option.pips = [2, 2];
        option.button = 1;
        for _ in 0..500 {
            let action = strategy.decide(&game, &option, 1);
            assert!(matches!(action, PokerMove::Check | PokerMove::Raise(_)), "{}", action);
        }
    }

    #[test]
    fn mixes_all_three_responses_to_a_bet() {
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(42));
        let game = GameState::default();
        let opening = RoundState::opening([Vec::new(), Vec::new()]);
        let (mut folds, mut calls, mut raises) = (0, 0, 0);
        for _ in 0..1000 {
            match strategy.decide(&game, &opening, 0) {
                PokerMove::Fold => folds += 1,
                PokerMove::Call => calls += 1,
                PokerMove::Raise(amount) => {
                    assert_eq!(amount, 5);
                    raises += 1;
                }
                PokerMove::Check => panic!("check is not legal facing the big blind"),
            }
        }
        assert!(folds > 0 && calls > folds && raises > folds);
    }
}
