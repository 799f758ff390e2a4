use std::collections::HashSet;

use super::poker_moves::{MoveKind, PokerMove};

pub const STARTING_STACK: i32 = 400;
pub const BIG_BLIND: i32 = 2;
pub const SMALL_BLIND: i32 = 1;

/// Whole-game snapshot handed to every callback.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub bankroll: i32,
    /// Seconds left on the engine's clock for this player.
    pub game_clock: f64,
    pub round_num: i32,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            bankroll: 0,
            game_clock: 0.0,
            round_num: 1,
        }
    }
}

/// How a round ended. `previous_state` is the last live state of the round.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalState {
    pub deltas: [i32; 2],
    pub previous_state: Box<RoundState>,
}

/// Betting state of the current round.
///
/// `button % 2` is the seat to act. `street` counts revealed board cards:
/// 0 preflop, then 3, 4 and 5. `deck` holds the revealed board.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub button: i32,
    pub street: i32,
    pub pips: [i32; 2],
    pub stacks: [i32; 2],
    pub hands: [Vec<String>; 2],
    pub deck: Vec<String>,
    pub previous_state: Option<Box<RoundState>>,
}

/// Outcome of applying a move to a [`RoundState`].
#[derive(Debug, Clone, PartialEq)]
pub enum PokerState {
    Round(RoundState),
    Terminal(TerminalState),
}

impl RoundState {
    /// Opening state of a round: blinds posted, small blind (seat 0) to act.
    pub fn opening(hands: [Vec<String>; 2]) -> Self {
        RoundState {
            button: 0,
            street: 0,
            pips: [SMALL_BLIND, BIG_BLIND],
            stacks: [STARTING_STACK - SMALL_BLIND, STARTING_STACK - BIG_BLIND],
            hands,
            deck: Vec::new(),
            previous_state: None,
        }
    }

    /// Seat whose turn it is.
    pub fn active(&self) -> usize {
        (self.button % 2) as usize
    }

    /// Chips the seat to act must add to match the opponent.
    pub fn continue_cost(&self) -> i32 {
        let active = self.active();
        self.pips[1 - active] - self.pips[active]
    }

    /// Board cards revealed so far.
    pub fn board(&self) -> &[String] {
        &self.deck[..(self.street as usize).min(self.deck.len())]
    }

    /// Everything both seats have put in this round.
    pub fn pot(&self) -> i32 {
        2 * STARTING_STACK - self.stacks[0] - self.stacks[1]
    }

    pub fn showdown(&self) -> TerminalState {
        TerminalState {
            deltas: [0, 0],
            previous_state: Box::new(self.clone()),
        }
    }

    pub fn legal_actions(&self) -> HashSet<MoveKind> {
        let active = self.active();
        let continue_cost = self.continue_cost();

        if continue_cost == 0 {
            // raising the stakes needs chips behind on both sides
            let bets_forbidden = self.stacks[0] == 0 || self.stacks[1] == 0;
            if bets_forbidden {
                HashSet::from([MoveKind::Check])
            } else {
                HashSet::from([MoveKind::Check, MoveKind::Raise])
            }
        } else {
            let raises_forbidden =
                continue_cost == self.stacks[active] || self.stacks[1 - active] == 0;
            if raises_forbidden {
                HashSet::from([MoveKind::Fold, MoveKind::Call])
            } else {
                HashSet::from([MoveKind::Fold, MoveKind::Call, MoveKind::Raise])
            }
        }
    }

    /// Smallest and largest total pip the seat to act may raise to.
    pub fn raise_bounds(&self) -> (i32, i32) {
        let active = self.active();
        let continue_cost = self.continue_cost();
        let max_contribution = self.stacks[active].min(self.stacks[1 - active] + continue_cost);
        let min_contribution =
            max_contribution.min(self.pips[1 - active] + continue_cost.max(BIG_BLIND));

        (self.pips[active] + min_contribution, self.pips[active] + max_contribution)
    }

    pub fn is_legal(&self, action: PokerMove) -> bool {
        if !self.legal_actions().contains(&action.kind()) {
            return false;
        }
        match action {
            PokerMove::Raise(amount) => {
                let (min_raise, max_raise) = self.raise_bounds();
                (min_raise..=max_raise).contains(&amount)
            }
            _ => true,
        }
    }

    /// Nearest legal move to `action`.
    ///
    /// Raise amounts are clamped into [`raise_bounds`](Self::raise_bounds), a
    /// call with nothing to call is a check, and anything else that is not
    /// allowed becomes a check if possible and a fold otherwise.
    pub fn legalize(&self, action: PokerMove) -> PokerMove {
        let legal = self.legal_actions();
        match action {
            PokerMove::Raise(amount) if legal.contains(&MoveKind::Raise) => {
                let (min_raise, max_raise) = self.raise_bounds();
                PokerMove::Raise(amount.clamp(min_raise, max_raise))
            }
            _ if legal.contains(&action.kind()) => action,
            PokerMove::Call if legal.contains(&MoveKind::Check) => PokerMove::Check,
            _ if legal.contains(&MoveKind::Check) => PokerMove::Check,
            _ => PokerMove::Fold,
        }
    }

    pub fn proceed_street(&self) -> PokerState {
        if self.street == 5 {
            return PokerState::Terminal(self.showdown());
        }

        let new_street = if self.street == 0 { 3 } else { self.street + 1 };

        PokerState::Round(RoundState {
            button: 1,
            street: new_street,
            pips: [0, 0],
            stacks: self.stacks,
            hands: self.hands.clone(),
            deck: self.deck.clone(),
            previous_state: Some(Box::new(self.clone())),
        })
    }

    /// Successor state after the seat to act plays `action`.
    pub fn proceed(&self, action: PokerMove) -> PokerState {
        let active = self.active();

        match action {
            PokerMove::Fold => {
                let delta = if active == 0 {
                    self.stacks[0] - STARTING_STACK
                } else {
                    STARTING_STACK - self.stacks[1]
                };

                PokerState::Terminal(TerminalState {
                    deltas: [delta, -delta],
                    previous_state: Box::new(self.clone()),
                })
            }
            PokerMove::Call => {
                if self.button == 0 {
                    // small blind completes, big blind keeps the option
                    return PokerState::Round(RoundState {
                        button: 1,
                        street: 0,
                        pips: [BIG_BLIND, BIG_BLIND],
                        stacks: [STARTING_STACK - BIG_BLIND, STARTING_STACK - BIG_BLIND],
                        hands: self.hands.clone(),
                        deck: self.deck.clone(),
                        previous_state: Some(Box::new(self.clone())),
                    });
                }

                let mut new_pips = self.pips;
                let mut new_stacks = self.stacks;
                let contribution = new_pips[1 - active] - new_pips[active];
                new_stacks[active] -= contribution;
                new_pips[active] += contribution;

                let state = RoundState {
                    button: self.button + 1,
                    street: self.street,
                    pips: new_pips,
                    stacks: new_stacks,
                    hands: self.hands.clone(),
                    deck: self.deck.clone(),
                    previous_state: Some(Box::new(self.clone())),
                };

                state.proceed_street()
            }
            PokerMove::Check => {
                if (self.street == 0 && self.button > 0) || self.button > 1 {
                    return self.proceed_street();
                }

                PokerState::Round(RoundState {
                    button: self.button + 1,
                    street: self.street,
                    pips: self.pips,
                    stacks: self.stacks,
                    hands: self.hands.clone(),
                    deck: self.deck.clone(),
                    previous_state: Some(Box::new(self.clone())),
                })
            }
            PokerMove::Raise(amount) => {
                let mut new_pips = self.pips;
                let mut new_stacks = self.stacks;
                let contribution = amount - new_pips[active];
                new_stacks[active] -= contribution;
                new_pips[active] += contribution;

                PokerState::Round(RoundState {
                    button: self.button + 1,
                    street: self.street,
                    pips: new_pips,
                    stacks: new_stacks,
                    hands: self.hands.clone(),
                    deck: self.deck.clone(),
                    previous_state: Some(Box::new(self.clone())),
                })
            }
        }
    }
}
