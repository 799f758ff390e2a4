//! Call-order bookkeeping around a bot.
//!
//! [`RecordingBot`] forwards every callback to the bot it wraps and checks
//! each one against the per-round lifecycle. Violations are collected rather
//! than raised, so a test can drive a whole game and inspect afterwards.

use std::fmt;

use super::base_bot::BaseBot;
use crate::game::poker_moves::PokerMove;
use crate::game::poker_state::{GameState, RoundState, TerminalState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    NewRound,
    GetAction,
    RoundOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callback {
    pub kind: CallbackKind,
    pub round_num: i32,
    pub active: usize,
}

/// Where a bot is in the lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    #[default]
    AwaitingNewRound,
    InRound,
    RoundClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractViolation {
    pub callback: Callback,
    pub phase: RoundPhase,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} in round {} while {:?}",
            self.callback.kind, self.callback.round_num, self.phase
        )
    }
}

pub struct RecordingBot<B> {
    inner: B,
    phase: RoundPhase,
    events: Vec<Callback>,
    violations: Vec<ContractViolation>,
}

impl<B: BaseBot> RecordingBot<B> {
    pub fn new(inner: B) -> Self {
        RecordingBot {
            inner,
            phase: RoundPhase::default(),
            events: Vec::new(),
            violations: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Callback] {
        &self.events
    }

    pub fn violations(&self) -> &[ContractViolation] {
        &self.violations
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn count(&self, kind: CallbackKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }

    fn record(&mut self, kind: CallbackKind, game_state: &GameState, active: usize) {
        let callback = Callback {
            kind,
            round_num: game_state.round_num,
            active,
        };
        let allowed = match kind {
            CallbackKind::NewRound => self.phase != RoundPhase::InRound,
            CallbackKind::GetAction | CallbackKind::RoundOver => self.phase == RoundPhase::InRound,
        };
        if !allowed {
            log::warn!("out of order callback: {:?} while {:?}", kind, self.phase);
            self.violations.push(ContractViolation {
                callback,
                phase: self.phase,
            });
        }
        self.phase = match kind {
            CallbackKind::NewRound | CallbackKind::GetAction => RoundPhase::InRound,
            CallbackKind::RoundOver => RoundPhase::RoundClosed,
        };
        self.events.push(callback);
    }
}

impl<B: BaseBot> BaseBot for RecordingBot<B> {
    fn handle_new_round(&mut self, game_state: &GameState, round_state: &RoundState, active: usize) {
        self.record(CallbackKind::NewRound, game_state, active);
        self.inner.handle_new_round(game_state, round_state, active);
    }

    fn handle_round_over(&mut self, game_state: &GameState, terminal_state: &TerminalState, active: usize) {
        self.record(CallbackKind::RoundOver, game_state, active);
        self.inner.handle_round_over(game_state, terminal_state, active);
    }

    fn get_action(&mut self, game_state: &GameState, round_state: &RoundState, active: usize) -> PokerMove {
        self.record(CallbackKind::GetAction, game_state, active);
        self.inner.get_action(game_state, round_state, active)
    }
}
