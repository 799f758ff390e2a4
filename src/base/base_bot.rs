use crate::game::poker_moves::PokerMove;
use crate::game::poker_state::{GameState, RoundState, TerminalState};

/// The callbacks the engine client drives, one bot per game.
///
/// Construction is the game-start hook: a bot is built once before the first
/// round and lives until the process exits. Per round the client calls
/// `handle_new_round` once, `get_action` whenever this seat must act, then
/// `handle_round_over` once. Snapshots are only borrowed for the call; copy
/// out whatever must survive into the next one.
pub trait BaseBot {
    fn handle_new_round(&mut self, game_state: &GameState, round_state: &RoundState, active: usize);

    fn handle_round_over(&mut self, game_state: &GameState, terminal_state: &TerminalState, active: usize);

    /// Must return a move allowed by `round_state.legal_actions()`.
    fn get_action(&mut self, game_state: &GameState, round_state: &RoundState, active: usize) -> PokerMove;
}
