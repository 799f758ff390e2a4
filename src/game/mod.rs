pub mod poker_moves;
pub mod poker_state;
