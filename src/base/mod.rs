pub mod base_bot;
pub mod player;
pub mod recorder;
