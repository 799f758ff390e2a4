pub mod clause;
pub mod engine_client;
