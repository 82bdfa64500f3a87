//! Resume/job matching: data model, strategy backends, and the orchestrating
//! engine. See `engine::run_matching` for the batch contract.

pub mod advanced;
pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod traditional;
pub mod types;
