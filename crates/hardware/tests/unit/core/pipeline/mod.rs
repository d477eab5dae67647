/// Whole-program timing scenarios.
pub mod engine;

/// Fatal error propagation out of a run.
pub mod errors;

/// Register dependency bookkeeping on decoded instructions.
pub mod hazards;
