//! Memory system of the vector core.
//!
//! The core sees two independent, word-addressed data memories: a scalar memory
//! for `LS`/`SS` and a vector memory for the vector load and store family.

/// Scalar and vector data memories.
pub mod memory;

pub use memory::{DataMemory, MemoryKind};
