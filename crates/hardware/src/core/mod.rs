//! Core processor implementation.
//!
//! This module contains the vector core: its architectural state, the timing
//! pipeline that moves instructions through issue queues and functional units,
//! and the execution units that compute results.

/// Architectural state (register files, vector control, data memories).
pub mod arch;

/// Timing pipeline (engine, hazards, issue queues, stages).
pub mod pipeline;

/// Execution units (ALU, LSU address generation, functional-unit timing).
pub mod units;

pub use self::arch::ArchState;
pub use self::pipeline::{EngineState, PipelineEngine};
