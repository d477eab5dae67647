//! Instruction pipeline implementation.
//!
//! This module contains the timing pipeline of the vector core.
//! It includes the following components:
//! 1. **Engine:** The per-cycle state machine driving every other component.
//! 2. **Hazards:** Register dependency tracking and stall accounting.
//! 3. **Issue Queues:** Bounded in-order FIFOs, one per functional-unit class.
//! 4. **Latches:** Decoded instructions and in-flight operations passed between stages.
//! 5. **Signals:** ALU operations and addressing modes derived from opcodes.
//! 6. **Stages:** Fetch, decode, dispatch, execute and writeback.

/// Cycle-level engine and run state.
pub mod engine;

/// Register hazard tracking.
pub mod hazards;

/// Per-class issue queues.
pub mod issue_queue;

/// Inter-stage entry types.
pub mod latches;

/// Control signals derived during decode.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

pub use self::engine::{EngineState, PipelineEngine};
pub use self::hazards::{HazardEntry, HazardTracker};
pub use self::issue_queue::{IssueQueue, QueueEntry};
