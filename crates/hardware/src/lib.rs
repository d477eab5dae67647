//! Vector processor timing simulator core.
//!
//! This crate reproduces, cycle by cycle, a vector core with scalar and vector
//! register files, word-addressed scalar and vector memories, and five classes of
//! functional units with their own issue queues and latencies:
//! 1. **Core:** Fetch, decode, issue, dispatch and writeback with data and structural hazards.
//! 2. **ISA:** Vector arithmetic, compares, masking, vector length control, memory and branches.
//! 3. **Memory:** Bounds-checked scalar and vector data memories.
//! 4. **Simulation:** Configuration, the top-level simulator and the final report.
//!
//! Text parsing and file I/O are left to the caller: a run takes a name-to-integer
//! configuration mapping, a decoded program and two memory images.
//!
//! ```
//! use vecsim_core::isa::{Instruction, Opcode, Operand};
//! use vecsim_core::{Config, Simulator};
//!
//! let config = Config::from_parameters([("vectorLaneCount", 4_i64), ("vectorLengthDefault", 8)])?;
//! let program = vec![
//!     Instruction::new(Opcode::AddVV, vec![Operand::Vector(1), Operand::Vector(2), Operand::Vector(3)])?,
//!     Instruction::halt(),
//! ];
//! let report = Simulator::new(&config, program, &[], &[])?.run()?;
//! assert_eq!(report.cycles, 5);
//! # Ok::<(), vecsim_core::SimError>(())
//! ```

/// Common types and constants (errors, register ids, sizes).
pub mod common;
/// Simulator configuration (defaults, validation, per-unit parameters).
pub mod config;
/// Vector core (architectural state, pipeline, execution units).
pub mod core;
/// Instruction set (opcodes, instructions, instruction store).
pub mod isa;
/// Top-level simulator and final report.
pub mod sim;
/// Data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Fatal simulation error and its result alias.
pub use crate::common::{SimError, SimResult};
/// Immutable configuration; build with `Config::from_parameters`.
pub use crate::config::Config;
/// The cycle-level engine.
pub use crate::core::PipelineEngine;
/// Top-level simulator and its report.
pub use crate::sim::{SimulationReport, Simulator};
