//! Pipeline stage implementations.
//!
//! This module contains the individual stages of the vector core pipeline. It includes:
//! 1. **Fetch:** Reads the next instruction line, resolves branches and issues into a queue.
//! 2. **Decode:** Classifies the instruction and extracts its register dependencies.
//! 3. **Issue:** Dispatches ready queue heads onto free functional units.
//! 4. **Execute:** Reads operands and computes the architectural effect.
//! 5. **Writeback:** Retires completed operations and commits their effects.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Queue-to-unit dispatch stage implementation.
pub mod issue;

/// Writeback and retirement stage implementation.
pub mod writeback;

/// Decode entry point.
pub use decode::decode;
/// Dispatch stage entry point.
pub use issue::dispatch_stage;
/// Execute entry point.
pub use execute::execute;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Retirement stage entry point.
pub use writeback::retire_stage;
