//! Common types shared across the vector simulator.
//!
//! This module provides the building blocks every other component depends on:
//! 1. **Constants:** Register counts, instruction-store capacity and memory sizing.
//! 2. **Error Handling:** The fatal [`SimError`] taxonomy and the non-fatal [`StallReason`].
//! 3. **Register Identity:** `(file, index)` register identifiers used by the hazard logic.

/// Fixed architectural constants.
pub mod constants;

/// Error types and stall reasons.
pub mod error;

/// Register identifiers.
pub mod reg;

pub use error::{Resource, SimError, SimResult, StallReason};
pub use reg::{REGISTER_SLOTS, RegFile, RegisterId};
