//! Global Machine Constants.
//!
//! This module defines the fixed architectural parameters of the vector core. It includes:
//! 1. **Register Files:** Scalar and vector register counts.
//! 2. **Instruction Store:** Maximum program length.
//! 3. **Memory Sizing:** Default address widths for the scalar and vector data memories.
//! 4. **Parameter Limits:** Upper bounds enforced on configuration values.

/// Number of scalar registers (`SR0`-`SR7`).
pub const SCALAR_REG_COUNT: usize = 8;

/// Number of vector registers (`VR0`-`VR7`).
pub const VECTOR_REG_COUNT: usize = 8;

/// Maximum number of lines the instruction store can hold (2^16).
pub const IMEM_CAPACITY: usize = 1 << 16;

/// Default scalar memory address width: 2^13 words (32 KiB).
pub const SDM_ADDRESS_BITS: u32 = 13;

/// Default vector memory address width: 2^17 words (512 KiB).
pub const VDM_ADDRESS_BITS: u32 = 17;

/// Widest address the data memories accept. Keeps the backing store addressable.
pub const MAX_ADDRESS_BITS: u32 = 24;

/// Largest accepted vector length, and the lane-count ceiling.
pub const MAX_VECTOR_LENGTH: usize = 1 << 16;

/// Largest accepted issue latency or per-element latency, in cycles.
pub const MAX_LATENCY: i64 = u32::MAX as i64;
