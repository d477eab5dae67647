//! Scalar Register File.
//!
//! This module implements the scalar register file of the vector core.
//! It performs the following:
//! 1. **Storage:** Maintains eight 32-bit signed registers (`SR0`-`SR7`).
//! 2. **Bounds Enforcement:** Every access is checked; an out-of-range index is fatal.
//! 3. **Observability:** Exposes a read-only view of all registers for final-state reporting.

use crate::common::constants::SCALAR_REG_COUNT;
use crate::common::{Resource, SimError, SimResult};

/// Scalar register file.
///
/// `SR0` is an ordinary register, not hardwired to zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScalarRegisterFile {
    regs: [i32; SCALAR_REG_COUNT],
}

impl ScalarRegisterFile {
    /// Creates a scalar register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; SCALAR_REG_COUNT],
        }
    }

    /// Reads a scalar register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] if `idx` is not a valid register.
    pub fn read(&self, idx: usize) -> SimResult<i32> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(SimError::out_of_range(
                Resource::ScalarRegister,
                idx as i64,
                SCALAR_REG_COUNT,
            ))
    }

    /// Writes a scalar register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 32-bit value to write.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] if `idx` is not a valid register. Nothing is clamped.
    pub fn write(&mut self, idx: usize, val: i32) -> SimResult<()> {
        let slot = self.regs.get_mut(idx).ok_or(SimError::out_of_range(
            Resource::ScalarRegister,
            idx as i64,
            SCALAR_REG_COUNT,
        ))?;
        *slot = val;
        Ok(())
    }

    /// All registers, `SR0` first.
    #[inline]
    pub const fn as_slice(&self) -> &[i32] {
        &self.regs
    }
}
