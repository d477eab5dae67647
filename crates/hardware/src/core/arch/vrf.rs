//! Vector Register File.
//!
//! Eight registers, each an ordered sequence of `vector_length` words. Element
//! accessors take the active length the originating instruction snapshotted at issue,
//! so an element at or past that length is rejected even if the register is longer.

use crate::common::constants::VECTOR_REG_COUNT;
use crate::common::{Resource, SimError, SimResult};

/// Vector register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorRegisterFile {
    length: usize,
    regs: Vec<Vec<i32>>,
}

impl VectorRegisterFile {
    /// Creates a zeroed register file whose registers hold `length` elements each.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            regs: vec![vec![0; length]; VECTOR_REG_COUNT],
        }
    }

    /// Elements per register (the maximum vector length).
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Reads a whole register.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] if `idx` is not a valid register.
    pub fn read(&self, idx: usize) -> SimResult<&[i32]> {
        self.regs
            .get(idx)
            .map(Vec::as_slice)
            .ok_or(Self::bad_register(idx))
    }

    /// Overwrites a register. `values` may be shorter than the register; the tail is kept.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] for a bad register index or more values than elements.
    pub fn write(&mut self, idx: usize, values: &[i32]) -> SimResult<()> {
        let length = self.length;
        let reg = self.regs.get_mut(idx).ok_or(Self::bad_register(idx))?;
        if values.len() > length {
            return Err(SimError::out_of_range(
                Resource::VectorElement,
                values.len() as i64 - 1,
                length,
            ));
        }
        reg[..values.len()].copy_from_slice(values);
        Ok(())
    }

    /// Reads element `elem` of register `idx` for an instruction whose active length is `active`.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] for a bad register or an element at or past `active`.
    pub fn read_element(&self, idx: usize, elem: usize, active: usize) -> SimResult<i32> {
        let bound = active.min(self.length);
        let reg = self.read(idx)?;
        if elem >= bound {
            return Err(SimError::out_of_range(
                Resource::VectorElement,
                elem as i64,
                bound,
            ));
        }
        Ok(reg[elem])
    }

    /// Writes element `elem` of register `idx` for an instruction whose active length is `active`.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] for a bad register or an element at or past `active`.
    pub fn write_element(
        &mut self,
        idx: usize,
        elem: usize,
        active: usize,
        val: i32,
    ) -> SimResult<()> {
        let bound = active.min(self.length);
        let reg = self.regs.get_mut(idx).ok_or(Self::bad_register(idx))?;
        if elem >= bound {
            return Err(SimError::out_of_range(
                Resource::VectorElement,
                elem as i64,
                bound,
            ));
        }
        reg[elem] = val;
        Ok(())
    }

    /// All registers, `VR0` first.
    pub fn registers(&self) -> &[Vec<i32>] {
        &self.regs
    }

    const fn bad_register(idx: usize) -> SimError {
        SimError::out_of_range(Resource::VectorRegister, idx as i64, VECTOR_REG_COUNT)
    }
}
