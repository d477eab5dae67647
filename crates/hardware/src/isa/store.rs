//! Instruction store.
//!
//! Holds the program as an ordered, zero-indexed sequence of instruction lines. The
//! fetch stage addresses it by line index; reading past the last line is fatal.

use super::instruction::Instruction;
use crate::common::constants::IMEM_CAPACITY;
use crate::common::{Resource, SimError, SimResult};

/// Read-only program memory.
#[derive(Clone, Debug, Default)]
pub struct InstructionStore {
    lines: Vec<Instruction>,
}

impl InstructionStore {
    /// Wraps a program.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] if the program exceeds the store capacity.
    pub fn new(lines: Vec<Instruction>) -> SimResult<Self> {
        if lines.len() > IMEM_CAPACITY {
            return Err(SimError::out_of_range(
                Resource::InstructionStore,
                lines.len() as i64,
                IMEM_CAPACITY,
            ));
        }
        Ok(Self { lines })
    }

    /// Reads the instruction at `line`.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] when `line` is at or past the end of the program.
    pub fn fetch(&self, line: usize) -> SimResult<&Instruction> {
        self.lines.get(line).ok_or(SimError::out_of_range(
            Resource::InstructionStore,
            line as i64,
            self.lines.len(),
        ))
    }

    /// Number of instruction lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True for an empty program.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
