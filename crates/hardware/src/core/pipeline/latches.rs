//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the stages of the vector core:
//! Fetch/Decode → Issue Queue → Dispatch/Execute → Writeback.
//!
//! 1. **Decoded Instructions:** Register dependencies, operand fields and the VLR snapshot.
//! 2. **In-Flight Operations:** Dispatched work waiting for its completion cycle.

use std::fmt;

use crate::common::RegisterId;
use crate::core::pipeline::stages::execute::Effect;
use crate::isa::{Opcode, Relation, UnitClass};

/// Program-order instruction identifier, assigned when an instruction issues.
pub type InstId = u64;

/// Largest number of registers one instruction reads (`SVWS`, `SVI`).
pub const MAX_SOURCES: usize = 4;

/// Fixed-capacity list of source registers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RegList {
    regs: [RegisterId; MAX_SOURCES],
    len: usize,
}

impl RegList {
    /// An empty list.
    pub const fn new() -> Self {
        Self {
            regs: [RegisterId::VLR; MAX_SOURCES],
            len: 0,
        }
    }

    /// Builds a list from at most [`MAX_SOURCES`] registers. Extra registers are dropped.
    pub fn from_slice(regs: &[RegisterId]) -> Self {
        let mut list = Self::new();
        for reg in regs.iter().take(MAX_SOURCES) {
            list.regs[list.len] = *reg;
            list.len += 1;
        }
        list
    }

    /// Registers in operand order.
    #[inline]
    pub fn as_slice(&self) -> &[RegisterId] {
        &self.regs[..self.len]
    }

    /// Whether `reg` is in the list.
    #[inline]
    pub fn contains(&self, reg: RegisterId) -> bool {
        self.as_slice().contains(&reg)
    }
}

impl Default for RegList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RegList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// An instruction executed by a functional unit, as produced by decode.
///
/// Operand fields follow assembly order: `rd` is the first register operand (the
/// destination, or the data register of a store), `ra` and `rb` the following ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedInst {
    /// Program-order identifier.
    pub id: InstId,
    /// Instruction-store line.
    pub line: usize,
    /// Opcode.
    pub opcode: Opcode,
    /// Functional-unit class.
    pub class: UnitClass,
    /// Register written at retirement, if any.
    pub dest: Option<RegisterId>,
    /// Registers read at dispatch.
    pub sources: RegList,
    /// First register field.
    pub rd: usize,
    /// Second register field.
    pub ra: usize,
    /// Third register field.
    pub rb: usize,
    /// Immediate field.
    pub imm: i32,
    /// Active vector length captured at issue.
    pub vl: usize,
    /// Whether the instruction iterates over vector elements.
    pub uses_vl: bool,
}

impl DecodedInst {
    /// Element count used for latency: the VLR snapshot for vector work, one otherwise.
    pub const fn elements(&self) -> usize {
        match self.class {
            UnitClass::Scalar => 1,
            _ if self.uses_vl => self.vl,
            _ => 1,
        }
    }
}

/// Output of the decode stage for one instruction line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// Work for a functional unit.
    Op(DecodedInst),
    /// Conditional branch, resolved at fetch.
    Branch {
        /// Comparison applied to the two sources.
        relation: Relation,
        /// First scalar source.
        ra: usize,
        /// Second scalar source.
        rb: usize,
        /// Line displacement when taken.
        offset: i32,
    },
    /// Terminal instruction.
    Halt,
}

/// A dispatched operation awaiting writeback.
#[derive(Clone, Debug)]
pub struct InFlightOp {
    /// The instruction.
    pub inst: DecodedInst,
    /// Cycle at which it retires.
    pub completes_at: u64,
    /// Architectural update applied at retirement.
    pub effect: Effect,
}
