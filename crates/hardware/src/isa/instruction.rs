//! Decoded instruction representation.
//!
//! The front end tokenizes the instruction listing; the core receives each line as an
//! [`Instruction`]: an opcode plus its ordered operand fields. Operand formats and
//! register indices are checked once, when the instruction is built, and the value is
//! immutable afterwards.

use std::fmt;

use super::opcode::{Opcode, OperandKind};
use crate::common::constants::{SCALAR_REG_COUNT, VECTOR_REG_COUNT};
use crate::common::{Resource, SimError, SimResult};

/// One operand field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Scalar register `SR{n}`.
    Scalar(usize),
    /// Vector register `VR{n}`.
    Vector(usize),
    /// Signed immediate (memory offset or branch displacement).
    Imm(i32),
}

impl Operand {
    /// Kind of this operand.
    #[inline]
    pub const fn kind(self) -> OperandKind {
        match self {
            Self::Scalar(_) => OperandKind::Scalar,
            Self::Vector(_) => OperandKind::Vector,
            Self::Imm(_) => OperandKind::Imm,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(i) => write!(f, "SR{i}"),
            Self::Vector(i) => write!(f, "VR{i}"),
            Self::Imm(v) => write!(f, "{v}"),
        }
    }
}

/// An instruction: opcode and operand fields in assembly order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    operands: Vec<Operand>,
}

impl Instruction {
    /// Builds an instruction, checking the operand format and register indices.
    ///
    /// # Errors
    ///
    /// [`SimError::MalformedInstruction`] if the operand kinds do not match the opcode
    /// format, [`SimError::OutOfRange`] for a register index outside its file.
    pub fn new(opcode: Opcode, operands: Vec<Operand>) -> SimResult<Self> {
        let format = opcode.format();
        let shape_ok = format.len() == operands.len()
            && format.iter().zip(&operands).all(|(k, op)| *k == op.kind());
        if !shape_ok {
            return Err(SimError::MalformedInstruction {
                mnemonic: opcode.mnemonic(),
                expected: opcode.format_text(),
            });
        }

        for op in &operands {
            match *op {
                Operand::Scalar(i) if i >= SCALAR_REG_COUNT => {
                    return Err(SimError::out_of_range(
                        Resource::ScalarRegister,
                        i as i64,
                        SCALAR_REG_COUNT,
                    ));
                }
                Operand::Vector(i) if i >= VECTOR_REG_COUNT => {
                    return Err(SimError::out_of_range(
                        Resource::VectorRegister,
                        i as i64,
                        VECTOR_REG_COUNT,
                    ));
                }
                _ => {}
            }
        }

        Ok(Self { opcode, operands })
    }

    /// The terminal instruction.
    pub const fn halt() -> Self {
        Self {
            opcode: Opcode::Halt,
            operands: Vec::new(),
        }
    }

    /// Opcode.
    #[inline]
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Operand fields in assembly order.
    #[inline]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opcode.mnemonic())?;
        for op in &self.operands {
            write!(f, " {op}")?;
        }
        Ok(())
    }
}
