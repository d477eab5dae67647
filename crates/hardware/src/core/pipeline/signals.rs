//! Pipeline control signals and operation types.
//!
//! This module derives the execute-time control from an opcode. It performs:
//! 1. **Operation Classification:** Maps arithmetic and logical opcodes to an [`AluOp`].
//! 2. **Address Generation Mode:** Names how a vector memory access walks memory.

use crate::isa::Opcode;

/// Word operation performed by the scalar ALU or by every lane of a vector unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Wrapping multiplication (low 32 bits).
    Mul,

    /// Signed division, truncating toward zero.
    Div,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,
}

impl AluOp {
    /// ALU operation of an arithmetic or logical opcode.
    pub const fn from_opcode(op: Opcode) -> Option<Self> {
        match op {
            Opcode::AddVV | Opcode::AddVS | Opcode::Add => Some(Self::Add),
            Opcode::SubVV | Opcode::SubVS | Opcode::Sub => Some(Self::Sub),
            Opcode::MulVV | Opcode::MulVS => Some(Self::Mul),
            Opcode::DivVV | Opcode::DivVS => Some(Self::Div),
            Opcode::And => Some(Self::And),
            Opcode::Or => Some(Self::Or),
            Opcode::Xor => Some(Self::Xor),
            Opcode::Sll => Some(Self::Sll),
            Opcode::Srl => Some(Self::Srl),
            Opcode::Sra => Some(Self::Sra),
            _ => None,
        }
    }
}

/// How a vector load or store generates its element addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressMode {
    /// `base + i`.
    UnitStride,
    /// `base + i * stride`.
    Strided,
    /// `base + offsets[i]` (gather/scatter).
    Indexed,
}

impl AddressMode {
    /// Addressing mode of a vector memory opcode.
    pub const fn from_opcode(op: Opcode) -> Option<Self> {
        match op {
            Opcode::Lv | Opcode::Sv => Some(Self::UnitStride),
            Opcode::Lvws | Opcode::Svws => Some(Self::Strided),
            Opcode::Lvi | Opcode::Svi => Some(Self::Indexed),
            _ => None,
        }
    }
}
