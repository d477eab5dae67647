//! Opcodes of the vector instruction set.
//!
//! Each opcode knows its mnemonic, its operand format and the functional-unit
//! class that executes it. Branches and `HALT` are resolved by the fetch stage
//! and have no unit class.

use std::fmt;

use serde::Serialize;

/// Kind of a single operand field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// Scalar register index.
    Scalar,
    /// Vector register index.
    Vector,
    /// Signed immediate.
    Imm,
}

/// Functional-unit class. One issue queue and one unit pipeline exist per class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum UnitClass {
    /// Vector add, subtract and compare.
    Add,
    /// Vector multiply.
    Multiply,
    /// Vector divide.
    Divide,
    /// Vector and scalar memory access.
    LoadStore,
    /// Scalar ALU, vector length and mask control.
    Scalar,
}

impl UnitClass {
    /// Number of unit classes.
    pub const COUNT: usize = 5;

    /// Every class, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Add,
        Self::Multiply,
        Self::Divide,
        Self::LoadStore,
        Self::Scalar,
    ];

    /// Position of this class in per-class tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Add => 0,
            Self::Multiply => 1,
            Self::Divide => 2,
            Self::LoadStore => 3,
            Self::Scalar => 4,
        }
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Multiply => "mul",
            Self::Divide => "div",
            Self::LoadStore => "ls",
            Self::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// Relational operator shared by vector compares and scalar branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `a == b`
    Eq,
    /// `a != b`
    Ne,
    /// `a > b`
    Gt,
    /// `a < b`
    Lt,
    /// `a >= b`
    Ge,
    /// `a <= b`
    Le,
}

impl Relation {
    /// Evaluates the relation on two signed words.
    #[inline]
    pub const fn holds(self, a: i32, b: i32) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Gt => a > b,
            Self::Lt => a < b,
            Self::Ge => a >= b,
            Self::Le => a <= b,
        }
    }
}

/// Every opcode the core executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Opcode {
    // Vector arithmetic
    AddVV,
    SubVV,
    AddVS,
    SubVS,
    MulVV,
    MulVS,
    DivVV,
    DivVS,

    // Vector compare into VMR
    SeqVV,
    SneVV,
    SgtVV,
    SltVV,
    SgeVV,
    SleVV,
    SeqVS,
    SneVS,
    SgtVS,
    SltVS,
    SgeVS,
    SleVS,

    // Vector mask and length control
    Cvm,
    Pop,
    Mtcl,
    Mfcl,

    // Memory
    Lv,
    Sv,
    Lvws,
    Svws,
    Lvi,
    Svi,
    Ls,
    Ss,

    // Scalar ALU
    Add,
    Sub,
    And,
    Or,
    Xor,
    Sll,
    Srl,
    Sra,

    // Control
    Beq,
    Bne,
    Bgt,
    Blt,
    Bge,
    Ble,
    Halt,
}

use OperandKind::{Imm, Scalar as S, Vector as V};

impl Opcode {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::AddVV => "ADDVV",
            Self::SubVV => "SUBVV",
            Self::AddVS => "ADDVS",
            Self::SubVS => "SUBVS",
            Self::MulVV => "MULVV",
            Self::MulVS => "MULVS",
            Self::DivVV => "DIVVV",
            Self::DivVS => "DIVVS",
            Self::SeqVV => "SEQVV",
            Self::SneVV => "SNEVV",
            Self::SgtVV => "SGTVV",
            Self::SltVV => "SLTVV",
            Self::SgeVV => "SGEVV",
            Self::SleVV => "SLEVV",
            Self::SeqVS => "SEQVS",
            Self::SneVS => "SNEVS",
            Self::SgtVS => "SGTVS",
            Self::SltVS => "SLTVS",
            Self::SgeVS => "SGEVS",
            Self::SleVS => "SLEVS",
            Self::Cvm => "CVM",
            Self::Pop => "POP",
            Self::Mtcl => "MTCL",
            Self::Mfcl => "MFCL",
            Self::Lv => "LV",
            Self::Sv => "SV",
            Self::Lvws => "LVWS",
            Self::Svws => "SVWS",
            Self::Lvi => "LVI",
            Self::Svi => "SVI",
            Self::Ls => "LS",
            Self::Ss => "SS",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Sll => "SLL",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Bgt => "BGT",
            Self::Blt => "BLT",
            Self::Bge => "BGE",
            Self::Ble => "BLE",
            Self::Halt => "HALT",
        }
    }

    /// Operand format, in operand order.
    pub const fn format(self) -> &'static [OperandKind] {
        match self {
            Self::AddVV | Self::SubVV | Self::MulVV | Self::DivVV => &[V, V, V],
            Self::AddVS | Self::SubVS | Self::MulVS | Self::DivVS => &[V, V, S],
            Self::SeqVV | Self::SneVV | Self::SgtVV | Self::SltVV | Self::SgeVV | Self::SleVV => {
                &[V, V]
            }
            Self::SeqVS | Self::SneVS | Self::SgtVS | Self::SltVS | Self::SgeVS | Self::SleVS => {
                &[V, S]
            }
            Self::Cvm | Self::Halt => &[],
            Self::Pop | Self::Mtcl | Self::Mfcl => &[S],
            Self::Lv | Self::Sv => &[V, S],
            Self::Lvws | Self::Svws => &[V, S, S],
            Self::Lvi | Self::Svi => &[V, S, V],
            Self::Ls | Self::Ss => &[S, S, Imm],
            Self::Add
            | Self::Sub
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Sll
            | Self::Srl
            | Self::Sra => &[S, S, S],
            Self::Beq | Self::Bne | Self::Bgt | Self::Blt | Self::Bge | Self::Ble => &[S, S, Imm],
        }
    }

    /// Operand format as text, for diagnostics.
    pub const fn format_text(self) -> &'static str {
        match self.format() {
            [V, V, V] => "V V V",
            [V, V, S] => "V V S",
            [V, V] => "V V",
            [V, S] => "V S",
            [S] => "S",
            [V, S, S] => "V S S",
            [V, S, V] => "V S V",
            [S, S, Imm] => "S S I",
            [S, S, S] => "S S S",
            _ => "",
        }
    }

    /// Functional-unit class, or `None` for opcodes resolved at fetch.
    pub const fn unit_class(self) -> Option<UnitClass> {
        match self {
            Self::AddVV
            | Self::SubVV
            | Self::AddVS
            | Self::SubVS
            | Self::SeqVV
            | Self::SneVV
            | Self::SgtVV
            | Self::SltVV
            | Self::SgeVV
            | Self::SleVV
            | Self::SeqVS
            | Self::SneVS
            | Self::SgtVS
            | Self::SltVS
            | Self::SgeVS
            | Self::SleVS => Some(UnitClass::Add),
            Self::MulVV | Self::MulVS => Some(UnitClass::Multiply),
            Self::DivVV | Self::DivVS => Some(UnitClass::Divide),
            Self::Lv | Self::Sv | Self::Lvws | Self::Svws | Self::Lvi | Self::Svi | Self::Ls | Self::Ss => {
                Some(UnitClass::LoadStore)
            }
            Self::Cvm
            | Self::Pop
            | Self::Mtcl
            | Self::Mfcl
            | Self::Add
            | Self::Sub
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Sll
            | Self::Srl
            | Self::Sra => Some(UnitClass::Scalar),
            Self::Beq | Self::Bne | Self::Bgt | Self::Blt | Self::Bge | Self::Ble | Self::Halt => None,
        }
    }

    /// Relation tested by a compare or branch opcode.
    pub const fn relation(self) -> Option<Relation> {
        match self {
            Self::SeqVV | Self::SeqVS | Self::Beq => Some(Relation::Eq),
            Self::SneVV | Self::SneVS | Self::Bne => Some(Relation::Ne),
            Self::SgtVV | Self::SgtVS | Self::Bgt => Some(Relation::Gt),
            Self::SltVV | Self::SltVS | Self::Blt => Some(Relation::Lt),
            Self::SgeVV | Self::SgeVS | Self::Bge => Some(Relation::Ge),
            Self::SleVV | Self::SleVS | Self::Ble => Some(Relation::Le),
            _ => None,
        }
    }

    /// True for the conditional branches.
    #[inline]
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Self::Beq | Self::Bne | Self::Bgt | Self::Blt | Self::Bge | Self::Ble
        )
    }

    /// True for the vector-vector and vector-scalar compares.
    #[inline]
    pub const fn is_compare(self) -> bool {
        self.relation().is_some() && !self.is_branch()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
