//! Instruction Set Architecture Definitions.
//!
//! Contains the opcode set of the vector core, the decoded instruction type the
//! front end hands over, and the instruction store the fetch stage reads from.
//!
//! # Instruction classes
//!
//! * Vector arithmetic and compares: `ADDVV`, `MULVS`, `SLTVV`, ...
//! * Vector length and mask control: `MTCL`, `MFCL`, `CVM`, `POP`.
//! * Memory: unit-stride, strided and indexed vector access plus scalar `LS`/`SS`.
//! * Scalar ALU, branches and `HALT`.

/// Instruction representation and operand validation.
pub mod instruction;

/// Opcodes, operand formats and unit classes.
pub mod opcode;

/// Program storage addressed by line index.
pub mod store;

pub use instruction::{Instruction, Operand};
pub use opcode::{Opcode, OperandKind, Relation, UnitClass};
pub use store::InstructionStore;
