//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the word datapath shared by the scalar ALU and by
//! every lane of the vector add, multiply and divide units.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`logic`]:      And, Or, Xor
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit for 32-bit word operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Returns
    ///
    /// The result word, or `None` when a division has a zero divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecsim_core::core::pipeline::signals::AluOp;
    /// use vecsim_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), Some(i32::MIN));
    /// assert_eq!(Alu::execute(AluOp::Srl, -1, 31), Some(1));
    /// assert_eq!(Alu::execute(AluOp::Div, 9, 0), None);
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor => Some(logic::execute(op, a, b)),
            AluOp::Sll | AluOp::Srl | AluOp::Sra => Some(shifts::execute(op, a, b)),
        }
    }
}
