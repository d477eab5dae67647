//! ALU arithmetic operations.
//!
//! Addition, subtraction, multiplication and division on signed 32-bit words.
//! Every result wraps in two's complement; nothing saturates. Division by zero
//! has no result and is reported to the caller as `None`.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The wrapped result, or `None` for a division by zero. Non-arithmetic
/// opcodes yield `Some(0)`.
pub const fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
    match op {
        AluOp::Add => Some(a.wrapping_add(b)),
        AluOp::Sub => Some(a.wrapping_sub(b)),
        AluOp::Mul => Some(a.wrapping_mul(b)),
        // i32::MIN / -1 wraps back to i32::MIN
        AluOp::Div => {
            if b == 0 {
                None
            } else {
                Some(a.wrapping_div(b))
            }
        }
        _ => Some(0),
    }
}
