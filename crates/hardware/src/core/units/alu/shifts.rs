//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA) on 32-bit words. Only the low five bits of
//! the shift amount are used.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower five bits used).
///
/// # Returns
///
/// The shifted word. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let sh = (b as u32) & SHAMT_MASK;
    match op {
        AluOp::Sll => a.wrapping_shl(sh),
        AluOp::Srl => ((a as u32) >> sh) as i32,
        AluOp::Sra => a >> sh,
        _ => 0,
    }
}
