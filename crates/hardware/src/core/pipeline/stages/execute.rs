//! Execute (EX) Stage.
//!
//! This module evaluates a dispatched instruction against the architectural state.
//! It performs the following:
//! 1. **Operand Read:** Reads scalar, vector and mask operands at dispatch time.
//! 2. **Arithmetic Execution:** Runs the word ALU over every active, unmasked element.
//! 3. **Address Generation:** Computes the element addresses of memory accesses.
//!
//! Nothing architectural changes here. The result is an [`Effect`] that the
//! writeback stage applies when the functional unit reaches its completion cycle.

use crate::common::{SimError, SimResult};
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::DecodedInst;
use crate::core::pipeline::signals::{AddressMode, AluOp};
use crate::core::units::alu::Alu;
use crate::core::units::lsu::{Lsu, VectorAccess};
use crate::isa::Opcode;

/// Architectural update produced by execute and applied at retirement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write a scalar register.
    Scalar {
        /// Destination register.
        reg: usize,
        /// Value written.
        value: i32,
    },
    /// Write selected elements of a vector register.
    Vector {
        /// Destination register.
        reg: usize,
        /// Active length the elements were computed under.
        vl: usize,
        /// `(element, value)` pairs; elements not listed keep their old value.
        elements: Vec<(usize, i32)>,
    },
    /// Replace VMR.
    Mask(Vec<bool>),
    /// Set every VMR bit.
    ClearMask,
    /// Set VLR.
    VectorLength(i32),
    /// Load a scalar register from scalar memory.
    ScalarLoad {
        /// Destination register.
        reg: usize,
        /// Word address.
        addr: i64,
    },
    /// Store a word to scalar memory.
    ScalarStore {
        /// Word address.
        addr: i64,
        /// Value stored.
        value: i32,
    },
    /// Load elements of a vector register from vector memory.
    VectorLoad {
        /// Destination register.
        reg: usize,
        /// Active length snapshotted at issue.
        vl: usize,
        /// `(element, address)` pairs.
        addrs: Vec<(usize, i64)>,
    },
    /// Store words to vector memory, in element order.
    VectorStore {
        /// `(address, value)` pairs.
        writes: Vec<(i64, i32)>,
    },
}

/// Evaluates `inst` on the current architectural state.
///
/// # Errors
///
/// [`SimError::DivideByZero`] for a zero divisor in an active element and
/// [`SimError::OutOfRange`] for any out-of-range register or element read.
pub fn execute(inst: &DecodedInst, state: &ArchState) -> SimResult<Effect> {
    let op = inst.opcode;
    match op {
        Opcode::AddVV
        | Opcode::SubVV
        | Opcode::MulVV
        | Opcode::DivVV
        | Opcode::AddVS
        | Opcode::SubVS
        | Opcode::MulVS
        | Opcode::DivVS => vector_arithmetic(inst, state),

        _ if op.is_compare() => {
            let vl = inst.vl;
            let scalar_rhs = matches!(
                op,
                Opcode::SeqVS
                    | Opcode::SneVS
                    | Opcode::SgtVS
                    | Opcode::SltVS
                    | Opcode::SgeVS
                    | Opcode::SleVS
            );
            let rhs_scalar = if scalar_rhs {
                Some(state.srf.read(inst.rb)?)
            } else {
                None
            };
            let Some(relation) = op.relation() else {
                return Err(malformed(op));
            };
            let mut bits = vec![false; state.vcr.max_length()];
            for (i, bit) in bits.iter_mut().enumerate().take(vl) {
                let a = state.vrf.read_element(inst.ra, i, vl)?;
                let b = match rhs_scalar {
                    Some(s) => s,
                    None => state.vrf.read_element(inst.rb, i, vl)?,
                };
                *bit = relation.holds(a, b);
            }
            Ok(Effect::Mask(bits))
        }

        Opcode::Cvm => Ok(Effect::ClearMask),
        Opcode::Pop => Ok(Effect::Scalar {
            reg: inst.rd,
            value: state.vcr.popcount(inst.vl) as i32,
        }),
        Opcode::Mtcl => Ok(Effect::VectorLength(state.srf.read(inst.ra)?)),
        Opcode::Mfcl => Ok(Effect::Scalar {
            reg: inst.rd,
            value: state.vcr.length() as i32,
        }),

        Opcode::Lv | Opcode::Lvws | Opcode::Lvi => Ok(Effect::VectorLoad {
            reg: inst.rd,
            vl: inst.vl,
            addrs: vector_addresses(inst, state)?,
        }),
        Opcode::Sv | Opcode::Svws | Opcode::Svi => {
            let addrs = vector_addresses(inst, state)?;
            let writes = addrs
                .into_iter()
                .map(|(i, addr)| Ok((addr, state.vrf.read_element(inst.rd, i, inst.vl)?)))
                .collect::<SimResult<Vec<_>>>()?;
            Ok(Effect::VectorStore { writes })
        }
        Opcode::Ls => Ok(Effect::ScalarLoad {
            reg: inst.rd,
            addr: Lsu::scalar_address(state.srf.read(inst.ra)?, inst.imm),
        }),
        Opcode::Ss => Ok(Effect::ScalarStore {
            addr: Lsu::scalar_address(state.srf.read(inst.ra)?, inst.imm),
            value: state.srf.read(inst.rd)?,
        }),

        _ => {
            let alu = AluOp::from_opcode(op).ok_or_else(|| malformed(op))?;
            let a = state.srf.read(inst.ra)?;
            let b = state.srf.read(inst.rb)?;
            let value = Alu::execute(alu, a, b).ok_or(SimError::DivideByZero { line: inst.line })?;
            Ok(Effect::Scalar {
                reg: inst.rd,
                value,
            })
        }
    }
}

/// Element-wise `vd[i] = va[i] op (vb[i] | sb)` over active, unmasked elements.
fn vector_arithmetic(inst: &DecodedInst, state: &ArchState) -> SimResult<Effect> {
    let op = inst.opcode;
    let alu = AluOp::from_opcode(op).ok_or_else(|| malformed(op))?;
    let scalar_rhs = matches!(
        op,
        Opcode::AddVS | Opcode::SubVS | Opcode::MulVS | Opcode::DivVS
    );
    let rhs_scalar = if scalar_rhs {
        Some(state.srf.read(inst.rb)?)
    } else {
        None
    };

    let vl = inst.vl;
    let mask = state.vcr.mask();
    let mut elements = Vec::with_capacity(vl);
    for i in (0..vl).filter(|&i| mask.get(i).copied().unwrap_or(false)) {
        let a = state.vrf.read_element(inst.ra, i, vl)?;
        let b = match rhs_scalar {
            Some(s) => s,
            None => state.vrf.read_element(inst.rb, i, vl)?,
        };
        let value = Alu::execute(alu, a, b).ok_or(SimError::DivideByZero { line: inst.line })?;
        elements.push((i, value));
    }
    Ok(Effect::Vector {
        reg: inst.rd,
        vl,
        elements,
    })
}

fn vector_addresses(inst: &DecodedInst, state: &ArchState) -> SimResult<Vec<(usize, i64)>> {
    let mode = AddressMode::from_opcode(inst.opcode).ok_or_else(|| malformed(inst.opcode))?;
    let stride = match mode {
        AddressMode::Strided => state.srf.read(inst.rb)?,
        _ => 0,
    };
    let offsets: &[i32] = match mode {
        AddressMode::Indexed => state.vrf.read(inst.rb)?,
        _ => &[],
    };
    let access = VectorAccess {
        mode,
        base: state.srf.read(inst.ra)?,
        stride,
        offsets,
        length: inst.vl,
        mask: state.vcr.mask(),
    };
    Ok(Lsu::element_addresses(&access))
}

const fn malformed(op: Opcode) -> SimError {
    SimError::MalformedInstruction {
        mnemonic: op.mnemonic(),
        expected: op.format_text(),
    }
}
