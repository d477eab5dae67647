//! Instruction Decode (ID) Stage.
//!
//! This module turns an [`Instruction`] into the form the rest of the pipeline works on.
//! It performs the following:
//! 1. **Classification:** Maps the opcode to its functional-unit class, or marks it as a
//!    branch or `HALT` resolved at fetch.
//! 2. **Dependency Extraction:** Names the destination register and every source register,
//!    including the implicit VMR read of masked vector work and the VLR read of `MFCL`.
//! 3. **VLR Snapshot:** Records the active vector length the instruction will use.

use crate::common::{RegisterId, SimError, SimResult};
use crate::core::pipeline::latches::{Decoded, DecodedInst, InstId, RegList};
use crate::isa::{Instruction, Opcode, Operand};

use Operand::{Imm as I, Scalar as S, Vector as V};

const fn sr(i: usize) -> RegisterId {
    RegisterId::scalar(i)
}

const fn vr(i: usize) -> RegisterId {
    RegisterId::vector(i)
}

const VMR: RegisterId = RegisterId::VMR;
const VLR: RegisterId = RegisterId::VLR;

/// Decodes one instruction line.
///
/// # Arguments
///
/// * `inst` - The instruction to decode.
/// * `line` - Its instruction-store line.
/// * `id` - Identifier it receives if it issues.
/// * `vl` - Current VLR value, recorded for vector work.
///
/// # Errors
///
/// [`SimError::MalformedInstruction`] if the operand list does not fit the opcode.
pub fn decode(inst: &Instruction, line: usize, id: InstId, vl: usize) -> SimResult<Decoded> {
    let op = inst.opcode();
    let malformed = || SimError::MalformedInstruction {
        mnemonic: op.mnemonic(),
        expected: op.format_text(),
    };

    let Some(class) = op.unit_class() else {
        return match (op, inst.operands()) {
            (Opcode::Halt, []) => Ok(Decoded::Halt),
            (_, &[S(ra), S(rb), I(offset)]) => op
                .relation()
                .map(|relation| Decoded::Branch {
                    relation,
                    ra,
                    rb,
                    offset,
                })
                .ok_or_else(malformed),
            _ => Err(malformed()),
        };
    };

    let base = DecodedInst {
        id,
        line,
        opcode: op,
        class,
        dest: None,
        sources: RegList::new(),
        rd: 0,
        ra: 0,
        rb: 0,
        imm: 0,
        vl,
        uses_vl: false,
    };
    let b = Builder(base);

    let decoded = match (op, inst.operands()) {
        (
            Opcode::AddVV | Opcode::SubVV | Opcode::MulVV | Opcode::DivVV,
            &[V(d), V(a), V(c)],
        ) => b
            .writes(vr(d))
            .reads(&[vr(a), vr(c), VMR])
            .fields(d, a, c, 0)
            .vector(),
        (
            Opcode::AddVS | Opcode::SubVS | Opcode::MulVS | Opcode::DivVS,
            &[V(d), V(a), S(c)],
        ) => b
            .writes(vr(d))
            .reads(&[vr(a), sr(c), VMR])
            .fields(d, a, c, 0)
            .vector(),
        (_, &[V(a), V(c)]) if op.is_compare() => b
            .writes(VMR)
            .reads(&[vr(a), vr(c)])
            .fields(0, a, c, 0)
            .vector(),
        (_, &[V(a), S(c)]) if op.is_compare() => b
            .writes(VMR)
            .reads(&[vr(a), sr(c)])
            .fields(0, a, c, 0)
            .vector(),
        (Opcode::Cvm, []) => b.writes(VMR),
        (Opcode::Pop, &[S(d)]) => b.writes(sr(d)).reads(&[VMR]).fields(d, 0, 0, 0).vector(),
        (Opcode::Mtcl, &[S(a)]) => b.writes(VLR).reads(&[sr(a)]).fields(0, a, 0, 0),
        (Opcode::Mfcl, &[S(d)]) => b.writes(sr(d)).reads(&[VLR]).fields(d, 0, 0, 0),
        (Opcode::Lv, &[V(d), S(a)]) => b
            .writes(vr(d))
            .reads(&[sr(a), VMR])
            .fields(d, a, 0, 0)
            .vector(),
        (Opcode::Sv, &[V(s), S(a)]) => b.reads(&[vr(s), sr(a), VMR]).fields(s, a, 0, 0).vector(),
        (Opcode::Lvws, &[V(d), S(a), S(c)]) => b
            .writes(vr(d))
            .reads(&[sr(a), sr(c), VMR])
            .fields(d, a, c, 0)
            .vector(),
        (Opcode::Svws, &[V(s), S(a), S(c)]) => b
            .reads(&[vr(s), sr(a), sr(c), VMR])
            .fields(s, a, c, 0)
            .vector(),
        (Opcode::Lvi, &[V(d), S(a), V(c)]) => b
            .writes(vr(d))
            .reads(&[sr(a), vr(c), VMR])
            .fields(d, a, c, 0)
            .vector(),
        (Opcode::Svi, &[V(s), S(a), V(c)]) => b
            .reads(&[vr(s), sr(a), vr(c), VMR])
            .fields(s, a, c, 0)
            .vector(),
        (Opcode::Ls, &[S(d), S(a), I(imm)]) => b.writes(sr(d)).reads(&[sr(a)]).fields(d, a, 0, imm),
        (Opcode::Ss, &[S(s), S(a), I(imm)]) => b.reads(&[sr(s), sr(a)]).fields(s, a, 0, imm),
        (
            Opcode::Add
            | Opcode::Sub
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Sll
            | Opcode::Srl
            | Opcode::Sra,
            &[S(d), S(a), S(c)],
        ) => b
            .writes(sr(d))
            .reads(&[sr(a), sr(c)])
            .fields(d, a, c, 0),
        _ => return Err(malformed()),
    };

    Ok(Decoded::Op(decoded.0))
}

/// By-value builder over [`DecodedInst`].
struct Builder(DecodedInst);

impl Builder {
    const fn writes(mut self, reg: RegisterId) -> Self {
        self.0.dest = Some(reg);
        self
    }

    fn reads(mut self, regs: &[RegisterId]) -> Self {
        self.0.sources = RegList::from_slice(regs);
        self
    }

    const fn fields(mut self, rd: usize, ra: usize, rb: usize, imm: i32) -> Self {
        self.0.rd = rd;
        self.0.ra = ra;
        self.0.rb = rb;
        self.0.imm = imm;
        self
    }

    const fn vector(mut self) -> Self {
        self.0.uses_vl = true;
        self
    }
}
