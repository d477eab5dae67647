use vecsim_core::isa::{Instruction, Opcode, Operand};

/// Fluent builder over [`Instruction::new`]. Operands are appended in assembly order.
pub struct InstructionBuilder {
    opcode: Opcode,
    operands: Vec<Operand>,
}

impl InstructionBuilder {
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            operands: Vec::new(),
        }
    }

    /// Appends scalar register `SR{idx}`.
    pub fn s(mut self, idx: usize) -> Self {
        self.operands.push(Operand::Scalar(idx));
        self
    }

    /// Appends vector register `VR{idx}`.
    pub fn v(mut self, idx: usize) -> Self {
        self.operands.push(Operand::Vector(idx));
        self
    }

    pub fn imm(mut self, value: i32) -> Self {
        self.operands.push(Operand::Imm(value));
        self
    }

    pub fn build(self) -> Instruction {
        Instruction::new(self.opcode, self.operands).expect("well-formed test instruction")
    }
}

/// `op VRd VRa VRb`
pub fn vv(op: Opcode, d: usize, a: usize, b: usize) -> Instruction {
    InstructionBuilder::new(op).v(d).v(a).v(b).build()
}

/// `op VRd VRa SRb`
pub fn vs(op: Opcode, d: usize, a: usize, b: usize) -> Instruction {
    InstructionBuilder::new(op).v(d).v(a).s(b).build()
}

/// Vector-vector compare, `op VRa VRb`.
pub fn cmp_vv(op: Opcode, a: usize, b: usize) -> Instruction {
    InstructionBuilder::new(op).v(a).v(b).build()
}

/// Vector-scalar compare, `op VRa SRb`.
pub fn cmp_vs(op: Opcode, a: usize, b: usize) -> Instruction {
    InstructionBuilder::new(op).v(a).s(b).build()
}

/// Scalar ALU, `op SRd SRa SRb`.
pub fn alu(op: Opcode, d: usize, a: usize, b: usize) -> Instruction {
    InstructionBuilder::new(op).s(d).s(a).s(b).build()
}

/// `LS SRd SRa imm`
pub fn ls(d: usize, base: usize, imm: i32) -> Instruction {
    InstructionBuilder::new(Opcode::Ls).s(d).s(base).imm(imm).build()
}

/// `SS SRs SRa imm`
pub fn ss(src: usize, base: usize, imm: i32) -> Instruction {
    InstructionBuilder::new(Opcode::Ss).s(src).s(base).imm(imm).build()
}

/// `LV VRd SRa`
pub fn lv(d: usize, base: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Lv).v(d).s(base).build()
}

/// `SV VRs SRa`
pub fn sv(src: usize, base: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Sv).v(src).s(base).build()
}

/// `LVWS VRd SRa SRstride`
pub fn lvws(d: usize, base: usize, stride: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Lvws).v(d).s(base).s(stride).build()
}

/// `SVWS VRs SRa SRstride`
pub fn svws(src: usize, base: usize, stride: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Svws).v(src).s(base).s(stride).build()
}

/// `LVI VRd SRa VRoffsets`
pub fn lvi(d: usize, base: usize, offsets: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Lvi).v(d).s(base).v(offsets).build()
}

/// `SVI VRs SRa VRoffsets`
pub fn svi(src: usize, base: usize, offsets: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Svi).v(src).s(base).v(offsets).build()
}

/// Conditional branch, `op SRa SRb offset`.
pub fn branch(op: Opcode, a: usize, b: usize, offset: i32) -> Instruction {
    InstructionBuilder::new(op).s(a).s(b).imm(offset).build()
}

pub fn mtcl(src: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Mtcl).s(src).build()
}

pub fn mfcl(dst: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Mfcl).s(dst).build()
}

pub fn pop(dst: usize) -> Instruction {
    InstructionBuilder::new(Opcode::Pop).s(dst).build()
}

pub fn cvm() -> Instruction {
    InstructionBuilder::new(Opcode::Cvm).build()
}

pub fn halt() -> Instruction {
    Instruction::halt()
}
