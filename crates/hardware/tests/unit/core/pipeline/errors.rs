use pretty_assertions::assert_eq;
use vecsim_core::SimError;
use vecsim_core::common::Resource;
use vecsim_core::isa::{Instruction, Opcode, Operand};

use crate::common::builder::instruction::{alu, branch, halt, ls, mtcl, sv, vv};
use crate::common::harness::TestContext;

#[test]
fn fetch_past_last_line_is_fatal() {
    let err = TestContext::new()
        .try_run(vec![alu(Opcode::Add, 1, 0, 0)])
        .unwrap_err();
    assert_eq!(err, SimError::out_of_range(Resource::InstructionStore, 1, 1));
}

#[test]
fn negative_branch_target_is_fatal() {
    let err = TestContext::new()
        .try_run(vec![branch(Opcode::Beq, 0, 0, -5), halt()])
        .unwrap_err();
    assert_eq!(err, SimError::out_of_range(Resource::InstructionStore, -5, 2));
}

#[test]
fn negative_scalar_address_is_fatal() {
    let err = TestContext::new()
        .try_run(vec![ls(1, 0, -1), halt()])
        .unwrap_err();
    assert_eq!(err, SimError::out_of_range(Resource::ScalarMemory, -1, 1 << 13));
}

#[test]
fn vector_store_past_end_of_memory_is_fatal() {
    let err = TestContext::with_params(&[
        ("vectorLaneCount", 4),
        ("vectorLengthDefault", 4),
        ("vectorMemoryAddressBits", 4),
    ])
    .sreg(1, 14)
    .try_run(vec![sv(2, 1), halt()])
    .unwrap_err();
    assert_eq!(err, SimError::out_of_range(Resource::VectorMemory, 16, 16));
}

#[test]
fn divide_by_zero_names_the_line() {
    let err = TestContext::new()
        .vsplat(2, 6)
        .try_run(vec![
            alu(Opcode::Add, 1, 0, 0),
            vv(Opcode::DivVV, 1, 2, 3),
            halt(),
        ])
        .unwrap_err();
    assert_eq!(err, SimError::DivideByZero { line: 1 });
}

#[test]
fn masked_off_zero_divisor_is_not_fatal() {
    let report = TestContext::new()
        .vsplat(2, 6)
        .vreg(3, &[0, 3, 3, 3, 3, 3, 3, 3])
        .mask(&[false, true, true, true, true, true, true, true])
        .run(vec![vv(Opcode::DivVV, 1, 2, 3), halt()]);
    assert_eq!(report.vector_registers[1], vec![0, 2, 2, 2, 2, 2, 2, 2]);
}

#[test]
fn vector_length_above_mvl_is_fatal() {
    let err = TestContext::new()
        .sreg(1, 9)
        .try_run(vec![mtcl(1), halt()])
        .unwrap_err();
    assert_eq!(err, SimError::out_of_range(Resource::VectorLength, 9, 9));
}

#[test]
fn operand_shape_is_checked_at_construction() {
    let err = Instruction::new(
        Opcode::AddVV,
        vec![Operand::Vector(1), Operand::Scalar(2), Operand::Vector(3)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        SimError::MalformedInstruction {
            mnemonic: "ADDVV",
            expected: "V V V",
        }
    );
}

#[test]
fn register_index_is_checked_at_construction() {
    let err = Instruction::new(Opcode::Mtcl, vec![Operand::Scalar(8)]).unwrap_err();
    assert_eq!(err, SimError::out_of_range(Resource::ScalarRegister, 8, 8));
}
