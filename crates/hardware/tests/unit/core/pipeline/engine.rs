use pretty_assertions::assert_eq;
use rstest::rstest;
use vecsim_core::common::StallReason;
use vecsim_core::core::EngineState;
use vecsim_core::isa::{Opcode, UnitClass};

use crate::common::builder::instruction::{alu, branch, halt, ls, lv, mtcl, vv};
use crate::common::harness::TestContext;

#[test]
fn single_vector_add_takes_five_cycles() {
    let report = TestContext::with_params(&[
        ("vectorLaneCount", 4),
        ("vectorLengthDefault", 8),
        ("pipelineDepthAdd", 2),
        ("queueDepthAdd", 4),
    ])
    .vsplat(2, 3)
    .vsplat(3, 4)
    .run(vec![vv(Opcode::AddVV, 1, 2, 3), halt()]);

    assert_eq!(report.cycles, 5);
    assert_eq!(report.vector_registers[1], vec![7; 8]);
    assert_eq!(report.stats.instructions_retired, 1);
    assert_eq!(report.stats.dispatched[UnitClass::Add.index()], 1);
    assert_eq!(report.stats.vector_elements, 8);
}

#[test]
fn halt_alone_takes_one_cycle() {
    let report = TestContext::new().run(vec![halt()]);
    assert_eq!(report.cycles, 1);
    assert_eq!(report.stats.instructions_fetched, 1);
    assert_eq!(report.stats.instructions_retired, 0);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(7)]
fn independent_scalar_ops_issue_back_to_back(#[case] n: usize) {
    let mut program: Vec<_> = (0..n)
        .map(|i| alu(Opcode::Add, 1 + i % 7, 0, 0))
        .collect();
    program.push(halt());

    let report = TestContext::new().run(program);
    assert_eq!(report.cycles, n as u64 + 1);
    assert_eq!(report.stats.stalls_data, 0);
    assert_eq!(report.stats.total_structural_stalls(), 0);
}

#[test]
fn write_after_write_stalls_until_first_writer_retires() {
    let report = TestContext::with_params(&[
        ("vectorLaneCount", 4),
        ("vectorLengthDefault", 8),
        ("scalarLatency", 3),
    ])
    .sreg(2, 10)
    .sreg(3, 5)
    .sreg(4, 9)
    .sreg(5, 4)
    .run(vec![
        alu(Opcode::Add, 1, 2, 3),
        alu(Opcode::Sub, 1, 4, 5),
        halt(),
    ]);

    assert_eq!(report.cycles, 7);
    assert_eq!(report.stats.stalls_data, 2);
    assert_eq!(report.scalar_registers[1], 5);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
#[case(5)]
#[case(17)]
#[case(64)]
fn vector_add_cost_scales_with_vector_length(#[case] length: i32) {
    let report = TestContext::with_params(&[("vectorLaneCount", 4), ("vectorLengthDefault", 64)])
        .sreg(1, length)
        .run(vec![mtcl(1), vv(Opcode::AddVV, 1, 2, 3), halt()]);

    let groups = (length as u64).div_ceil(4);
    assert_eq!(report.cycles, 4 + groups);
    assert_eq!(report.vector_length, length as usize);
    assert_eq!(report.stats.vector_elements, length as u64);
}

#[test]
fn full_divide_queue_stalls_fetch() {
    let report = TestContext::with_params(&[
        ("vectorLaneCount", 4),
        ("vectorLengthDefault", 4),
        ("queueDepthDiv", 1),
        ("pipelineDepthDiv", 8),
        ("pipelinedDiv", 0),
    ])
    .vsplat(4, 8)
    .vsplat(5, 2)
    .run(vec![
        vv(Opcode::DivVV, 1, 4, 5),
        vv(Opcode::DivVV, 2, 4, 5),
        vv(Opcode::DivVV, 3, 4, 5),
        halt(),
    ]);

    assert_eq!(report.cycles, 28);
    assert_eq!(report.stats.stalls_structural[UnitClass::Divide.index()], 8);
    assert_eq!(report.stats.total_structural_stalls(), 8);
    assert_eq!(report.stats.stalls_data, 0);
    for reg in 1..=3 {
        assert_eq!(report.vector_registers[reg], vec![4; 4], "VR{reg}");
    }
}

#[test]
fn load_use_waits_for_load_latency() {
    let report = TestContext::new()
        .scalar_memory(0, &[21])
        .run(vec![ls(1, 0, 0), alu(Opcode::Add, 2, 1, 1), halt()]);

    assert_eq!(report.cycles, 14);
    assert_eq!(report.scalar_registers[1], 21);
    assert_eq!(report.scalar_registers[2], 42);
    // The consumer sits in its queue, so fetch never stalls.
    assert_eq!(report.stats.stalls_data, 0);
}

#[test]
fn short_op_behind_long_op_on_same_unit_completes_with_it() {
    let context = || {
        TestContext::with_params(&[("vectorLaneCount", 4), ("vectorLengthDefault", 32)])
            .sreg(3, 5)
            .scalar_memory(5, &[21])
    };
    let alone = context().run(vec![ls(2, 3, 0), alu(Opcode::Add, 4, 2, 2), halt()]);
    let behind = context().run(vec![
        lv(1, 1),
        ls(2, 3, 0),
        alu(Opcode::Add, 4, 2, 2),
        halt(),
    ]);

    // Alone, LS completes at 0 + 11 + 1. Behind a 32-element LV (0 + 11 + 8) it is held
    // to cycle 19 instead of 1 + 12, and the consumer dispatches at 19.
    assert_eq!(alone.cycles, 14);
    assert_eq!(behind.cycles, 21);
    assert_eq!(behind.scalar_registers[4], 42);
    assert_eq!(behind.stats.dispatched[UnitClass::LoadStore.index()], 2);
}

#[test]
fn countdown_loop_resolves_branches_at_fetch() {
    let report = TestContext::new()
        .sreg(1, 3)
        .sreg(2, 1)
        .run(vec![
            alu(Opcode::Sub, 1, 1, 2),
            branch(Opcode::Bne, 1, 0, -1),
            halt(),
        ]);

    assert_eq!(report.cycles, 7);
    assert_eq!(report.scalar_registers[1], 0);
    assert_eq!(report.stats.branches, 3);
    assert_eq!(report.stats.branches_taken, 2);
    assert_eq!(report.stats.instructions_retired, 3);
}

#[test]
fn branch_on_pending_register_is_a_data_stall() {
    let mut sim = TestContext::with_params(&[
        ("vectorLaneCount", 4),
        ("vectorLengthDefault", 8),
        ("scalarLatency", 4),
    ])
    .simulator(vec![
        alu(Opcode::Add, 1, 0, 0),
        branch(Opcode::Beq, 1, 0, 2),
        alu(Opcode::Add, 3, 0, 0),
        halt(),
    ]);

    assert_eq!(sim.tick().unwrap(), EngineState::Running);
    assert_eq!(sim.tick().unwrap(), EngineState::Running);
    assert_eq!(sim.engine().last_stall(), Some(StallReason::DataHazard));
    assert_eq!(sim.engine().pc(), 1);

    let report = sim.run().unwrap();
    // Taken branch skips line 2.
    assert_eq!(report.stats.branches_taken, 1);
    assert_eq!(report.stats.instructions_retired, 1);
}

#[test]
fn independent_units_overlap() {
    let serial = TestContext::new().run(vec![
        vv(Opcode::MulVV, 1, 2, 3),
        vv(Opcode::MulVV, 4, 1, 3),
        halt(),
    ]);
    let parallel = TestContext::new().run(vec![
        vv(Opcode::MulVV, 1, 2, 3),
        vv(Opcode::AddVV, 4, 5, 6),
        halt(),
    ]);
    assert!(parallel.cycles < serial.cycles);
    // Mul latency is 12 + 2 = 14 cycles; the dependent multiply starts at 14.
    assert_eq!(serial.cycles, 29);
    assert_eq!(parallel.cycles, 15);
}

#[test]
fn step_is_a_no_op_once_halted() {
    let mut sim = TestContext::new().simulator(vec![halt()]);
    assert_eq!(sim.tick().unwrap(), EngineState::Halted);
    assert_eq!(sim.tick().unwrap(), EngineState::Halted);
    assert_eq!(sim.engine().cycle(), 1);
}
