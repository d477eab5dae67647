use pretty_assertions::assert_eq;
use vecsim_core::isa::{Instruction, Opcode, UnitClass};
use vecsim_core::{Config, Simulator};

use crate::common::builder::instruction::{alu, branch, halt, lv, mtcl, sv, vs, vv};
use crate::common::harness::TestContext;

fn saxpy_like() -> Vec<Instruction> {
    vec![
        lv(1, 1),
        vs(Opcode::MulVS, 2, 1, 3),
        vv(Opcode::AddVV, 3, 2, 1),
        sv(3, 2),
        alu(Opcode::Sub, 4, 4, 5),
        branch(Opcode::Bgt, 4, 0, -5),
        mtcl(6),
        vv(Opcode::DivVV, 4, 3, 1),
        halt(),
    ]
}

fn context() -> TestContext {
    let words: Vec<i32> = (1..=8).collect();
    TestContext::new()
        .sreg(1, 0)
        .sreg(2, 32)
        .sreg(3, 3)
        .sreg(4, 2)
        .sreg(5, 1)
        .sreg(6, 4)
        .vector_memory(0, &words)
}

#[test]
fn repeated_runs_are_identical() {
    let first = context().run(saxpy_like());
    let second = context().run(saxpy_like());
    assert_eq!(first, second);
    assert!(first.stats.branches_taken > 0);
}

#[test]
fn report_captures_final_state() {
    let report = context().run(saxpy_like());
    assert_eq!(report.vector_registers[3], vec![4, 8, 12, 16, 20, 24, 28, 32]);
    assert_eq!(&report.vector_memory[32..40], &[4, 8, 12, 16, 20, 24, 28, 32]);
    assert_eq!(report.vector_registers[4], vec![4, 4, 4, 4, 0, 0, 0, 0]);
    assert_eq!(report.vector_length, 4);
    assert_eq!(report.scalar_registers[4], 0);
    assert_eq!(report.cycles, report.stats.cycles);
    assert_eq!(report.stats.dispatched[UnitClass::LoadStore.index()], 4);
    assert_eq!(report.stats.instructions_retired, report.stats.instructions_issued);
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let report = TestContext::new().run(vec![halt()]);
    let json = serde_json::to_value(&report).unwrap();
    for key in [
        "cycles",
        "scalarRegisters",
        "vectorRegisters",
        "vectorLength",
        "vectorMask",
        "scalarMemory",
        "vectorMemory",
        "stats",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["cycles"], 1);
}

#[test]
fn images_passed_to_new_are_loaded() {
    let config = Config::default();
    let mut sim = Simulator::new(&config, vec![halt()], &[1, 2, 3], &[4, 5]).unwrap();
    let report = sim.run().unwrap();
    assert_eq!(&report.scalar_memory[..4], &[1, 2, 3, 0]);
    assert_eq!(&report.vector_memory[..3], &[4, 5, 0]);
    assert_eq!(report.vector_registers[0].len(), 64);
}

#[test]
fn stats_table_names_every_unit() {
    let report = context().run(saxpy_like());
    let table = report.stats.to_string();
    for class in UnitClass::ALL {
        assert!(table.contains(&class.to_string()), "{class}");
    }
    assert!(report.stats.cpi() > 1.0);
    assert!((report.stats.cpi() * report.stats.ipc() - 1.0).abs() < 1e-9);
}
