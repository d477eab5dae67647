use pretty_assertions::assert_eq;
use vecsim_core::common::RegisterId;
use vecsim_core::core::pipeline::HazardTracker;
use vecsim_core::core::pipeline::latches::{Decoded, DecodedInst, InstId};
use vecsim_core::core::pipeline::stages::decode;
use vecsim_core::isa::{Instruction, Opcode};

use crate::common::builder::instruction::{alu, mtcl, vv};

fn decoded(inst: &Instruction, id: InstId) -> DecodedInst {
    match decode(inst, id as usize, id, 8).unwrap() {
        Decoded::Op(d) => d,
        other => panic!("expected a unit op, got {other:?}"),
    }
}

#[test]
fn decode_names_dependencies() {
    let d = decoded(&vv(Opcode::AddVV, 1, 2, 3), 0);
    assert_eq!(d.dest, Some(RegisterId::vector(1)));
    assert!(d.sources.contains(RegisterId::vector(2)));
    assert!(d.sources.contains(RegisterId::vector(3)));
    assert!(d.sources.contains(RegisterId::VMR));
    assert!(d.uses_vl);
    assert_eq!(d.elements(), 8);

    let m = decoded(&mtcl(4), 1);
    assert_eq!(m.dest, Some(RegisterId::VLR));
    assert!(m.sources.contains(RegisterId::scalar(4)));
    assert_eq!(m.elements(), 1);
}

#[test]
fn raw_chain_waits_for_producer_completion() {
    let mut t = HazardTracker::new();
    let producer = decoded(&alu(Opcode::Add, 1, 2, 3), 0);
    let consumer = decoded(&alu(Opcode::Sub, 4, 1, 1), 1);

    assert!(t.can_claim(&producer));
    t.claim(&producer);
    assert!(t.can_claim(&consumer));
    t.claim(&consumer);

    assert!(t.can_issue(&producer, 0));
    t.reserve(&producer, 3);
    assert!(!t.can_issue(&consumer, 2));
    assert!(t.can_issue(&consumer, 3));
}

#[test]
fn war_blocks_writer_until_reader_dispatches() {
    let mut t = HazardTracker::new();
    let reader = decoded(&alu(Opcode::Add, 5, 1, 2), 0);
    let writer = decoded(&alu(Opcode::Add, 1, 6, 7), 1);
    t.claim(&reader);
    assert_eq!(t.pending_readers(RegisterId::scalar(1)), 1);
    assert!(!t.can_claim(&writer));

    t.reserve(&reader, 1);
    assert_eq!(t.pending_readers(RegisterId::scalar(1)), 0);
    assert!(t.can_claim(&writer));
}

#[test]
fn pending_vector_length_blocks_vector_work() {
    let mut t = HazardTracker::new();
    let set_vl = decoded(&mtcl(1), 0);
    let vector = decoded(&vv(Opcode::MulVV, 1, 2, 3), 1);
    let scalar = decoded(&alu(Opcode::Add, 2, 3, 4), 2);
    t.claim(&set_vl);
    assert!(!t.can_claim(&vector));
    assert!(t.can_claim(&scalar));
    t.release(&set_vl);
    assert!(t.can_claim(&vector));
}

#[test]
fn tracker_is_quiescent_after_full_lifecycle() {
    let mut t = HazardTracker::new();
    let insts = [
        decoded(&alu(Opcode::Add, 1, 2, 3), 0),
        decoded(&vv(Opcode::AddVV, 1, 2, 3), 1),
    ];
    for i in &insts {
        t.claim(i);
    }
    assert!(!t.is_quiescent());
    for (n, i) in insts.iter().enumerate() {
        t.reserve(i, n as u64 + 1);
        t.release(i);
    }
    assert!(t.is_quiescent());
}
