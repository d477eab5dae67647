//! Writeback (WB) Stage.
//!
//! This module implements the retirement side of the pipeline. It commits the
//! [`Effect`] of a completed operation to the register files, the vector control
//! registers or a data memory. Loads read memory here and stores write it here,
//! so memory is only touched in the completion order of the load-store unit.

use tracing::trace;

use crate::common::SimResult;
use crate::core::arch::ArchState;
use crate::core::pipeline::engine::PipelineEngine;
use crate::core::pipeline::stages::execute::Effect;

/// Retires every in-flight operation whose completion cycle has arrived.
///
/// Operations completing in the same cycle are retired in program order. Each one
/// writes back, releases its destination register and frees its unit slot.
///
/// # Errors
///
/// The first writeback fault.
pub fn retire_stage(engine: &mut PipelineEngine) -> SimResult<()> {
    let cycle = engine.cycle;
    let (mut done, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut engine.in_flight)
        .into_iter()
        .partition(|op| op.completes_at <= cycle);
    engine.in_flight = pending;
    done.sort_by_key(|op| op.inst.id);

    for op in done {
        writeback(&op.effect, &mut engine.state)?;
        engine.tracker.release(&op.inst);
        engine.units[op.inst.class.index()].retire(op.inst.id);
        engine.stats.instructions_retired += 1;
        trace!(cycle, id = op.inst.id, op = %op.inst.opcode, "retire");
    }
    Ok(())
}

/// Applies `effect` to `state`.
///
/// # Errors
///
/// [`SimError::OutOfRange`](crate::common::SimError::OutOfRange) for a memory address
/// outside its memory, or an `MTCL` value outside `[0, MVL]`.
pub fn writeback(effect: &Effect, state: &mut ArchState) -> SimResult<()> {
    match effect {
        Effect::Scalar { reg, value } => {
            trace!(reg, value, "wb scalar");
            state.srf.write(*reg, *value)
        }
        Effect::Vector { reg, vl, elements } => {
            trace!(reg, vl, count = elements.len(), "wb vector");
            for &(i, value) in elements {
                state.vrf.write_element(*reg, i, *vl, value)?;
            }
            Ok(())
        }
        Effect::Mask(bits) => {
            state.vcr.set_mask(bits);
            Ok(())
        }
        Effect::ClearMask => {
            state.vcr.clear_mask();
            Ok(())
        }
        Effect::VectorLength(value) => {
            trace!(value, "wb vlr");
            state.vcr.set_length(*value)
        }
        Effect::ScalarLoad { reg, addr } => {
            let value = state.sdm.read(*addr)?;
            state.srf.write(*reg, value)
        }
        Effect::ScalarStore { addr, value } => state.sdm.write(*addr, *value),
        Effect::VectorLoad { reg, vl, addrs } => {
            for &(i, addr) in addrs {
                let value = state.vdm.read(addr)?;
                state.vrf.write_element(*reg, i, *vl, value)?;
            }
            Ok(())
        }
        Effect::VectorStore { writes } => {
            for &(addr, value) in writes {
                state.vdm.write(addr, value)?;
            }
            Ok(())
        }
    }
}
