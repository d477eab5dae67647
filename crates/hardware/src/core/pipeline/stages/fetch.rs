//! Instruction Fetch (IF) Stage.
//!
//! This module implements the front of the vector core. Each running cycle it
//! fetches one line from the instruction store and, after decode, does one of:
//!
//! - **Issue:** Enqueue the instruction into its unit's issue queue and claim its registers.
//! - **Branch:** Compare two scalar registers and move the line index.
//! - **Halt:** Switch the engine to draining.
//!
//! When the instruction cannot issue this cycle the line index is left alone and the
//! same line is fetched again next cycle.

use tracing::{debug, trace};

use crate::common::{RegisterId, Resource, SimError, SimResult, StallReason};
use crate::core::pipeline::engine::{EngineState, PipelineEngine};
use crate::core::pipeline::issue_queue::QueueEntry;
use crate::core::pipeline::latches::Decoded;
use crate::core::pipeline::stages::decode::decode;

/// Executes the fetch stage for one cycle.
///
/// # Errors
///
/// [`SimError::OutOfRange`] when the line index is past the end of the program or a
/// branch target is negative, and any decode error.
pub fn fetch_stage(engine: &mut PipelineEngine) -> SimResult<()> {
    let line = engine.pc;
    let cycle = engine.cycle;
    let vl = engine.state.vcr.length();
    let decoded = decode(engine.program.fetch(line)?, line, engine.next_id, vl)?;

    match decoded {
        Decoded::Halt => {
            engine.stats.instructions_fetched += 1;
            engine.run_state = EngineState::Draining;
            debug!(cycle, line, "halt fetched, draining");
        }

        Decoded::Branch {
            relation,
            ra,
            rb,
            offset,
        } => {
            let pending = [RegisterId::scalar(ra), RegisterId::scalar(rb)]
                .into_iter()
                .any(|reg| engine.tracker.pending_writer(reg).is_some());
            if pending {
                stall(engine, StallReason::DataHazard);
                return Ok(());
            }

            let taken = relation.holds(engine.state.srf.read(ra)?, engine.state.srf.read(rb)?);
            let target = if taken {
                line as i64 + i64::from(offset)
            } else {
                line as i64 + 1
            };
            engine.pc = usize::try_from(target).map_err(|_| {
                SimError::out_of_range(Resource::InstructionStore, target, engine.program.len())
            })?;
            engine.stats.instructions_fetched += 1;
            engine.stats.branches += 1;
            if taken {
                engine.stats.branches_taken += 1;
            }
            trace!(cycle, line, taken, target, "branch");
        }

        Decoded::Op(inst) => {
            if !engine.tracker.can_claim(&inst) {
                stall(engine, StallReason::DataHazard);
                return Ok(());
            }

            let slot = inst.class.index();
            let entry = QueueEntry {
                inst,
                enqueued_at: cycle,
                operands_ready_at: engine.tracker.operand_ready_cycle(&inst, cycle),
            };
            if !engine.queues[slot].enqueue(entry) {
                stall(engine, StallReason::Structural(inst.class));
                return Ok(());
            }

            engine.tracker.claim(&inst);
            engine.next_id += 1;
            engine.pc += 1;
            engine.stats.instructions_fetched += 1;
            engine.stats.instructions_issued += 1;
            trace!(
                cycle,
                line,
                id = inst.id,
                op = %inst.opcode,
                unit = %inst.class,
                vl = inst.vl,
                "issue"
            );
        }
    }
    Ok(())
}

fn stall(engine: &mut PipelineEngine, reason: StallReason) {
    match reason {
        StallReason::Structural(class) => engine.tracker.note_structural(class),
        StallReason::DataHazard => engine.tracker.note_data_hazard(),
    }
    engine.last_stall = Some(reason);
    debug!(cycle = engine.cycle, line = engine.pc, %reason, "fetch stall");
}
