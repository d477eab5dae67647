//! Dispatch Stage.
//!
//! Moves ready issue-queue heads onto their functional units. Queues are visited
//! in the program order of their heads, so when several classes can start work in
//! the same cycle the oldest instruction goes first. Operands are read here; the
//! computed [`Effect`](super::execute::Effect) travels with the operation until it retires.

use tracing::trace;

use crate::common::SimResult;
use crate::core::pipeline::engine::PipelineEngine;
use crate::core::pipeline::latches::{InFlightOp, InstId};
use crate::core::pipeline::stages::execute::execute;
use crate::isa::UnitClass;

/// Executes the dispatch stage for one cycle.
///
/// # Errors
///
/// Any execute-time fault, such as [`SimError::DivideByZero`](crate::common::SimError::DivideByZero).
pub fn dispatch_stage(engine: &mut PipelineEngine) -> SimResult<()> {
    let cycle = engine.cycle;

    let mut order: Vec<(InstId, usize)> = engine
        .queues
        .iter()
        .enumerate()
        .filter_map(|(slot, queue)| queue.head().map(|head| (head.inst.id, slot)))
        .collect();
    order.sort_unstable();

    for (_, slot) in order {
        let Some(entry) =
            engine.queues[slot].dequeue_if_ready(cycle, &engine.tracker, &engine.units[slot])
        else {
            continue;
        };
        let inst = entry.inst;

        let effect = execute(&inst, &engine.state)?;
        let completes_at = engine.units[slot].dispatch(inst.id, inst.elements(), cycle);
        engine.tracker.reserve(&inst, completes_at);

        engine.stats.dispatched[slot] += 1;
        if inst.uses_vl && inst.class != UnitClass::Scalar {
            engine.stats.vector_elements += inst.vl as u64;
        }
        trace!(
            cycle,
            id = inst.id,
            op = %inst.opcode,
            waited = cycle - entry.enqueued_at,
            completes_at,
            "dispatch"
        );

        engine.in_flight.push(InFlightOp {
            inst,
            completes_at,
            effect,
        });
    }
    Ok(())
}
