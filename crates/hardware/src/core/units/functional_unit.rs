//! Functional-Unit Pipelines.
//!
//! One pipeline exists per unit class. Each models:
//! 1. **Latency:** `issue_latency + ceil(elements / lanes) * per_element_latency`, at least one cycle.
//! 2. **Throughput:** A pipelined unit accepts one new operation per cycle while fewer than
//!    `lanes` operations are in flight; a non-pipelined unit holds a single operation for
//!    its whole duration.
//! 3. **In-Order Completion:** An operation never completes before one dispatched earlier to
//!    the same unit.

use tracing::trace;

use crate::config::UnitConfig;
use crate::core::pipeline::latches::InstId;
use crate::isa::UnitClass;

/// An occupied slot: the operation and the cycle its result is written back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    inst: InstId,
    busy_until: u64,
}

/// Timing model of one functional unit.
#[derive(Clone, Debug)]
pub struct FunctionalUnitPipeline {
    class: UnitClass,
    config: UnitConfig,
    slots: Vec<Slot>,
    next_free: u64,
    last_completion: u64,
}

impl FunctionalUnitPipeline {
    /// Creates an idle unit.
    pub fn new(class: UnitClass, config: UnitConfig) -> Self {
        Self {
            class,
            config,
            slots: Vec::with_capacity(config.lanes.max(1)),
            next_free: 0,
            last_completion: 0,
        }
    }

    /// Unit class served.
    #[inline]
    pub const fn class(&self) -> UnitClass {
        self.class
    }

    /// Timing parameters.
    #[inline]
    pub const fn config(&self) -> &UnitConfig {
        &self.config
    }

    /// Cycles from dispatch to writeback for an operation over `elements` elements.
    pub const fn latency(&self, elements: usize) -> u64 {
        let lanes = if self.config.lanes == 0 { 1 } else { self.config.lanes };
        let groups = elements.div_ceil(lanes) as u64;
        let total = self
            .config
            .issue_latency
            .saturating_add(groups.saturating_mul(self.config.per_element_latency));
        if total == 0 { 1 } else { total }
    }

    /// Operations still occupying the unit at `cycle`.
    pub fn in_flight(&self, cycle: u64) -> usize {
        self.slots.iter().filter(|s| s.busy_until > cycle).count()
    }

    /// Whether a new operation may start at `cycle`.
    pub fn is_free(&self, cycle: u64) -> bool {
        let capacity = if self.config.pipelined {
            self.config.lanes.max(1)
        } else {
            1
        };
        cycle >= self.next_free && self.slots.len() < capacity && self.in_flight(cycle) < capacity
    }

    /// Starts `inst` at `cycle` and returns its completion cycle.
    ///
    /// The caller must have checked [`is_free`](Self::is_free).
    pub fn dispatch(&mut self, inst: InstId, elements: usize, cycle: u64) -> u64 {
        let completion = cycle
            .saturating_add(self.latency(elements))
            .max(self.last_completion);
        self.slots.push(Slot {
            inst,
            busy_until: completion,
        });
        self.next_free = if self.config.pipelined {
            cycle.saturating_add(1)
        } else {
            completion
        };
        self.last_completion = completion;
        trace!(
            unit = %self.class,
            inst,
            elements,
            cycle,
            completion,
            "unit dispatch"
        );
        completion
    }

    /// Frees the slot held by `inst`.
    pub fn retire(&mut self, inst: InstId) {
        self.slots.retain(|s| s.inst != inst);
    }

    /// True when no operation occupies the unit.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.slots.is_empty()
    }
}
