//! Cycle-level pipeline engine.
//!
//! The engine owns every issue queue, functional-unit pipeline and in-flight
//! operation, plus the architectural state they act on. Each call to
//! [`PipelineEngine::step`] simulates exactly one cycle in this order:
//!
//! 1. **Retire:** Operations whose completion cycle has arrived write back in program order
//!    and release their registers.
//! 2. **Fetch/Decode/Issue:** While running, one instruction line is fetched, decoded and either
//!    enqueued, resolved (branches), or turned into the drain request (`HALT`). A full queue
//!    or a register conflict stalls fetch for the cycle.
//! 3. **Dispatch:** Ready queue heads start on free units, oldest instruction first.
//! 4. **Halt Check:** A draining engine halts once no queue holds an entry and nothing is in flight.
//!
//! Retirement precedes issue, so a register freed by a writeback is visible to the
//! hazard checks of the same cycle.

use std::fmt;

use tracing::{debug, info};

use crate::common::{SimResult, StallReason};
use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::hazards::HazardTracker;
use crate::core::pipeline::issue_queue::IssueQueue;
use crate::core::pipeline::latches::{InFlightOp, InstId};
use crate::core::pipeline::stages::{dispatch_stage, fetch_stage, retire_stage};
use crate::core::units::FunctionalUnitPipeline;
use crate::isa::{InstructionStore, UnitClass};
use crate::stats::SimStats;

/// Run state of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Fetching and issuing.
    Running,
    /// `HALT` fetched; waiting for queued and in-flight work to finish.
    Draining,
    /// Terminal.
    Halted,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Running => "RUNNING",
            Self::Draining => "DRAINING",
            Self::Halted => "HALTED",
        };
        f.write_str(name)
    }
}

/// The vector core's timing engine.
#[derive(Debug)]
pub struct PipelineEngine {
    pub(crate) cycle: u64,
    pub(crate) pc: usize,
    pub(crate) run_state: EngineState,
    pub(crate) next_id: InstId,
    pub(crate) program: InstructionStore,
    pub(crate) state: ArchState,
    pub(crate) tracker: HazardTracker,
    pub(crate) queues: Vec<IssueQueue>,
    pub(crate) units: Vec<FunctionalUnitPipeline>,
    pub(crate) in_flight: Vec<InFlightOp>,
    pub(crate) stats: SimStats,
    pub(crate) last_stall: Option<StallReason>,
}

impl PipelineEngine {
    /// Creates an engine at cycle 0, line 0, running.
    ///
    /// One issue queue and one functional-unit pipeline is built per unit class
    /// from `config`.
    pub fn new(config: &Config, program: InstructionStore, state: ArchState) -> Self {
        let queues = UnitClass::ALL
            .iter()
            .map(|&class| IssueQueue::new(class, config.unit(class).queue_depth))
            .collect();
        let units = UnitClass::ALL
            .iter()
            .map(|&class| FunctionalUnitPipeline::new(class, *config.unit(class)))
            .collect();

        Self {
            cycle: 0,
            pc: 0,
            run_state: EngineState::Running,
            next_id: 0,
            program,
            state,
            tracker: HazardTracker::new(),
            queues,
            units,
            in_flight: Vec::new(),
            stats: SimStats::default(),
            last_stall: None,
        }
    }

    /// Simulates one cycle and returns the run state after it.
    ///
    /// Stepping a halted engine does nothing.
    ///
    /// # Errors
    ///
    /// Any fatal [`SimError`](crate::common::SimError) raised by fetch, execute or
    /// writeback. The engine must not be stepped again after an error.
    pub fn step(&mut self) -> SimResult<EngineState> {
        if self.run_state == EngineState::Halted {
            return Ok(self.run_state);
        }

        retire_stage(self)?;

        self.last_stall = None;
        match self.run_state {
            EngineState::Running => fetch_stage(self)?,
            EngineState::Draining => self.stats.drain_cycles += 1,
            EngineState::Halted => {}
        }

        dispatch_stage(self)?;

        for unit in &self.units {
            if !unit.is_idle() {
                self.stats.unit_busy[unit.class().index()] += 1;
            }
        }

        if self.run_state == EngineState::Draining && self.is_drained() {
            self.run_state = EngineState::Halted;
            debug!(cycle = self.cycle, "pipeline drained");
        }

        self.cycle += 1;
        self.sync_stats();
        if self.run_state == EngineState::Halted {
            self.stats.log_summary();
        }
        Ok(self.run_state)
    }

    /// Steps until halted and returns the total cycle count.
    ///
    /// # Errors
    ///
    /// The first fatal error raised by [`step`](Self::step).
    pub fn run(&mut self) -> SimResult<u64> {
        info!(lines = self.program.len(), "simulation start");
        while self.step()? != EngineState::Halted {}
        Ok(self.cycle)
    }

    /// Cycles simulated so far.
    #[inline]
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Line index of the next fetch.
    #[inline]
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Current run state.
    #[inline]
    pub const fn run_state(&self) -> EngineState {
        self.run_state
    }

    /// Architectural registers and memories.
    #[inline]
    pub const fn state(&self) -> &ArchState {
        &self.state
    }

    /// Performance counters.
    #[inline]
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Register hazard bookkeeping.
    #[inline]
    pub const fn tracker(&self) -> &HazardTracker {
        &self.tracker
    }

    /// Issue queue of `class`.
    pub fn queue(&self, class: UnitClass) -> &IssueQueue {
        &self.queues[class.index()]
    }

    /// Functional-unit pipeline of `class`.
    pub fn unit(&self, class: UnitClass) -> &FunctionalUnitPipeline {
        &self.units[class.index()]
    }

    /// Dispatched operations not yet written back.
    pub fn in_flight(&self) -> &[InFlightOp] {
        &self.in_flight
    }

    /// Why fetch stalled in the last simulated cycle, if it did.
    #[inline]
    pub const fn last_stall(&self) -> Option<StallReason> {
        self.last_stall
    }

    /// True when no queue holds an entry and no operation is in flight.
    pub fn is_drained(&self) -> bool {
        self.in_flight.is_empty() && self.queues.iter().all(IssueQueue::is_empty)
    }

    fn sync_stats(&mut self) {
        self.stats.cycles = self.cycle;
        self.stats.stalls_data = self.tracker.data_stalls();
        for class in UnitClass::ALL {
            self.stats.stalls_structural[class.index()] = self.tracker.structural_stalls(class);
        }
    }
}
