//! Simulator: owns the engine and produces the final report.
//!
//! The simulator is the only entry point a front end needs. It accepts the three
//! inputs of a run (configuration, decoded program, memory images), steps the
//! engine until it halts and returns a [`SimulationReport`] snapshot.

use serde::Serialize;

use crate::common::SimResult;
use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::{EngineState, PipelineEngine};
use crate::isa::{Instruction, InstructionStore};
use crate::stats::SimStats;

/// Final machine state and cycle count of a halted run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    /// Total cycles, including stall and drain cycles.
    pub cycles: u64,
    /// `SR0`..`SR7`.
    pub scalar_registers: Vec<i32>,
    /// `VR0`..`VR7`, each of the configured vector length.
    pub vector_registers: Vec<Vec<i32>>,
    /// Final VLR.
    pub vector_length: usize,
    /// Final VMR, one flag per element.
    pub vector_mask: Vec<bool>,
    /// Whole scalar memory.
    pub scalar_memory: Vec<i32>,
    /// Whole vector memory.
    pub vector_memory: Vec<i32>,
    /// Performance counters.
    pub stats: SimStats,
}

impl SimulationReport {
    fn capture(engine: &PipelineEngine) -> Self {
        let state = engine.state();
        Self {
            cycles: engine.cycle(),
            scalar_registers: state.srf.as_slice().to_vec(),
            vector_registers: state.vrf.registers().to_vec(),
            vector_length: state.vcr.length(),
            vector_mask: state.vcr.mask().to_vec(),
            scalar_memory: state.sdm.words().to_vec(),
            vector_memory: state.vdm.words().to_vec(),
            stats: engine.stats().clone(),
        }
    }
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    engine: PipelineEngine,
}

impl Simulator {
    /// Builds a simulator from a program and initial memory images.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`](crate::common::SimError::OutOfRange) if the program exceeds
    /// the instruction store or an image exceeds its memory.
    pub fn new(
        config: &Config,
        program: Vec<Instruction>,
        scalar_image: &[i32],
        vector_image: &[i32],
    ) -> SimResult<Self> {
        let state = ArchState::new(config, scalar_image, vector_image)?;
        Self::with_state(config, program, state)
    }

    /// Builds a simulator around an already prepared architectural state.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`](crate::common::SimError::OutOfRange) if the program exceeds
    /// the instruction store.
    pub fn with_state(config: &Config, program: Vec<Instruction>, state: ArchState) -> SimResult<Self> {
        let store = InstructionStore::new(program)?;
        Ok(Self {
            engine: PipelineEngine::new(config, store, state),
        })
    }

    /// Simulates one cycle.
    ///
    /// # Errors
    ///
    /// Any fatal error raised during the cycle.
    pub fn tick(&mut self) -> SimResult<EngineState> {
        self.engine.step()
    }

    /// Runs to `HALTED` and returns the final report.
    ///
    /// # Errors
    ///
    /// The first fatal error of the run.
    pub fn run(&mut self) -> SimResult<SimulationReport> {
        let _ = self.engine.run()?;
        Ok(self.report())
    }

    /// Snapshot of the current state. Meaningful as a final result once halted.
    pub fn report(&self) -> SimulationReport {
        SimulationReport::capture(&self.engine)
    }

    /// The underlying engine.
    #[inline]
    pub const fn engine(&self) -> &PipelineEngine {
        &self.engine
    }
}
