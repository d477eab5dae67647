//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the vector core. It provides:
//! 1. **Cycles and CPI:** Total cycles, retired instructions, and derived metrics.
//! 2. **Instruction flow:** Fetched, issued and retired counts, plus branch outcomes.
//! 3. **Per-unit activity:** Dispatches and busy cycles for each functional-unit class.
//! 4. **Stalls:** Structural stalls per class, data-hazard stalls and drain cycles.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::isa::UnitClass;

/// Performance counters of one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulated cycles.
    pub cycles: u64,
    /// Instruction lines consumed by fetch (unit ops, branches and `HALT`).
    pub instructions_fetched: u64,
    /// Instructions placed into an issue queue.
    pub instructions_issued: u64,
    /// Instructions written back by a functional unit.
    pub instructions_retired: u64,

    /// Conditional branches resolved.
    pub branches: u64,
    /// Conditional branches taken.
    pub branches_taken: u64,

    /// Dispatches per unit class, indexed by [`UnitClass::index`].
    pub dispatched: [u64; UnitClass::COUNT],
    /// Cycles each unit had at least one operation in flight.
    pub unit_busy: [u64; UnitClass::COUNT],
    /// Vector elements processed by the vector units.
    pub vector_elements: u64,

    /// Fetch stall cycles caused by a full issue queue, per class.
    pub stalls_structural: [u64; UnitClass::COUNT],
    /// Fetch stall cycles caused by register dependencies.
    pub stalls_data: u64,
    /// Cycles spent waiting for in-flight work after `HALT`.
    pub drain_cycles: u64,
}

impl SimStats {
    /// Cycles per retired instruction. Zero before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Retired instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Total structural stall cycles across all classes.
    pub fn total_structural_stalls(&self) -> u64 {
        self.stalls_structural.iter().sum()
    }

    /// Utilization of `class`: busy cycles over total cycles.
    pub fn utilization(&self, class: UnitClass) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.unit_busy[class.index()] as f64 / self.cycles as f64
        }
    }

    /// Emits the headline numbers at `info` level.
    pub fn log_summary(&self) {
        info!(
            cycles = self.cycles,
            retired = self.instructions_retired,
            cpi = self.cpi(),
            structural_stalls = self.total_structural_stalls(),
            data_stalls = self.stalls_data,
            "simulation halted"
        );
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "VECTOR CORE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(f, "fetched                  {}", self.instructions_fetched)?;
        writeln!(f, "issued                   {}", self.instructions_issued)?;
        writeln!(
            f,
            "branches                 {} ({} taken)",
            self.branches, self.branches_taken
        )?;
        writeln!(f, "vector_elements          {}", self.vector_elements)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "FUNCTIONAL UNITS")?;
        for class in UnitClass::ALL {
            let i = class.index();
            writeln!(
                f,
                "  {:<8} dispatched {:>8}  busy {:>8} ({:>5.1}%)  stalls {:>6}",
                class.to_string(),
                self.dispatched[i],
                self.unit_busy[i],
                self.utilization(class) * 100.0,
                self.stalls_structural[i]
            )?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "stalls_data              {}", self.stalls_data)?;
        writeln!(f, "stalls_structural        {}", self.total_structural_stalls())?;
        write!(f, "drain_cycles             {}", self.drain_cycles)
    }
}
