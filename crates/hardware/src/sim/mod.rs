//! Simulation driver.
//!
//! Wires a validated [`Config`](crate::config::Config), a program and the initial
//! memory images into a [`PipelineEngine`](crate::core::PipelineEngine), runs it to
//! completion and packages the final state for the reporting collaborator.

/// Top-level simulator and final report.
pub mod simulator;

pub use simulator::{SimulationReport, Simulator};
