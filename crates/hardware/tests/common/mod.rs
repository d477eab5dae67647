
/// Simulation harness.
pub mod harness;
