/// Scalar, vector and vector-control registers.
pub mod arch;

/// Hazard tracking, issue queues, engine scenarios and fatal errors.
pub mod pipeline;
