//! Execution units and functional components.
//!
//! This module contains the datapaths and timing models of the vector core:
//! the word ALU shared by the scalar and vector arithmetic units, the load/store
//! address generator, and the per-class functional-unit pipelines that decide
//! when an operation may start and when it completes.

/// Arithmetic Logic Unit for word operations.
pub mod alu;

/// Functional-unit timing pipelines.
pub mod functional_unit;

/// Load/Store Unit address generation.
pub mod lsu;

pub use self::functional_unit::FunctionalUnitPipeline;
