//! Simulator error definitions.
//!
//! This module defines the fatal error conditions of a simulation run. It provides:
//! 1. **Bounds Faults:** Register, element, memory and instruction-store accesses outside their range.
//! 2. **Configuration Faults:** Missing or unusable configuration parameters, detected at startup.
//! 3. **Program Faults:** Malformed operand lists and integer division by zero.
//!
//! Hazard stalls are not errors. They are reported as
//! [`StallReason`](crate::common::StallReason) and counted in the statistics.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the simulator.
pub type SimResult<T> = Result<T, SimError>;

/// The storage structure an out-of-range access was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Scalar register file index.
    ScalarRegister,
    /// Vector register file index.
    VectorRegister,
    /// Element index inside a vector register.
    VectorElement,
    /// Scalar data memory address.
    ScalarMemory,
    /// Vector data memory address.
    VectorMemory,
    /// Instruction store line index.
    InstructionStore,
    /// Value written to the vector length register.
    VectorLength,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ScalarRegister => "scalar register",
            Self::VectorRegister => "vector register",
            Self::VectorElement => "vector element",
            Self::ScalarMemory => "scalar memory address",
            Self::VectorMemory => "vector memory address",
            Self::InstructionStore => "instruction line",
            Self::VectorLength => "vector length",
        };
        f.write_str(name)
    }
}

/// Fatal simulation errors. Any of these aborts the run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// An index or address fell outside `[0, bound)`.
    #[error("{resource} {index} out of range (bound {bound})")]
    OutOfRange {
        /// Structure being accessed.
        resource: Resource,
        /// Offending index. Signed because scalar registers can produce negative addresses.
        index: i64,
        /// Exclusive upper bound of the structure.
        bound: usize,
    },

    /// A required configuration parameter was not supplied.
    #[error("missing required configuration parameter `{key}`")]
    ConfigurationMissing {
        /// Parameter name as it appears in the configuration mapping.
        key: &'static str,
    },

    /// A configuration parameter was supplied with an unusable value.
    #[error("invalid value {value} for configuration parameter `{key}`: {reason}")]
    ConfigurationInvalid {
        /// Parameter name.
        key: String,
        /// Supplied value.
        value: i64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The parameter mapping itself could not be read, e.g. a key was named twice.
    #[error("unreadable configuration mapping: {reason}")]
    ConfigurationMalformed {
        /// Deserializer message.
        reason: String,
    },

    /// An instruction's operand list does not match its opcode's format.
    #[error("malformed {mnemonic}: expected operands `{expected}`")]
    MalformedInstruction {
        /// Opcode mnemonic.
        mnemonic: &'static str,
        /// Expected operand format, e.g. `V V S`.
        expected: &'static str,
    },

    /// Integer division by zero in an active element.
    #[error("division by zero in instruction at line {line}")]
    DivideByZero {
        /// Instruction-store line of the faulting instruction.
        line: usize,
    },
}

impl SimError {
    /// Builds a [`SimError::OutOfRange`].
    #[inline]
    pub const fn out_of_range(resource: Resource, index: i64, bound: usize) -> Self {
        Self::OutOfRange {
            resource,
            index,
            bound,
        }
    }
}

/// Why the fetch stage could not issue its instruction this cycle.
///
/// Stalls are not errors; they exist to be counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StallReason {
    /// The issue queue of the named unit class is full.
    Structural(crate::isa::UnitClass),
    /// A source, destination or vector-length dependency is still pending.
    DataHazard,
}

impl fmt::Display for StallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural(class) => write!(f, "structural({class})"),
            Self::DataHazard => f.write_str("data-hazard"),
        }
    }
}
