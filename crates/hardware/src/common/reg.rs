//! Architectural Register Identifiers.
//!
//! The hazard tracker, the decoder and the engine all talk about registers as
//! `(file, index)` pairs. This module provides that identifier and a dense
//! numbering of it so per-register tables can be flat arrays.

use std::fmt;

use super::constants::{SCALAR_REG_COUNT, VECTOR_REG_COUNT};

/// Register file a register belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegFile {
    /// Scalar register file.
    Scalar,
    /// Vector register file.
    Vector,
    /// Vector length register (single entry).
    VectorLength,
    /// Vector mask register (single entry).
    VectorMask,
}

/// A register identified by its file and index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegisterId {
    /// Owning file.
    pub file: RegFile,
    /// Index within the file. Always 0 for the control registers.
    pub index: usize,
}

/// Total number of distinct [`RegisterId`]s, i.e. the length of a dense per-register table.
pub const REGISTER_SLOTS: usize = SCALAR_REG_COUNT + VECTOR_REG_COUNT + 2;

impl RegisterId {
    /// The vector length register.
    pub const VLR: Self = Self {
        file: RegFile::VectorLength,
        index: 0,
    };

    /// The vector mask register.
    pub const VMR: Self = Self {
        file: RegFile::VectorMask,
        index: 0,
    };

    /// Scalar register `SR{index}`.
    #[inline]
    pub const fn scalar(index: usize) -> Self {
        Self {
            file: RegFile::Scalar,
            index,
        }
    }

    /// Vector register `VR{index}`.
    #[inline]
    pub const fn vector(index: usize) -> Self {
        Self {
            file: RegFile::Vector,
            index,
        }
    }

    /// Position of this register in a dense table of [`REGISTER_SLOTS`] entries.
    ///
    /// Indices must already be validated against the file size.
    #[inline]
    pub const fn slot(self) -> usize {
        match self.file {
            RegFile::Scalar => self.index,
            RegFile::Vector => SCALAR_REG_COUNT + self.index,
            RegFile::VectorLength => SCALAR_REG_COUNT + VECTOR_REG_COUNT,
            RegFile::VectorMask => SCALAR_REG_COUNT + VECTOR_REG_COUNT + 1,
        }
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file {
            RegFile::Scalar => write!(f, "SR{}", self.index),
            RegFile::Vector => write!(f, "VR{}", self.index),
            RegFile::VectorLength => f.write_str("VLR"),
            RegFile::VectorMask => f.write_str("VMR"),
        }
    }
}
