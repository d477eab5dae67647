//! Word-addressed Data Memories.
//!
//! This module implements the scalar and vector data memories. It provides:
//! 1. **Storage:** A flat array of `2^address_bits` signed 32-bit words.
//! 2. **Initialization:** Initial contents from a word image, zero-filling the unfilled tail.
//! 3. **Bounds Checking:** Every read and write is checked; an out-of-range address is fatal.
//!
//! No timing lives here. Access latency is modeled by the load-store unit pipeline.

use std::fmt;

use crate::common::{Resource, SimError, SimResult};

/// Which data memory an instance models.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryKind {
    /// Scalar data memory (`SDMEM`).
    Scalar,
    /// Vector data memory (`VDMEM`).
    Vector,
}

impl MemoryKind {
    const fn resource(self) -> Resource {
        match self {
            Self::Scalar => Resource::ScalarMemory,
            Self::Vector => Resource::VectorMemory,
        }
    }
}

impl fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.write_str("SDMEM"),
            Self::Vector => f.write_str("VDMEM"),
        }
    }
}

/// A word-addressed data memory.
#[derive(Clone, PartialEq, Eq)]
pub struct DataMemory {
    kind: MemoryKind,
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates a memory of `2^address_bits` words preloaded with `image`.
    ///
    /// # Arguments
    ///
    /// * `kind` - Scalar or vector memory.
    /// * `address_bits` - Address width; the memory holds `2^address_bits` words.
    /// * `image` - Initial contents from address 0. The rest of memory is zero.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] if `image` is larger than the memory.
    pub fn new(kind: MemoryKind, address_bits: u32, image: &[i32]) -> SimResult<Self> {
        let size = 1_usize << address_bits;
        if image.len() > size {
            return Err(SimError::out_of_range(
                kind.resource(),
                image.len() as i64 - 1,
                size,
            ));
        }
        let mut words = vec![0; size];
        words[..image.len()].copy_from_slice(image);
        Ok(Self { kind, words })
    }

    /// Scalar or vector.
    #[inline]
    pub const fn kind(&self) -> MemoryKind {
        self.kind
    }

    /// Number of words.
    #[inline]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] unless `0 <= addr < size`.
    pub fn read(&self, addr: i64) -> SimResult<i32> {
        let idx = self.index(addr)?;
        Ok(self.words[idx])
    }

    /// Writes `val` at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] unless `0 <= addr < size`.
    pub fn write(&mut self, addr: i64, val: i32) -> SimResult<()> {
        let idx = self.index(addr)?;
        self.words[idx] = val;
        Ok(())
    }

    /// Whole memory contents, address 0 first.
    #[inline]
    pub fn words(&self) -> &[i32] {
        &self.words
    }

    fn index(&self, addr: i64) -> SimResult<usize> {
        match usize::try_from(addr) {
            Ok(idx) if idx < self.words.len() => Ok(idx),
            _ => Err(SimError::out_of_range(
                self.kind.resource(),
                addr,
                self.words.len(),
            )),
        }
    }
}

impl fmt::Debug for DataMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataMemory")
            .field("kind", &self.kind)
            .field("size", &self.words.len())
            .finish_non_exhaustive()
    }
}
