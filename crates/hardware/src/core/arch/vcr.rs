//! Vector Control Registers.
//!
//! The vector length register (VLR) bounds how many elements an instruction
//! processes; the vector mask register (VMR) holds one bit per element and gates
//! which active elements are written.

use crate::common::{Resource, SimError, SimResult};

/// VLR and VMR.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorControl {
    max_length: usize,
    length: usize,
    mask: Vec<bool>,
}

impl VectorControl {
    /// Resets VLR to `max_length` and every mask bit to one.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            length: max_length,
            mask: vec![true; max_length],
        }
    }

    /// Current VLR value.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Maximum vector length (MVL).
    #[inline]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Sets VLR.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`] unless `0 <= value <= MVL`.
    pub fn set_length(&mut self, value: i32) -> SimResult<()> {
        match usize::try_from(value) {
            Ok(len) if len <= self.max_length => {
                self.length = len;
                Ok(())
            }
            _ => Err(SimError::out_of_range(
                Resource::VectorLength,
                i64::from(value),
                self.max_length + 1,
            )),
        }
    }

    /// Mask bits, element 0 first.
    #[inline]
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Replaces the mask. Bits past MVL are dropped, missing bits are cleared.
    pub fn set_mask(&mut self, bits: &[bool]) {
        for (i, bit) in self.mask.iter_mut().enumerate() {
            *bit = bits.get(i).copied().unwrap_or(false);
        }
    }

    /// `CVM`: sets every mask bit to one.
    pub fn clear_mask(&mut self) {
        self.mask.fill(true);
    }

    /// Number of set mask bits among the first `active` elements.
    pub fn popcount(&self, active: usize) -> usize {
        self.mask.iter().take(active).filter(|b| **b).count()
    }
}
