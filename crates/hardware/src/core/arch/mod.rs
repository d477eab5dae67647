//! Architectural state of the vector core.
//!
//! This module contains everything a program can observe once the run ends:
//! 1. **SRF:** The eight scalar registers.
//! 2. **VRF:** The eight vector registers.
//! 3. **Vector Control:** The vector length (VLR) and vector mask (VMR) registers.
//! 4. **Data Memories:** Scalar and vector memory, owned here so writeback can reach them.

/// Scalar register file.
pub mod srf;

/// Vector length and mask registers.
pub mod vcr;

/// Vector register file.
pub mod vrf;

use crate::common::SimResult;
use crate::config::Config;
use crate::soc::{DataMemory, MemoryKind};

pub use self::srf::ScalarRegisterFile;
pub use self::vcr::VectorControl;
pub use self::vrf::VectorRegisterFile;

/// Registers and memories of one simulated machine.
///
/// Fields are public so a caller can preload registers before the run and read
/// the final state afterwards.
#[derive(Clone, Debug)]
pub struct ArchState {
    /// Scalar registers.
    pub srf: ScalarRegisterFile,
    /// Vector registers.
    pub vrf: VectorRegisterFile,
    /// VLR and VMR.
    pub vcr: VectorControl,
    /// Scalar data memory.
    pub sdm: DataMemory,
    /// Vector data memory.
    pub vdm: DataMemory,
}

impl ArchState {
    /// Builds a reset machine with the given memory images.
    ///
    /// Registers start at zero, VLR at the configured vector length and VMR at all ones.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfRange`](crate::common::SimError::OutOfRange) if an image is
    /// larger than its memory.
    pub fn new(config: &Config, sdm_image: &[i32], vdm_image: &[i32]) -> SimResult<Self> {
        Ok(Self {
            srf: ScalarRegisterFile::new(),
            vrf: VectorRegisterFile::new(config.vector_length),
            vcr: VectorControl::new(config.vector_length),
            sdm: DataMemory::new(MemoryKind::Scalar, config.scalar_memory_bits, sdm_image)?,
            vdm: DataMemory::new(MemoryKind::Vector, config.vector_memory_bits, vdm_image)?,
        })
    }
}
