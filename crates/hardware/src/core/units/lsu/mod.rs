//! Load/Store Unit (LSU).
//!
//! This module provides address generation for the vector memory family. A
//! vector access touches one word per active, unmasked element; the LSU turns the
//! base register, the stride or offset vector, the active length and the mask into
//! the list of `(element, address)` pairs the access will perform. Bounds are
//! checked later, against the memory itself, when the access retires.

use crate::core::pipeline::signals::AddressMode;

/// Operands of one vector memory access, captured at dispatch.
#[derive(Clone, Copy, Debug)]
pub struct VectorAccess<'a> {
    /// Address generation mode.
    pub mode: AddressMode,
    /// Base address from the scalar source register.
    pub base: i32,
    /// Stride for [`AddressMode::Strided`]; ignored otherwise.
    pub stride: i32,
    /// Offset vector for [`AddressMode::Indexed`]; ignored otherwise.
    pub offsets: &'a [i32],
    /// Active vector length snapshotted at issue.
    pub length: usize,
    /// Mask bits at dispatch.
    pub mask: &'a [bool],
}

/// Load/Store Unit for vector memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Generates the `(element, address)` pairs of a vector access.
    ///
    /// Elements whose mask bit is clear are skipped. Addresses are computed in 64
    /// bits so a wrapping 32-bit sum cannot alias a valid address.
    pub fn element_addresses(access: &VectorAccess<'_>) -> Vec<(usize, i64)> {
        let base = i64::from(access.base);
        (0..access.length)
            .filter(|&i| access.mask.get(i).copied().unwrap_or(false))
            .map(|i| {
                let addr = match access.mode {
                    AddressMode::UnitStride => base + i as i64,
                    AddressMode::Strided => base + i as i64 * i64::from(access.stride),
                    AddressMode::Indexed => {
                        base + access.offsets.get(i).copied().map_or(0, i64::from)
                    }
                };
                (i, addr)
            })
            .collect()
    }

    /// Effective address of a scalar `LS`/`SS`: `base + imm`.
    #[inline]
    pub fn scalar_address(base: i32, imm: i32) -> i64 {
        i64::from(base) + i64::from(imm)
    }
}
