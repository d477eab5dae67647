//! Data Hazard Tracking.
//!
//! This module implements the register dependency bookkeeping of the vector core. It provides:
//! 1. **Pending Writers:** Each register maps to at most one in-flight writer and, once that
//!    writer is dispatched, its completion cycle.
//! 2. **Pending Readers:** Queued instructions that have not yet read their operands, so a
//!    younger writer cannot overwrite a value before it is consumed.
//! 3. **Stall Accounting:** Structural stall counts per unit class and data-hazard stall counts.
//!
//! An instruction claims its destination when it enters an issue queue, publishes its
//! completion cycle when it is dispatched, and releases the register when it retires.
//! Release only clears an entry still owned by the retiring instruction.

use crate::common::{REGISTER_SLOTS, RegisterId};
use crate::core::pipeline::latches::{DecodedInst, InstId};
use crate::isa::UnitClass;

/// Outstanding write to one register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardEntry {
    /// Instruction that will write the register.
    pub writer: InstId,
    /// Writeback cycle, known once the writer is dispatched.
    pub completes_at: Option<u64>,
}

/// Per-register pending-write and pending-read table.
#[derive(Clone, Debug)]
pub struct HazardTracker {
    writers: [Option<HazardEntry>; REGISTER_SLOTS],
    readers: [u32; REGISTER_SLOTS],
    structural: [u64; UnitClass::COUNT],
    data: u64,
}

impl Default for HazardTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HazardTracker {
    /// Creates a tracker with every register free.
    pub const fn new() -> Self {
        Self {
            writers: [None; REGISTER_SLOTS],
            readers: [0; REGISTER_SLOTS],
            structural: [0; UnitClass::COUNT],
            data: 0,
        }
    }

    /// Outstanding writer of `reg`, if any.
    #[inline]
    pub const fn pending_writer(&self, reg: RegisterId) -> Option<HazardEntry> {
        self.writers[reg.slot()]
    }

    /// Queued instructions that still have to read `reg`.
    #[inline]
    pub const fn pending_readers(&self, reg: RegisterId) -> u32 {
        self.readers[reg.slot()]
    }

    /// Whether `inst` may enter its issue queue.
    ///
    /// Fails if its destination already has a pending writer (write-after-write) or a
    /// pending reader (write-after-read), or if it is vector work and VLR is being written.
    pub fn can_claim(&self, inst: &DecodedInst) -> bool {
        if inst.uses_vl && self.pending_writer(RegisterId::VLR).is_some() {
            return false;
        }
        inst.dest.is_none_or(|reg| {
            self.pending_writer(reg).is_none() && self.pending_readers(reg) == 0
        })
    }

    /// Records `inst` as the pending writer of its destination and a pending reader of
    /// its sources. Call only after [`can_claim`](Self::can_claim) succeeded.
    pub fn claim(&mut self, inst: &DecodedInst) {
        if let Some(reg) = inst.dest {
            self.writers[reg.slot()] = Some(HazardEntry {
                writer: inst.id,
                completes_at: None,
            });
        }
        for reg in inst.sources.as_slice() {
            self.readers[reg.slot()] += 1;
        }
    }

    /// Whether `inst` may be dispatched at `cycle`.
    ///
    /// Every source must be free of a writer other than `inst` itself that has not
    /// completed by `cycle`, and no other instruction may hold its destination.
    pub fn can_issue(&self, inst: &DecodedInst, cycle: u64) -> bool {
        let sources_ready = inst.sources.as_slice().iter().all(|reg| {
            self.pending_writer(*reg).is_none_or(|entry| {
                entry.writer == inst.id || entry.completes_at.is_some_and(|c| c <= cycle)
            })
        });
        let dest_owned = inst.dest.is_none_or(|reg| {
            self.pending_writer(reg)
                .is_none_or(|entry| entry.writer == inst.id)
        });
        sources_ready && dest_owned
    }

    /// Marks the destination busy until `completion` and drops the pending reads of a
    /// now-dispatched instruction.
    pub fn reserve(&mut self, inst: &DecodedInst, completion: u64) {
        if let Some(reg) = inst.dest {
            self.writers[reg.slot()] = Some(HazardEntry {
                writer: inst.id,
                completes_at: Some(completion),
            });
        }
        for reg in inst.sources.as_slice() {
            let count = &mut self.readers[reg.slot()];
            *count = count.saturating_sub(1);
        }
    }

    /// Clears the destination at retirement, but only if `inst` still owns it.
    pub fn release(&mut self, inst: &DecodedInst) {
        if let Some(reg) = inst.dest {
            let slot = &mut self.writers[reg.slot()];
            if slot.is_some_and(|entry| entry.writer == inst.id) {
                *slot = None;
            }
        }
    }

    /// Cycle at which every source of `inst` is expected to be available.
    ///
    /// `None` while some producer has not been dispatched yet.
    pub fn operand_ready_cycle(&self, inst: &DecodedInst, cycle: u64) -> Option<u64> {
        inst.sources
            .as_slice()
            .iter()
            .filter_map(|reg| self.pending_writer(*reg))
            .filter(|entry| entry.writer != inst.id)
            .try_fold(cycle, |ready, entry| entry.completes_at.map(|c| ready.max(c)))
    }

    /// Counts one structural stall cycle against `class`.
    pub const fn note_structural(&mut self, class: UnitClass) {
        self.structural[class.index()] += 1;
    }

    /// Counts one data-hazard stall cycle.
    pub const fn note_data_hazard(&mut self) {
        self.data += 1;
    }

    /// Structural stall cycles charged to `class`.
    #[inline]
    pub const fn structural_stalls(&self, class: UnitClass) -> u64 {
        self.structural[class.index()]
    }

    /// Data-hazard stall cycles.
    #[inline]
    pub const fn data_stalls(&self) -> u64 {
        self.data
    }

    /// True when no register has a pending writer or reader.
    pub fn is_quiescent(&self) -> bool {
        self.writers.iter().all(Option::is_none) && self.readers.iter().all(|r| *r == 0)
    }
}
