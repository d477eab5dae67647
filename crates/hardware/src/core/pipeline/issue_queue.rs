//! Per-class issue queues.
//!
//! A bounded, strictly in-order FIFO sits in front of each functional unit. Fetch
//! enqueues into it; dispatch pops the head only when its operands are ready and the
//! unit can accept it. A full queue refuses the enqueue without side effects, which
//! the caller counts as a structural stall.

use std::collections::VecDeque;

use crate::core::pipeline::hazards::HazardTracker;
use crate::core::pipeline::latches::DecodedInst;
use crate::core::units::FunctionalUnitPipeline;
use crate::isa::UnitClass;

/// An instruction waiting in an issue queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    /// The queued instruction.
    pub inst: DecodedInst,
    /// Cycle it entered the queue.
    pub enqueued_at: u64,
    /// Cycle its operands were expected to be ready when it was enqueued.
    /// `None` if a producer had not yet been dispatched.
    pub operands_ready_at: Option<u64>,
}

/// Bounded FIFO for one functional-unit class.
#[derive(Clone, Debug)]
pub struct IssueQueue {
    class: UnitClass,
    capacity: usize,
    entries: VecDeque<QueueEntry>,
}

impl IssueQueue {
    /// Creates an empty queue holding at most `capacity` entries.
    pub fn new(class: UnitClass, capacity: usize) -> Self {
        Self {
            class,
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Unit class served.
    #[inline]
    pub const fn class(&self) -> UnitClass {
        self.class
    }

    /// Maximum number of entries.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `entry`. Returns `false`, leaving the queue unchanged, when full.
    pub fn enqueue(&mut self, entry: QueueEntry) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push_back(entry);
        true
    }

    /// Pops the head if the tracker reports it issuable at `cycle` and `unit` can
    /// start it. Otherwise the head stays queued.
    pub fn dequeue_if_ready(
        &mut self,
        cycle: u64,
        tracker: &HazardTracker,
        unit: &FunctionalUnitPipeline,
    ) -> Option<QueueEntry> {
        let head = self.entries.front()?;
        if tracker.can_issue(&head.inst, cycle) && unit.is_free(cycle) {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Oldest entry.
    #[inline]
    pub fn head(&self) -> Option<&QueueEntry> {
        self.entries.front()
    }

    /// Entries in program order.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }

    /// Number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when another enqueue would be refused.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}
