//! Deadline queue for in-flight connectors.
//!
//! A binary heap ordered by deadline, reversed so the earliest entry
//! pops first. Entries are not removed on cancellation; a popped entry
//! whose descriptor no longer has a pending connector is discarded
//! lazily by the reactor.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::os::fd::RawFd;
use std::time::Instant;

/// One scheduled deadline, keyed by the connector's descriptor.
#[derive(Debug)]
struct Deadline {
    at: Instant,
    fd: RawFd,
}

impl Eq for Deadline {}

impl PartialEq for Deadline {
    fn eq(&self, other: &Self) -> bool {
        self.at.eq(&other.at)
    }
}

impl Ord for Deadline {
    /// Reversed so `BinaryHeap` behaves as a min-heap on the deadline.
    fn cmp(&self, other: &Self) -> Ordering {
        other.at.cmp(&self.at)
    }
}

impl PartialOrd for Deadline {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of connector deadlines.
#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    heap: BinaryHeap<Deadline>,
}

impl TimerQueue {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub(crate) fn insert(&mut self, at: Instant, fd: RawFd) {
        self.heap.push(Deadline { at, fd });
    }

    /// The earliest scheduled deadline, if any.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.heap.peek().map(|d| d.at)
    }

    /// Pop every deadline at or before `now`, in firing order.
    pub(crate) fn pop_expired(&mut self, now: Instant) -> Vec<RawFd> {
        let mut expired = Vec::new();
        while let Some(d) = self.heap.peek() {
            if d.at > now {
                break;
            }
            expired.push(self.heap.pop().map(|d| d.fd).unwrap_or_default());
        }
        expired
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
