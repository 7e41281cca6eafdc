//! The open set: discovered cells waiting to be expanded.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::Point;

/// One queued visit of a cell, carrying the cell's priority at push time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OpenEntry {
    pub(crate) pos: Point,
    pub(crate) f: i32,
    pub(crate) h: i32,
    seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops lowest f, then lowest h,
        // then earliest push.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue over `(f, h, insertion order)`.
///
/// A cell whose cost improves while queued is pushed again; the caller
/// drops the outdated entry when it surfaces (its `f` no longer matches
/// the cell, or the cell is already closed).
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl OpenList {
    pub(crate) fn push(&mut self, pos: Point, f: i32, h: i32) {
        self.heap.push(OpenEntry {
            pos,
            f,
            h,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
