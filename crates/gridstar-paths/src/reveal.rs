//! Pull-based, one-cell-per-tick consumption of a found path.
//!
//! The search itself never suspends. A presentation layer that wants to
//! show a path progressively owns a [`PathReveal`] and calls
//! [`tick`](PathReveal::tick) on its own schedule.

use gridstar_core::Point;

/// One revealed cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStep {
    /// Position in the path, 0 for the start.
    pub index: usize,
    pub pos: Point,
    /// `(index + 1) / len`, reaching 1.0 at the end cell.
    pub progress: f32,
}

/// Hands out the cells of a path front to back, one per tick, never
/// skipping or reordering.
#[derive(Debug, Clone)]
pub struct PathReveal<'a> {
    points: &'a [Point],
    next: usize,
}

impl<'a> PathReveal<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        Self { points, next: 0 }
    }

    /// Reveal the next cell, or `None` once the path is exhausted.
    pub fn tick(&mut self) -> Option<RevealStep> {
        let pos = *self.points.get(self.next)?;
        let index = self.next;
        self.next += 1;
        Some(RevealStep {
            index,
            pos,
            progress: self.next as f32 / self.points.len() as f32,
        })
    }

    /// Cells revealed so far.
    pub fn revealed(&self) -> &'a [Point] {
        &self.points[..self.next]
    }

    pub fn remaining(&self) -> usize {
        self.points.len() - self.next
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }
}

impl Iterator for PathReveal<'_> {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        self.tick()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for PathReveal<'_> {}
