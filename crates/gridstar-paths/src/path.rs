use gridstar_core::Point;

use crate::reveal::PathReveal;

/// A found route, ordered from start to end, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: i32) -> Self {
        debug_assert!(!points.is_empty());
        Self { points, cost }
    }

    /// The cells along the path, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Accumulated move cost (the end cell's G).
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// A tick-driven consumer handing out the cells one at a time.
    pub fn reveal(&self) -> PathReveal<'_> {
        PathReveal::new(&self.points)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
