//! A fixed-size 2D grid of [`Cell`]s.
//!
//! The grid owns cell storage and answers bounds, kind and adjacency
//! queries. It knows nothing about how a search uses the per-cell state.

use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, CellKind};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Offsets of the 8-neighbourhood in row-major order.
const NEIGHBOR_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// A `width x height` array of cells with origin at (0, 0).
///
/// Every in-bounds point maps to exactly one cell, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    bounds: Range,
    cells: Vec<Cell>,
}

/// Unchecked serialized shape of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    bounds: Range,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        Self::from_parts(repr.bounds, repr.cells)
    }
}

impl Grid {
    /// Create a grid of `Normal` cells.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| false)
    }

    /// Create a grid, marking as `Obstacle` every point for which
    /// `is_obstacle` returns `true`. Points are visited row-major.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut is_obstacle: impl FnMut(Point) -> bool,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        let cells = bounds
            .iter()
            .map(|p| {
                let kind = if is_obstacle(p) {
                    CellKind::Obstacle
                } else {
                    CellKind::Normal
                };
                Cell::new(p).with_kind(kind)
            })
            .collect();
        Ok(Self { bounds, cells })
    }

    /// Create a grid with an explicit obstacle list.
    ///
    /// Fails with [`GridError::OutOfBounds`] if any obstacle lies outside
    /// the grid.
    pub fn with_obstacles(
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for p in obstacles {
            grid.set_kind(p, CellKind::Obstacle)?;
        }
        Ok(grid)
    }

    /// Rebuild a grid from raw storage.
    ///
    /// `bounds` must start at the origin and `cells` must hold exactly one
    /// cell per point of `bounds`, in row-major order.
    pub fn from_parts(bounds: Range, cells: Vec<Cell>) -> Result<Self, GridError> {
        let (width, height) = (bounds.width(), bounds.height());
        if bounds.min != Point::ZERO || width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let layout_ok = cells.len() == bounds.len()
            && cells.iter().zip(bounds.iter()).all(|(c, p)| c.pos() == p);
        if !layout_ok {
            return Err(GridError::CellLayout {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self { bounds, cells })
    }

    /// Parse the text form: one row per line, `.` normal, `#` obstacle,
    /// `S` start, `E` end. Blank lines and surrounding whitespace are
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(width as i32, rows.len() as i32)?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let kind = CellKind::from_glyph(ch).ok_or(GridError::InvalidChar { ch, pos })?;
                grid.set_kind(pos, kind)?;
            }
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Dimensions and indexing
    // -----------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// `Ok(())` if `p` is inside the grid, `OutOfBounds` otherwise.
    pub fn check_bounds(&self, p: Point) -> Result<(), GridError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                pos: p,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).and_then(|i| self.cells.get(i))
    }

    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).and_then(|i| self.cells.get_mut(i))
    }

    /// Kind of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.cell(p).map(|c| c.kind)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Set the kind of the cell at `p`.
    ///
    /// Start/End uniqueness is not enforced here; see
    /// [`validate_endpoints`](Self::validate_endpoints).
    pub fn set_kind(&mut self, p: Point, kind: CellKind) -> Result<(), GridError> {
        self.check_bounds(p)?;
        if let Some(cell) = self.cell_mut(p) {
            cell.kind = kind;
        }
        Ok(())
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }

    /// Positions of the cells of the given kind, row-major.
    ///
    /// Positions come from the storage order, not from the cells.
    pub fn positions(&self, kind: CellKind) -> impl Iterator<Item = Point> + '_ {
        self.bounds
            .iter()
            .zip(&self.cells)
            .filter(move |(_, c)| c.kind == kind)
            .map(|(p, _)| p)
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    /// Mark `start` as Start and `end` as End, demoting any previous
    /// Start/End cells to Normal first.
    ///
    /// Both points are checked before anything changes. When
    /// `start == end` the cell is left as End.
    pub fn place_endpoints(&mut self, start: Point, end: Point) -> Result<(), GridError> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;
        for cell in &mut self.cells {
            if cell.kind.is_endpoint() {
                cell.kind = CellKind::Normal;
            }
        }
        self.set_kind(start, CellKind::Start)?;
        self.set_kind(end, CellKind::End)
    }

    /// Check that the grid's Start/End markers describe a search from
    /// `start` to `end`.
    ///
    /// Exactly one End cell, at `end`, is required. At most one Start cell
    /// may exist and it must be at `start`; it may only be absent when
    /// `start == end`, where the End marker covers both.
    pub fn validate_endpoints(&self, start: Point, end: Point) -> Result<(), GridError> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;
        self.check_endpoint(CellKind::Start, start, start == end)?;
        self.check_endpoint(CellKind::End, end, false)
    }

    fn check_endpoint(
        &self,
        kind: CellKind,
        expected: Point,
        may_be_absent: bool,
    ) -> Result<(), GridError> {
        let found: Vec<Point> = self.positions(kind).collect();
        match found.as_slice() {
            [] if may_be_absent => Ok(()),
            [] => Err(GridError::MissingEndpoint(kind)),
            [p] if *p == expected => Ok(()),
            [p] => Err(GridError::EndpointMismatch {
                kind,
                expected,
                found: *p,
            }),
            _ => Err(GridError::DuplicateEndpoint {
                kind,
                count: found.len(),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Search support
    // -----------------------------------------------------------------------

    /// The in-bounds cells at Chebyshev distance 1 from `p`, in row-major
    /// offset order. Obstacles are included; filtering is up to the caller.
    /// Any `p` is accepted; offsets that would overflow are skipped.
    #[inline]
    pub fn neighbors(&self, p: Point) -> Neighbors {
        Neighbors {
            center: p,
            bounds: self.bounds,
            next: 0,
        }
    }

    /// Clear every cell's search state.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search();
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width() as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.kind.glyph())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Neighbors
// ---------------------------------------------------------------------------

/// Iterator over the in-bounds 8-neighbourhood of a point.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Point,
    bounds: Range,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(&d) = NEIGHBOR_OFFSETS.get(self.next) {
            self.next += 1;
            let (Some(x), Some(y)) = (self.center.x.checked_add(d.x), self.center.y.checked_add(d.y))
            else {
                continue;
            };
            let p = Point::new(x, y);
            if self.bounds.contains(p) {
                return Some(p);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(NEIGHBOR_OFFSETS.len().saturating_sub(self.next)))
    }
}
