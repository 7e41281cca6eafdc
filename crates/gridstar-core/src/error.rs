//! Errors raised while building or configuring a [`Grid`](crate::Grid).

use crate::cell::CellKind;
use crate::geom::Point;

/// Errors that can occur when building, editing or validating a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height is zero or negative.
    #[error("grid size {width}x{height} must be positive")]
    InvalidSize { width: i32, height: i32 },
    /// A coordinate lies outside `[0, width) x [0, height)`.
    #[error("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds { pos: Point, width: i32, height: i32 },
    /// No cell carries the given endpoint kind.
    #[error("grid has no {0} cell")]
    MissingEndpoint(CellKind),
    /// More than one cell carries the given endpoint kind.
    #[error("grid has {count} {kind} cells, expected exactly one")]
    DuplicateEndpoint { kind: CellKind, count: usize },
    /// The endpoint marker sits somewhere other than the requested cell.
    #[error("{kind} cell is at {found}, but the search asked for {expected}")]
    EndpointMismatch {
        kind: CellKind,
        expected: Point,
        found: Point,
    },
    /// Raw cell storage does not hold one cell per grid point in
    /// row-major order.
    #[error("cell storage of {cells} cells does not match the {width}x{height} grid")]
    CellLayout {
        width: i32,
        height: i32,
        cells: usize,
    },
    /// Rows of a text grid have different lengths.
    #[error("text grid row {row} has {found} cells, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A text grid contains a character with no cell kind.
    #[error("text grid contains invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}
