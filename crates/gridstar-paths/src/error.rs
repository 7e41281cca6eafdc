use gridstar_core::{GridError, Point};

/// Why a search produced no path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The open set ran dry before the end cell was selected.
    #[error("no path from {start} to {end}")]
    PathNotFound { start: Point, end: Point },
    /// The grid or the requested endpoints are misconfigured.
    #[error(transparent)]
    Grid(#[from] GridError),
}
