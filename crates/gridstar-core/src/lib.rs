//! **gridstar-core**: the grid side of gridstar pathfinding.
//!
//! This crate provides geometry primitives, the [`Cell`] model with its
//! per-search cost fields, and the fixed-size [`Grid`] that owns cells and
//! answers bounds and adjacency queries. Search algorithms live in
//! `gridstar-paths`.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, Neighbors};
