//! A* pathfinding over 8-connected grids.
//!
//! [`PathFinder::search`] (or the one-shot [`find_path`]) runs A* over a
//! [`gridstar_core::Grid`] with straight steps costing
//! [`STRAIGHT_COST`] and diagonal steps [`DIAGONAL_COST`], guided by a
//! Manhattan heuristic. The result is a [`Path`] from start to end, or
//! [`PathError::PathNotFound`] when the end cannot be reached.
//!
//! Among cells of equal F the open list prefers the lower H, then the cell
//! queued first, so a given grid always yields the same path.
//!
//! A found path can be consumed progressively through [`PathReveal`], one
//! cell per tick of whatever clock the caller runs.

mod astar;
mod cost;
mod distance;
mod error;
mod open;
mod path;
mod reveal;

pub use astar::{PathFinder, SearchStats, find_path};
pub use cost::{DIAGONAL_COST, STRAIGHT_COST, heuristic, move_cost};
pub use distance::{chebyshev, manhattan, octile};
pub use error::PathError;
pub use path::Path;
pub use reveal::{PathReveal, RevealStep};
