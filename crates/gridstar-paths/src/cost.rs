//! Move costs and the search heuristic.

use gridstar_core::Point;

use crate::distance::manhattan;

/// Cost of an axis-aligned step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// Cost of stepping from `from` to the adjacent `to`.
#[inline]
pub fn move_cost(from: Point, to: Point) -> i32 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

/// Estimated remaining cost from `p` to `end`: Manhattan distance scaled
/// by the straight-step cost.
///
/// This can exceed the true octile cost when both axes differ, so a path
/// found with it is not guaranteed to be the cheapest one.
#[inline]
pub fn heuristic(p: Point, end: Point) -> i32 {
    STRAIGHT_COST * manhattan(p, end)
}
