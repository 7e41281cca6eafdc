//! Random scenario generation.

use gridstar_core::{CellKind, Grid, Point};
use gridstar_paths::{Path, PathError, PathFinder};
use rand::Rng;

use crate::config::DemoConfig;
use crate::error::DemoError;

/// A generated grid with its endpoints already placed.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
}

impl Scenario {
    /// Roll obstacles cell by cell, then place the configured endpoints.
    ///
    /// A cell becomes an obstacle when a roll in `1..=100` is at most
    /// `obstacle_percent`. Endpoints outside the grid are clamped to the
    /// nearest in-bounds cell with a warning. An endpoint placed on an
    /// obstacle replaces it.
    pub fn generate(config: &DemoConfig, rng: &mut impl Rng) -> Result<Self, DemoError> {
        config.validate()?;
        let mut grid = Grid::from_fn(config.width, config.height, |_| {
            rng.random_range(1..=100u32) <= config.obstacle_percent
        })?;
        let start = clamp_endpoint(&grid, CellKind::Start, config.start);
        let end = clamp_endpoint(&grid, CellKind::End, config.end);
        grid.place_endpoints(start, end)?;
        log::debug!(
            "generated {}x{} grid with {} obstacles",
            grid.width(),
            grid.height(),
            grid.count(CellKind::Obstacle)
        );
        Ok(Self { grid, start, end })
    }

    pub fn solve(&mut self, finder: &mut PathFinder) -> Result<Path, PathError> {
        finder.search(&mut self.grid, self.start, self.end)
    }
}

fn clamp_endpoint(grid: &Grid, kind: CellKind, p: Point) -> Point {
    if grid.contains(p) {
        return p;
    }
    let clamped = grid.bounds().clamp(p).unwrap_or(Point::ZERO);
    log::warn!(
        "{kind} {p} is outside the {}x{} grid, using {clamped}",
        grid.width(),
        grid.height()
    );
    clamped
}
