//! The `pathfind` demo: a random obstacle grid, an A* search across it,
//! and a terminal reveal of the path one cell per tick.

pub mod config;
pub mod error;
pub mod render;
pub mod scenario;

use std::io::Write;
use std::thread;

use crossterm::{cursor, queue, terminal};
use gridstar_paths::{Path, PathError, PathFinder, RevealStep};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use config::{Args, DemoConfig};
pub use error::DemoError;
pub use scenario::Scenario;

/// Generate the configured scenario, search it and draw the result to
/// `out`.
///
/// Returns the path, or `None` when the end is unreachable (which is
/// reported, not treated as an error).
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<Option<Path>, DemoError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scenario = Scenario::generate(config, &mut rng)?;

    let mut finder = PathFinder::new();
    let path = match scenario.solve(&mut finder) {
        Ok(path) => path,
        Err(PathError::PathNotFound { start, end }) => {
            log::warn!("no path from {start} to {end}");
            render::draw(out, &scenario.grid, &[])?;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let stats = finder.last_stats();
    log::info!(
        "path of {} cells, cost {} ({} cells expanded)",
        path.len(),
        path.cost(),
        stats.expanded
    );

    let mut shown: Vec<RevealStep> = Vec::with_capacity(path.len());
    if config.animate {
        for step in path.reveal() {
            thread::sleep(config.tick());
            shown.push(step);
            queue!(
                out,
                cursor::MoveTo(0, 0),
                terminal::Clear(terminal::ClearType::All)
            )?;
            render::draw(out, &scenario.grid, &shown)?;
        }
    } else {
        shown.extend(path.reveal());
        render::draw(out, &scenario.grid, &shown)?;
    }
    Ok(Some(path))
}
