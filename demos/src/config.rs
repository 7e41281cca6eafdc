//! Demo configuration: defaults, an optional JSON file, then CLI overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use gridstar_core::Point;
use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// Everything needed to generate and show one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    /// Chance, in percent, that a cell becomes an obstacle.
    pub obstacle_percent: u32,
    pub start: Point,
    pub end: Point,
    /// RNG seed; a random one is drawn (and logged) when absent.
    pub seed: Option<u64>,
    /// Delay between revealed path cells.
    pub tick_ms: u64,
    /// Reveal the path cell by cell instead of printing the final frame.
    pub animate: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            obstacle_percent: 30,
            start: Point::new(0, 0),
            end: Point::new(19, 19),
            seed: None,
            tick_ms: 300,
            animate: true,
        }
    }
}

impl DemoConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| DemoError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(DemoError::Config(format!(
                "grid size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if self.obstacle_percent > 100 {
            return Err(DemoError::Config(format!(
                "obstacle_percent {} is not within 0..=100",
                self.obstacle_percent
            )));
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Command line arguments for `pathfind`.
#[derive(Parser, Debug)]
#[command(name = "pathfind")]
#[command(about = "Animate an A* path across a randomly obstructed grid")]
#[command(version)]
pub struct Args {
    /// JSON config file; flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<i32>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<i32>,

    /// Chance (0-100) that a cell is an obstacle
    #[arg(short, long)]
    pub obstacle_percent: Option<u32>,

    /// Start cell as `x,y`; clamped into the grid if outside
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub start: Option<Point>,

    /// End cell as `x,y`; clamped into the grid if outside
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub end: Option<Point>,

    /// Random seed for obstacle placement
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Milliseconds between revealed path cells
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Print only the final frame
    #[arg(long)]
    pub no_animate: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Merge defaults, the config file (if any) and command line flags.
    pub fn resolve(&self) -> Result<DemoConfig, DemoError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(pct) = self.obstacle_percent {
            config.obstacle_percent = pct;
        }
        if let Some(p) = self.start {
            config.start = p;
        }
        if let Some(p) = self.end {
            config.end = p;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(ms) = self.tick_ms {
            config.tick_ms = ms;
        }
        if self.no_animate {
            config.animate = false;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parse `x,y` into a [`Point`].
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point::new(x, y))
}
