// config.rs - Runtime configuration for the simulator

use std::{env, time::Duration};

use crate::grid::{Coord, MAX_GRID_SIZE};

pub const DEFAULT_GRID_SIZE: usize = 50;      // Cells per side
pub const DEFAULT_CANVAS_SIZE: f32 = 740.0;   // Canvas side in pixels
pub const DEFAULT_TICK_MS: u64 = 150;         // Auto-advance period

/// Process-wide settings, built once and handed to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Side length N of the square grid.
    pub grid_size: usize,
    /// Side length of the drawing canvas in pixels.
    pub canvas_size: f32,
    /// Delay between the end of one auto-advance and the next.
    pub tick_period: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            canvas_size: DEFAULT_CANVAS_SIZE,
            tick_period: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl Config {
    /// Reads `LIFE_GRID_SIZE`, `LIFE_CANVAS_PX` and `LIFE_TICK_MS`.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            grid_size: grid_size(env::var("LIFE_GRID_SIZE").ok().as_deref()),
            canvas_size: canvas_size(env::var("LIFE_CANVAS_PX").ok().as_deref()),
            tick_period: tick_period(env::var("LIFE_TICK_MS").ok().as_deref()),
        }
    }

    pub fn cell_pixel_size(&self) -> f32 {
        self.canvas_size / self.grid_size as f32
    }

    /// Cell that patterns are anchored on.
    pub fn anchor(&self) -> Coord {
        let a = self.grid_size / 2;
        Coord::new(a, a)
    }

    /// Translates a pointer position (relative to the canvas origin) into a cell.
    /// Positions off the canvas give `None` rather than an out-of-bounds coord.
    pub fn pixel_to_coord(&self, px: f32, py: f32) -> Option<Coord> {
        let unit = self.cell_pixel_size();
        let (x, y) = ((px / unit).floor(), (py / unit).floor());
        let n = self.grid_size as f32;
        if x < 0.0 || y < 0.0 || x >= n || y >= n {
            return None;
        }
        Some(Coord::new(x as usize, y as usize))
    }
}

fn grid_size(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0 && n <= MAX_GRID_SIZE)
        .unwrap_or(DEFAULT_GRID_SIZE)
}

fn canvas_size(raw: Option<&str>) -> f32 {
    raw.and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|px| px.is_finite() && *px > 0.0)
        .unwrap_or(DEFAULT_CANVAS_SIZE)
}

fn tick_period(raw: Option<&str>) -> Duration {
    let millis = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&ms| ms > 0)
        .unwrap_or(DEFAULT_TICK_MS);
    Duration::from_millis(millis)
}
