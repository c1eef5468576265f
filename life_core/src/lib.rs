//! Conway's Game of Life on a bounded grid: cell storage, the generation step,
//! the run/pause controller that drives it, and a set of preset patterns.
//!
//! Presentation layers talk to [`SimulationController`] and read cells through
//! [`GridState`]; drivers in [`schedule`] fire its ticks.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod logging;
pub mod patterns;
pub mod schedule;

pub use config::Config;
pub use controller::{RunState, SimulationController, TickOutcome};
pub use error::{LifeError, ParseGridError};
pub use grid::{CellState, Coord, GridState};
pub use patterns::{Pattern, PATTERNS};
pub use schedule::{FramePacer, LocalTicker};
