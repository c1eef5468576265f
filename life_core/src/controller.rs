// controller.rs - Run/pause state machine and generation stepping

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::LifeError;
use crate::grid::{CellState, Coord, GridState};
use crate::patterns::{self, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    AtRest,
    Simulating,
}

impl RunState {
    /// Status text for the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            RunState::AtRest => "AT REST",
            RunState::Simulating => "SIMULATING",
        }
    }
}

/// What a tick callback should do after it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still simulating: schedule the next tick.
    Reschedule,
    /// Back at rest: end the chain.
    Halt,
}

/// Conway's rule for a single cell.
pub fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive, // Survival
        (CellState::Dead, 3) => CellState::Alive,                          // Birth
        _ => CellState::Dead,                                              // Death or stays dead
    }
}

/// Owns the grid and the run state, and mediates every edit against them.
#[derive(Debug, Clone)]
pub struct SimulationController {
    config: Config,
    grid: GridState,
    run_state: RunState,
    generation: u64,
}

impl SimulationController {
    /// Fails only when `config.grid_size` is too large to store.
    pub fn new(config: Config) -> Result<Self, LifeError> {
        let grid = GridState::new(config.grid_size)?;
        Ok(Self {
            config,
            grid,
            run_state: RunState::AtRest,
            generation: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Generations advanced since the board was last cleared or replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Changes the auto-advance period; a running chain picks it up on its next tick.
    pub fn set_tick_period(&mut self, period: Duration) {
        self.config.tick_period = period;
    }

    /// Moves the whole grid one generation forward and returns how many cells flipped.
    ///
    /// Every cell is judged against the grid as it was before the call; the
    /// flips are collected first and only written back once the pass is done.
    pub fn advance(&mut self) -> usize {
        let flips: Vec<(Coord, CellState)> = self
            .grid
            .cells()
            .filter_map(|(coord, state)| {
                let next = next_state(state, self.grid.live_neighbors(coord));
                (next != state).then_some((coord, next))
            })
            .collect();

        for &(coord, next) in &flips {
            let applied = match next {
                CellState::Alive => self.grid.set_alive(coord),
                CellState::Dead => self.grid.set_dead(coord),
            };
            if let Err(err) = applied {
                warn!(%err, "dropping flip");
            }
        }

        self.generation += 1;
        debug!(generation = self.generation, flips = flips.len(), "advanced");
        flips.len()
    }

    /// Starts or stops auto-advance and returns the new state.
    pub fn toggle_run(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::AtRest => RunState::Simulating,
            RunState::Simulating => RunState::AtRest,
        };
        info!(state = self.run_state.label(), generation = self.generation, "run state changed");
        self.run_state
    }

    /// Single step, allowed whether or not the simulation is running.
    pub fn manual_advance(&mut self) {
        self.advance();
    }

    /// One firing of the auto-advance timer.
    pub fn tick(&mut self) -> TickOutcome {
        match self.run_state {
            RunState::Simulating => {
                self.advance();
                TickOutcome::Reschedule
            }
            RunState::AtRest => TickOutcome::Halt,
        }
    }

    fn editable(&self, action: &'static str) -> bool {
        if self.run_state == RunState::Simulating {
            debug!(action, "ignored while simulating");
            return false;
        }
        true
    }

    pub fn clear(&mut self) {
        if !self.editable("clear") {
            return;
        }
        self.grid.clear();
        self.generation = 0;
    }

    /// Pointer edit: flips the cell under the cursor.
    pub fn request_toggle(&mut self, coord: Coord) {
        if !self.editable("toggle") {
            return;
        }
        match self.grid.toggle(coord) {
            Ok(state) => debug!(x = coord.x, y = coord.y, ?state, "cell toggled"),
            Err(err) => warn!(%err, "ignoring toggle"),
        }
    }

    /// Replaces the board with `pattern` placed on the configured anchor.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        if !self.editable("apply_pattern") {
            return;
        }
        self.grid.clear();
        self.generation = 0;

        for placed in pattern.placed(self.config.anchor(), self.grid.size()) {
            match placed {
                Ok(coord) => {
                    if let Err(err) = self.grid.set_alive(coord) {
                        warn!(%err, "skipping pattern cell");
                    }
                }
                Err((x, y)) => debug!(pattern = pattern.name, x, y, "pattern cell off the grid"),
            }
        }
        debug!(pattern = pattern.name, population = self.grid.population(), "pattern applied");
    }

    /// Replaces the board with a pseudo-random soup derived from `seed`.
    pub fn apply_random(&mut self, seed: u64) {
        if !self.editable("apply_random") {
            return;
        }
        self.grid.clear();
        self.generation = 0;

        for coord in patterns::random_soup(self.grid.size(), seed) {
            if let Err(err) = self.grid.set_alive(coord) {
                warn!(%err, "skipping soup cell");
            }
        }
        debug!(seed, population = self.grid.population(), "random soup applied");
    }
}
