// schedule.rs - Drives auto-advance on a fixed period
//
// Both drivers follow the same chain: fire a tick, and only if the controller
// is still simulating, wait one period and fire again. Nothing cancels a
// chain from outside; toggling back to rest makes the next tick end it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::controller::{RunState, SimulationController, TickOutcome};

type Observer = Box<dyn FnMut(&mut SimulationController)>;

/// Self-rescheduling tick task for a single-threaded tokio runtime.
///
/// Every method that may start a chain must run inside a `tokio::task::LocalSet`.
pub struct LocalTicker {
    controller: Rc<RefCell<SimulationController>>,
    observer: Rc<RefCell<Option<Observer>>>,
    chain: RefCell<Option<JoinHandle<u64>>>,
}

impl LocalTicker {
    pub fn new(controller: Rc<RefCell<SimulationController>>) -> Self {
        Self {
            controller,
            observer: Rc::new(RefCell::new(None)),
            chain: RefCell::new(None),
        }
    }

    pub fn controller(&self) -> &Rc<RefCell<SimulationController>> {
        &self.controller
    }

    /// Called after every tick that advanced the grid.
    pub fn on_tick(&self, observer: impl FnMut(&mut SimulationController) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    /// Toggles the run state; entering `Simulating` starts a chain unless one
    /// is still pending from an earlier run, which then simply carries on.
    pub fn toggle_run(&self) -> RunState {
        let state = self.controller.borrow_mut().toggle_run();
        if state == RunState::Simulating && !self.chain_alive() {
            let handle = tokio::task::spawn_local(tick_chain(
                Rc::clone(&self.controller),
                Rc::clone(&self.observer),
            ));
            *self.chain.borrow_mut() = Some(handle);
        }
        state
    }

    pub fn chain_alive(&self) -> bool {
        self.chain
            .borrow()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Waits for the current chain to end and returns how many ticks it advanced.
    pub async fn join(&self) -> u64 {
        let handle = self.chain.borrow_mut().take();
        match handle {
            Some(handle) => handle.await.unwrap_or_else(|err| {
                warn!(%err, "tick chain failed");
                0
            }),
            None => 0,
        }
    }
}

async fn tick_chain(
    controller: Rc<RefCell<SimulationController>>,
    observer: Rc<RefCell<Option<Observer>>>,
) -> u64 {
    let mut ticks = 0;
    loop {
        let outcome = controller.borrow_mut().tick();
        if outcome == TickOutcome::Halt {
            break;
        }
        ticks += 1;
        if let Some(observer) = observer.borrow_mut().as_mut() {
            observer(&mut *controller.borrow_mut());
        }
        // Next tick is only scheduled once this one is done, so they never queue up.
        let period = controller.borrow().config().tick_period;
        tokio::time::sleep(period).await;
    }
    debug!(ticks, "tick chain ended");
    ticks
}

/// Tick driver for immediate-mode UIs that repaint every frame.
#[derive(Debug, Default)]
pub struct FramePacer {
    last_tick: Option<Instant>,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame. Fires a tick when a period has passed since the
    /// previous one (or right away on the first frame of a run) and returns
    /// whether the grid advanced.
    pub fn poll(&mut self, controller: &mut SimulationController, now: Instant) -> bool {
        if controller.run_state() != RunState::Simulating {
            self.last_tick = None;
            return false;
        }
        if let Some(last) = self.last_tick {
            if now.saturating_duration_since(last) < controller.config().tick_period {
                return false;
            }
        }
        match controller.tick() {
            TickOutcome::Reschedule => {
                self.last_tick = Some(now);
                true
            }
            TickOutcome::Halt => {
                self.last_tick = None;
                false
            }
        }
    }

    /// How long the UI may sleep before the next tick is due, if one is pending.
    pub fn time_until_next(&self, controller: &SimulationController, now: Instant) -> Option<Duration> {
        if controller.run_state() != RunState::Simulating {
            return None;
        }
        let due = match self.last_tick {
            Some(last) => last + controller.config().tick_period,
            None => return Some(Duration::ZERO),
        };
        Some(due.saturating_duration_since(now))
    }
}
