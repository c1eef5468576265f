// main.rs - Terminal runner: plays a preset for a number of generations

use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use life_core::{logging, patterns, Config, LifeError, LocalTicker, SimulationController};
use tokio::task::LocalSet;
use tracing::{info, warn};

fn pattern_name() -> String {
    env::var("LIFE_PATTERN").unwrap_or_else(|_| "Glider".to_string())
}

fn generations() -> u64 {
    env::var("LIFE_GENERATIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LifeError> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    logging::init_tracing(std::io::stderr);

    let config = Config::from_env();
    let mut controller = SimulationController::new(config)?;

    let name = pattern_name();
    match patterns::find(&name) {
        Some(pattern) => controller.apply_pattern(pattern),
        None => {
            warn!(pattern = %name, "unknown pattern, falling back to Glider");
            controller.apply_pattern(&patterns::GLIDER);
        }
    }
    println!("generation 0, {} alive\n{}\n", controller.population(), controller.grid());

    let target = generations();
    if target == 0 {
        return Ok(());
    }

    let local = LocalSet::new();
    local
        .run_until(async move {
            let ticker = LocalTicker::new(Rc::new(RefCell::new(controller)));
            ticker.on_tick(move |ctl| {
                println!("generation {}, {} alive\n{}\n", ctl.generation(), ctl.population(), ctl.grid());
                if ctl.generation() >= target {
                    ctl.toggle_run();
                }
            });

            ticker.toggle_run();
            let ticks = ticker.join().await;
            info!(ticks, "done");
        })
        .await;
    Ok(())
}
