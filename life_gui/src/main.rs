// main.rs - Interactive Conway's Game of Life (egui front end)

use eframe::egui;
use egui::Color32;
use life_core::{logging, Config, FramePacer, SimulationController};

mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    logging::init_tracing(std::io::stdout);

    let config = Config::from_env();
    tracing::info!(
        grid_size = config.grid_size,
        tick_ms = config.tick_period.as_millis() as u64,
        "starting"
    );

    let side = config.canvas_size;
    let controller = SimulationController::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 40.0, side + 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life (click to kill and revive)",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(controller))),
    )?;
    Ok(())
}

/// Presentation state around the simulation core.
pub struct LifeApp {
    pub controller: SimulationController,
    pub pacer: FramePacer,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub random_seed: u64,
}

impl LifeApp {
    pub fn new(controller: SimulationController) -> Self {
        Self {
            controller,
            pacer: FramePacer::new(),
            live_color: Color32::from_rgb(0, 128, 0),
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            random_seed: 0,
        }
    }
}
