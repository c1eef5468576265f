// ui.rs - Canvas, controls and status for the simulator

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_core::{patterns, RunState};

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.pacer.poll(&mut self.controller, now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("Next").clicked() {
                    self.controller.manual_advance();
                }

                let button_text = match self.controller.run_state() {
                    RunState::AtRest => "▶ Start",
                    RunState::Simulating => "⏸ Stop",
                };
                if ui.button(button_text).clicked() {
                    self.controller.toggle_run();
                }

                if ui.button("⏹ Reset").clicked() {
                    self.controller.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.random_seed = self.random_seed.wrapping_add(1);
                    self.controller.apply_random(self.random_seed);
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
                        self.controller.apply_pattern(pattern);
                    }
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.controller.config().tick_period.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.controller
                        .set_tick_period(Duration::from_millis((1000.0 / speed) as u64));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                let status = egui::RichText::new(self.controller.run_state().label())
                    .strong()
                    .color(Color32::WHITE)
                    .background_color(Color32::from_rgb(200, 0, 0));
                ui.label(status);
                ui.label(format!("Generation: {}", self.controller.generation()));
                ui.label(format!("Live cells: {}", self.controller.population()));
            });

            ui.separator();

            // Draw the grid
            let config = self.controller.config().clone();
            let unit = config.cell_pixel_size();
            let total_size = Vec2::splat(config.canvas_size);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            for (coord, state) in self.controller.grid().cells() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(coord.x as f32 * unit, coord.y as f32 * unit),
                    Vec2::splat(unit),
                );
                if state.is_alive() {
                    painter.rect_filled(rect, 0.0, self.live_color);
                }
                painter.rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::from_gray(60)));
            }

            // Editing is the controller's call; it ignores clicks while simulating.
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - origin;
                    if let Some(coord) = config.pixel_to_coord(local.x, local.y) {
                        self.controller.request_toggle(coord);
                    }
                }
            }
        });

        if let Some(wait) = self.pacer.time_until_next(&self.controller, Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
