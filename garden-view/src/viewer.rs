//! Interactive flower garden viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! ([`Garden`]) together with the presentation-only sway decorations, and
//! implements [`eframe::App`] to wire pointer input, the color picker, and
//! the clear button to the core.

use eframe::App;
use garden_core::color::{Rgb, palette};
use garden_core::garden::Garden;
use glam::Vec2;
use rand::rng;

use crate::painter::{CanvasPainter, to_color32};
use crate::sway::Sway;

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Handle pointer input on the canvas (begin/continue/end a stroke).
/// 2. Handle the palette swatches and the clear button.
/// 3. Call [`Garden::tick`] with an egui-backed surface and request the
///    next repaint (the animation runs continuously).
///
/// ### Fields
/// - `garden` - The simulation core: flowers, trail, selected color.
/// - `rng` - Random number generator behind all stochastic construction.
/// - `sways` - Presentation-side sway timing, one entry per planted flower.
pub struct Viewer {
    garden: Garden,
    rng: rand::rngs::ThreadRng,
    sways: Vec<Sway>,
}

impl Viewer {
    /// Creates a viewer with an empty garden and the default pink swatch.
    pub fn new() -> Self {
        Self {
            garden: Garden::default(),
            rng: rng(),
            sways: Vec::new(),
        }
    }

    /// Ends the active stroke and registers sway timing for the new flower.
    fn finish_stroke(&mut self) {
        let before = self.garden.flowers.len();
        self.garden.end_drag(&mut self.rng);
        if self.garden.flowers.len() > before {
            self.sways
                .push(Sway::for_nth(self.garden.flowers.len(), &mut self.rng));
        }
    }

    /// Clears the garden along with its presentation-side sway entries.
    fn clear_garden(&mut self) {
        self.garden.clear();
        self.sways.clear();
    }

    /// Helper to draw one color swatch button.
    fn swatch_button(ui: &mut egui::Ui, color: Rgb, selected: bool) -> egui::Response {
        let stroke = if selected {
            egui::Stroke::new(2.0, egui::Color32::WHITE)
        } else {
            egui::Stroke::new(1.0, egui::Color32::TRANSPARENT)
        };

        ui.add(
            egui::Button::new("")
                .fill(to_color32(color, 1.0))
                .stroke(stroke)
                .min_size(egui::vec2(22.0, 22.0)),
        )
    }

    /// Builds the title overlay in the top-left corner.
    fn ui_title_overlay(&self, ctx: &egui::Context) {
        egui::Area::new("title_overlay".into())
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(20.0, 20.0))
            .movable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(60, 60, 50, 180))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.heading("Particle Flower Garden");
                        ui.label("Click and drag to create flowers");
                    });
            });
    }

    /// Builds the bottom controls bar (palette swatches, clear, count).
    fn ui_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear Garden").clicked() {
                    self.clear_garden();
                }

                ui.separator();

                // Right-to-left layout, so feed the swatches reversed to
                // keep the picker in display order.
                for &swatch in palette::ALL.iter().rev() {
                    let selected = self.garden.selected_color == swatch;
                    if Self::swatch_button(ui, swatch, selected).clicked() {
                        self.garden.selected_color = swatch;
                    }
                }

                ui.separator();
                ui.label(format!("flowers = {}", self.garden.flowers.len()));
            });
        });
    }

    /// Builds the central canvas where strokes are drawn and flowers bloom.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response =
                    ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                if let Some(pos) = response.interact_pointer_pos() {
                    let pos = Vec2::new(pos.x, pos.y);

                    if response.drag_started() {
                        self.garden.begin_drag(pos);
                    } else if response.dragged() {
                        self.garden.continue_drag(pos, &mut self.rng);
                    }

                    // A plain click is a zero-length stroke: still a flower.
                    if response.clicked() {
                        self.garden.begin_drag(pos);
                        self.finish_stroke();
                    }
                }

                if response.drag_stopped() {
                    self.finish_stroke();
                }

                let time = ctx.input(|i| i.time);
                let mut surface = CanvasPainter::new(&painter, rect, &self.sways, time);
                self.garden.tick(&mut surface, &mut self.rng);

                // The garden animates whether or not input arrives.
                ctx.request_repaint();
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_controls(ctx);
        self.ui_central_panel(ctx);
        self.ui_title_overlay(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishing_a_stroke_registers_one_sway_per_flower() {
        let mut viewer = Viewer::new();

        for i in 0..3 {
            viewer.garden.begin_drag(Vec2::new(i as f32 * 40.0, 100.0));
            viewer.finish_stroke();
        }

        assert_eq!(viewer.garden.flowers.len(), 3);
        assert_eq!(viewer.sways.len(), 3);

        // Sway timing follows planting order: 4 s, 5 s, 6 s.
        assert_eq!(viewer.sways[0].period, 4.0);
        assert_eq!(viewer.sways[1].period, 5.0);
        assert_eq!(viewer.sways[2].period, 6.0);
    }

    #[test]
    fn a_release_without_a_stroke_registers_nothing() {
        let mut viewer = Viewer::new();

        viewer.finish_stroke();

        assert!(viewer.garden.flowers.is_empty());
        assert!(viewer.sways.is_empty());
    }

    #[test]
    fn clearing_removes_flowers_and_their_sway_entries() {
        let mut viewer = Viewer::new();

        viewer.garden.begin_drag(Vec2::new(10.0, 10.0));
        viewer.finish_stroke();
        assert_eq!(viewer.sways.len(), 1);

        viewer.clear_garden();

        assert!(viewer.garden.flowers.is_empty());
        assert!(viewer.garden.trail.is_empty());
        assert!(viewer.sways.is_empty());
    }
}
