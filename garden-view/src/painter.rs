//! egui implementation of the core's draw surface.

use egui::epaint::CubicBezierShape;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};
use garden_core::color::{Rgb, palette};
use garden_core::render::{PetalShape, Surface};
use glam::Vec2;

use crate::sway::Sway;

/// Converts a core color and alpha into an egui color.
pub fn to_color32(color: Rgb, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, a)
}

/// Paints one frame of the garden onto an egui painter.
///
/// Petals arrive in screen coordinates; the current flower's sway rotation
/// is applied about its anchor before painting.
pub struct CanvasPainter<'a> {
    painter: &'a Painter,
    rect: Rect,
    sways: &'a [Sway],
    time: f64,
    pivot: Option<(Vec2, f32)>,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, sways: &'a [Sway], time: f64) -> Self {
        Self {
            painter,
            rect,
            sways,
            time,
            pivot: None,
        }
    }

    /// Applies the active sway rotation, if any, and converts to egui space.
    fn place(&self, p: Vec2) -> Pos2 {
        let p = match self.pivot {
            Some((origin, angle)) => origin + Vec2::from_angle(angle).rotate(p - origin),
            None => p,
        };
        Pos2::new(p.x, p.y)
    }
}

impl Surface for CanvasPainter<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(
            self.rect,
            egui::CornerRadius::ZERO,
            to_color32(palette::BACKGROUND, 1.0),
        );
    }

    fn anchor_flower(&mut self, index: usize, origin: Vec2) {
        let angle = self
            .sways
            .get(index)
            .map(|sway| sway.angle(self.time))
            .unwrap_or(0.0);
        self.pivot = Some((origin, angle));
    }

    fn fill_petal(&mut self, petal: &PetalShape, color: Rgb, alpha: f32) {
        let out = CubicBezierShape::from_points_stroke(
            [
                self.place(petal.origin),
                self.place(petal.ctrl_out[0]),
                self.place(petal.ctrl_out[1]),
                self.place(petal.tip),
            ],
            false,
            Color32::TRANSPARENT,
            Stroke::NONE,
        );
        let back = CubicBezierShape::from_points_stroke(
            [
                self.place(petal.tip),
                self.place(petal.ctrl_back[0]),
                self.place(petal.ctrl_back[1]),
                self.place(petal.origin),
            ],
            false,
            Color32::TRANSPARENT,
            Stroke::NONE,
        );

        // Flatten both halves into one closed outline, dropping the points
        // duplicated at the tip and at the closing origin.
        let mut points = out.flatten(Some(0.25));
        points.extend(back.flatten(Some(0.25)).into_iter().skip(1));
        if points.len() > 1 && points.last() == points.first() {
            points.pop();
        }

        self.painter
            .add(Shape::convex_polygon(points, to_color32(color, alpha), Stroke::NONE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_color32_scales_and_clamps_alpha() {
        let color = Rgb::new(10, 20, 30);

        assert_eq!(
            to_color32(color, 1.0),
            Color32::from_rgba_unmultiplied(10, 20, 30, 255)
        );
        assert_eq!(
            to_color32(color, 0.5),
            Color32::from_rgba_unmultiplied(10, 20, 30, 128)
        );
        // Out-of-range alphas from decayed particles must not wrap.
        assert_eq!(
            to_color32(color, -0.3),
            Color32::from_rgba_unmultiplied(10, 20, 30, 0)
        );
        assert_eq!(
            to_color32(color, 1.7),
            Color32::from_rgba_unmultiplied(10, 20, 30, 255)
        );
    }
}
