//! Session state and the per-frame simulation/render loop.
//!
//! A [`Garden`] owns every flower, the active stroke trail, and the selected
//! color. The presentation layer feeds it pointer events ([`Garden::begin_drag`],
//! [`Garden::continue_drag`], [`Garden::end_drag`]), color picks, and the
//! clear command, and calls [`Garden::tick`] once per frame with its draw
//! surface. All of it is mutated from a single logical thread of control.

use glam::Vec2;
use rand::Rng;
use tracing::{debug, info};

use crate::color::{Rgb, palette};
use crate::config::Config;
use crate::flower::Flower;
use crate::particle::Particle;
use crate::render::Surface;
use crate::trail::Trail;

/// Process-wide simulation state.
///
/// `flowers` grows for the life of the session; only [`Garden::clear`]
/// removes them.
#[derive(Debug)]
pub struct Garden {
    pub flowers: Vec<Flower>,
    pub trail: Trail,
    pub selected_color: Rgb,
    pub drawing: bool,
    pub cfg: Config,
    /// Raw position of the latest pointer event of the active stroke.
    cursor: Vec2,
}

impl Garden {
    pub fn new(cfg: Config) -> Self {
        Self {
            flowers: Vec::new(),
            trail: Trail::new(),
            selected_color: palette::PINK,
            drawing: false,
            cfg,
            cursor: Vec2::ZERO,
        }
    }

    /// Starts a stroke at `pos`, discarding any previous trail.
    pub fn begin_drag(&mut self, pos: Vec2) {
        debug!(x = pos.x, y = pos.y, "stroke started");
        self.drawing = true;
        self.cursor = pos;
        self.trail.begin(pos);
    }

    /// Extends the active stroke to `pos`.
    ///
    /// Ignored when no stroke is active, so a stray move event without a
    /// preceding press cannot fault.
    pub fn continue_drag(&mut self, pos: Vec2, rng: &mut impl Rng) {
        if !self.drawing {
            return;
        }
        self.cursor = pos;
        self.trail.extend(pos, &self.cfg, rng);
    }

    /// Ends the active stroke and plants a flower where the pointer stopped.
    ///
    /// Ignored when no stroke is active. The trail is discarded afterwards;
    /// its samples never become part of the flower.
    pub fn end_drag(&mut self, rng: &mut impl Rng) {
        if !self.drawing {
            return;
        }
        self.drawing = false;

        if !self.trail.is_empty() {
            let flower = Flower::new(self.cursor, self.selected_color, &self.cfg, rng);
            info!(
                x = self.cursor.x,
                y = self.cursor.y,
                petals = flower.petal_count,
                "flower planted"
            );
            self.flowers.push(flower);
        }
        self.trail.clear();
    }

    /// Removes every flower and the active trail.
    pub fn clear(&mut self) {
        info!(flowers = self.flowers.len(), "garden cleared");
        self.flowers.clear();
        self.trail.clear();
    }

    /// Advances the simulation one frame and redraws everything.
    ///
    /// The frame is: wipe the surface; while a stroke is active, render each
    /// trail sample as an ephemeral full-grown, partially transparent
    /// particle without mutating the trail; then update and draw every
    /// flower in insertion order, announcing each flower's anchor to the
    /// surface first.
    ///
    /// ### Parameters
    /// - `surface` - Draw target for this frame.
    /// - `rng` - Source of the per-frame trail particle size variation.
    pub fn tick(&mut self, surface: &mut impl Surface, rng: &mut impl Rng) {
        surface.clear();

        if self.drawing {
            for point in &self.trail.points {
                let size = rng.random_range(self.cfg.trail_size_min..self.cfg.trail_size_max);
                let particle = Particle::full_grown(
                    point.position,
                    point.velocity,
                    self.selected_color,
                    size,
                    self.cfg.trail_life,
                );
                particle.draw(surface);
            }
        }

        for (i, flower) in self.flowers.iter_mut().enumerate() {
            surface.anchor_flower(i, flower.position);
            flower.update();
            flower.draw(surface);
        }
    }
}

impl Default for Garden {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
