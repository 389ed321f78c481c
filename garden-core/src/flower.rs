use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::color::Rgb;
use crate::config::Config;
use crate::particle::Particle;
use crate::render::Surface;

/// Bloom progress gained per tick until saturation at 1.0.
pub const BLOOM_SPEED: f32 = 0.02;

/// Number of particles clustered at the center of every flower.
pub const CENTER_PARTICLES: usize = 6;

/// Outward drift applied to every petal, never zeroed.
const PETAL_DRIFT: f32 = 0.2;

/// A radial cluster of particles forming one bloom.
///
/// The particle set is fixed at construction: `petal_count` petals plus
/// [`CENTER_PARTICLES`] center particles. Flowers are permanent; their
/// particles keep evolving but are never removed or replaced.
#[derive(Debug, Clone)]
pub struct Flower {
    pub position: Vec2,
    pub color: Rgb,
    pub particles: Vec<Particle>,
    pub petal_count: usize,
    pub size: f32,
    pub bloom: f32,
}

impl Flower {
    /// Creates a flower with a randomized petal count and size.
    pub fn new(position: Vec2, color: Rgb, cfg: &Config, rng: &mut impl Rng) -> Self {
        let petal_count = rng.random_range(cfg.petal_count_min..=cfg.petal_count_max);
        let size = rng.random_range(cfg.flower_size_min..cfg.flower_size_max);
        Self::with_shape(position, color, petal_count, size, rng)
    }

    /// Creates a flower with a fixed petal count and size.
    ///
    /// Petals sit at equal angular increments around the center, offset
    /// `0.2 * size` along their angle, each drifting slowly outward with a
    /// per-petal size and color variation. Six center particles cluster at
    /// `0.1 * size` with the base color lightened by +50.
    pub fn with_shape(
        position: Vec2,
        color: Rgb,
        petal_count: usize,
        size: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut particles = Vec::with_capacity(petal_count + CENTER_PARTICLES);

        for i in 0..petal_count {
            let angle = (i as f32 / petal_count as f32) * TAU;
            let dir = Vec2::from_angle(angle);
            let variance = rng.random_range(-15..15);

            particles.push(Particle::new(
                position + dir * (size * 0.2),
                dir * PETAL_DRIFT,
                color.lighten(variance),
                size * (0.8 + rng.random_range(0.0..0.4)),
                1.0,
            ));
        }

        let center_color = color.lighten(50);
        for i in 0..CENTER_PARTICLES {
            let angle = (i as f32 / CENTER_PARTICLES as f32) * TAU;
            particles.push(Particle::new(
                position + Vec2::from_angle(angle) * (size * 0.1),
                Vec2::ZERO,
                center_color,
                size * 0.5,
                1.0,
            ));
        }

        Self {
            position,
            color,
            particles,
            petal_count,
            size,
            bloom: 0.0,
        }
    }

    /// Advances the bloom counter and every particle by one tick.
    ///
    /// Particle liveness is discarded: flowers never die and their particle
    /// set never changes after construction.
    pub fn update(&mut self) {
        self.bloom = (self.bloom + BLOOM_SPEED).min(1.0);
        for particle in &mut self.particles {
            particle.update();
        }
    }

    /// Draws every particle in order.
    pub fn draw(&self, surface: &mut impl Surface) {
        for particle in &self.particles {
            particle.draw(surface);
        }
    }
}
