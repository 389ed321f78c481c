use glam::Vec2;

use crate::color::Rgb;
use crate::render::{PetalShape, Surface};

/// Size gained per tick while a particle grows toward `base_size`.
pub const GROW_SPEED: f32 = 0.1;

/// Life lost per tick.
pub const DECAY: f32 = 0.01;

/// A single animated petal primitive.
///
/// Created at size 0, it grows to `base_size` at [`GROW_SPEED`] per tick,
/// drifts by `velocity`, and loses [`DECAY`] life per tick. The owner decides
/// what a dead particle means; flowers keep theirs forever.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Rgb,
    pub base_size: f32,
    pub size: f32,
    pub life: f32,
    pub growing: bool,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, color: Rgb, base_size: f32, life: f32) -> Self {
        Self {
            position,
            velocity,
            color,
            base_size,
            size: 0.0,
            life,
            growing: true,
        }
    }

    /// A particle that skips the growth ramp and starts at full size.
    ///
    /// Trail samples are rebuilt every frame and would otherwise never get
    /// past the first growth step.
    pub fn full_grown(
        position: Vec2,
        velocity: Vec2,
        color: Rgb,
        base_size: f32,
        life: f32,
    ) -> Self {
        Self {
            size: base_size,
            growing: false,
            ..Self::new(position, velocity, color, base_size, life)
        }
    }

    /// Advances the particle by one tick.
    ///
    /// Moves by `velocity`, grows `size` toward `base_size` while growing,
    /// and decays `life`. Returns whether the particle is still alive
    /// (`life > 0`).
    pub fn update(&mut self) -> bool {
        self.position += self.velocity;

        if self.growing {
            self.size += GROW_SPEED;
            if self.size >= self.base_size {
                self.size = self.base_size;
                self.growing = false;
            }
        }

        self.life -= DECAY;
        self.life > 0.0
    }

    /// Render opacity: opaque above `life = 0.8`, then a linear fade.
    ///
    /// Clamped to `[0, 1]` so a particle updated past death still yields a
    /// valid paint alpha.
    pub fn alpha(&self) -> f32 {
        if self.life > 0.8 {
            1.0
        } else {
            (self.life + 0.2).clamp(0.0, 1.0)
        }
    }

    /// The petal outline for the current size and heading.
    ///
    /// The petal runs from `position` to a tip `size` away along the
    /// velocity heading, bulging `size * 0.5` to both sides. The heading is
    /// `atan2`-derived, so a zero velocity points along +x.
    pub fn petal(&self) -> PetalShape {
        let heading = Vec2::from_angle(self.velocity.to_angle());
        let tip = self.position + heading * self.size;
        let bulge = heading.perp() * (self.size * 0.5);

        PetalShape {
            origin: self.position,
            tip,
            ctrl_out: [self.position + bulge, tip + bulge],
            ctrl_back: [tip - bulge, self.position - bulge],
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_petal(&self.petal(), self.color, self.alpha());
    }
}
