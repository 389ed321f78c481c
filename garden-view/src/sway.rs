//! Ambient sway decoration for planted flowers.
//!
//! Purely presentational: each flower gets a slow rotation about its anchor
//! driven by the UI clock, independent of the simulation tick.

use rand::Rng;

/// Peak sway deflection in radians (3 degrees).
pub const MAX_ANGLE: f32 = 3.0 * std::f32::consts::PI / 180.0;

/// Sway timing for one flower.
#[derive(Debug, Clone, Copy)]
pub struct Sway {
    /// Full back-and-forth period in seconds.
    pub period: f64,
    /// Phase offset in seconds.
    pub delay: f64,
}

impl Sway {
    /// Picks the timing for the `nth` planted flower (1-based).
    ///
    /// Periods alternate for visual variety: every 3rd flower sways over
    /// 6 s, every remaining 2nd over 5 s, the rest over 4 s. Every 4th
    /// flower starts a second late, and each gets a random extra delay of
    /// up to 2 s.
    pub fn for_nth(nth: usize, rng: &mut impl Rng) -> Self {
        let period = if nth % 3 == 0 {
            6.0
        } else if nth % 2 == 0 {
            5.0
        } else {
            4.0
        };

        let mut delay = rng.random_range(0.0..2.0);
        if nth % 4 == 0 {
            delay += 1.0;
        }

        Self { period, delay }
    }

    /// Deflection angle in radians at UI time `time` (seconds).
    pub fn angle(&self, time: f64) -> f32 {
        let phase = (time - self.delay) / self.period;
        MAX_ANGLE * (phase * std::f64::consts::TAU).sin() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rng;

    #[test]
    fn periods_follow_the_four_five_six_pattern() {
        let mut rng = rng();

        assert_eq!(Sway::for_nth(1, &mut rng).period, 4.0);
        assert_eq!(Sway::for_nth(2, &mut rng).period, 5.0);
        assert_eq!(Sway::for_nth(3, &mut rng).period, 6.0);
        assert_eq!(Sway::for_nth(4, &mut rng).period, 5.0);
        assert_eq!(Sway::for_nth(5, &mut rng).period, 4.0);
        assert_eq!(Sway::for_nth(6, &mut rng).period, 6.0);
    }

    #[test]
    fn every_fourth_flower_is_delayed_by_an_extra_second() {
        let mut rng = rng();

        for _ in 0..16 {
            assert!(Sway::for_nth(4, &mut rng).delay >= 1.0);
            assert!(Sway::for_nth(4, &mut rng).delay < 3.0);
            assert!(Sway::for_nth(5, &mut rng).delay < 2.0);
        }
    }

    #[test]
    fn angle_starts_at_rest_and_stays_within_the_peak_deflection() {
        let sway = Sway {
            period: 4.0,
            delay: 0.5,
        };

        assert!(sway.angle(0.5).abs() < 1e-6);

        for i in 0..100 {
            let t = i as f64 * 0.13;
            assert!(sway.angle(t).abs() <= MAX_ANGLE + 1e-6);
        }

        // Quarter period after the delay is the peak deflection.
        assert!((sway.angle(1.5) - MAX_ANGLE).abs() < 1e-5);
    }
}
