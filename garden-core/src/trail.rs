//! Sampling of a pointer stroke into transient trail points.
//!
//! While the user drags, each movement is subdivided into evenly spaced
//! samples with a little positional jitter and a sideways scatter velocity.
//! The samples are rendered as ephemeral particles every frame and discarded
//! at the stroke boundaries; they are never promoted into a flower.

use glam::Vec2;
use rand::Rng;

use crate::config::Config;

/// One sampled point of the active stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// The transient sequence of points sampled while the user drags.
#[derive(Debug, Default)]
pub struct Trail {
    pub points: Vec<TrailPoint>,
}

impl Trail {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Starts a fresh stroke at `pos`, discarding any previous points.
    pub fn begin(&mut self, pos: Vec2) {
        self.points.clear();
        self.points.push(TrailPoint {
            position: pos,
            velocity: Vec2::ZERO,
        });
    }

    /// Samples the segment from the last point's position to `to`.
    ///
    /// Movements shorter than `cfg.min_segment` are skipped so tiny pointer
    /// jitters do not pile up dense clusters. Otherwise
    /// `ceil(distance / cfg.sample_spacing)` evenly spaced points are
    /// appended, each perturbed by up to `cfg.jitter` per axis and given a
    /// velocity perpendicular to the stroke direction with a random sideways
    /// magnitude in `[-1, 1)`.
    ///
    /// Extending a trail with no points is a no-op.
    ///
    /// ### Parameters
    /// - `to` - Stroke position the pointer moved to.
    /// - `cfg` - Sampling distances and jitter amplitude.
    /// - `rng` - Source for the jitter and scatter factors.
    ///
    /// ### Returns
    /// The number of points appended.
    pub fn extend(&mut self, to: Vec2, cfg: &Config, rng: &mut impl Rng) -> usize {
        let Some(start) = self.last_position() else {
            return 0;
        };

        let direction = to - start;
        let distance = direction.length();
        if distance < cfg.min_segment {
            return 0;
        }

        let perp = direction.normalize_or_zero().perp();
        let count = (distance / cfg.sample_spacing).ceil() as usize;

        for i in 0..count {
            let t = i as f32 / count as f32;
            let jitter = Vec2::new(
                rng.random_range(-cfg.jitter..cfg.jitter),
                rng.random_range(-cfg.jitter..cfg.jitter),
            );

            self.points.push(TrailPoint {
                position: start + direction * t + jitter,
                velocity: perp * rng.random_range(-1.0..1.0),
            });
        }

        count
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Position of the most recent sample, if any.
    pub fn last_position(&self) -> Option<Vec2> {
        self.points.last().map(|p| p.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rng;

    #[test]
    fn begin_replaces_previous_points_with_one_still_sample() {
        let mut trail = Trail::new();
        let mut rng = rng();

        trail.begin(Vec2::new(0.0, 0.0));
        trail.extend(Vec2::new(0.0, 40.0), &Config::default(), &mut rng);
        assert!(trail.len() > 1);

        trail.begin(Vec2::new(7.0, 9.0));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.points[0].position, Vec2::new(7.0, 9.0));
        assert_eq!(trail.points[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn extend_skips_movements_below_the_minimum_segment() {
        let mut trail = Trail::new();
        let mut rng = rng();

        trail.begin(Vec2::new(100.0, 100.0));
        let appended = trail.extend(Vec2::new(103.0, 100.0), &Config::default(), &mut rng);

        assert_eq!(appended, 0);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn extend_appends_one_sample_per_spacing_interval() {
        let mut trail = Trail::new();
        let mut rng = rng();

        trail.begin(Vec2::new(100.0, 100.0));
        let appended = trail.extend(Vec2::new(100.0, 160.0), &Config::default(), &mut rng);

        // Distance 60 at spacing 10 yields ceil(60 / 10) = 6 samples.
        assert_eq!(appended, 6);
        assert_eq!(trail.len(), 7);

        // A distance just over one spacing interval still rounds up.
        trail.begin(Vec2::new(0.0, 0.0));
        let appended = trail.extend(Vec2::new(11.0, 0.0), &Config::default(), &mut rng);
        assert_eq!(appended, 2);
    }

    #[test]
    fn samples_stay_within_jitter_of_the_segment() {
        let cfg = Config::default();
        let mut trail = Trail::new();
        let mut rng = rng();

        let start = Vec2::new(50.0, 80.0);
        let end = Vec2::new(50.0, 140.0);
        trail.begin(start);
        trail.extend(end, &cfg, &mut rng);

        for point in &trail.points[1..] {
            // The stroke is vertical, so x may only deviate by the jitter.
            assert!((point.position.x - 50.0).abs() <= cfg.jitter);
            assert!(point.position.y >= start.y - cfg.jitter);
            assert!(point.position.y <= end.y + cfg.jitter);
        }
    }

    #[test]
    fn scatter_velocity_is_perpendicular_to_the_stroke() {
        let mut trail = Trail::new();
        let mut rng = rng();

        trail.begin(Vec2::new(0.0, 0.0));
        trail.extend(Vec2::new(0.0, 60.0), &Config::default(), &mut rng);

        for point in &trail.points[1..] {
            // Perpendicular to a vertical stroke means no y component.
            assert_eq!(point.velocity.y, 0.0);
            assert!(point.velocity.x.abs() <= 1.0);
        }
    }

    #[test]
    fn extend_over_zero_distance_never_faults() {
        // Even with the minimum-segment guard disabled, a degenerate
        // zero-length movement must produce nothing rather than NaNs.
        let cfg = Config {
            min_segment: 0.0,
            ..Config::default()
        };
        let mut trail = Trail::new();
        let mut rng = rng();

        trail.begin(Vec2::new(10.0, 10.0));
        let appended = trail.extend(Vec2::new(10.0, 10.0), &cfg, &mut rng);

        assert_eq!(appended, 0);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn extend_on_an_empty_trail_is_a_no_op() {
        let mut trail = Trail::new();
        let mut rng = rng();

        let appended = trail.extend(Vec2::new(100.0, 100.0), &Config::default(), &mut rng);

        assert_eq!(appended, 0);
        assert!(trail.is_empty());
        assert_eq!(trail.last_position(), None);
    }
}
