/// Tunables for stroke sampling and flower construction.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Pointer movements shorter than this are not sampled.
    pub min_segment: f32,
    /// Target distance between consecutive trail samples.
    pub sample_spacing: f32,
    /// Per-axis jitter applied to each trail sample.
    pub jitter: f32,
    /// Size range for the ephemeral trail particles.
    pub trail_size_min: f32,
    pub trail_size_max: f32,
    /// Life assigned to the ephemeral trail particles.
    pub trail_life: f32,
    /// Petal count range for new flowers (inclusive).
    pub petal_count_min: usize,
    pub petal_count_max: usize,
    /// Size range for new flowers.
    pub flower_size_min: f32,
    pub flower_size_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_segment: 5.0,
            sample_spacing: 10.0,
            jitter: 5.0,
            trail_size_min: 8.0,
            trail_size_max: 12.0,
            trail_life: 0.8,
            petal_count_min: 8,
            petal_count_max: 12,
            flower_size_min: 20.0,
            flower_size_max: 35.0,
        }
    }
}
