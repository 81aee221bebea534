//! Piecewise-linear height field
//!
//! Y grows downward (canvas convention), so a *smaller* y is a higher hill.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Parameters for terrain generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    pub width: f32,
    pub segment_width: f32,
    pub max_step_height: f32,
    /// Starting height at x = 0
    pub base_y: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl TerrainParams {
    /// Standard parameters for a playfield of the given size
    pub fn for_playfield(width: f32, height: f32, hilliness: f32) -> Self {
        let min_y = height * TERRAIN_MIN_Y_FRACTION;
        let max_y = (height - TERRAIN_BOTTOM_MARGIN).max(min_y);
        Self {
            width,
            segment_width: TERRAIN_SEGMENT_WIDTH,
            max_step_height: hilliness.max(0.0),
            base_y: (height - TERRAIN_BASE_OFFSET).clamp(min_y, max_y),
            min_y,
            max_y,
        }
    }
}

/// Ordered terrain samples, x strictly increasing from 0 to the playfield width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    samples: Vec<Vec2>,
}

impl Terrain {
    /// Random walk from `base_y`, one sample per segment, clamped to [min_y, max_y]
    pub fn generate<R: Rng + ?Sized>(params: &TerrainParams, rng: &mut R) -> Self {
        let segment = params.segment_width.max(1.0);
        let step = params.max_step_height.max(0.0);

        let mut y = params.base_y.clamp(params.min_y, params.max_y);
        let mut x = 0.0;
        let mut samples = vec![Vec2::new(x, y)];

        while x + segment <= params.width {
            x += segment;
            if step > 0.0 {
                y += rng.random_range(-step..=step);
            }
            y = y.clamp(params.min_y, params.max_y);
            samples.push(Vec2::new(x, y));
        }
        // Close the gap to the edge with the last walked height
        if x < params.width {
            samples.push(Vec2::new(params.width, y));
        }

        Self { samples }
    }

    /// Flat terrain at height `y` across `[0, width]`
    pub fn flat(width: f32, y: f32) -> Self {
        Self::from_samples(vec![Vec2::new(0.0, y), Vec2::new(width.max(1.0), y)])
    }

    /// Build terrain from explicit samples (x must be strictly increasing)
    pub fn from_samples(samples: Vec<Vec2>) -> Self {
        debug_assert!(!samples.is_empty());
        debug_assert!(samples.windows(2).all(|w| w[0].x < w[1].x));
        Self { samples }
    }

    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    /// Interpolated surface height at `x`; clamps to the endpoints outside the range
    pub fn height_at(&self, x: f32) -> f32 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };
        if !x.is_finite() {
            return if x == f32::INFINITY { last.y } else { first.y };
        }
        if x <= first.x {
            return first.y;
        }
        if x >= last.x {
            return last.y;
        }

        // First sample strictly right of x; x > first.x so idx >= 1
        let idx = self.samples.partition_point(|p| p.x <= x);
        let p1 = self.samples[idx - 1];
        let p2 = self.samples[idx];
        if p1.x == x {
            return p1.y;
        }
        let t = (x - p1.x) / (p2.x - p1.x);
        p1.y + (p2.y - p1.y) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn params(hilliness: f32) -> TerrainParams {
        TerrainParams::for_playfield(800.0, 600.0, hilliness)
    }

    #[test]
    fn test_generate_covers_playfield() {
        let mut rng = Pcg32::seed_from_u64(7);
        let terrain = Terrain::generate(&params(15.0), &mut rng);
        let samples = terrain.samples();

        assert_eq!(samples[0].x, 0.0);
        assert_eq!(samples[0].y, 570.0);
        assert_eq!(samples.last().map(|p| p.x), Some(800.0));
        assert!(samples.windows(2).all(|w| w[0].x < w[1].x));
        // 800 / 20 = 40 segments, plus the starting sample
        assert_eq!(samples.len(), 41);
    }

    #[test]
    fn test_generate_non_multiple_width() {
        let mut rng = Pcg32::seed_from_u64(3);
        let p = TerrainParams::for_playfield(810.0, 600.0, 10.0);
        let terrain = Terrain::generate(&p, &mut rng);
        let samples = terrain.samples();
        assert_eq!(samples.last().map(|p| p.x), Some(810.0));
        assert!(samples.windows(2).all(|w| w[0].x < w[1].x));
        // The partial tail segment repeats the last walked height
        let n = samples.len();
        assert_eq!(samples[n - 2].x, 800.0);
        assert_eq!(samples[n - 1].y, samples[n - 2].y);
    }

    #[test]
    fn test_height_at_non_finite() {
        let terrain = Terrain::from_samples(vec![Vec2::new(0.0, 100.0), Vec2::new(20.0, 150.0)]);
        assert_eq!(terrain.height_at(f32::NAN), 100.0);
        assert_eq!(terrain.height_at(f32::NEG_INFINITY), 100.0);
        assert_eq!(terrain.height_at(f32::INFINITY), 150.0);
    }

    #[test]
    fn test_zero_hilliness_is_flat() {
        let mut rng = Pcg32::seed_from_u64(1);
        let terrain = Terrain::generate(&params(0.0), &mut rng);
        assert!(terrain.samples().iter().all(|p| p.y == 570.0));
    }

    #[test]
    fn test_height_at_clamps_outside() {
        let terrain = Terrain::from_samples(vec![
            Vec2::new(0.0, 100.0),
            Vec2::new(10.0, 200.0),
            Vec2::new(20.0, 150.0),
        ]);
        assert_eq!(terrain.height_at(-50.0), 100.0);
        assert_eq!(terrain.height_at(500.0), 150.0);
        assert_eq!(terrain.height_at(5.0), 150.0);
        assert_eq!(terrain.height_at(10.0), 200.0);
        assert_eq!(terrain.height_at(15.0), 175.0);
    }

    proptest! {
        #[test]
        fn prop_samples_within_bounds(seed in any::<u64>(), hilliness in 0.0f32..40.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let p = params(hilliness);
            let terrain = Terrain::generate(&p, &mut rng);
            for s in terrain.samples() {
                prop_assert!(s.y >= p.min_y && s.y <= p.max_y);
            }
        }

        #[test]
        fn prop_height_interpolates(seed in any::<u64>(), x in 0.0f32..=800.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let terrain = Terrain::generate(&params(25.0), &mut rng);
            let samples = terrain.samples();

            let i = samples.iter().position(|s| s.x >= x).unwrap();
            let h = terrain.height_at(x);
            if samples[i].x == x {
                prop_assert_eq!(h, samples[i].y);
            } else {
                let (a, b) = (samples[i - 1], samples[i]);
                let lo = a.y.min(b.y) - 1e-3;
                let hi = a.y.max(b.y) + 1e-3;
                prop_assert!(h >= lo && h <= hi);
                let expected = a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x);
                prop_assert!((h - expected).abs() < 1e-3);
            }
        }
    }
}
