//! Band classification and per-band intensity curves
//!
//! Within one column the rows split into four contiguous bands, top to
//! bottom: deep ocean, shallow water, beach and inland. Band edges are
//! measured from the column's wave-adjusted sea level.

use std::f64::consts::PI;

use crate::params::CoastlineParams;

// =============================================================================
// INTENSITY CONSTANTS
// =============================================================================

/// Deep ocean spans [0, DEEP_OCEAN_CEILING)
pub const DEEP_OCEAN_CEILING: i32 = 50;

const SHALLOW_BASE: f64 = 50.0;
const SHALLOW_SPAN: f64 = 20.0;

pub const BEACH_FLOOR: i32 = 70;
pub const BEACH_CEILING: i32 = 200;
const BEACH_SPAN: f64 = 130.0;

// Dunes only rise in the middle of the beach
const DUNE_START: f64 = 0.3;
const DUNE_END: f64 = 0.7;
const DUNE_HEIGHT: f64 = 15.0;
const DUNE_CYCLES: f64 = 4.0;

pub const INLAND_FLOOR: i32 = 200;
const INLAND_DISTANCE_SCALE: f64 = 0.1;
const INLAND_LOG_GAIN: f64 = 30.0;

pub const MAX_INTENSITY: i32 = 255;

// =============================================================================
// BANDS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    DeepOcean,
    ShallowWater,
    Beach,
    Inland,
}

impl Band {
    pub fn all() -> &'static [Self] {
        &[Self::DeepOcean, Self::ShallowWater, Self::Beach, Self::Inland]
    }

    /// Position in the top-to-bottom order (ocean=0 ... inland=3)
    pub fn index(self) -> usize {
        match self {
            Self::DeepOcean => 0,
            Self::ShallowWater => 1,
            Self::Beach => 2,
            Self::Inland => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DeepOcean => "Ocean depth",
            Self::ShallowWater => "Shallow water",
            Self::Beach => "Beach",
            Self::Inland => "Inland",
        }
    }

    /// Intensity range the band's curve is designed to cover, before noise
    /// and blur.
    pub fn nominal_range(&self) -> (u8, u8) {
        match self {
            Self::DeepOcean => (0, 50),
            Self::ShallowWater => (50, 70),
            Self::Beach => (70, 200),
            Self::Inland => (200, 255),
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeepOcean => write!(f, "deep_ocean"),
            Self::ShallowWater => write!(f, "shallow_water"),
            Self::Beach => write!(f, "beach"),
            Self::Inland => write!(f, "inland"),
        }
    }
}

/// Quintic interpolation with zero first and second derivatives at 0 and 1.
#[inline]
pub fn smootherstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Band edges of a single column
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnBands {
    /// Wave-adjusted sea level of the column
    pub sea_level: f64,
    pub shallow_water_width: f64,
    pub beach_width: f64,
}

impl ColumnBands {
    pub fn new(sea_level: f64, params: &CoastlineParams) -> Self {
        Self {
            sea_level,
            shallow_water_width: params.shallow_water_width,
            beach_width: params.beach_width,
        }
    }

    /// First row that is no longer deep ocean
    pub fn shelf_edge(&self) -> f64 {
        self.sea_level - self.shallow_water_width
    }

    /// First row that is inland
    pub fn beach_top(&self) -> f64 {
        self.sea_level + self.beach_width
    }

    pub fn classify(&self, y: usize) -> Band {
        let y = y as f64;
        if y < self.shelf_edge() {
            Band::DeepOcean
        } else if y < self.sea_level {
            Band::ShallowWater
        } else if y < self.beach_top() {
            Band::Beach
        } else {
            Band::Inland
        }
    }

    /// Deep ocean: linear in depth below the shelf edge, kept under
    /// `DEEP_OCEAN_CEILING`.
    pub fn deep_ocean_intensity(&self, y: usize) -> i32 {
        let edge = self.shelf_edge();
        let depth = (edge - y as f64) / edge;
        // Row 0 has depth 1.0 and the unclamped curve stores 50 there, the
        // shallow-water floor. It is held at 49 so the band stays in [0, 50).
        ((depth * DEEP_OCEAN_CEILING as f64) as i32).clamp(0, DEEP_OCEAN_CEILING - 1)
    }

    /// Position within the shallow band, 0 at the shelf edge.
    pub fn shallow_t(&self, y: usize) -> f64 {
        (y as f64 - self.shelf_edge()) / self.shallow_water_width
    }

    /// Shallow water before ripples, in [50, 70).
    pub fn shallow_water_base(&self, y: usize) -> i32 {
        (SHALLOW_BASE + smootherstep(self.shallow_t(y)) * SHALLOW_SPAN) as i32
    }

    /// Position within the beach, 0 at the shoreline.
    pub fn beach_t(&self, y: usize) -> f64 {
        (y as f64 - self.sea_level) / self.beach_width
    }

    /// Inland rows below the beach top; zero on the first inland row.
    pub fn inland_distance(&self, y: usize) -> f64 {
        y as f64 - self.beach_top()
    }

    /// Inland terrain: logarithmic rise, capped at 255.
    pub fn inland_base(&self, y: usize) -> i32 {
        let increase = (1.0 + self.inland_distance(y) * INLAND_DISTANCE_SCALE).ln() * INLAND_LOG_GAIN;
        ((INLAND_FLOOR as f64 + increase) as i32).min(MAX_INTENSITY)
    }

    /// Noise-free intensity of row `y` together with its band. Beach values
    /// include dunes and the beach clamp.
    pub fn base_intensity(&self, y: usize) -> (Band, i32) {
        let band = self.classify(y);
        let value = match band {
            Band::DeepOcean => self.deep_ocean_intensity(y),
            Band::ShallowWater => self.shallow_water_base(y),
            Band::Beach => {
                let t = self.beach_t(y);
                clamp_beach(beach_base(t) + dune_term(t))
            }
            Band::Inland => self.inland_base(y),
        };
        (band, value)
    }
}

/// Beach before dunes and noise, in [70, 200].
pub fn beach_base(t: f64) -> i32 {
    (BEACH_FLOOR as f64 + smootherstep(t) * BEACH_SPAN) as i32
}

/// Dune relief; zero outside the middle of the beach.
pub fn dune_term(t: f64) -> i32 {
    if t > DUNE_START && t < DUNE_END {
        ((t * PI * DUNE_CYCLES).sin() * DUNE_HEIGHT) as i32
    } else {
        0
    }
}

pub fn clamp_beach(value: i32) -> i32 {
    value.clamp(BEACH_FLOOR, BEACH_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_column(sea_level: f64) -> ColumnBands {
        ColumnBands::new(sea_level, &CoastlineParams::default())
    }

    #[test]
    fn test_smootherstep_endpoints() {
        assert_eq!(smootherstep(0.0), 0.0);
        assert_eq!(smootherstep(1.0), 1.0);
        assert!((smootherstep(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_smootherstep_monotonic() {
        let mut prev = smootherstep(0.0);
        for i in 1..=100 {
            let s = smootherstep(i as f64 / 100.0);
            assert!(s >= prev);
            prev = s;
        }
    }

    #[test]
    fn test_band_edges() {
        let col = reference_column(200.0);
        assert_eq!(col.classify(0), Band::DeepOcean);
        assert_eq!(col.classify(159), Band::DeepOcean);
        assert_eq!(col.classify(160), Band::ShallowWater);
        assert_eq!(col.classify(199), Band::ShallowWater);
        assert_eq!(col.classify(200), Band::Beach);
        assert_eq!(col.classify(279), Band::Beach);
        assert_eq!(col.classify(280), Band::Inland);
        assert_eq!(col.classify(511), Band::Inland);
    }

    #[test]
    fn test_band_order_non_decreasing() {
        for sea_level in [147.0, 183.25, 200.0, 252.9] {
            let col = reference_column(sea_level);
            let mut prev = 0;
            for y in 0..512 {
                let idx = col.classify(y).index();
                assert!(idx >= prev, "band went backwards at y={} (sea level {})", y, sea_level);
                prev = idx;
            }
        }
    }

    #[test]
    fn test_deep_ocean_range() {
        let col = reference_column(200.0);
        assert_eq!(col.deep_ocean_intensity(0), 49);
        for y in 0..160 {
            let v = col.deep_ocean_intensity(y);
            assert!((0..50).contains(&v), "deep ocean {} at y={}", v, y);
        }
        // One row above the shelf edge is nearly at the surface
        assert_eq!(col.deep_ocean_intensity(159), 0);
    }

    #[test]
    fn test_shallow_base_range() {
        let col = reference_column(183.4);
        for y in 144..184 {
            assert_eq!(col.classify(y), Band::ShallowWater);
            let v = col.shallow_water_base(y);
            assert!((50..70).contains(&v), "shallow {} at y={}", v, y);
        }
    }

    #[test]
    fn test_beach_base_monotonic_and_bounded() {
        let mut prev = beach_base(0.0);
        assert_eq!(prev, 70);
        for i in 1..80 {
            let v = beach_base(i as f64 / 80.0);
            assert!(v >= prev);
            assert!(v <= 200);
            prev = v;
        }
    }

    #[test]
    fn test_dunes_only_mid_beach() {
        assert_eq!(dune_term(0.1), 0);
        assert_eq!(dune_term(0.3), 0);
        assert_eq!(dune_term(0.7), 0);
        assert_eq!(dune_term(0.9), 0);
        // sin(0.375·4π) = sin(1.5π) = -1
        assert!((-15..=-14).contains(&dune_term(0.375)));
        // sin(0.625·4π) = sin(2.5π) = 1
        assert!((14..=15).contains(&dune_term(0.625)));
        assert_eq!(dune_term(0.5), 0);
    }

    #[test]
    fn test_beach_clamped() {
        let col = reference_column(200.0);
        for y in 200..280 {
            let (band, v) = col.base_intensity(y);
            assert_eq!(band, Band::Beach);
            assert!((70..=200).contains(&v));
        }
    }

    #[test]
    fn test_inland_curve() {
        let col = reference_column(200.0);
        assert_eq!(col.inland_base(280), 200);
        // ln(1 + 10·0.1)·30 ≈ 20.79
        assert_eq!(col.inland_base(290), 220);
        for y in 280..512 {
            let v = col.inland_base(y);
            assert!((200..=255).contains(&v));
        }
    }

    #[test]
    fn test_inland_caps_at_255() {
        let mut params = CoastlineParams::default();
        params.beach_width = 1.0;
        let col = ColumnBands::new(0.0, &params);
        assert_eq!(col.inland_base(5000), 255);
    }

    #[test]
    fn test_nominal_ranges_cover_all_intensities() {
        let ranges: Vec<_> = Band::all().iter().map(|b| b.nominal_range()).collect();
        assert_eq!(ranges.first().unwrap().0, 0);
        assert_eq!(ranges.last().unwrap().1, 255);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }
}
