//! Generation summary
//!
//! Collects the numbers printed after a run: band ranges, wave layer count,
//! shoreline extent and per-band pixel statistics.

use std::fmt;

use crate::bands::Band;
use crate::heightmap::CoastlineMap;
use crate::params::CoastlineParams;

/// Observed statistics for one band, measured before smoothing
#[derive(Clone, Debug, PartialEq)]
pub struct BandStats {
    pub band: Band,
    pub pixels: usize,
    /// (min, max) intensity, `None` when the band has no pixels
    pub range: Option<(u8, u8)>,
}

impl BandStats {
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            100.0 * self.pixels as f64 / total as f64
        }
    }
}

#[derive(Clone, Debug)]
pub struct GenerationSummary {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub noise: bool,
    pub wave_layers: usize,
    /// Lowest and highest adjusted sea level over all columns
    pub sea_level_range: (f64, f64),
    /// One entry per band, top to bottom
    pub bands: Vec<BandStats>,
    /// Final (smoothed) intensity range
    pub output_range: (u8, u8),
    pub output_mean: f64,
    pub smoothing: String,
}

impl GenerationSummary {
    pub fn from_map(map: &CoastlineMap, params: &CoastlineParams, smoothing: &str) -> Self {
        let mut bands: Vec<BandStats> = Band::all()
            .iter()
            .map(|&band| BandStats { band, pixels: 0, range: None })
            .collect();

        for (x, y, &band) in map.bands.iter() {
            let value = *map.unblurred.get(x, y);
            let stats = &mut bands[band.index()];
            stats.pixels += 1;
            stats.range = Some(match stats.range {
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
                None => (value, value),
            });
        }

        let sea_level_range = map
            .sea_levels
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &l| (lo.min(l), hi.max(l)));

        Self {
            width: map.width(),
            height: map.height(),
            seed: params.seed,
            noise: params.noise,
            wave_layers: params.waves.len(),
            sea_level_range,
            bands,
            output_range: map.raster.value_range().unwrap_or((0, 0)),
            output_mean: map.raster.mean(),
            smoothing: smoothing.to_string(),
        }
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }

    pub fn band(&self, band: Band) -> &BandStats {
        &self.bands[band.index()]
    }

    pub fn print_summary(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {}x{} coastline heightmap (seed {})", self.width, self.height, self.seed)?;
        writeln!(f, "Wave layers: {}", self.wave_layers)?;
        for band in Band::all() {
            let (lo, hi) = band.nominal_range();
            writeln!(f, "{}: {}-{}", band.display_name(), lo, hi)?;
        }
        writeln!(
            f,
            "Sea level: {:.1} to {:.1}",
            self.sea_level_range.0, self.sea_level_range.1
        )?;
        writeln!(f, "Noise: {}", if self.noise { "enabled" } else { "disabled" })?;
        writeln!(f, "Smoothing: {}", self.smoothing)?;
        writeln!(f, "Band statistics (before smoothing):")?;
        let total = self.total_pixels();
        for stats in &self.bands {
            match stats.range {
                Some((lo, hi)) => writeln!(
                    f,
                    "  {:14} {:>7} px ({:>5.1}%)  {:>3}-{:<3}",
                    stats.band.display_name(),
                    stats.pixels,
                    stats.share(total),
                    lo,
                    hi
                )?,
                None => writeln!(f, "  {:14} {:>7} px", stats.band.display_name(), 0)?,
            }
        }
        writeln!(
            f,
            "Output range: {}-{} (mean {:.1})",
            self.output_range.0, self.output_range.1, self.output_mean
        )
    }
}
