//! Normalized heightfields for terrain consumers
//!
//! A renderer reads the exported PNG back as heights in [0, 1], optionally
//! taking every n-th sample to trade resolution for mesh size.

use crate::tilemap::Tilemap;

#[derive(Clone, Debug)]
pub struct Heightfield {
    pub heights: Tilemap<f32>,
    /// Sampling stride used when building (1 = full resolution)
    pub lod: usize,
}

impl Heightfield {
    /// Normalize a raster to [0, 1], keeping every `lod`-th sample in both
    /// directions. `lod` of 0 is treated as 1.
    pub fn from_raster(raster: &Tilemap<u8>, lod: usize) -> Self {
        let lod = lod.max(1);
        let width = (raster.width / lod).max(1);
        let height = (raster.height / lod).max(1);
        let mut heights = Tilemap::new_with(width, height, 0.0f32);

        for (x, y, h) in heights.iter_mut() {
            let src_x = (x * lod).min(raster.width - 1);
            let src_y = (y * lod).min(raster.height - 1);
            *h = *raster.get(src_x, src_y) as f32 / 255.0;
        }

        Self { heights, lod }
    }

    pub fn width(&self) -> usize {
        self.heights.width
    }

    pub fn height(&self) -> usize {
        self.heights.height
    }

    /// (min, max) normalized height
    pub fn height_range(&self) -> (f32, f32) {
        let mut min_h = f32::MAX;
        let mut max_h = f32::MIN;
        for (_, _, &h) in self.heights.iter() {
            min_h = min_h.min(h);
            max_h = max_h.max(h);
        }
        (min_h, max_h)
    }

    /// Fraction of samples at or below `level` (normalized).
    pub fn fraction_below(&self, level: f32) -> f64 {
        let total = self.width() * self.height();
        let below = self.heights.iter().filter(|&(_, _, &h)| h <= level).count();
        below as f64 / total as f64
    }
}
