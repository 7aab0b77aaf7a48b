//! Layered sinusoidal shoreline
//!
//! Each column's sea level is displaced by the sum of the wave layers
//! evaluated at the column's normalized position x / width.

use std::f64::consts::TAU;

use crate::params::{CoastlineParams, WaveLayer};

/// Column position mapped to [0, 1).
pub fn normalized_x(x: usize, width: usize) -> f64 {
    x as f64 / width as f64
}

/// Contribution of a single layer at normalized position `nx`.
pub fn layer_offset(wave: &WaveLayer, nx: f64) -> f64 {
    wave.amplitude * (TAU * wave.frequency * nx + wave.phase).sin()
}

/// Running total after each layer, in layer order. The last entry is the
/// full offset.
pub fn cumulative_offsets(waves: &[WaveLayer], nx: f64) -> Vec<f64> {
    let mut total = 0.0;
    waves
        .iter()
        .map(|wave| {
            total += layer_offset(wave, nx);
            total
        })
        .collect()
}

/// Summed offset of all layers at `nx`.
pub fn wave_offset(waves: &[WaveLayer], nx: f64) -> f64 {
    waves.iter().fold(0.0, |total, wave| total + layer_offset(wave, nx))
}

/// Largest displacement the layers can produce in either direction.
pub fn offset_bound(waves: &[WaveLayer]) -> f64 {
    waves.iter().map(|w| w.amplitude.abs()).sum()
}

/// Sea level of column `x` after wave displacement.
pub fn adjusted_sea_level(params: &CoastlineParams, x: usize) -> f64 {
    params.sea_level + wave_offset(&params.waves, normalized_x(x, params.width))
}

/// Adjusted sea level for every column.
pub fn shoreline(params: &CoastlineParams) -> Vec<f64> {
    (0..params.width).map(|x| adjusted_sea_level(params, x)).collect()
}
