//! Coastline generation parameters and configuration
//!
//! `CoastlineParams::default()` is the reference constant set: a 512x512
//! raster, sea level 200, a 40 px shallow shelf, an 80 px beach, three wave
//! layers and seed 42. Parameter files are JSON; any field left out keeps
//! its default.

use std::f64::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One sinusoidal layer of the shoreline offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveLayer {
    /// Peak displacement of the sea level in pixels
    pub amplitude: f64,
    /// Full periods across the raster width
    pub frequency: f64,
    /// Phase shift in radians
    pub phase: f64,
}

impl WaveLayer {
    pub const fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self { amplitude, frequency, phase }
    }
}

/// Bounded random perturbation applied to one band.
///
/// A check draws a uniform real in [0, 1) and fires when it exceeds
/// `1 - probability`. Only a firing check draws the integer offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Perturbation {
    pub probability: f64,
    /// Smallest offset (inclusive)
    pub min: i32,
    /// Largest offset (inclusive)
    pub max: i32,
}

impl Perturbation {
    pub const fn new(probability: f64, min: i32, max: i32) -> Self {
        Self { probability, min, max }
    }

    /// Value the uniform draw must exceed for the perturbation to fire.
    pub fn threshold(&self) -> f64 {
        1.0 - self.probability
    }
}

/// Full parameter set for one coastline raster
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoastlineParams {
    // =========================================================================
    // Raster
    // =========================================================================

    /// Raster width in pixels (number of columns)
    pub width: usize,

    /// Raster height in pixels (number of rows)
    pub height: usize,

    /// Seed for the single random stream
    pub seed: u64,

    // =========================================================================
    // Shoreline
    // =========================================================================

    /// Row of the undisturbed shoreline
    pub sea_level: f64,

    /// Rows between deep ocean and the shoreline
    pub shallow_water_width: f64,

    /// Rows between the shoreline and inland terrain
    pub beach_width: f64,

    /// Layers summed into the per-column sea level offset, in order
    pub waves: Vec<WaveLayer>,

    // =========================================================================
    // Perturbation
    // =========================================================================

    /// Master switch. When false no probability check ever fires and the
    /// random stream is never consumed.
    pub noise: bool,

    /// Underwater sand ripples in the shallow band
    pub shallow_ripples: Perturbation,

    /// Surface roughness on the beach
    pub beach_roughness: Perturbation,

    /// Extra relief inland (offset is added, then capped at 255)
    pub inland_relief: Perturbation,

    // =========================================================================
    // Post-pass
    // =========================================================================

    /// Gaussian blur standard deviation in pixels (0 disables the pass)
    pub blur_sigma: f32,
}

impl Default for CoastlineParams {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            seed: 42,

            sea_level: 200.0,
            shallow_water_width: 40.0,
            beach_width: 80.0,
            waves: vec![
                WaveLayer::new(30.0, 2.0, 0.0),
                WaveLayer::new(15.0, 5.0, PI / 4.0),
                WaveLayer::new(8.0, 10.0, PI / 2.0),
            ],

            noise: true,
            shallow_ripples: Perturbation::new(0.15, -3, 3),
            beach_roughness: Perturbation::new(0.25, -4, 4),
            inland_relief: Perturbation::new(0.4, 0, 15),

            blur_sigma: 0.5,
        }
    }
}

impl CoastlineParams {
    /// Reference parameters with every random perturbation switched off.
    pub fn without_noise() -> Self {
        Self {
            noise: false,
            ..Default::default()
        }
    }

    /// Same parameters on a smaller raster, for tests and previews.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Load parameters from a JSON file and validate them.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(ParamsError::Io)?;
        let params: Self = serde_json::from_str(&contents).map_err(ParamsError::Parse)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, ParamsError> {
        serde_json::to_string_pretty(self).map_err(ParamsError::Serialize)
    }

    /// Reject parameter sets the generator cannot run with.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width == 0 || self.height == 0 {
            return Err(ParamsError::Invalid(format!(
                "raster must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.sea_level.is_finite() {
            return Err(ParamsError::Invalid("sea_level must be finite".into()));
        }
        if !(self.shallow_water_width.is_finite() && self.shallow_water_width > 0.0) {
            return Err(ParamsError::Invalid(format!(
                "shallow_water_width must be positive, got {}",
                self.shallow_water_width
            )));
        }
        if !(self.beach_width.is_finite() && self.beach_width > 0.0) {
            return Err(ParamsError::Invalid(format!(
                "beach_width must be positive, got {}",
                self.beach_width
            )));
        }
        for (i, wave) in self.waves.iter().enumerate() {
            if !(wave.amplitude.is_finite() && wave.frequency.is_finite() && wave.phase.is_finite()) {
                return Err(ParamsError::Invalid(format!("wave layer {} has a non-finite value", i)));
            }
        }
        for (name, rule) in [
            ("shallow_ripples", &self.shallow_ripples),
            ("beach_roughness", &self.beach_roughness),
            ("inland_relief", &self.inland_relief),
        ] {
            if !(0.0..=1.0).contains(&rule.probability) {
                return Err(ParamsError::Invalid(format!(
                    "{}.probability must be within [0, 1], got {}",
                    name, rule.probability
                )));
            }
            if rule.min > rule.max {
                return Err(ParamsError::Invalid(format!(
                    "{} range is empty ({} > {})",
                    name, rule.min, rule.max
                )));
            }
        }
        if !(self.blur_sigma.is_finite() && self.blur_sigma >= 0.0) {
            return Err(ParamsError::Invalid(format!(
                "blur_sigma must be zero or positive, got {}",
                self.blur_sigma
            )));
        }
        Ok(())
    }
}

/// Parameter loading errors
#[derive(Debug)]
pub enum ParamsError {
    /// Parameter file could not be read
    Io(std::io::Error),
    /// Parameter file is not valid JSON for `CoastlineParams`
    Parse(serde_json::Error),
    /// Parameters could not be written out as JSON
    Serialize(serde_json::Error),
    /// Parameters are well-formed but unusable
    Invalid(String),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "Failed to read parameters: {}", e),
            ParamsError::Parse(e) => write!(f, "Failed to parse parameters: {}", e),
            ParamsError::Serialize(e) => write!(f, "Failed to serialize parameters: {}", e),
            ParamsError::Invalid(msg) => write!(f, "Invalid parameters: {}", msg),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            ParamsError::Parse(e) | ParamsError::Serialize(e) => Some(e),
            ParamsError::Invalid(_) => None,
        }
    }
}
