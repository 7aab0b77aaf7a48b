//! Post-pass smoothing of finished rasters

use crate::tilemap::Tilemap;

/// Smooths a whole intensity raster in one pass.
pub trait Smoother {
    fn smooth(&self, raster: &Tilemap<u8>) -> Tilemap<u8>;

    fn describe(&self) -> String;
}

/// Separable Gaussian blur delegated to `image::imageops::blur`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianBlur {
    /// Standard deviation in pixels
    pub sigma: f32,
}

impl GaussianBlur {
    pub fn new(sigma: f32) -> Self {
        Self { sigma }
    }
}

impl Smoother for GaussianBlur {
    fn smooth(&self, raster: &Tilemap<u8>) -> Tilemap<u8> {
        // image treats sigma <= 0 as 1.0, so zero has to short-circuit here
        if self.sigma <= 0.0 {
            return raster.clone();
        }
        let blurred = image::imageops::blur(&raster.to_gray_image(), self.sigma);
        Tilemap::from_gray_image(&blurred)
    }

    fn describe(&self) -> String {
        format!("Gaussian blur (sigma {})", self.sigma)
    }
}

/// Leaves the raster untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSmoothing;

impl Smoother for NoSmoothing {
    fn smooth(&self, raster: &Tilemap<u8>) -> Tilemap<u8> {
        raster.clone()
    }

    fn describe(&self) -> String {
        "no smoothing".to_string()
    }
}
