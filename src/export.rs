use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::bands::Band;
use crate::heightmap::CoastlineMap;
use crate::tilemap::Tilemap;

/// Export a raster as an 8-bit grayscale PNG (format follows the extension).
pub fn export_heightmap<P: AsRef<Path>>(raster: &Tilemap<u8>, path: P) -> Result<(), image::ImageError> {
    raster.to_gray_image().save(path)
}

/// Load any image as a grayscale raster. Color images are converted to luma.
pub fn load_heightmap<P: AsRef<Path>>(path: P) -> Result<Tilemap<u8>, image::ImageError> {
    let img = image::open(path)?.to_luma8();
    Ok(Tilemap::from_gray_image(&img))
}

/// Export a band-colored preview. Each band gets its own color ramp,
/// shaded by the smoothed intensity within the band's nominal range.
pub fn export_band_preview<P: AsRef<Path>>(map: &CoastlineMap, path: P) -> Result<(), image::ImageError> {
    band_preview_image(map).save(path)
}

pub fn band_preview_image(map: &CoastlineMap) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::new(map.width() as u32, map.height() as u32);

    for y in 0..map.height() {
        for x in 0..map.width() {
            let color = band_color(*map.bands.get(x, y), *map.raster.get(x, y));
            img.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    img
}

/// Color ramp endpoints per band (low intensity, high intensity)
fn band_ramp(band: Band) -> ([u8; 3], [u8; 3]) {
    match band {
        // Deep water is brightest far offshore (high intensity = deeper)
        Band::DeepOcean => ([30, 80, 160], [5, 20, 70]),
        Band::ShallowWater => ([40, 120, 200], [90, 190, 220]),
        Band::Beach => ([210, 190, 140], [240, 225, 180]),
        Band::Inland => ([60, 140, 60], [120, 100, 70]),
    }
}

/// Color of a pixel given its band and intensity.
pub fn band_color(band: Band, value: u8) -> [u8; 3] {
    let (lo, hi) = band.nominal_range();
    let span = (hi - lo).max(1) as f32;
    let t = ((value as f32 - lo as f32) / span).clamp(0.0, 1.0);
    let (a, b) = band_ramp(band);
    lerp_color(a, b, t)
}

fn lerp_color(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t) as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t) as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t) as u8,
    ]
}
