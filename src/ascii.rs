//! ASCII rendering and text report export

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::bands::Band;
use crate::heightmap::CoastlineMap;
use crate::params::CoastlineParams;
use crate::report::GenerationSummary;
use crate::tilemap::Tilemap;

/// What each character of an ASCII map encodes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsciiMode {
    Bands,
    Height,
}

pub fn band_char(band: Band) -> char {
    match band {
        Band::DeepOcean => '~',
        Band::ShallowWater => '-',
        Band::Beach => '.',
        Band::Inland => '#',
    }
}

/// Get ASCII character for an intensity (10-level gradient)
pub fn height_char(value: u8) -> char {
    const CHARS: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];
    let idx = value as usize * CHARS.len() / 256;
    CHARS[idx.min(CHARS.len() - 1)]
}

/// Render a map to an ASCII string, sampling every `step`-th pixel in both
/// directions.
pub fn render_ascii_map(bands: &Tilemap<Band>, raster: &Tilemap<u8>, mode: AsciiMode, step: usize) -> String {
    let step = step.max(1);
    let width = bands.width.div_ceil(step);
    let height = bands.height.div_ceil(step);
    let mut result = String::with_capacity((width + 1) * height);

    for y in (0..bands.height).step_by(step) {
        for x in (0..bands.width).step_by(step) {
            let ch = match mode {
                AsciiMode::Bands => band_char(*bands.get(x, y)),
                AsciiMode::Height => height_char(*raster.get(x, y)),
            };
            result.push(ch);
        }
        result.push('\n');
    }

    result
}

pub fn band_legend() -> String {
    let mut legend = String::new();
    legend.push_str("=== BAND LEGEND ===\n");
    for band in Band::all() {
        let (lo, hi) = band.nominal_range();
        legend.push_str(&format!("  {} {:14} {}-{}\n", band_char(*band), band.display_name(), lo, hi));
    }
    legend
}

/// Print the band view of a map to stdout
pub fn print_ascii_map(map: &CoastlineMap, step: usize) {
    print!("{}", render_ascii_map(&map.bands, &map.raster, AsciiMode::Bands, step));
}

/// Write parameters, statistics, an ASCII band map and a shoreline table
/// to a text file.
pub fn export_report_file<P: AsRef<Path>>(
    map: &CoastlineMap,
    params: &CoastlineParams,
    summary: &GenerationSummary,
    path: P,
    step: usize,
) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "=== COASTLINE HEIGHTMAP REPORT ===")?;
    writeln!(file, "Seed: {}", params.seed)?;
    writeln!(file, "Size: {}x{}", map.width(), map.height())?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    writeln!(file, "=== PARAMETERS ===")?;
    writeln!(file, "Sea level: {}", params.sea_level)?;
    writeln!(file, "Shallow water width: {}", params.shallow_water_width)?;
    writeln!(file, "Beach width: {}", params.beach_width)?;
    for (i, wave) in params.waves.iter().enumerate() {
        writeln!(
            file,
            "Wave {}: amplitude {:.2}, frequency {:.2}, phase {:.4}",
            i, wave.amplitude, wave.frequency, wave.phase
        )?;
    }
    writeln!(file)?;

    writeln!(file, "=== STATISTICS ===")?;
    write!(file, "{}", summary)?;
    writeln!(file)?;

    writeln!(file, "=== MAP (Band View, 1:{}) ===", step.max(1))?;
    write!(file, "{}", render_ascii_map(&map.bands, &map.raster, AsciiMode::Bands, step))?;
    writeln!(file)?;
    write!(file, "{}", band_legend())?;
    writeln!(file)?;

    writeln!(file, "=== MAP (Height View, 1:{}) ===", step.max(1))?;
    write!(file, "{}", render_ascii_map(&map.bands, &map.raster, AsciiMode::Height, step))?;
    writeln!(file)?;

    writeln!(file, "=== SHORELINE ===")?;
    writeln!(file, "{:>6} {:>9} {:>9} {:>9}", "column", "shelf", "shore", "inland")?;
    for x in (0..map.width()).step_by(step.max(1)) {
        let level = map.sea_levels[x];
        writeln!(
            file,
            "{:>6} {:>9.2} {:>9.2} {:>9.2}",
            x,
            level - params.shallow_water_width,
            level,
            level + params.beach_width
        )?;
    }

    Ok(())
}
