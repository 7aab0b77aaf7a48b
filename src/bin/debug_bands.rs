//! Debug tool for inspecting band layout without noise
//! Writes a band-colored preview and prints the intensity profile of one column

use coastline_heightmap::ascii::{band_char, print_ascii_map};
use coastline_heightmap::bands::ColumnBands;
use coastline_heightmap::export::export_band_preview;
use coastline_heightmap::heightmap::generate_from_seed;
use coastline_heightmap::params::CoastlineParams;
use coastline_heightmap::waves::{adjusted_sea_level, cumulative_offsets, normalized_x};

const COLUMN: usize = 256;
const ROW_STEP: usize = 8;

fn main() {
    let params = CoastlineParams::without_noise();

    println!("Generating noise-free coastline...");
    let map = generate_from_seed(&params);

    print_ascii_map(&map, 16);

    let level = adjusted_sea_level(&params, COLUMN);
    let column = ColumnBands::new(level, &params);
    let steps = cumulative_offsets(&params.waves, normalized_x(COLUMN, params.width));

    println!();
    println!("Column {} (x = {:.3})", COLUMN, normalized_x(COLUMN, params.width));
    println!("  Wave offsets: {:?}", steps);
    println!(
        "  Shelf edge {:.2}, shoreline {:.2}, inland from {:.2}",
        column.shelf_edge(),
        column.sea_level,
        column.beach_top()
    );
    println!("  {:>4}  {}  {:>4}  {:>7}", "row", "b", "base", "blurred");
    for y in (0..params.height).step_by(ROW_STEP) {
        let (band, base) = column.base_intensity(y);
        println!("  {:>4}  {}  {:>4}  {:>7}", y, band_char(band), base, map.raster.get(COLUMN, y));
    }

    match export_band_preview(&map, "band_debug.png") {
        Ok(()) => println!("Saved band_debug.png"),
        Err(e) => eprintln!("Failed to save band preview: {}", e),
    }
}
