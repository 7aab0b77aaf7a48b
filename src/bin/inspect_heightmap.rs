//! Load an exported heightmap the way a terrain renderer would and report
//! its dimensions and height range

use std::process::ExitCode;

use clap::Parser;

use coastline_heightmap::export::load_heightmap;
use coastline_heightmap::heightfield::Heightfield;

#[derive(Parser, Debug)]
#[command(name = "inspect_heightmap")]
#[command(about = "Inspect a grayscale heightmap PNG as a normalized heightfield")]
struct Args {
    /// Heightmap image to load
    path: String,

    /// Sampling stride (1 = full resolution, 2 = half, 4 = quarter)
    #[arg(long, default_value = "1")]
    lod: usize,

    /// Normalized level used to report the underwater share
    #[arg(long, default_value = "0.2745")]
    water_level: f32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let raster = match load_heightmap(&args.path) {
        Ok(raster) => raster,
        Err(e) => {
            eprintln!("Failed to load heightmap: {}", args.path);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Loaded heightmap: {}x{}", raster.width, raster.height);

    let field = Heightfield::from_raster(&raster, args.lod);
    if field.lod > 1 {
        println!("Downsampled to: {}x{} (LOD {})", field.width(), field.height(), field.lod);
    }

    let (min_h, max_h) = field.height_range();
    println!("Height range: {:.4} to {:.4}", min_h, max_h);
    println!(
        "Below {:.4}: {:.1}%",
        args.water_level,
        100.0 * field.fraction_below(args.water_level)
    );

    ExitCode::SUCCESS
}
