use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use coastline_heightmap::ascii;
use coastline_heightmap::export;
use coastline_heightmap::heightmap;
use coastline_heightmap::params::CoastlineParams;
use coastline_heightmap::report::GenerationSummary;
use coastline_heightmap::smoothing::{GaussianBlur, NoSmoothing, Smoother};

#[derive(Parser, Debug)]
#[command(name = "coastline_heightmap")]
#[command(about = "Generate a grayscale coastline heightmap: ocean, shallows, beach and inland")]
struct Args {
    /// Random seed for the perturbation stream (overrides the parameter file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON parameter file; missing fields keep their defaults
    #[arg(short, long)]
    params: Option<String>,

    /// Save the heightmap as an 8-bit grayscale PNG
    #[arg(short, long)]
    output: Option<String>,

    /// Save a band-colored preview PNG
    #[arg(long)]
    preview: Option<String>,

    /// Write a text report (statistics, ASCII map, shoreline table)
    #[arg(long)]
    report: Option<String>,

    /// Sampling step for the ASCII map in the text report
    #[arg(long, default_value = "8")]
    report_step: usize,

    /// Disable all random perturbation
    #[arg(long)]
    no_noise: bool,

    /// Skip the Gaussian blur post-pass
    #[arg(long)]
    no_blur: bool,

    /// Suppress per-column progress lines
    #[arg(short, long)]
    quiet: bool,

    /// Print the effective parameters as JSON and exit
    #[arg(long)]
    dump_params: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let params = match resolve_params(&args) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.dump_params {
        return match params.to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    println!("Generating coastline heightmap with seed: {}", params.seed);
    println!("Map size: {}x{}", params.width, params.height);

    let smoother: Box<dyn Smoother> = if args.no_blur {
        Box::new(NoSmoothing)
    } else {
        Box::new(GaussianBlur::new(params.blur_sigma))
    };

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let quiet = args.quiet;
    let map = heightmap::generate_coastline(&params, &mut rng, smoother.as_ref(), |x, steps| {
        if !quiet {
            let offsets: Vec<String> = steps.iter().map(|o| format!("{:.4}", o)).collect();
            println!("Column {:>4}: wave offset {}", x, offsets.join(" -> "));
        }
    });
    println!("Applied {}", smoother.describe());

    let summary = GenerationSummary::from_map(&map, &params, &smoother.describe());

    let mut failed = false;

    if let Some(ref path) = args.output {
        match export::export_heightmap(&map.raster, path) {
            Ok(()) => println!("Saved heightmap to: {}", path),
            Err(e) => {
                eprintln!("Failed to save heightmap: {}", e);
                failed = true;
            }
        }
    }

    if let Some(ref path) = args.preview {
        match export::export_band_preview(&map, path) {
            Ok(()) => println!("Saved band preview to: {}", path),
            Err(e) => {
                eprintln!("Failed to save band preview: {}", e);
                failed = true;
            }
        }
    }

    if let Some(ref path) = args.report {
        match ascii::export_report_file(&map, &params, &summary, path, args.report_step) {
            Ok(()) => println!("Saved report to: {}", path),
            Err(e) => {
                eprintln!("Failed to write report: {}", e);
                failed = true;
            }
        }
    }

    summary.print_summary();

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Defaults, then the parameter file, then command-line overrides.
fn resolve_params(args: &Args) -> Result<CoastlineParams, Box<dyn std::error::Error>> {
    let mut params = match args.params {
        Some(ref path) => CoastlineParams::load(path)?,
        None => CoastlineParams::default(),
    };

    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if args.no_noise {
        params.noise = false;
    }

    params.validate()?;
    Ok(params)
}
