//! Verdant CLI - field vegetation-health analysis

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use verdant_acquire::{BandSource, SceneRequest, SyntheticGenerator};
use verdant_analysis::classify::HealthThresholds;
use verdant_analysis::pipeline::analyze_field;
use verdant_analysis::report::HealthReport;
use verdant_core::aoi::BBox;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "verdant")]
#[command(author, version, about = "Field vegetation-health analysis", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the grid a bounding box maps to
    Info {
        /// Bounding box as min_lon,min_lat,max_lon,max_lat (WGS84 degrees)
        #[arg(short, long)]
        bbox: String,

        /// Ground resolution in meters per pixel
        #[arg(short, long, default_value = "10.0")]
        resolution: f64,
    },

    /// Analyze a field for one scene (synthetic imagery)
    Analyze {
        /// Bounding box as min_lon,min_lat,max_lon,max_lat (WGS84 degrees)
        #[arg(short, long)]
        bbox: String,

        /// Scene date, ISO 8601 (e.g. 2024-06-01)
        #[arg(short, long)]
        date: Option<String>,

        /// Ground resolution in meters per pixel
        #[arg(short, long, default_value = "10.0")]
        resolution: f64,

        /// Seed for the synthetic scene (omit for a fresh scene per run)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Block size of the synthetic scene, in pixels
        #[arg(long, default_value = "20")]
        coarse: usize,

        /// Vegetation index cutoff
        #[arg(long, default_value = "0.2")]
        stressed: f64,

        /// Vigor index cutoff
        #[arg(long, default_value = "0.6")]
        healthy: f64,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    match cli.command {
        Commands::Info { bbox, resolution } => {
            let bbox = parse_bbox(&bbox)?;
            let (rows, cols) = bbox
                .dimensions(resolution)
                .context("Failed to size the grid")?;

            println!(
                "Extent: {:.1} m x {:.1} m",
                bbox.width_m(),
                bbox.height_m()
            );
            println!("Grid:   {} rows x {} cols at {} m/px", rows, cols, resolution);
        }

        Commands::Analyze {
            bbox,
            date,
            resolution,
            seed,
            coarse,
            stressed,
            healthy,
            json,
        } => {
            let bbox = parse_bbox(&bbox)?;
            let thresholds =
                HealthThresholds::new(stressed, healthy).context("Invalid thresholds")?;

            let mut request = SceneRequest::new(bbox, resolution);
            if let Some(date) = date {
                request = request.datetime(&date);
            }

            let generator = match seed {
                Some(seed) => SyntheticGenerator::seeded(seed),
                None => SyntheticGenerator::new(),
            }
            .with_coarse_factor(coarse);

            let (rows, cols) = request.grid_shape().context("Failed to size the grid")?;
            info!("Requesting {}x{} scene", rows, cols);

            let start = Instant::now();
            let pair = generator
                .acquire(&request)
                .context("Failed to acquire bands")?;
            let analysis = analyze_field(pair.red(), pair.nir(), thresholds)
                .context("Analysis failed")?;
            let elapsed = start.elapsed();

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis.report)?);
            } else {
                print_report(&analysis.report);
            }

            info!("Analyzed {} pixels in {:.2?}", rows * cols, elapsed);
        }
    }

    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn parse_bbox(s: &str) -> Result<BBox> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Invalid bbox '{}'", s))?;

    if parts.len() != 4 {
        bail!("Bbox needs 4 values (min_lon,min_lat,max_lon,max_lat), got {}", parts.len());
    }
    if parts[0] > parts[2] || parts[1] > parts[3] {
        bail!("Bbox minimums must not exceed maximums");
    }

    Ok(BBox::new(parts[0], parts[1], parts[2], parts[3]))
}

fn print_report(report: &HealthReport) {
    println!("Vegetated pixels: {}", report.vegetated);
    println!("  Healthy:        {} ({:.1}%)", report.healthy, report.healthy_pct);
    println!("  Stressed:       {} ({:.1}%)", report.stressed, report.stressed_pct);
    println!("Unhealthy pixels: {}", report.unhealthy);
    println!("Mean index:       {:.2}", report.mean_index);

    if report.high_stress {
        println!("ALERT: high stress detected");
    } else {
        println!("Field condition appears stable");
    }
}
