use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use allrgb::config::JobConfig;
use allrgb::pipeline;

#[derive(Parser)]
#[command(name = "allrgb")]
#[command(about = "Rebuild photographs from every 24-bit color, each used once")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rearrange a palette sized to INPUT so that it resembles INPUT
    Permute {
        /// Reference photograph (PNG)
        input: PathBuf,

        /// Output image path (PNG)
        output: PathBuf,

        /// Also write the palette, before shuffling, to this PNG
        #[arg(short = 'p', long = "palette")]
        palette_out: Option<PathBuf>,

        /// Rank-match colors to the photograph by luminance first
        #[arg(short, long)]
        ascending: bool,

        /// Plain compare-and-swap passes
        #[arg(short = 's', long = "swap", value_parser = clap::value_parser!(u64).range(1..))]
        swap_passes: Option<u64>,

        /// Dithered compare-and-swap passes
        #[arg(short = 'd', long = "dither", value_parser = clap::value_parser!(u64).range(1..))]
        dither_passes: Option<u64>,

        /// Seed for all random choices (drawn at startup when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Apply a random orientation of the color cube to the palette
        #[arg(long)]
        reorient: bool,

        /// YAML job file; command-line values take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write a JSON run report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Write the unshuffled palette for a ROWS x COLS image
    Palette {
        /// Image height in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rows: u32,

        /// Image width in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        cols: u32,

        /// Output image path (PNG)
        output: PathBuf,
    },
    /// Check whether an image uses every 24-bit color exactly once
    Check {
        /// Image to inspect (PNG)
        image: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "allrgb=info,allrgb_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Permute {
            input,
            output,
            palette_out,
            ascending,
            swap_passes,
            dither_passes,
            seed,
            reorient,
            config,
            report,
        } => {
            let overrides = JobConfig {
                ascending,
                swap_passes: swap_passes.map(|n| n as usize),
                dither_passes: dither_passes.map(|n| n as usize),
                seed,
                reorient,
                palette_out,
            };
            run_permute_command(&input, &output, config, overrides, report)
        }
        Commands::Palette { rows, cols, output } => {
            pipeline::run_palette(rows as usize, cols as usize, &output)
                .with_context(|| format!("Failed to write palette to {}", output.display()))
        }
        Commands::Check { image } => run_check_command(&image),
    }
}

fn run_permute_command(
    input: &Path,
    output: &Path,
    config: Option<PathBuf>,
    overrides: JobConfig,
    report: Option<PathBuf>,
) -> anyhow::Result<()> {
    let file = match config {
        Some(path) => JobConfig::load(&path)?,
        None => JobConfig::default(),
    };
    let settings = file.merged_with(overrides);

    let seed = pipeline::resolve_seed(settings.seed);
    eprintln!("seed: {seed}");

    let run = pipeline::run_permute(input, output, &settings, seed)
        .with_context(|| format!("Failed to permute {}", input.display()))?;

    if let Some(path) = report {
        pipeline::write_report(&run, &path)?;
    }

    println!(
        "Wrote {} ({}x{}, rms error {:.2}{})",
        output.display(),
        run.cols,
        run.rows,
        run.rms_error,
        if run.complete { ", all colors" } else { "" }
    );
    Ok(())
}

fn run_check_command(image: &Path) -> anyhow::Result<()> {
    let result = pipeline::check_image(image)
        .with_context(|| format!("Failed to check {}", image.display()))?;

    if result.complete {
        println!(
            "{}: {}x{}, every color exactly once",
            image.display(),
            result.cols,
            result.rows
        );
        Ok(())
    } else {
        anyhow::bail!(
            "{}: {}x{} does not use every color exactly once",
            image.display(),
            result.cols,
            result.rows
        )
    }
}
