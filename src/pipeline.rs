//! Run orchestration: palette, stages, output, report.

use std::path::Path;

use allrgb_core::{
    generate_palette, has_all_colors, total_error, ColorTransform, CompareAndSwap, DitheredSwap,
    Grid, MatchAscending, PassReport, Permute, Pixel, Rgb,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::JobConfig;
use crate::error::PipelineError;
use crate::image_io;

/// The seed to use: the configured one, or a fresh one drawn once.
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    let seed = configured.unwrap_or_else(rand::random);
    tracing::info!(seed, drawn = configured.is_none(), "Resolved seed");
    seed
}

/// The optimization stages a job asks for, in the order they run.
pub fn stages(settings: &JobConfig) -> Vec<Box<dyn Permute>> {
    let mut stages: Vec<Box<dyn Permute>> = Vec::new();
    if settings.ascending {
        stages.push(Box::new(MatchAscending));
    }
    if let Some(passes) = settings.swap_passes {
        stages.push(Box::new(CompareAndSwap::new(passes)));
    }
    if let Some(passes) = settings.dither_passes {
        stages.push(Box::new(DitheredSwap::new(passes)));
    }
    stages
}

/// One pass of a stage, as written to the JSON report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PassSummary {
    pub pass: usize,
    pub swaps: usize,
    pub frequency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rms: Option<f64>,
}

impl From<&PassReport> for PassSummary {
    fn from(report: &PassReport) -> Self {
        Self {
            pass: report.pass,
            swaps: report.swaps,
            frequency: report.frequency(),
            rms: report.rms,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StageReport {
    pub name: &'static str,
    pub passes: Vec<PassSummary>,
}

/// Summary of a `permute` run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunReport {
    pub seed: u64,
    pub rows: usize,
    pub cols: usize,
    pub reoriented: bool,
    pub stages: Vec<StageReport>,
    /// Root-mean-square Lab error of the final output
    pub rms_error: f64,
    /// Whether the output uses every 24-bit color exactly once
    pub complete: bool,
}

/// Rearrange a palette sized to `input` so it resembles `input`, and write
/// the result to `output`.
///
/// All randomness comes from one generator seeded with `seed`: the optional
/// reorientation, the initial shuffle, then the stages in order.
pub fn run_permute(
    input: &Path,
    output: &Path,
    settings: &JobConfig,
    seed: u64,
) -> Result<RunReport, PipelineError> {
    let reference = image_io::load(input)?.map(|&color| Pixel::new(color));
    let (rows, cols) = (reference.rows(), reference.cols());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut palette = generate_palette(reference.len())?;
    log_palette(&palette, rows, cols);

    if let Some(path) = &settings.palette_out {
        image_io::store(path, &Grid::from_vec(rows, cols, palette.clone())?)?;
    }

    if settings.reorient {
        let transform = ColorTransform::random(&mut rng);
        tracing::info!(?transform, identity = transform.is_identity(), "Reoriented palette");
        for color in palette.iter_mut() {
            *color = transform.apply(*color);
        }
    }

    palette.shuffle(&mut rng);
    let mut grid = Grid::from_vec(rows, cols, palette)?;

    let mut stage_reports = Vec::new();
    for stage in stages(settings) {
        tracing::info!(stage = stage.name(), "Starting stage");
        let passes = stage.permute(&reference, &mut grid, &mut rng)?;
        tracing::info!(stage = stage.name(), passes = passes.len(), "Finished stage");
        stage_reports.push(StageReport {
            name: stage.name(),
            passes: passes.iter().map(PassSummary::from).collect(),
        });
    }

    let rms_error = (total_error(&reference, &grid)? / grid.len() as f64).sqrt();
    let complete = has_all_colors(grid.iter());
    image_io::store(output, &grid)?;

    tracing::info!(rms_error, complete, "Run complete");
    Ok(RunReport {
        seed,
        rows,
        cols,
        reoriented: settings.reorient,
        stages: stage_reports,
        rms_error,
        complete,
    })
}

/// Write the palette for a `rows x cols` grid, in generation order.
pub fn run_palette(rows: usize, cols: usize, output: &Path) -> Result<(), PipelineError> {
    let palette = generate_palette(rows * cols)?;
    log_palette(&palette, rows, cols);
    let grid = Grid::from_vec(rows, cols, palette)?;
    image_io::store(output, &grid)?;
    Ok(())
}

fn log_palette(palette: &[Rgb], rows: usize, cols: usize) {
    if let (Some(first), Some(last)) = (palette.first(), palette.last()) {
        tracing::info!(colors = palette.len(), rows, cols, %first, %last, "Generated palette");
    }
}

/// Result of the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub rows: usize,
    pub cols: usize,
    pub complete: bool,
}

/// Whether the image at `path` uses every 24-bit color exactly once.
pub fn check_image(path: &Path) -> Result<CheckReport, PipelineError> {
    let grid: Grid<Rgb> = image_io::load(path)?;
    Ok(CheckReport {
        rows: grid.rows(),
        cols: grid.cols(),
        complete: has_all_colors(grid.iter()),
    })
}

/// Write `report` as pretty JSON.
pub fn write_report(report: &RunReport, path: &Path) -> Result<(), PipelineError> {
    let report_error = |message: String| PipelineError::Report {
        path: path.to_path_buf(),
        message,
    };
    let json = serde_json::to_string_pretty(report).map_err(|e| report_error(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| report_error(e.to_string()))?;
    tracing::info!(path = %path.display(), "Wrote run report");
    Ok(())
}
