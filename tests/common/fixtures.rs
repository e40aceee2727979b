//! Test fixtures: scratch directories and small reference images.

use std::path::PathBuf;

use allrgb::image_io;
use allrgb_core::{Grid, Rgb};
use tempfile::TempDir;

/// A scratch directory that is removed when dropped.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Path of `name` inside the workspace (not created).
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `grid` as a PNG named `name` and return its path.
    pub fn write_image(&self, name: &str, grid: &Grid<Rgb>) -> PathBuf {
        let path = self.path(name);
        image_io::store(&path, grid).expect("Failed to write fixture image");
        path
    }

    /// Write a text file named `name` and return its path.
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}

/// A smooth gradient: red down the rows, green across the columns.
pub fn gradient(rows: usize, cols: usize) -> Grid<Rgb> {
    let colors = (0..rows * cols)
        .map(|i| {
            let (row, col) = (i / cols, i % cols);
            let r = (row * 255 / (rows.max(2) - 1)) as u8;
            let g = (col * 255 / (cols.max(2) - 1)) as u8;
            Rgb::new(r, g, 96)
        })
        .collect();
    Grid::from_vec(rows, cols, colors).expect("valid gradient shape")
}

/// Sorted `0xRRGGBB` values, for comparing color multisets.
pub fn sorted_colors(colors: &[Rgb]) -> Vec<u32> {
    let mut values: Vec<u32> = colors.iter().map(|c| c.to_u32()).collect();
    values.sort_unstable();
    values
}
