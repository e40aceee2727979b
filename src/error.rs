use std::path::PathBuf;

use allrgb_core::{GridError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG decode error in {path}: {message}")]
    PngDecode { path: PathBuf, message: String },

    #[error("PNG encode error in {path}: {message}")]
    PngEncode { path: PathBuf, message: String },

    #[error("Unsupported image format in {path}: {color_type} at {bit_depth} bits")]
    UnsupportedFormat {
        path: PathBuf,
        color_type: String,
        bit_depth: u8,
    },

    #[error("Image {path} has no pixels ({width}x{height})")]
    Empty {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Image {path} is too large to encode: {rows}x{cols}")]
    TooLarge {
        path: PathBuf,
        rows: usize,
        cols: usize,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read job file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse job file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid job setting {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Failed to write report {path}: {message}")]
    Report { path: PathBuf, message: String },
}
