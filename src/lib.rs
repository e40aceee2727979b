//! allrgb - photographs rebuilt from every 24-bit color
//!
//! Application layer around `allrgb-core`: PNG I/O, job files, and the run
//! pipeline. This library exposes modules for integration testing.

pub mod config;
pub mod error;
pub mod image_io;
pub mod pipeline;
