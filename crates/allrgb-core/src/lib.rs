//! allrgb-core: the engine behind allRGB images
//!
//! An allRGB image uses each of the 16,777,216 24-bit colors exactly once.
//! This crate builds the color multiset for a grid of any size and then
//! rearranges it so the grid resembles a reference photograph. It does no
//! file I/O; callers hand in grids and get grids back.
//!
//! # Quick Start
//!
//! ```
//! use allrgb_core::{generate_palette, CompareAndSwap, Grid, Permute, Pixel, Rgb};
//! use rand::rngs::StdRng;
//! use rand::seq::SliceRandom;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // A 4x4 reference, normally decoded from a photograph.
//! let photo: Vec<Pixel> = (0..16u8).map(|v| Pixel::new(Rgb::new(v * 16, 0, 255 - v * 16))).collect();
//! let reference = Grid::from_vec(4, 4, photo).unwrap();
//!
//! let mut colors = generate_palette(16).unwrap();
//! colors.shuffle(&mut rng);
//! let mut output = Grid::from_vec(4, 4, colors).unwrap();
//!
//! CompareAndSwap::new(10).permute(&reference, &mut output, &mut rng).unwrap();
//! assert_eq!(output.len(), 16);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! generate_palette(rows * cols)   Hilbert-sampled, or every color once
//!     |
//! shuffle with the seeded rng
//!     |
//! [MatchAscending]                optional, luminance rank only
//!     |
//! [CompareAndSwap] x passes       optional, per-pixel Lab error
//!     |
//! [DitheredSwap] x passes         optional, blurred Lab error
//!     |
//! output grid
//! ```
//!
//! Every stage only swaps cells, so the color multiset never changes; a
//! complete palette stays complete ([`has_all_colors`]).
//!
//! # Color Science
//!
//! Comparisons happen in CIELAB under the D65 white point, using the
//! squared Euclidean distance [`diff2`]. The conversion goes through CIE XYZ
//! with the standard sRGB companding curve. Blurred colors are mixed in
//! gamma-encoded RGB on the 0..=255 scale ([`RgbFloat`]) before conversion.
//!
//! # Randomness
//!
//! Nothing in this crate draws from a global generator. Every stage that
//! shuffles or samples takes `&mut dyn RngCore`, so one seeded generator
//! threaded through a run reproduces it exactly.

pub mod color;
pub mod error;
pub mod grid;
pub mod hilbert;
pub mod palette;
pub mod permute;

#[cfg(test)]
mod domain_tests;

pub use color::{diff2, ColorTransform, Lab, Pixel, Rgb, RgbFloat, Xyz, NUM_COLORS};
pub use error::{GridError, PaletteError};
pub use grid::Grid;
pub use palette::{generate_palette, has_all_colors};
pub use permute::{
    match_ascending, total_error, CompareAndSwap, DitheredSwap, MatchAscending, PassReport,
    Permute, RMS_INTERVAL,
};
