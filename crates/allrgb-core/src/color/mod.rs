//! Color types and conversion kernels
//!
//! Four representations, each with one job:
//!
//! - [`Rgb`]: 8-bit channels. The only type stored in images and moved
//!   between grid cells.
//! - [`RgbFloat`]: float channels on the same 0..=255 scale, for blurred
//!   mixtures of several colors.
//! - [`Xyz`]: CIE XYZ, the intermediate step between RGB and Lab.
//! - [`Lab`]: CIELAB, where every perceptual comparison happens via
//!   [`diff2`].
//!
//! All conversions are pure `From` impls with no failure modes: every input
//! either is an 8-bit color or was derived from 8-bit colors.
//!
//! # Example
//!
//! ```
//! use allrgb_core::{diff2, Lab, Rgb};
//!
//! let red = Lab::from(Rgb::new(255, 0, 0));
//! assert!((red.l - 53.23).abs() < 0.1);
//!
//! let darker = Lab::from(Rgb::new(250, 0, 0));
//! assert!(diff2(red, darker) < diff2(red, Lab::from(Rgb::new(0, 0, 0))));
//! ```

mod lab;
mod pixel;
mod rgb;
mod rgb_float;
mod transform;
mod xyz;

pub use lab::{diff2, Lab};
pub use pixel::Pixel;
pub use rgb::{Rgb, NUM_COLORS};
pub use rgb_float::RgbFloat;
pub use transform::ColorTransform;
pub use xyz::Xyz;
