//! A color paired with its CIELAB position.

use super::lab::{diff2, Lab};
use super::rgb::Rgb;

/// An [`Rgb`] color together with its [`Lab`] conversion.
///
/// Converting to Lab is by far the most expensive step of a comparison, so
/// grids that are compared many times store both. The fields are private
/// and only [`Pixel::new`] sets them, so `lab == Lab::from(color)` holds
/// for every `Pixel` that exists.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    color: Rgb,
    lab: Lab,
}

impl Pixel {
    /// Pair `color` with its Lab conversion.
    #[inline]
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            lab: Lab::from(color),
        }
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }

    /// Squared Lab distance between two pixels.
    #[inline]
    pub fn diff2(&self, other: &Pixel) -> f32 {
        diff2(self.lab, other.lab)
    }
}
