//! Floating-point RGB for intermediate computation.
//!
//! Blurring mixes several 8-bit colors into a value that is not itself an
//! 8-bit color. [`RgbFloat`] holds those mixtures on the same 0..=255 scale
//! as [`Rgb`]. Nothing converts an `RgbFloat` back to `Rgb`: the engine only
//! ever needs its perceptual position, so no quantization policy exists.

use std::ops::{Add, AddAssign, Mul, Sub};

use super::rgb::Rgb;
use super::xyz::Xyz;

/// An RGB color with floating-point channels on the 0..=255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbFloat {
    /// Red channel (0.0..=255.0 for in-gamut colors)
    pub r: f32,
    /// Green channel (0.0..=255.0 for in-gamut colors)
    pub g: f32,
    /// Blue channel (0.0..=255.0 for in-gamut colors)
    pub b: f32,
}

impl RgbFloat {
    /// Create a new float color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for RgbFloat {
    #[inline]
    fn from(color: Rgb) -> Self {
        Self {
            r: f32::from(color.r),
            g: f32::from(color.g),
            b: f32::from(color.b),
        }
    }
}

impl From<Xyz> for RgbFloat {
    /// Convert CIE XYZ back to float RGB: the inverse of
    /// [`Xyz::from(RgbFloat)`](Xyz).
    ///
    /// The result is not clamped; out-of-gamut XYZ values produce channels
    /// outside 0..=255.
    fn from(xyz: Xyz) -> Self {
        let x = xyz.x / 100.0;
        let y = xyz.y / 100.0;
        let z = xyz.z / 100.0;

        let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
        let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
        let b = x * 0.0557 + y * -0.2040 + z * 1.0570;

        Self {
            r: (compand(r) * 255.0) as f32,
            g: (compand(g) * 255.0) as f32,
            b: (compand(b) * 255.0) as f32,
        }
    }
}

/// sRGB companding: linear light to gamma-encoded, both on 0..=1.
#[inline]
fn compand(linear: f64) -> f64 {
    if linear > 0.0031308 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

impl Add for RgbFloat {
    type Output = RgbFloat;

    #[inline]
    fn add(self, rhs: RgbFloat) -> RgbFloat {
        RgbFloat::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for RgbFloat {
    type Output = RgbFloat;

    #[inline]
    fn sub(self, rhs: RgbFloat) -> RgbFloat {
        RgbFloat::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for RgbFloat {
    type Output = RgbFloat;

    #[inline]
    fn mul(self, factor: f32) -> RgbFloat {
        RgbFloat::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

impl AddAssign for RgbFloat {
    #[inline]
    fn add_assign(&mut self, rhs: RgbFloat) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}
