//! CIE XYZ tristimulus values, the bridge between RGB and CIELAB.

use super::lab::Lab;
use super::rgb::Rgb;
use super::rgb_float::RgbFloat;

/// D65 reference white, 2° observer, on the 0..=100 scale.
pub(crate) const WHITE_X: f64 = 95.047;
pub(crate) const WHITE_Y: f64 = 100.0;
pub(crate) const WHITE_Z: f64 = 108.883;

/// CIE 1931 XYZ, scaled so the reference white has `y == 100`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (relative luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ triple.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Inverse sRGB companding on the 0..=1 scale.
#[inline]
fn linearize(channel: f64) -> f64 {
    if channel > 0.04045 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

impl From<RgbFloat> for Xyz {
    /// Delinearize each channel, scale to 0..=100 and apply the sRGB to XYZ
    /// matrix.
    fn from(color: RgbFloat) -> Self {
        let r = linearize(f64::from(color.r) / 255.0) * 100.0;
        let g = linearize(f64::from(color.g) / 255.0) * 100.0;
        let b = linearize(f64::from(color.b) / 255.0) * 100.0;

        Self {
            x: r * 0.4124 + g * 0.3576 + b * 0.1805,
            y: r * 0.2126 + g * 0.7152 + b * 0.0722,
            z: r * 0.0193 + g * 0.1192 + b * 0.9505,
        }
    }
}

impl From<Rgb> for Xyz {
    #[inline]
    fn from(color: Rgb) -> Self {
        Self::from(RgbFloat::from(color))
    }
}

impl From<Lab> for Xyz {
    /// The exact inverse of [`Lab::from(Xyz)`](Lab).
    fn from(lab: Lab) -> Self {
        let y = (f64::from(lab.l) + 16.0) / 116.0;
        let x = f64::from(lab.a) / 500.0 + y;
        let z = y - f64::from(lab.b) / 200.0;

        Self {
            x: finv(x) * WHITE_X,
            y: finv(y) * WHITE_Y,
            z: finv(z) * WHITE_Z,
        }
    }
}

/// Inverse of the CIELAB cube-root nonlinearity.
#[inline]
fn finv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > 0.008856 {
        cubed
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}
