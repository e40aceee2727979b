//! CIELAB perceptual color space
//!
//! All perceptual comparisons in the engine are squared Euclidean distances
//! between [`Lab`] triples. The optimizers only ever ask "is this
//! arrangement better than that one", so the square root is never taken.

use super::rgb::Rgb;
use super::rgb_float::RgbFloat;
use super::xyz::{Xyz, WHITE_X, WHITE_Y, WHITE_Z};

/// A color in CIELAB (D65 white point).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis
/// - `b`: Blue-yellow axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance to `other`. See [`diff2`].
    #[inline]
    pub fn diff2(self, other: Lab) -> f32 {
        diff2(self, other)
    }
}

/// Squared Euclidean distance between two Lab colors.
///
/// ```
/// use allrgb_core::{diff2, Lab};
///
/// let black = Lab::new(0.0, 0.0, 0.0);
/// let white = Lab::new(100.0, 0.0, 0.0);
/// assert_eq!(diff2(black, white), 10000.0);
/// ```
#[inline]
pub fn diff2(lhs: Lab, rhs: Lab) -> f32 {
    let dl = lhs.l - rhs.l;
    let da = lhs.a - rhs.a;
    let db = lhs.b - rhs.b;
    dl * dl + da * da + db * db
}

/// The CIELAB nonlinearity: a cube root with a linear toe.
#[inline]
fn f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let x = f(xyz.x / WHITE_X);
        let y = f(xyz.y / WHITE_Y);
        let z = f(xyz.z / WHITE_Z);

        Self {
            l: (116.0 * y - 16.0) as f32,
            a: (500.0 * (x - y)) as f32,
            b: (200.0 * (y - z)) as f32,
        }
    }
}

impl From<RgbFloat> for Lab {
    #[inline]
    fn from(color: RgbFloat) -> Self {
        Self::from(Xyz::from(color))
    }
}

impl From<Rgb> for Lab {
    #[inline]
    fn from(color: Rgb) -> Self {
        Self::from(Xyz::from(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance against published reference values.
    const REFERENCE_TOLERANCE: f32 = 0.1;

    fn assert_lab_near(actual: Lab, expected: (f32, f32, f32), tol: f32) {
        assert!(
            (actual.l - expected.0).abs() < tol
                && (actual.a - expected.1).abs() < tol
                && (actual.b - expected.2).abs() < tol,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_red_reference_value() {
        let red = Lab::from(Rgb::new(255, 0, 0));
        assert_lab_near(red, (53.23, 80.11, 67.22), REFERENCE_TOLERANCE);
    }

    #[test]
    fn test_green_reference_value() {
        let green = Lab::from(Rgb::new(0, 255, 0));
        assert_lab_near(green, (87.74, -86.18, 83.18), REFERENCE_TOLERANCE);
    }

    #[test]
    fn test_black_and_white() {
        assert_lab_near(Lab::from(Rgb::new(0, 0, 0)), (0.0, 0.0, 0.0), 1e-4);
        assert_lab_near(
            Lab::from(Rgb::new(255, 255, 255)),
            (100.0, 0.0, 0.0),
            0.02,
        );
    }

    #[test]
    fn test_diff2_is_not_square_rooted() {
        let black = Lab::new(0.0, 0.0, 0.0);
        let white = Lab::new(100.0, 0.0, 0.0);
        assert_eq!(diff2(black, white), 10000.0);
        assert_eq!(black.diff2(white), 10000.0);
        assert_eq!(diff2(Lab::new(1.0, 2.0, 3.0), Lab::new(1.0, 2.0, 3.0)), 0.0);
        assert_eq!(diff2(Lab::new(0.0, 3.0, 0.0), Lab::new(0.0, 0.0, 4.0)), 25.0);
    }

    #[test]
    fn test_rgb_float_matches_rgb_path() {
        let color = Rgb::new(17, 99, 230);
        assert_eq!(Lab::from(color), Lab::from(RgbFloat::from(color)));
    }

    #[test]
    fn test_lab_xyz_round_trip() {
        for color in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(40, 40, 40),
            Rgb::new(1, 2, 3),
            Rgb::new(200, 180, 20),
        ] {
            let xyz = Xyz::from(color);
            let back = Xyz::from(Lab::from(xyz));
            assert!(
                (back.x - xyz.x).abs() < 1e-3
                    && (back.y - xyz.y).abs() < 1e-3
                    && (back.z - xyz.z).abs() < 1e-3,
                "{color}: {xyz:?} -> {back:?}"
            );
        }
    }

    #[test]
    fn test_lab_to_float_color_recovers_blurred_value() {
        let blurred = RgbFloat::new(120.5, 33.25, 240.0);
        let back = RgbFloat::from(Xyz::from(Lab::from(blurred)));
        assert!((back.r - blurred.r).abs() < 0.25, "{back:?}");
        assert!((back.g - blurred.g).abs() < 0.25, "{back:?}");
        assert!((back.b - blurred.b).abs() < 0.25, "{back:?}");
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::{IntoColor, Lab as PaletteLab, Srgb};

        // Our matrices are the four-decimal published ones; `palette` derives
        // its own, so agreement is approximate.
        for (r, g, b) in [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (128, 128, 128),
            (255, 255, 255),
            (10, 200, 150),
        ] {
            let ours = Lab::from(Rgb::new(r, g, b));
            let theirs: PaletteLab = Srgb::new(r, g, b)
                .into_format::<f32>()
                .into_linear()
                .into_color();

            assert_lab_near(ours, (theirs.l, theirs.a, theirs.b), 0.5);
        }
    }
}
