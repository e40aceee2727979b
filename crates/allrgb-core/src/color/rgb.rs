//! 8-bit RGB color type
//!
//! [`Rgb`] is the canonical color of an allRGB image: it is what gets read
//! from and written to image files, and it is the only representation that
//! is ever moved between grid cells. Every other color type is derived from
//! it and never converted back.

use std::fmt;

/// Number of distinct 24-bit colors.
pub const NUM_COLORS: usize = 1 << 24;

/// A color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create a color from a web hex code, e.g. `0xFF0000` is red.
    ///
    /// Bits above the low 24 are ignored.
    ///
    /// # Example
    /// ```
    /// use allrgb_core::Rgb;
    /// assert_eq!(Rgb::from_u32(0x00FF80), Rgb::new(0, 255, 128));
    /// ```
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// The web hex code of this color, in `[0, 2^24)`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.to_u32()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
