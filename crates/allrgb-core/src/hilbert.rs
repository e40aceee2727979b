//! Order RGB colors along a 3D Hilbert curve
//!
//! Divide the color cube into octants and visit them in a fixed order.
//! Divide each octant into eight more and visit those in the same shape,
//! rotated or reflected so that consecutive octants stay face-adjacent. After
//! eight subdivisions every octant is a single color, and the visiting order
//! is a total order over all 2^24 colors in which consecutive colors differ
//! by one step in one channel.
//!
//! Octants are numbered by one bit per channel, `0brgb`, taken from the most
//! significant unprocessed bit. The curve enters at black in octant `000` and
//! leaves at pure blue in octant `001`:
//!
//! ```text
//! visiting order:  000 -> 010 -> 110 -> 100 -> 101 -> 111 -> 011 -> 001
//! ```
//!
//! This is curve A26.2b.b3 from Haverkort, "An inventory of
//! three-dimensional Hilbert space-filling curves". Generic Gray-code
//! algorithms produce a different member of the family, so they cannot be
//! substituted without changing every palette.

use std::cmp::Ordering;

use crate::color::Rgb;

/// Octant visited at each position of the order.
const OCTANT_FOR_ORDER: [u8; 8] = [0, 2, 6, 4, 5, 7, 3, 1];

/// Position in the order at which each octant is visited.
const ORDER_FOR_OCTANT: [u32; 8] = [0, 7, 1, 6, 3, 4, 2, 5];

/// Number of subdivision levels (bits per channel).
const LEVELS: u32 = 8;

/// Which octant `color` falls into at subdivision level `step`.
///
/// Level 0 looks at the most significant bit of each channel, so
/// `(0, 0, 128)` is in octant `001` at level 0 and octant `000` at level 1.
#[inline]
fn octant(color: Rgb, step: u32) -> u8 {
    let mask = 0x80u8 >> step;
    let mut octant = 0;
    if color.r & mask != 0 {
        octant |= 0b100;
    }
    if color.g & mask != 0 {
        octant |= 0b010;
    }
    if color.b & mask != 0 {
        octant |= 0b001;
    }
    octant
}

/// Rotate and reflect the remaining bits of `color` into the frame of
/// `octant`, so the next level sees the same visiting order.
#[inline]
fn rotate(octant: u8, c: Rgb) -> Rgb {
    match octant {
        0 => Rgb::new(c.b, c.r, c.g),
        1 => Rgb::new(c.r, !c.b, !c.g),
        2 | 6 => Rgb::new(c.g, c.b, c.r),
        3 | 7 => Rgb::new(c.g, !c.b, !c.r),
        _ => Rgb::new(!c.g, !c.r, c.b),
    }
}

/// Inverse of [`rotate`].
#[inline]
fn unrotate(octant: u8, c: Rgb) -> Rgb {
    match octant {
        0 => Rgb::new(c.g, c.b, c.r),
        1 => Rgb::new(c.r, !c.b, !c.g),
        2 | 6 => Rgb::new(c.b, c.r, c.g),
        3 | 7 => Rgb::new(!c.b, c.r, !c.g),
        _ => Rgb::new(!c.g, !c.r, c.b),
    }
}

/// Index of `color` along the curve, in `[0, 2^24)`.
///
/// ```
/// use allrgb_core::{hilbert, Rgb};
///
/// assert_eq!(hilbert::encode(Rgb::new(0, 0, 0)), 0);
/// assert_eq!(hilbert::encode(Rgb::new(0, 0, 255)), (1 << 24) - 1);
/// ```
pub fn encode(mut color: Rgb) -> u32 {
    let mut index = 0;
    for step in 0..LEVELS {
        let octant = octant(color, step);
        index += ORDER_FOR_OCTANT[octant as usize] << ((LEVELS - 1 - step) * 3);
        color = rotate(octant, color);
    }
    index
}

/// Color at position `index` along the curve. Bits above the low 24 are
/// ignored.
pub fn decode(mut index: u32) -> Rgb {
    let mut color = Rgb::default();

    // Rebuild from the deepest level outwards: undo the parent's rotation on
    // the bits found so far, then prepend the parent's octant bit.
    for _ in 0..LEVELS {
        let octant = OCTANT_FOR_ORDER[(index & 0b111) as usize];
        color = unrotate(octant, color);

        color.r = (color.r >> 1) | if octant & 0b100 != 0 { 0x80 } else { 0 };
        color.g = (color.g >> 1) | if octant & 0b010 != 0 { 0x80 } else { 0 };
        color.b = (color.b >> 1) | if octant & 0b001 != 0 { 0x80 } else { 0 };

        index >>= 3;
    }

    color
}

/// Whether `lhs` comes strictly before `rhs` along the curve.
///
/// Equivalent to `encode(lhs) < encode(rhs)`, but stops at the first level
/// where the two colors fall into different octants.
pub fn compare(mut lhs: Rgb, mut rhs: Rgb) -> bool {
    for step in 0..LEVELS {
        let lhs_octant = octant(lhs, step);
        let rhs_octant = octant(rhs, step);

        if lhs_octant != rhs_octant {
            return ORDER_FOR_OCTANT[lhs_octant as usize] < ORDER_FOR_OCTANT[rhs_octant as usize];
        }

        lhs = rotate(lhs_octant, lhs);
        rhs = rotate(rhs_octant, rhs);
    }

    // Same octant at every level: same color.
    false
}

/// [`compare`] as an [`Ordering`], for `sort_by`.
///
/// ```
/// use allrgb_core::{hilbert, Rgb};
///
/// let mut colors = vec![Rgb::new(0, 0, 255), Rgb::new(0, 0, 0), Rgb::new(0, 255, 0)];
/// colors.sort_by(|a, b| hilbert::ordering(*a, *b));
/// assert_eq!(colors[0], Rgb::new(0, 0, 0));
/// assert_eq!(colors[2], Rgb::new(0, 0, 255));
/// ```
pub fn ordering(lhs: Rgb, rhs: Rgb) -> Ordering {
    if compare(lhs, rhs) {
        Ordering::Less
    } else if compare(rhs, lhs) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
