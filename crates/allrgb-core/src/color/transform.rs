//! Reorientations of the RGB color cube.
//!
//! Treating an RGB triple as coordinates, the cube can be placed with its
//! origin in any of 8 corners and its axes in any of 6 orders: 48
//! orientations in total. Every orientation is a bijection on colors, so
//! applying one to a complete palette leaves it complete, while applying
//! one to a Hilbert-subsampled palette picks a different but equally even
//! subset.

use rand::seq::SliceRandom;
use rand::Rng;

use super::rgb::Rgb;

/// One of the 48 symmetries of the RGB cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTransform {
    axis_order: [usize; 3],
    axis_inverted: [bool; 3],
}

impl Default for ColorTransform {
    /// The identity orientation.
    fn default() -> Self {
        Self {
            axis_order: [0, 1, 2],
            axis_inverted: [false; 3],
        }
    }
}

impl ColorTransform {
    /// The identity orientation.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Draw a uniformly random orientation from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut transform = Self::default();
        transform.axis_order.shuffle(rng);
        for inverted in &mut transform.axis_inverted {
            *inverted = rng.gen();
        }
        transform
    }

    /// Map a color from the original cube into the reoriented one.
    pub fn apply(&self, color: Rgb) -> Rgb {
        let channels = [color.r, color.g, color.b];
        let mut inverted = [0u8; 3];
        for (out, (&channel, &flip)) in inverted
            .iter_mut()
            .zip(channels.iter().zip(&self.axis_inverted))
        {
            *out = if flip { !channel } else { channel };
        }

        Rgb::new(
            inverted[self.axis_order[0]],
            inverted[self.axis_order[1]],
            inverted[self.axis_order[2]],
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}
