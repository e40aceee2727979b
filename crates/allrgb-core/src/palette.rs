//! Palette generation
//!
//! A palette is the multiset of colors an output image is built from, one per
//! cell. With exactly 2^24 cells it is every color once. With any other cell
//! count the colors are sampled at even steps along the Hilbert curve
//! (see [`crate::hilbert`]). Counting through colors in channel order and
//! taking every n-th one would slice the cube along the blue axis only; the
//! curve spreads the samples through all three channels.

use crate::color::{Rgb, NUM_COLORS};
use crate::error::PaletteError;
use crate::hilbert;

/// Last index on the Hilbert curve.
const LAST_INDEX: u32 = NUM_COLORS as u32 - 1;

/// Generate `size` colors evenly covering the RGB cube.
///
/// - `size == 2^24`: every color once, in plain `0xRRGGBB` counting order.
/// - otherwise: sample `i` is the color at Hilbert index
///   `round(i * 2^24 / (size - 1))` for `i < size - 1`, and the last sample
///   is exactly the final curve index, so both ends of the curve are always
///   present. Sizes above 2^24 necessarily repeat colors.
///
/// # Errors
///
/// [`PaletteError::TooSmall`] when `size < 2`: Hilbert sampling needs both
/// endpoints.
///
/// # Example
///
/// ```
/// use allrgb_core::{generate_palette, Rgb};
///
/// let palette = generate_palette(2).unwrap();
/// assert_eq!(palette, vec![Rgb::new(0, 0, 0), Rgb::new(0, 0, 255)]);
/// ```
pub fn generate_palette(size: usize) -> Result<Vec<Rgb>, PaletteError> {
    if size == NUM_COLORS {
        return Ok((0..NUM_COLORS as u32).map(Rgb::from_u32).collect());
    }
    if size < 2 {
        return Err(PaletteError::TooSmall { size });
    }

    let delta = NUM_COLORS as f64 / (size - 1) as f64;
    let mut colors = Vec::with_capacity(size);
    for i in 0..size - 1 {
        // Rounding can only reach 2^24 for sizes far above 2^24.
        let index = ((i as f64 * delta).round() as u32).min(LAST_INDEX);
        colors.push(hilbert::decode(index));
    }
    colors.push(hilbert::decode(LAST_INDEX));

    Ok(colors)
}

/// Whether `colors` holds each of the 2^24 colors exactly once.
pub fn has_all_colors<'a, I>(colors: I) -> bool
where
    I: IntoIterator<Item = &'a Rgb>,
{
    let mut seen = vec![false; NUM_COLORS];
    let mut count = 0usize;

    for color in colors {
        let slot = &mut seen[color.to_u32() as usize];
        if *slot {
            return false;
        }
        *slot = true;
        count += 1;
    }

    count == NUM_COLORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_palette_is_counting_order() {
        let palette = generate_palette(NUM_COLORS).unwrap();
        assert_eq!(palette.len(), NUM_COLORS);
        assert_eq!(palette[0], Rgb::new(0, 0, 0));
        assert_eq!(palette[1], Rgb::new(0, 0, 1));
        assert_eq!(palette[256], Rgb::new(0, 1, 0));
        assert_eq!(palette[NUM_COLORS - 1], Rgb::new(255, 255, 255));
        assert!(has_all_colors(&palette));
    }

    #[test]
    fn test_has_all_colors_detects_changes() {
        let mut palette = generate_palette(NUM_COLORS).unwrap();
        palette[0].r = palette[0].r.wrapping_add(1);
        assert!(!has_all_colors(&palette));

        palette.truncate(10);
        assert!(!has_all_colors(&palette));
    }

    #[test]
    fn test_too_small() {
        assert_eq!(
            generate_palette(0),
            Err(PaletteError::TooSmall { size: 0 })
        );
        assert_eq!(
            generate_palette(1),
            Err(PaletteError::TooSmall { size: 1 })
        );
    }

    #[test]
    fn test_two_colors_are_curve_endpoints() {
        let palette = generate_palette(2).unwrap();
        assert_eq!(palette, vec![hilbert::decode(0), hilbert::decode(LAST_INDEX)]);
    }

    #[test]
    fn test_even_sampling() {
        let size = 10_000;
        let delta = NUM_COLORS as f64 / (size - 1) as f64;
        let small = delta.floor() as u32;
        let large = delta.ceil() as u32;

        let palette = generate_palette(size).unwrap();
        assert_eq!(palette.len(), size);

        let indices: Vec<u32> = palette.iter().map(|&c| hilbert::encode(c)).collect();
        assert_eq!(indices[0], 0);
        assert_eq!(indices[size - 1], LAST_INDEX);
        for pair in indices.windows(2) {
            let step = pair[1] - pair[0];
            assert!(
                step == small || step == large,
                "step {step} between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_sampled_steps_are_even_for_other_sizes() {
        // The forced final sample may land one short of the regular step;
        // every earlier step is floor or ceil of the spacing.
        for size in [3usize, 4, 1000, 65_536, 1 << 20] {
            let delta = NUM_COLORS as f64 / (size - 1) as f64;
            let small = delta.floor() as u32;
            let large = delta.ceil() as u32;

            let palette = generate_palette(size).unwrap();
            let indices: Vec<u32> = palette.iter().map(|&c| hilbert::encode(c)).collect();
            for pair in indices[..size - 1].windows(2) {
                let step = pair[1] - pair[0];
                assert!(step == small || step == large, "size {size}: step {step}");
            }
            let last_step = indices[size - 1] - indices[size - 2];
            assert!(last_step + 1 >= small && last_step <= large, "size {size}: last {last_step}");
            assert_eq!(indices[size - 1], LAST_INDEX);
        }
    }

    #[test]
    fn test_oversized_palette_repeats() {
        let size = NUM_COLORS + 1;
        let palette = generate_palette(size).unwrap();
        assert_eq!(palette.len(), size);
        assert_eq!(palette[size - 1], hilbert::decode(LAST_INDEX));
        assert!(!has_all_colors(&palette));
    }
}
