//! Luminance rank matching.

use rand::RngCore;

use crate::color::{Lab, Pixel, Rgb};
use crate::error::GridError;
use crate::grid::Grid;

use super::{PassReport, Permute};

/// Place the n-th darkest output color where the n-th darkest reference
/// pixel is.
///
/// Both grids are ranked by ascending Lab lightness only; ties keep their
/// original index order. Hue and saturation play no part, so this is a
/// starting point for the swap stages rather than a finished image.
///
/// # Errors
///
/// [`GridError::ShapeMismatch`] when the grids differ in shape.
pub fn match_ascending(reference: &Grid<Pixel>, output: &mut Grid<Rgb>) -> Result<(), GridError> {
    reference.ensure_same_shape(output)?;

    let reference_order = rank_by_lightness(reference.iter().map(|pixel| pixel.lab().l));
    let output_order = rank_by_lightness(output.iter().map(|&color| Lab::from(color).l));

    let original = output.as_slice().to_vec();
    for (&target, &source) in reference_order.iter().zip(&output_order) {
        output[target] = original[source];
    }

    Ok(())
}

/// Indices sorted by ascending lightness. `sort_by` is stable, so equal
/// lightness keeps index order.
fn rank_by_lightness<I>(lightness: I) -> Vec<usize>
where
    I: Iterator<Item = f32>,
{
    let lightness: Vec<f32> = lightness.collect();
    let mut order: Vec<usize> = (0..lightness.len()).collect();
    order.sort_by(|&lhs, &rhs| lightness[lhs].total_cmp(&lightness[rhs]));
    order
}

/// [`match_ascending`] as a pipeline stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAscending;

impl Permute for MatchAscending {
    fn name(&self) -> &'static str {
        "match-ascending"
    }

    fn permute(
        &self,
        reference: &Grid<Pixel>,
        output: &mut Grid<Rgb>,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<PassReport>, GridError> {
        match_ascending(reference, output)?;
        tracing::info!(cells = output.len(), "Matched output to reference by luminance");
        Ok(Vec::new())
    }
}
