//! Permutation stages
//!
//! Every stage rearranges the cells of an output grid so that it looks more
//! like a reference photograph. Stages only ever move colors between cells:
//! the multiset of colors in the output is the same before and after any
//! sequence of stages.
//!
//! # Stages
//!
//! - [`MatchAscending`]: one-shot, deterministic. The n-th darkest output
//!   color goes where the n-th darkest reference pixel is. Hue and saturation
//!   are ignored.
//! - [`CompareAndSwap`]: randomized local search. Propose swaps between
//!   random pairs of cells and keep those that strictly reduce the summed
//!   Lab error against the reference.
//! - [`DitheredSwap`]: the same search, but each candidate is judged by how
//!   its 3x3 blurred neighborhood compares with the reference pixel, which
//!   dithers colors while keeping fine detail.
//!
//! # Architecture
//!
//! All stages implement the [`Permute`] trait so a pipeline can chain them.
//! Randomness comes only from the generator passed in; a fixed seed and
//! fixed inputs reproduce the output exactly.
//!
//! # Example
//!
//! ```
//! use allrgb_core::{CompareAndSwap, Grid, Permute, Pixel, Rgb};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let black = Rgb::new(0, 0, 0);
//! let white = Rgb::new(255, 255, 255);
//! let reference = Grid::from_vec(1, 2, vec![Pixel::new(black), Pixel::new(white)]).unwrap();
//! let mut output = Grid::from_vec(1, 2, vec![white, black]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! CompareAndSwap::new(50).permute(&reference, &mut output, &mut rng).unwrap();
//! assert_eq!(output.as_slice(), &[black, white]);
//! ```

mod dither;
mod rank;
mod swap;

pub use dither::DitheredSwap;
pub use rank::{match_ascending, MatchAscending};
pub use swap::CompareAndSwap;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::color::{diff2, Lab, Pixel, Rgb};
use crate::error::GridError;
use crate::grid::Grid;

/// Passes whose 0-based number is a multiple of this also report RMS error.
pub const RMS_INTERVAL: usize = 10;

/// A stage that rearranges the output grid to resemble the reference.
pub trait Permute {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Rearrange `output` in place.
    ///
    /// # Arguments
    ///
    /// * `reference` - The photograph, with cached Lab values
    /// * `output` - The grid being rearranged; same shape as `reference`
    /// * `rng` - Source of all randomness for this stage
    ///
    /// # Returns
    ///
    /// One [`PassReport`] per pass run (empty for one-shot stages).
    ///
    /// # Errors
    ///
    /// [`GridError::ShapeMismatch`] when the grids differ in shape; `output`
    /// is left untouched.
    fn permute(
        &self,
        reference: &Grid<Pixel>,
        output: &mut Grid<Rgb>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<PassReport>, GridError>;
}

/// What happened during one pass of a swap stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassReport {
    /// 0-based pass number
    pub pass: usize,
    /// Accepted swaps
    pub swaps: usize,
    /// Candidate swaps proposed (the grid's cell count)
    pub cells: usize,
    /// Root-mean-square Lab error of the unblurred output after the pass,
    /// measured every [`RMS_INTERVAL`] passes
    pub rms: Option<f64>,
}

impl PassReport {
    /// Fraction of proposed swaps that were accepted.
    pub fn frequency(&self) -> f64 {
        if self.cells == 0 {
            0.0
        } else {
            self.swaps as f64 / self.cells as f64
        }
    }
}

/// The two index sequences whose position-wise pairs are proposed as swaps.
///
/// Each cell is `here` once and `there` once per pass.
pub(crate) struct CandidatePairs {
    here: Vec<usize>,
    there: Vec<usize>,
}

impl CandidatePairs {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            here: (0..len).collect(),
            there: (0..len).collect(),
        }
    }

    /// Draw fresh permutations for the next pass, `here` first.
    pub(crate) fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.here.shuffle(rng);
        self.there.shuffle(rng);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.here.iter().copied().zip(self.there.iter().copied())
    }
}

/// Root-mean-square Lab error between `colors` and the reference.
pub(crate) fn rms_error<I>(colors: I, reference: &Grid<Pixel>) -> f64
where
    I: IntoIterator<Item = Lab>,
{
    let total: f64 = colors
        .into_iter()
        .zip(reference.iter())
        .map(|(lab, target)| f64::from(diff2(lab, target.lab())))
        .sum();
    (total / reference.len() as f64).sqrt()
}

/// Sum of squared Lab errors between `output` and `reference`.
///
/// This is the quantity the swap stages minimize.
pub fn total_error(reference: &Grid<Pixel>, output: &Grid<Rgb>) -> Result<f64, GridError> {
    reference.ensure_same_shape(output)?;
    Ok(output
        .iter()
        .zip(reference.iter())
        .map(|(&color, target)| f64::from(diff2(Lab::from(color), target.lab())))
        .sum())
}
