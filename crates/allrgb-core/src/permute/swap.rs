//! Randomized compare-and-swap local search.

use rand::RngCore;

use crate::color::{Pixel, Rgb};
use crate::error::GridError;
use crate::grid::Grid;

use super::{rms_error, CandidatePairs, PassReport, Permute, RMS_INTERVAL};

/// Stochastic hill climbing on the summed per-pixel Lab error.
///
/// # Algorithm
///
/// Each pass draws two random permutations of the cell indices, `here` and
/// `there`, and walks them in step. For each pair it compares
///
/// ```text
/// keep    = diff2(out[here], ref[here]) + diff2(out[there], ref[there])
/// swapped = diff2(out[here], ref[there]) + diff2(out[there], ref[here])
/// ```
///
/// and swaps the two output cells only if `swapped < keep`. Ties keep the
/// current arrangement, so no pair can oscillate. A pass therefore proposes
/// exactly as many swaps as there are cells and never increases the total
/// error.
///
/// The result depends on the number of passes and the random stream; it is
/// a local search, not an exact assignment.
#[derive(Debug, Clone, Copy)]
pub struct CompareAndSwap {
    passes: usize,
}

impl CompareAndSwap {
    pub fn new(passes: usize) -> Self {
        Self { passes }
    }
}

impl Permute for CompareAndSwap {
    fn name(&self) -> &'static str {
        "swap"
    }

    fn permute(
        &self,
        reference: &Grid<Pixel>,
        output: &mut Grid<Rgb>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<PassReport>, GridError> {
        reference.ensure_same_shape(output)?;

        // Swapping whole pixels keeps each color paired with its Lab value.
        let mut working = output.map(|&color| Pixel::new(color));
        let mut pairs = CandidatePairs::new(working.len());
        let mut reports = Vec::with_capacity(self.passes);

        for pass in 0..self.passes {
            pairs.shuffle(rng);
            let mut swaps = 0;

            for (here, there) in pairs.iter() {
                let keep = working[here].diff2(&reference[here])
                    + working[there].diff2(&reference[there]);
                let swapped = working[here].diff2(&reference[there])
                    + working[there].diff2(&reference[here]);

                if swapped < keep {
                    working.swap(here, there);
                    swaps += 1;
                }
            }

            let rms = (pass % RMS_INTERVAL == 0)
                .then(|| rms_error(working.iter().map(Pixel::lab), reference));
            let report = PassReport {
                pass,
                swaps,
                cells: working.len(),
                rms,
            };
            tracing::debug!(
                pass,
                swaps,
                frequency = report.frequency(),
                rms = ?report.rms,
                "Swap pass complete"
            );
            reports.push(report);
        }

        for (cell, pixel) in output.as_mut_slice().iter_mut().zip(working.iter()) {
            *cell = pixel.color();
        }

        Ok(reports)
    }
}
