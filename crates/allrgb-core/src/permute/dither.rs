//! Neighborhood-blurred compare-and-swap.

use rand::RngCore;

use crate::color::{diff2, Lab, Pixel, Rgb, RgbFloat};
use crate::error::GridError;
use crate::grid::Grid;

use super::{rms_error, CandidatePairs, PassReport, Permute, RMS_INTERVAL};

/// Weight of the center cell in the 3x3 blur.
const CENTER_WEIGHT: f32 = 4.0;

/// `(row offset, col offset, weight)` of the eight neighbors, row-major.
///
/// ```text
/// 1 2 1
/// 2 . 2
/// 1 2 1
/// ```
const NEIGHBORS: [(isize, isize, f32); 8] = [
    (-1, -1, 1.0),
    (-1, 0, 2.0),
    (-1, 1, 1.0),
    (0, -1, 2.0),
    (0, 1, 2.0),
    (1, -1, 1.0),
    (1, 0, 2.0),
    (1, 1, 1.0),
];

/// Which sides of the grid a cell touches, as a 4-bit mask.
const TOP: usize = 1;
const BOTTOM: usize = 2;
const LEFT: usize = 4;
const RIGHT: usize = 8;

/// In-bounds neighbors of `index` with their kernel weights.
///
/// Dropping out-of-bounds taps gives the truncated kernels for the four
/// edges and four corners; a one-row or one-column grid truncates on both
/// sides.
fn neighbors(rows: usize, cols: usize, index: usize) -> impl Iterator<Item = (usize, f32)> {
    let (row, col) = (index / cols, index % cols);
    NEIGHBORS.iter().filter_map(move |&(dr, dc, weight)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r * cols + c, weight))
    })
}

/// Per-cell blur state for the current output arrangement.
///
/// `sums[i]` is the weighted sum of the colors currently around cell `i`,
/// excluding the cell itself, so the blurred value of `i` holding any
/// candidate color is one multiply-add away. The full kernel weight only
/// depends on which sides of the grid a cell touches (16 inside, 12 along an
/// edge, 9 in a corner), so its reciprocal is looked up by edge mask.
#[derive(Debug, Clone)]
pub(crate) struct BlurField {
    sums: Grid<RgbFloat>,
    scales: [f32; 16],
}

impl BlurField {
    /// Convolve `output` once to seed the sums.
    pub(crate) fn new(output: &Grid<Rgb>) -> Self {
        let (rows, cols) = (output.rows(), output.cols());
        let mut sums = output.map(|_| RgbFloat::default());

        for (index, sum) in sums.as_mut_slice().iter_mut().enumerate() {
            for (neighbor, weight) in neighbors(rows, cols, index) {
                *sum += RgbFloat::from(output[neighbor]) * weight;
            }
        }

        let mut scales = [0.0; 16];
        for (mask, scale) in scales.iter_mut().enumerate() {
            let weight: f32 = NEIGHBORS
                .iter()
                .filter(|&&(dr, dc, _)| {
                    !(dr < 0 && mask & TOP != 0
                        || dr > 0 && mask & BOTTOM != 0
                        || dc < 0 && mask & LEFT != 0
                        || dc > 0 && mask & RIGHT != 0)
                })
                .map(|&(_, _, weight)| weight)
                .sum();
            *scale = 1.0 / (CENTER_WEIGHT + weight);
        }

        Self { sums, scales }
    }

    /// Sides of the grid that cell `index` touches.
    #[inline]
    fn edges(&self, index: usize) -> usize {
        let (rows, cols) = (self.sums.rows(), self.sums.cols());
        let (row, col) = (index / cols, index % cols);
        let mut mask = 0;
        if row == 0 {
            mask |= TOP;
        }
        if row + 1 == rows {
            mask |= BOTTOM;
        }
        if col == 0 {
            mask |= LEFT;
        }
        if col + 1 == cols {
            mask |= RIGHT;
        }
        mask
    }

    /// Reciprocal of the kernel weight at `index`.
    #[inline]
    fn scale(&self, index: usize) -> f32 {
        self.scales[self.edges(index)]
    }

    /// Blurred color of cell `index` if it held `center`.
    #[inline]
    pub(crate) fn blurred(&self, index: usize, center: Rgb) -> RgbFloat {
        (self.sums[index] + RgbFloat::from(center) * CENTER_WEIGHT) * self.scale(index)
    }

    /// Add `delta` times the kernel weight to every neighbor of `index`.
    fn spread(&mut self, index: usize, delta: RgbFloat) {
        let (rows, cols) = (self.sums.rows(), self.sums.cols());
        for (neighbor, weight) in neighbors(rows, cols, index) {
            self.sums[neighbor] += delta * weight;
        }
    }

    /// Swap two output cells and bring the sums around both up to date.
    pub(crate) fn swap(&mut self, output: &mut Grid<Rgb>, here: usize, there: usize) {
        let here_color = RgbFloat::from(output[here]);
        let there_color = RgbFloat::from(output[there]);

        // `there` now shows what `here` showed, and the other way round.
        self.spread(there, here_color - there_color);
        self.spread(here, there_color - here_color);
        output.swap(here, there);
    }
}

/// Compare-and-swap judged on blurred neighborhoods.
///
/// Works like [`CompareAndSwap`](super::CompareAndSwap), but the error of a
/// cell is the Lab distance between the reference pixel and a 3x3 weighted
/// blur of the output around that cell. A cell may then hold a color far
/// from its reference as long as its neighborhood averages out, which
/// produces dithering in flat regions while edges stay sharp.
///
/// When evaluating a pair, each cell's blur assumes its neighbors keep their
/// current colors. If `here` and `there` are adjacent the estimate misses
/// that one of those neighbors moves too; the sums are still updated exactly
/// once the swap is made.
///
/// Each pass is logged at `info` with its swap count and frequency, and
/// every [`RMS_INTERVAL`] passes with the unblurred RMS Lab error.
#[derive(Debug, Clone, Copy)]
pub struct DitheredSwap {
    passes: usize,
}

impl DitheredSwap {
    pub fn new(passes: usize) -> Self {
        Self { passes }
    }
}

impl Permute for DitheredSwap {
    fn name(&self) -> &'static str {
        "dither"
    }

    fn permute(
        &self,
        reference: &Grid<Pixel>,
        output: &mut Grid<Rgb>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<PassReport>, GridError> {
        reference.ensure_same_shape(output)?;

        let mut field = BlurField::new(output);
        let mut pairs = CandidatePairs::new(output.len());
        let mut reports = Vec::with_capacity(self.passes);

        for pass in 0..self.passes {
            pairs.shuffle(rng);
            let mut swaps = 0;

            for (here, there) in pairs.iter() {
                let here_color = output[here];
                let there_color = output[there];

                let here_target = reference[here].lab();
                let there_target = reference[there].lab();

                let keep = diff2(Lab::from(field.blurred(here, here_color)), here_target)
                    + diff2(Lab::from(field.blurred(there, there_color)), there_target);
                let swapped = diff2(Lab::from(field.blurred(here, there_color)), here_target)
                    + diff2(Lab::from(field.blurred(there, here_color)), there_target);

                if swapped < keep {
                    field.swap(output, here, there);
                    swaps += 1;
                }
            }

            let rms = (pass % RMS_INTERVAL == 0)
                .then(|| rms_error(output.iter().map(|&color| Lab::from(color)), reference));
            let report = PassReport {
                pass,
                swaps,
                cells: output.len(),
                rms,
            };
            tracing::info!(
                pass,
                swaps,
                cells = report.cells,
                frequency = report.frequency(),
                rms = ?report.rms,
                "Dither pass complete"
            );
            reports.push(report);
        }

        Ok(reports)
    }
}
