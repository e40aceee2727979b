//! Error types for the allrgb engine.
//!
//! Everything in the engine is a deterministic function of its inputs, so
//! these errors only describe inputs that can never produce a result:
//! palettes too small to sample and grids whose shapes disagree.

use thiserror::Error;

/// Error type for palette generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Hilbert sampling needs both endpoints, so at least two colors.
    #[error("palette must hold at least 2 colors, got {size}")]
    TooSmall {
        /// Requested palette size
        size: usize,
    },
}

/// Error type for grid construction and grid pairing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows or columns were zero.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },
    /// The backing vector does not hold `rows * cols` cells.
    #[error("grid of {rows}x{cols} needs {expected} cells, got {actual}")]
    CellCount {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
        /// `rows * cols`
        expected: usize,
        /// Length of the supplied data
        actual: usize,
    },
    /// Reference and working grids must have identical shapes.
    #[error("grid shape mismatch: reference is {reference_rows}x{reference_cols}, output is {output_rows}x{output_cols}")]
    ShapeMismatch {
        /// Reference grid rows
        reference_rows: usize,
        /// Reference grid columns
        reference_cols: usize,
        /// Output grid rows
        output_rows: usize,
        /// Output grid columns
        output_cols: usize,
    },
}
