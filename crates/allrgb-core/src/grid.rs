//! Row-major 2D storage shared by every stage.

use std::ops::{Index, IndexMut};

use crate::error::GridError;

/// A fixed-size, row-major grid of cells.
///
/// The shape is set at construction and never changes; cell `(row, col)`
/// lives at linear index `row * cols + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a `rows x cols` grid with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        })
    }
}

impl<T> Grid<T> {
    /// Wrap row-major `cells` as a `rows x cols` grid.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                rows,
                cols,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: grids have positive dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }


    /// Exchange the contents of two cells.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// A grid of the same shape with `f` applied to every cell.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Fail unless `other` has exactly this grid's shape. `self` is taken to
    /// be the reference side in the error.
    pub fn ensure_same_shape<U>(&self, other: &Grid<U>) -> Result<(), GridError> {
        if self.rows == other.rows && self.cols == other.cols {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                reference_rows: self.rows,
                reference_cols: self.cols,
                output_rows: other.rows,
                output_cols: other.cols,
            })
        }
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        Err(GridError::EmptyDimensions { rows, cols })
    } else {
        Ok(())
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.cells[index]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.cells[index]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(col < self.cols, "column {col} out of range");
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(col < self.cols, "column {col} out of range");
        &mut self.cells[row * self.cols + col]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
