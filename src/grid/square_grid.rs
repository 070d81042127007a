// src/grid/square_grid.rs

use std::fmt;

use nalgebra::DMatrix;

use crate::error::GridError;

/// An N×N grid of integers with row-major semantics.
///
/// Every named operation validates its indices and leaves the grid
/// untouched on failure. Raw [`get`](SquareGrid::get)/[`set`](SquareGrid::set)
/// access relies on the backing store's bounds checks instead and panics on
/// out-of-range coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareGrid {
    data: DMatrix<i64>,
}

impl SquareGrid {
    /// Creates an N×N grid with every cell set to zero.
    pub fn zeros(size: usize) -> Self {
        SquareGrid {
            data: DMatrix::zeros(size, size),
        }
    }

    /// Creates the N×N identity grid.
    pub fn identity(size: usize) -> Self {
        SquareGrid {
            data: DMatrix::identity(size, size),
        }
    }

    /// Builds a grid from `size * size` values in row-major order.
    ///
    /// # Arguments
    ///
    /// * `size` - Side length of the grid.
    /// * `values` - Cell values, row by row.
    ///
    /// # Returns
    ///
    /// * `Ok(SquareGrid)` when `values` holds exactly `size * size` elements.
    /// * `Err(GridError::ValueCount)` otherwise.
    pub fn from_row_major(size: usize, values: &[i64]) -> Result<Self, GridError> {
        let expected = size * size;
        if values.len() != expected {
            return Err(GridError::ValueCount {
                expected,
                found: values.len(),
            });
        }
        Ok(SquareGrid {
            data: DMatrix::from_row_slice(size, size, values),
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.data.nrows()
    }

    /// Returns the value at `(row, col)`. Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[(row, col)]
    }

    /// Overwrites the value at `(row, col)`. Panics if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        self.data[(row, col)] = value;
    }

    /// Adds two grids elementwise into a new grid.
    ///
    /// Neither operand is modified. Cell sums wrap on overflow.
    ///
    /// # Arguments
    ///
    /// * `other` - The grid to add; must have the same size as `self`.
    ///
    /// # Returns
    ///
    /// * `Ok(SquareGrid)` holding the elementwise sum.
    /// * `Err(GridError::SizeMismatch)` when the sizes differ.
    pub fn add(&self, other: &SquareGrid) -> Result<SquareGrid, GridError> {
        let n = self.check_same_size(other)?;
        let mut sum = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                sum[(i, j)] = self.data[(i, j)].wrapping_add(other.data[(i, j)]);
            }
        }
        Ok(SquareGrid { data: sum })
    }

    /// Multiplies two grids with the standard row-by-column rule.
    ///
    /// `result[i][j] = Σ_k self[i][k] * other[k][j]`, accumulated in the
    /// cell type with wrapping arithmetic. Neither operand is modified.
    ///
    /// # Arguments
    ///
    /// * `other` - The right-hand factor; must have the same size as `self`.
    ///
    /// # Returns
    ///
    /// * `Ok(SquareGrid)` holding the matrix product.
    /// * `Err(GridError::SizeMismatch)` when the sizes differ.
    pub fn multiply(&self, other: &SquareGrid) -> Result<SquareGrid, GridError> {
        let n = self.check_same_size(other)?;
        let mut product = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                // Dot product of row i and column j
                let mut acc: i64 = 0;
                for k in 0..n {
                    acc = acc.wrapping_add(self.data[(i, k)].wrapping_mul(other.data[(k, j)]));
                }
                product[(i, j)] = acc;
            }
        }
        Ok(SquareGrid { data: product })
    }

    /// Sum of the cells where the row index equals the column index.
    pub fn main_diagonal_sum(&self) -> i64 {
        (0..self.size()).map(|i| self.data[(i, i)]).sum()
    }

    /// Sum of the cells where row index + column index = size - 1.
    pub fn secondary_diagonal_sum(&self) -> i64 {
        let n = self.size();
        (0..n).map(|i| self.data[(i, n - 1 - i)]).sum()
    }

    /// Exchanges the contents of two rows in place.
    ///
    /// # Arguments
    ///
    /// * `row1`, `row2` - Row indices, both in `[0, size)`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` after swapping; swapping a row with itself is a no-op.
    /// * `Err(GridError::RowIndex)` on an out-of-range index, leaving the
    ///   grid unchanged.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<(), GridError> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        self.data.swap_rows(row1, row2);
        Ok(())
    }

    /// Exchanges the contents of two columns in place.
    ///
    /// Symmetric to [`swap_rows`](SquareGrid::swap_rows), reporting
    /// `GridError::ColumnIndex` on an out-of-range index.
    pub fn swap_columns(&mut self, col1: usize, col2: usize) -> Result<(), GridError> {
        self.check_column(col1)?;
        self.check_column(col2)?;
        self.data.swap_columns(col1, col2);
        Ok(())
    }

    /// Overwrites a single cell after validating both indices.
    ///
    /// # Arguments
    ///
    /// * `row`, `col` - Cell coordinates, both in `[0, size)`.
    /// * `value` - New value for the cell.
    ///
    /// # Returns
    ///
    /// * `Ok(())` once the cell holds `value`.
    /// * `Err(GridError::RowIndex)` / `Err(GridError::ColumnIndex)` on an
    ///   out-of-range index, leaving the grid unchanged.
    pub fn update_element(&mut self, row: usize, col: usize, value: i64) -> Result<(), GridError> {
        self.check_row(row)?;
        self.check_column(col)?;
        self.data[(row, col)] = value;
        Ok(())
    }

    fn check_row(&self, index: usize) -> Result<(), GridError> {
        if index >= self.size() {
            return Err(GridError::RowIndex {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }

    fn check_column(&self, index: usize) -> Result<(), GridError> {
        if index >= self.size() {
            return Err(GridError::ColumnIndex {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }

    fn check_same_size(&self, other: &SquareGrid) -> Result<usize, GridError> {
        if self.size() != other.size() {
            return Err(GridError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(self.size())
    }
}

/// Renders one row per line, cells right-justified in fixed-width columns.
///
/// The column width is the widest rendered cell, with a floor of three
/// characters; each cell is followed by a single space.
impl fmt::Display for SquareGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1)
            .max(3);
        for i in 0..self.size() {
            for j in 0..self.size() {
                write!(f, "{:>width$} ", self.data[(i, j)], width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> SquareGrid {
        SquareGrid::from_row_major(2, &[1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn test_zeros_shape() {
        let grid = SquareGrid::zeros(3);
        assert_eq!(grid.size(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(grid.get(i, j), 0);
            }
        }
    }

    #[test]
    fn test_from_row_major_layout() {
        let grid = sample_grid();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(0, 1), 2);
        assert_eq!(grid.get(1, 0), 3);
        assert_eq!(grid.get(1, 1), 4);
    }

    #[test]
    fn test_from_row_major_rejects_wrong_count() {
        let err = SquareGrid::from_row_major(2, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            GridError::ValueCount {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = SquareGrid::zeros(2);
        grid.set(1, 0, -7);
        assert_eq!(grid.get(1, 0), -7);
    }

    #[test]
    fn test_add_elementwise() {
        let a = sample_grid();
        let b = SquareGrid::from_row_major(2, &[5, 6, 7, 8]).unwrap();
        let sum = a.add(&b).unwrap();

        let expected = SquareGrid::from_row_major(2, &[6, 8, 10, 12]).unwrap();
        assert_eq!(sum, expected);
        // Operands are untouched
        assert_eq!(a, sample_grid());
        assert_eq!(b, SquareGrid::from_row_major(2, &[5, 6, 7, 8]).unwrap());
    }

    #[test]
    fn test_add_commutative() {
        let a = SquareGrid::from_row_major(3, &[1, -2, 3, 4, 5, -6, 7, 8, 9]).unwrap();
        let b = SquareGrid::from_row_major(3, &[9, 8, 7, -6, 5, 4, 3, 2, -1]).unwrap();
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn test_add_size_mismatch() {
        let a = sample_grid();
        let b = SquareGrid::zeros(3);
        assert!(matches!(
            a.add(&b),
            Err(GridError::SizeMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_multiply_dot_product() {
        let a = sample_grid();
        let b = SquareGrid::from_row_major(2, &[5, 6, 7, 8]).unwrap();
        let product = a.multiply(&b).unwrap();

        let expected = SquareGrid::from_row_major(2, &[19, 22, 43, 50]).unwrap();
        assert_eq!(product, expected);
        // Operands are untouched
        assert_eq!(a, sample_grid());
    }

    #[test]
    fn test_multiply_by_identity() {
        let a = SquareGrid::from_row_major(3, &[2, 0, -1, 5, 3, 8, 1, 1, 4]).unwrap();
        assert_eq!(a.multiply(&SquareGrid::identity(3)).unwrap(), a);
        assert_eq!(SquareGrid::identity(3).multiply(&a).unwrap(), a);
    }

    #[test]
    fn test_multiply_size_mismatch() {
        let a = sample_grid();
        let b = SquareGrid::zeros(3);
        assert!(matches!(
            a.multiply(&b),
            Err(GridError::SizeMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_diagonal_sums() {
        let grid = sample_grid();
        assert_eq!(grid.main_diagonal_sum(), 5);
        assert_eq!(grid.secondary_diagonal_sum(), 5);
    }

    #[test]
    fn test_diagonal_sums_ignore_off_diagonal_cells() {
        let mut grid = SquareGrid::from_row_major(3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(grid.main_diagonal_sum(), 15);
        assert_eq!(grid.secondary_diagonal_sum(), 15);

        // (0,1) and (1,0) sit on neither diagonal of a 3×3 grid
        grid.set(0, 1, 100);
        grid.set(1, 0, -40);
        assert_eq!(grid.main_diagonal_sum(), 15);
        assert_eq!(grid.secondary_diagonal_sum(), 15);
    }

    #[test]
    fn test_diagonal_sums_empty_grid() {
        let grid = SquareGrid::zeros(0);
        assert_eq!(grid.main_diagonal_sum(), 0);
        assert_eq!(grid.secondary_diagonal_sum(), 0);
    }

    #[test]
    fn test_swap_rows() {
        let mut grid = sample_grid();
        grid.swap_rows(0, 1).unwrap();
        assert_eq!(grid, SquareGrid::from_row_major(2, &[3, 4, 1, 2]).unwrap());
    }

    #[test]
    fn test_swap_rows_is_self_inverse() {
        let mut grid = sample_grid();
        grid.swap_rows(0, 1).unwrap();
        grid.swap_rows(0, 1).unwrap();
        assert_eq!(grid, sample_grid());
    }

    #[test]
    fn test_swap_row_with_itself_is_noop() {
        let mut grid = sample_grid();
        grid.swap_rows(1, 1).unwrap();
        assert_eq!(grid, sample_grid());
    }

    #[test]
    fn test_swap_rows_out_of_range() {
        let mut grid = sample_grid();
        assert!(matches!(
            grid.swap_rows(0, 2),
            Err(GridError::RowIndex { index: 2, size: 2 })
        ));
        assert!(matches!(
            grid.swap_rows(2, 0),
            Err(GridError::RowIndex { index: 2, size: 2 })
        ));
        assert_eq!(grid, sample_grid());
    }

    #[test]
    fn test_swap_columns() {
        let mut grid = SquareGrid::from_row_major(2, &[5, 6, 7, 8]).unwrap();
        grid.swap_columns(0, 1).unwrap();
        assert_eq!(grid, SquareGrid::from_row_major(2, &[6, 5, 8, 7]).unwrap());
    }

    #[test]
    fn test_swap_columns_out_of_range() {
        let mut grid = sample_grid();
        assert!(matches!(
            grid.swap_columns(0, 5),
            Err(GridError::ColumnIndex { index: 5, size: 2 })
        ));
        assert_eq!(grid, sample_grid());
    }

    #[test]
    fn test_update_element() {
        let mut grid = sample_grid();
        grid.update_element(0, 0, 99).unwrap();
        assert_eq!(grid, SquareGrid::from_row_major(2, &[99, 2, 3, 4]).unwrap());
    }

    #[test]
    fn test_update_element_out_of_range() {
        let mut grid = sample_grid();
        assert!(matches!(
            grid.update_element(5, 0, 1),
            Err(GridError::RowIndex { index: 5, size: 2 })
        ));
        assert!(matches!(
            grid.update_element(0, 5, 1),
            Err(GridError::ColumnIndex { index: 5, size: 2 })
        ));
        assert_eq!(grid, sample_grid());
    }

    #[test]
    fn test_display_right_justified() {
        let grid = sample_grid();
        assert_eq!(grid.to_string(), "  1   2 \n  3   4 \n");
    }

    #[test]
    fn test_display_widens_for_large_values() {
        let grid = SquareGrid::from_row_major(2, &[1000, 1, 1, 1]).unwrap();
        assert_eq!(grid.to_string(), "1000    1 \n   1    1 \n");
    }
}
