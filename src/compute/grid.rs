//! Toroidal grid of binary cell states.
//!
//! Cells are stored as a flat row-major array: index = row * cols + col.
//! Edges wrap, so row -1 is row R-1 and column C is column 0.

use std::fmt;

/// A live cell.
pub const ALIVE: bool = true;
/// A dead cell.
pub const DEAD: bool = false;

/// Offsets of the 8 cells surrounding a cell, as (row, col) deltas.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Coordinate outside the grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
pub struct IndexError {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Wrap a signed coordinate onto `[0, size)`.
#[inline]
pub fn wrap(coord: isize, size: usize) -> usize {
    coord.rem_euclid(size as isize) as usize
}

/// Rectangular grid of live/dead cells with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Number of cells in a rows x cols grid.
///
/// Returns `None` if a dimension is zero, or if the product overflows or
/// exceeds what a single allocation can hold.
pub fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    if rows == 0 || cols == 0 {
        return None;
    }
    rows.checked_mul(cols).filter(|&n| n <= isize::MAX as usize)
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Returns `None` if the dimensions are rejected by [`cell_count`].
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        let n = cell_count(rows, cols)?;
        Some(Self {
            rows,
            cols,
            cells: vec![DEAD; n],
        })
    }

    /// Build a grid from row-major cell states.
    ///
    /// Returns `None` if the dimensions are rejected by [`cell_count`] or
    /// `cells.len()` does not match.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Option<Self> {
        if cell_count(rows, cols)? != cells.len() {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    /// Build a grid with the listed cells alive.
    ///
    /// Returns `None` if a dimension is zero or any cell is out of range.
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Option<Self> {
        let mut grid = Self::new(rows, cols)?;
        for &(row, col) in alive {
            grid.set(row, col, ALIVE).ok()?;
        }
        Some(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (rows * cols).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (row, col) to flat index.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Check bounds, returning the flat index.
    #[inline]
    pub fn checked_idx(&self, row: usize, col: usize) -> Result<usize, IndexError> {
        if row < self.rows && col < self.cols {
            Ok(self.idx(row, col))
        } else {
            Err(IndexError {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// State of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, IndexError> {
        self.checked_idx(row, col).map(|i| self.cells[i])
    }

    /// Set the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, state: bool) -> Result<(), IndexError> {
        let i = self.checked_idx(row, col)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Row-major cell states.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Copy into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Number of live cells.
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// True if any cell is alive.
    pub fn any_alive(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    /// Flat indices of the 8 toroidal neighbors of an in-bounds cell.
    ///
    /// On grids narrower than 3 in either dimension the same cell may appear
    /// more than once (and may be the cell itself).
    #[inline]
    pub fn neighbor_indices(&self, row: usize, col: usize) -> [usize; 8] {
        let mut out = [0usize; 8];
        for (slot, &(dr, dc)) in out.iter_mut().zip(NEIGHBOR_OFFSETS.iter()) {
            let r = wrap(row as isize + dr, self.rows);
            let c = wrap(col as isize + dc, self.cols);
            *slot = self.idx(r, c);
        }
        out
    }

    /// Count live cells among the 8 toroidal neighbors of an in-bounds cell.
    #[inline]
    pub fn alive_neighbors_unchecked(&self, row: usize, col: usize) -> u8 {
        self.neighbor_indices(row, col)
            .iter()
            .filter(|&&i| self.cells[i])
            .count() as u8
    }

    /// Count live cells among the 8 toroidal neighbors of (row, col).
    pub fn alive_neighbors(&self, row: usize, col: usize) -> Result<u8, IndexError> {
        self.checked_idx(row, col)?;
        Ok(self.alive_neighbors_unchecked(row, col))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                f.write_str(if cell { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Grid::new(0, 3).is_none());
        assert!(Grid::new(3, 0).is_none());
        assert!(Grid::from_cells(2, 2, vec![ALIVE; 3]).is_none());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(cell_count(usize::MAX, 2), None);
        assert_eq!(cell_count(10_000_000_000, 10_000_000_000), None);
        assert_eq!(cell_count(3, 4), Some(12));
        assert!(Grid::new(usize::MAX, 2).is_none());
        assert!(Grid::from_cells(usize::MAX, 2, vec![ALIVE; 2]).is_none());
        assert!(Grid::with_alive(10_000_000_000, 10_000_000_000, &[(0, 0)]).is_none());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(4, 5).unwrap();
        let err = grid.get(4, 0).unwrap_err();
        assert_eq!(
            err,
            IndexError {
                row: 4,
                col: 0,
                rows: 4,
                cols: 5
            }
        );
        assert!(grid.get(0, 5).is_err());
        assert!(grid.get(3, 4).is_ok());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(2, 5), 2);
        assert_eq!(wrap(-6, 5), 4);
    }

    #[test]
    fn test_corner_wraps_to_opposite_corner() {
        let grid = Grid::with_alive(6, 7, &[(5, 6)]).unwrap();
        assert_eq!(grid.alive_neighbors(0, 0).unwrap(), 1);
        assert_eq!(grid.alive_neighbors(5, 6).unwrap(), 0);
    }

    #[test]
    fn test_self_excluded() {
        let grid = Grid::with_alive(5, 5, &[(2, 2)]).unwrap();
        assert_eq!(grid.alive_neighbors(2, 2).unwrap(), 0);
        assert_eq!(grid.alive_neighbors(1, 1).unwrap(), 1);
        assert_eq!(grid.alive_neighbors(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let grid = Grid::from_cells(3, 3, vec![ALIVE; 9]).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.alive_neighbors(row, col).unwrap(), 8);
            }
        }
    }

    #[test]
    fn test_rows_and_display() {
        let grid = Grid::with_alive(2, 3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(
            grid.to_rows(),
            vec![vec![DEAD, ALIVE, DEAD], vec![DEAD, DEAD, ALIVE]]
        );
        assert_eq!(grid.to_string(), ".O.\n..O\n");
        assert_eq!(grid.count_alive(), 2);
        assert!(grid.any_alive());
    }
}
