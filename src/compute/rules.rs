//! Conway transition rules (B3/S23).
//!
//! Rules are applied in this order:
//! 1. Live cell with 0-1 live neighbors dies (underpopulation).
//! 2. Dead cell with exactly 3 live neighbors becomes alive (reproduction).
//! 3. Live cell with 2-3 live neighbors survives.
//! 4. Live cell with 4 or more live neighbors dies (overpopulation).
//!
//! Any other dead cell stays dead.

use super::grid::{ALIVE, DEAD, Grid};

/// Compute the next state of a single cell from its state and live neighbor count.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 0..=1) => DEAD,
        (false, 3) => ALIVE,
        (true, 2..=3) => ALIVE,
        (true, _) => DEAD,
        (false, _) => DEAD,
    }
}

/// Compute the next generation into a new grid.
///
/// Neighbor counts are always read from `grid`, never from the output.
pub fn compute_new_grid(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    compute_new_grid_into(grid, &mut next);
    next
}

/// Compute the next generation into a pre-allocated grid of the same shape.
///
/// # Panics
/// Panics if `next` has different dimensions than `current`.
pub(crate) fn compute_new_grid_into(current: &Grid, next: &mut Grid) {
    assert_eq!(
        (current.rows(), current.cols()),
        (next.rows(), next.cols()),
        "grid shapes must match"
    );

    let cells = current.cells();
    let out = next.cells_mut();
    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let idx = current.idx(row, col);
            let neighbors = current.alive_neighbors_unchecked(row, col);
            out[idx] = next_state(cells[idx], neighbors);
        }
    }
}
