//! Community counting over live cells.
//!
//! A community is a maximal set of live cells connected through the same
//! 8-direction toroidal neighborhood used by the transition rules.

use std::collections::{HashMap, HashSet};

use super::{Grid, WeightedQuickUnion};

/// Union every live cell with its live toroidal neighbors.
///
/// The structure is built fresh for `grid` and owned by the caller.
pub fn build_union_find(grid: &Grid) -> WeightedQuickUnion {
    let mut uf = WeightedQuickUnion::new(grid.rows(), grid.cols());
    let cells = grid.cells();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let idx = grid.idx(row, col);
            if !cells[idx] {
                continue;
            }
            for neighbor in grid.neighbor_indices(row, col) {
                if cells[neighbor] {
                    uf.union_index(idx, neighbor);
                }
            }
        }
    }

    uf
}

/// Number of distinct communities of live cells.
///
/// Returns 0 for an all-dead grid. An isolated live cell is its own community.
pub fn count_communities(grid: &Grid) -> usize {
    let mut uf = build_union_find(grid);

    let roots: HashSet<usize> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &alive)| alive)
        .map(|(idx, _)| uf.find_index(idx))
        .collect();

    log::debug!(
        "{} communities among {} live cells",
        roots.len(),
        grid.count_alive()
    );
    roots.len()
}

/// Sizes of every community, largest first.
pub fn community_sizes(grid: &Grid) -> Vec<usize> {
    let mut uf = build_union_find(grid);
    let mut sizes = HashMap::new();

    for (idx, &alive) in grid.cells().iter().enumerate() {
        if alive {
            *sizes.entry(uf.find_index(idx)).or_insert(0usize) += 1;
        }
    }

    let mut sizes: Vec<usize> = sizes.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}
