//! Weighted quick-union over grid cells.
//!
//! Stored as two parallel arrays indexed by flattened (row, col):
//! `parent` links and subtree `weight`. The smaller tree is always
//! attached under the larger one (on ties the second root goes under the first),
//! and `find` halves paths as it walks.

use super::grid::IndexError;

/// Disjoint-set structure over an R x C grid of cells.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    rows: usize,
    cols: usize,
    parent: Vec<usize>,
    weight: Vec<usize>,
    /// Number of disjoint sets across all elements.
    count: usize,
}

impl WeightedQuickUnion {
    /// Create R x C singleton sets, each with weight 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let n = rows * cols;
        Self {
            rows,
            cols,
            parent: (0..n).collect(),
            weight: vec![1; n],
            count: n,
        }
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets, dead cells included.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flatten (row, col) to an element index.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> Result<usize, IndexError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(IndexError {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Root of the set containing element `p`.
    ///
    /// # Panics
    /// Panics if `p >= self.len()`.
    pub fn find_index(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    /// Merge the sets containing elements `p` and `q`.
    ///
    /// # Panics
    /// Panics if either index is `>= self.len()`.
    pub fn union_index(&mut self, p: usize, q: usize) {
        let root_p = self.find_index(p);
        let root_q = self.find_index(q);
        if root_p == root_q {
            return;
        }

        let (big, small) = if self.weight[root_p] >= self.weight[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = big;
        self.weight[big] += self.weight[small];
        self.count -= 1;
    }

    /// Root (as a flat index) of the set containing (row, col).
    pub fn find(&mut self, row: usize, col: usize) -> Result<usize, IndexError> {
        let p = self.index(row, col)?;
        Ok(self.find_index(p))
    }

    /// Merge the sets containing (r1, c1) and (r2, c2).
    pub fn union(
        &mut self,
        r1: usize,
        c1: usize,
        r2: usize,
        c2: usize,
    ) -> Result<(), IndexError> {
        let p = self.index(r1, c1)?;
        let q = self.index(r2, c2)?;
        self.union_index(p, q);
        Ok(())
    }

    /// True if both cells belong to the same set.
    pub fn connected(
        &mut self,
        r1: usize,
        c1: usize,
        r2: usize,
        c2: usize,
    ) -> Result<bool, IndexError> {
        Ok(self.find(r1, c1)? == self.find(r2, c2)?)
    }

    /// Weight of the tree rooted at the set containing (row, col).
    pub fn set_size(&mut self, row: usize, col: usize) -> Result<usize, IndexError> {
        let root = self.find(row, col)?;
        Ok(self.weight[root])
    }
}
