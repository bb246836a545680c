//! Game of Life engine - owns the grid and drives generations.

use std::path::Path;

use crate::schema::{Seed, SeedError};
use crate::text::{self, FormatError};

use super::{
    Grid, IndexError, community_sizes, compute_new_grid, compute_new_grid_into,
    count_communities,
};

/// Side length of the built-in seed grid.
const DEFAULT_SIZE: usize = 5;

/// Live cells of the built-in seed. Dies out after four generations.
const DEFAULT_ALIVE: [(usize, usize); 5] = [(1, 1), (1, 3), (2, 2), (3, 2), (3, 3)];

/// Game of Life on a toroidal grid.
///
/// The live-cell count is cached and refreshed after every generation advance,
/// single or multi-step.
#[derive(Debug, Clone)]
pub struct GameOfLife {
    grid: Grid,
    /// Pre-allocated buffer for the next generation (swapped each step).
    next: Grid,
    total_alive_cells: usize,
    generation: u64,
}

/// The built-in 5x5 grid with five live cells.
pub fn default_grid() -> Grid {
    Grid::with_alive(DEFAULT_SIZE, DEFAULT_SIZE, &DEFAULT_ALIVE)
        .expect("built-in seed fits its grid")
}

impl Default for GameOfLife {
    fn default() -> Self {
        Self::from_grid(default_grid())
    }
}

impl GameOfLife {
    /// Built-in 5x5 grid with five live cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        let total_alive_cells = grid.count_alive();
        Self {
            next: grid.clone(),
            grid,
            total_alive_cells,
            generation: 0,
        }
    }

    /// Parse the text grid format.
    pub fn from_text(input: &str) -> Result<Self, FormatError> {
        text::parse_grid(input).map(Self::from_grid)
    }

    /// Load a grid file in the text format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FormatError> {
        text::load_grid(path).map(Self::from_grid)
    }

    /// Build from a schema seed.
    pub fn from_seed(seed: &Seed) -> Result<Self, SeedError> {
        let grid = seed.generate()?;
        log::info!(
            "Seeded {}x{} grid with {} live cells",
            grid.rows(),
            grid.cols(),
            grid.count_alive()
        );
        Ok(Self::from_grid(grid))
    }

    /// Current grid. Clone it to keep a snapshot across generations.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cached number of live cells.
    #[inline]
    pub fn total_alive_cells(&self) -> usize {
        self.total_alive_cells
    }

    /// Number of generations advanced since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// State of the cell at (row, col).
    pub fn cell_state(&self, row: usize, col: usize) -> Result<bool, IndexError> {
        self.grid.get(row, col)
    }

    /// True if at least one cell is alive.
    pub fn is_alive(&self) -> bool {
        self.grid.any_alive()
    }

    /// Live cells among the 8 toroidal neighbors of (row, col).
    pub fn num_of_alive_neighbors(&self, row: usize, col: usize) -> Result<u8, IndexError> {
        self.grid.alive_neighbors(row, col)
    }

    /// Next generation as a new grid. Does not change the engine.
    pub fn compute_new_grid(&self) -> Grid {
        compute_new_grid(&self.grid)
    }

    /// Advance one generation.
    pub fn next_generation(&mut self) {
        self.step();
        self.total_alive_cells = self.grid.count_alive();
        log::debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.total_alive_cells
        );
    }

    /// Advance `n` generations.
    pub fn next_generations(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
        self.total_alive_cells = self.grid.count_alive();
        log::debug!(
            "Advanced {} generations to {}: {} live cells",
            n,
            self.generation,
            self.total_alive_cells
        );
    }

    fn step(&mut self) {
        compute_new_grid_into(&self.grid, &mut self.next);
        std::mem::swap(&mut self.grid, &mut self.next);
        self.generation += 1;
    }

    /// Number of connected communities of live cells.
    pub fn num_of_communities(&self) -> usize {
        count_communities(&self.grid)
    }

    /// Snapshot of population statistics.
    pub fn stats(&self) -> GenerationStats {
        GenerationStats::from_engine(self)
    }
}

/// Population statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub alive_cells: usize,
    pub communities: usize,
    pub largest_community: usize,
}

impl GenerationStats {
    /// Compute statistics from the engine's current grid.
    pub fn from_engine(engine: &GameOfLife) -> Self {
        let sizes = community_sizes(engine.grid());
        Self {
            generation: engine.generation(),
            alive_cells: engine.total_alive_cells(),
            communities: sizes.len(),
            largest_community: sizes.first().copied().unwrap_or(0),
        }
    }
}
