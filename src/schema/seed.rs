//! Seed types for initializing Game of Life grids.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::compute::{Grid, cell_count, default_grid};
use crate::text::{self, FormatError};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Built-in 5x5 grid with five live cells.
    #[default]
    Default,
    /// Explicit list of live cells.
    Cells {
        rows: usize,
        cols: usize,
        /// (row, col) of each live cell.
        alive: Vec<(usize, usize)>,
    },
    /// Inline grid in the text format.
    Text { grid: String },
    /// Grid file in the text format.
    File { path: PathBuf },
    /// Uniform random cells.
    Random {
        rows: usize,
        cols: usize,
        /// Probability that a cell starts alive.
        density: f64,
        /// Random seed.
        seed: u64,
    },
}

/// Errors while turning a seed into a grid.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid seed: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid grid: {0}")]
    Format(#[from] FormatError),
}

impl Seed {
    /// Generate the initial grid.
    pub fn generate(&self) -> Result<Grid, SeedError> {
        self.validate()?;

        let grid = match &self.pattern {
            Pattern::Default => default_grid(),
            Pattern::Cells { rows, cols, alive } => Grid::with_alive(*rows, *cols, alive)
                .ok_or(ConfigError::InvalidDimensions)?,
            Pattern::Text { grid } => text::parse_grid(grid)?,
            Pattern::File { path } => text::load_grid(path)?,
            Pattern::Random {
                rows,
                cols,
                density,
                seed,
            } => random_grid(*rows, *cols, *density, *seed)?,
        };

        Ok(grid)
    }
}

fn random_grid(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Grid, ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cell_count(rows, cols).ok_or(ConfigError::GridTooLarge { rows, cols })?;
    let cells = (0..n).map(|_| rng.gen_bool(density)).collect();
    Grid::from_cells(rows, cols, cells).ok_or(ConfigError::InvalidDimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_pattern() {
        let grid = Seed::default().generate().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (5, 5));
        assert_eq!(grid.count_alive(), 5);
    }

    #[test]
    fn test_cells_pattern() {
        let seed = Seed {
            pattern: Pattern::Cells {
                rows: 3,
                cols: 4,
                alive: vec![(0, 0), (2, 3)],
            },
        };
        let grid = seed.generate().unwrap();
        assert!(grid.get(0, 0).unwrap());
        assert!(grid.get(2, 3).unwrap());
        assert_eq!(grid.count_alive(), 2);
    }

    #[test]
    fn test_text_pattern() {
        let seed = Seed {
            pattern: Pattern::Text {
                grid: "1 3\ntrue false true".to_string(),
            },
        };
        assert_eq!(seed.generate().unwrap().cells(), &[true, false, true]);

        let bad = Seed {
            pattern: Pattern::Text {
                grid: "2 2 true".to_string(),
            },
        };
        assert!(matches!(bad.generate(), Err(SeedError::Format(_))));
    }

    #[test]
    fn test_file_pattern() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.txt");
        fs::write(&path, "2\n2\ntrue true\ntrue true\n").unwrap();

        let seed = Seed {
            pattern: Pattern::File { path },
        };
        assert_eq!(seed.generate().unwrap().count_alive(), 4);
    }

    #[test]
    fn test_random_is_deterministic() {
        let pattern = Pattern::Random {
            rows: 16,
            cols: 16,
            density: 0.5,
            seed: 42,
        };
        let a = Seed {
            pattern: pattern.clone(),
        }
        .generate()
        .unwrap();
        let b = Seed { pattern }.generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_density_extremes() {
        let empty = Seed {
            pattern: Pattern::Random {
                rows: 8,
                cols: 8,
                density: 0.0,
                seed: 7,
            },
        };
        assert_eq!(empty.generate().unwrap().count_alive(), 0);

        let full = Seed {
            pattern: Pattern::Random {
                rows: 8,
                cols: 8,
                density: 1.0,
                seed: 7,
            },
        };
        assert_eq!(full.generate().unwrap().count_alive(), 64);
    }

    #[test]
    fn test_invalid_seed_rejected() {
        let seed = Seed {
            pattern: Pattern::Cells {
                rows: 2,
                cols: 2,
                alive: vec![(5, 5)],
            },
        };
        assert!(matches!(
            seed.generate(),
            Err(SeedError::Config(ConfigError::CellOutOfRange { row: 5, col: 5 }))
        ));
    }

    #[test]
    fn test_pattern_json_tag() {
        let seed: Seed = serde_json::from_str(
            r#"{ "pattern": { "type": "Cells", "rows": 2, "cols": 2, "alive": [[0, 1]] } }"#,
        )
        .unwrap();
        assert!(seed.generate().unwrap().get(0, 1).unwrap());
    }
}
