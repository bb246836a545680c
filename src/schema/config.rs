//! Configuration types for Game of Life runs.

use serde::{Deserialize, Serialize};

use super::{Pattern, Seed};
use crate::compute::cell_count;

/// Largest grid a seed may request (cells).
pub const MAX_GRID_CELLS: usize = 1 << 28;

/// Report every generation unless configured otherwise.
fn default_report_interval() -> u64 {
    1
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of generations to advance.
    pub generations: u64,
    /// Print progress every this many generations.
    #[serde(default = "default_report_interval")]
    pub report_interval: u64,
    /// Initial grid.
    #[serde(default)]
    pub seed: Seed,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 4,
            report_interval: 1,
            seed: Seed::default(),
        }
    }
}

impl SimulationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_interval == 0 {
            return Err(ConfigError::InvalidReportInterval);
        }
        self.seed.validate()
    }
}

impl Seed {
    /// Validate seed parameters without generating the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.pattern {
            Pattern::Default | Pattern::Text { .. } | Pattern::File { .. } => Ok(()),
            Pattern::Cells { rows, cols, alive } => {
                check_dimensions(*rows, *cols)?;
                match alive.iter().find(|&&(r, c)| r >= *rows || c >= *cols) {
                    Some(&(row, col)) => Err(ConfigError::CellOutOfRange { row, col }),
                    None => Ok(()),
                }
            }
            Pattern::Random {
                rows,
                cols,
                density,
                ..
            } => {
                check_dimensions(*rows, *cols)?;
                if !(0.0..=1.0).contains(density) {
                    return Err(ConfigError::InvalidDensity(*density));
                }
                Ok(())
            }
        }
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::InvalidDimensions);
    }
    match cell_count(rows, cols) {
        Some(n) if n <= MAX_GRID_CELLS => Ok(()),
        _ => Err(ConfigError::GridTooLarge { rows, cols }),
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero")]
    InvalidDimensions,
    #[error("A {rows}x{cols} grid exceeds {max} cells", max = MAX_GRID_CELLS)]
    GridTooLarge { rows: usize, cols: usize },
    #[error("Report interval must be non-zero")]
    InvalidReportInterval,
    #[error("Density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("Cell ({row}, {col}) is outside the grid")]
    CellOutOfRange { row: usize, col: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SeedError;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_report_interval() {
        let config = SimulationConfig {
            report_interval: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidReportInterval));
    }

    #[test]
    fn test_invalid_seeds() {
        let seed = Seed {
            pattern: Pattern::Cells {
                rows: 0,
                cols: 4,
                alive: vec![],
            },
        };
        assert_eq!(seed.validate(), Err(ConfigError::InvalidDimensions));

        let seed = Seed {
            pattern: Pattern::Cells {
                rows: 3,
                cols: 3,
                alive: vec![(1, 1), (3, 0)],
            },
        };
        assert_eq!(
            seed.validate(),
            Err(ConfigError::CellOutOfRange { row: 3, col: 0 })
        );

        let seed = Seed {
            pattern: Pattern::Random {
                rows: 4,
                cols: 4,
                density: 1.5,
                seed: 1,
            },
        };
        assert_eq!(seed.validate(), Err(ConfigError::InvalidDensity(1.5)));
    }

    #[test]
    fn test_oversized_seeds() {
        let seed: Seed = serde_json::from_str(
            r#"{ "pattern": { "type": "Cells", "rows": 10000000000, "cols": 10000000000, "alive": [] } }"#,
        )
        .unwrap();
        assert_eq!(
            seed.validate(),
            Err(ConfigError::GridTooLarge {
                rows: 10_000_000_000,
                cols: 10_000_000_000
            })
        );

        let seed = Seed {
            pattern: Pattern::Random {
                rows: 1_000_000,
                cols: 1_000_000,
                density: 0.5,
                seed: 1,
            },
        };
        assert_eq!(
            seed.validate(),
            Err(ConfigError::GridTooLarge {
                rows: 1_000_000,
                cols: 1_000_000
            })
        );

        let seed = Seed {
            pattern: Pattern::Cells {
                rows: usize::MAX,
                cols: 2,
                alive: vec![],
            },
        };
        assert!(matches!(
            seed.generate(),
            Err(SeedError::Config(ConfigError::GridTooLarge { .. }))
        ));
    }

    #[test]
    fn test_json_roundtrip_defaults() {
        let json = r#"{ "generations": 10, "seed": { "pattern": { "type": "Default" } } }"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.generations, 10);
        assert_eq!(config.report_interval, 1);
        assert!(matches!(config.seed.pattern, Pattern::Default));

        let json = r#"{ "generations": 3 }"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(config.seed.pattern, Pattern::Default));
    }
}
