//! Conway's Game of Life on a toroidal grid, with community counting.
//!
//! The grid wraps at every edge: the neighbors of a cell on one border
//! include cells on the opposite border. A *community* is a maximal set of
//! live cells connected through that same 8-direction neighborhood, counted
//! with a weighted quick-union structure rebuilt on every call.
//!
//! # Architecture
//!
//! - `compute`: Grid, transition rules, union-find, community counting, and
//!   the `GameOfLife` engine
//! - `schema`: Serializable configuration and seeding types
//! - `text`: The plain-text grid format (rows, cols, then row-major booleans)
//!
//! # Example
//!
//! ```rust
//! use life_communities::GameOfLife;
//!
//! let mut game = GameOfLife::from_text("3 3  false true false  false true false  false true false")
//!     .expect("valid grid");
//! assert_eq!(game.total_alive_cells(), 3);
//! assert_eq!(game.num_of_communities(), 1);
//!
//! game.next_generation();
//! assert!(game.cell_state(1, 0).unwrap());
//! ```

pub mod compute;
pub mod schema;
pub mod text;

// Re-export commonly used types
pub use compute::{GameOfLife, GenerationStats, Grid, IndexError, WeightedQuickUnion};
pub use schema::{Pattern, Seed, SimulationConfig};
pub use text::FormatError;
