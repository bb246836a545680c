//! Compute module - Grid evolution and community counting.

mod communities;
mod engine;
mod grid;
mod rules;
mod union_find;

pub use communities::*;
pub use engine::*;
pub use grid::*;
pub use rules::*;
pub use union_find::*;
