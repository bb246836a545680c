//! Plain-text grid format.
//!
//! ```text
//! <rows>
//! <cols>
//! <rows lines of cols whitespace-separated true/false tokens>
//! ```
//!
//! Tokens may be split across lines arbitrarily; only their order matters.

mod reader;
mod writer;

pub use reader::*;
pub use writer::*;
