//! Parsing of the text grid format.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::compute::{Grid, cell_count};

/// Malformed or incomplete grid input.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Missing {0} count")]
    MissingDimension(&'static str),
    #[error("Invalid {name} count: {token:?}")]
    InvalidDimension { name: &'static str, token: String },
    #[error("The {name} count must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: i64 },
    #[error("Invalid cell value {token:?} at position {index}")]
    InvalidCell { index: usize, token: String },
    #[error("A {rows}x{cols} grid is too large")]
    GridTooLarge { rows: usize, cols: usize },
    #[error("Expected {expected} cell values, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("Failed to read grid: {0}")]
    Io(#[from] io::Error),
}

fn parse_dimension<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<usize, FormatError> {
    let token = tokens.next().ok_or(FormatError::MissingDimension(name))?;
    let value: i64 = token.parse().map_err(|_| FormatError::InvalidDimension {
        name,
        token: token.to_string(),
    })?;
    if value <= 0 {
        return Err(FormatError::NonPositiveDimension { name, value });
    }
    usize::try_from(value).map_err(|_| FormatError::InvalidDimension {
        name,
        token: token.to_string(),
    })
}

/// Parse a single cell token. Accepts `true`/`false` in any case, and `1`/`0`.
pub fn parse_cell(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") || token == "1" {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") || token == "0" {
        Some(false)
    } else {
        None
    }
}

/// Parse a grid from text.
///
/// Tokens after the last expected cell are ignored.
pub fn parse_grid(input: &str) -> Result<Grid, FormatError> {
    let mut tokens = input.split_whitespace();

    let rows = parse_dimension(&mut tokens, "row")?;
    let cols = parse_dimension(&mut tokens, "column")?;
    let expected = cell_count(rows, cols).ok_or(FormatError::GridTooLarge { rows, cols })?;

    // Grow with the tokens actually present, not the declared size.
    let mut cells = Vec::new();
    for token in tokens.by_ref().take(expected) {
        let cell = parse_cell(token).ok_or_else(|| FormatError::InvalidCell {
            index: cells.len(),
            token: token.to_string(),
        })?;
        cells.push(cell);
    }

    if cells.len() < expected {
        return Err(FormatError::Truncated {
            expected,
            found: cells.len(),
        });
    }

    let extra = tokens.count();
    if extra > 0 {
        log::warn!("Ignoring {} tokens after {}x{} grid", extra, rows, cols);
    }

    let found = cells.len();
    Grid::from_cells(rows, cols, cells).ok_or(FormatError::Truncated { expected, found })
}

/// Read and parse a grid from any reader.
pub fn read_grid<R: Read>(mut reader: R) -> Result<Grid, FormatError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_grid(&input)
}

/// Load a grid from a file.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, FormatError> {
    let input = fs::read_to_string(path.as_ref())?;
    let grid = parse_grid(&input)?;
    log::info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.as_ref().display()
    );
    Ok(grid)
}
