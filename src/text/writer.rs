//! Serialization of grids back to the text format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::compute::Grid;

/// Write a grid in the text format readable by [`parse_grid`](super::parse_grid).
pub fn write_grid<W: Write>(grid: &Grid, w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", grid.rows())?;
    writeln!(w, "{}", grid.cols())?;
    for row in grid.iter_rows() {
        let line: Vec<&str> = row
            .iter()
            .map(|&cell| if cell { "true" } else { "false" })
            .collect();
        writeln!(w, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Format a grid as text.
pub fn to_text(grid: &Grid) -> String {
    let mut buf = Vec::new();
    write_grid(grid, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Save a grid to a file.
pub fn save_grid<P: AsRef<Path>>(grid: &Grid, path: P) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_grid(grid, &mut w)?;
    w.flush()
}
