//! Plain-text dump of tile indices

use std::io::Write;

use crate::io::error::Result;
use crate::spatial::TileGrid;
use crate::tiling::matching::TileIndex;

/// Write one line per row with indices separated by single spaces
///
/// # Errors
///
/// Returns an error if writing to `writer` fails
pub fn write_indices<W: Write>(grid: &TileGrid, writer: &mut W) -> Result<()> {
    for row in grid.rows() {
        writeln!(writer, "{}", format_row(row))?;
    }
    Ok(())
}

/// Format the grid the same way as [`write_indices`]
pub fn format_indices(grid: &TileGrid) -> String {
    grid.rows().map(|row| format_row(row) + "\n").collect()
}

fn format_row(row: &[TileIndex]) -> String {
    row.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
