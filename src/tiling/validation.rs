//! Invariant checks for generated tilings

use std::fmt;

use crate::spatial::TileGrid;
use crate::tiling::matching::{TileIndex, fits_horizontally, fits_vertically, is_valid_index};

/// Which constraint a cell violates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Value is not one of the 8 tile indices
    Range,
    /// Top edge differs from the bottom edge of the tile above
    Top,
    /// Left edge differs from the right edge of the tile to the left
    Left,
}

/// First cell found breaking a tiling invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeMismatch {
    /// Row of the offending cell
    pub row: usize,
    /// Column of the offending cell
    pub col: usize,
    /// Constraint that failed
    pub edge: Edge,
    /// Value stored in the offending cell
    pub tile: TileIndex,
}

impl fmt::Display for EdgeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.edge {
            Edge::Range => "is not a valid tile index",
            Edge::Top => "does not match the tile above",
            Edge::Left => "does not match the tile to the left",
        };
        write!(
            f,
            "tile {} at ({}, {}) {description}",
            self.tile, self.row, self.col
        )
    }
}

/// Verify range and adjacency invariants, scanning row-major
///
/// # Errors
///
/// Returns the first cell that holds an invalid index or whose top or left
/// edge does not match its neighbour
pub fn check_tiling(grid: &TileGrid) -> Result<(), EdgeMismatch> {
    for ((row, col), tile) in grid.indexed_cells() {
        let mismatch = |edge| EdgeMismatch {
            row,
            col,
            edge,
            tile,
        };

        if !is_valid_index(tile) {
            return Err(mismatch(Edge::Range));
        }

        if let Some(above) = row.checked_sub(1).and_then(|r| grid.get(r, col)) {
            if !fits_vertically(above, tile) {
                return Err(mismatch(Edge::Top));
            }
        }

        if let Some(left) = col.checked_sub(1).and_then(|c| grid.get(row, c)) {
            if !fits_horizontally(left, tile) {
                return Err(mismatch(Edge::Left));
            }
        }
    }

    Ok(())
}

/// Whether every cell satisfies the range and adjacency invariants
pub fn is_valid_tiling(grid: &TileGrid) -> bool {
    check_tiling(grid).is_ok()
}
