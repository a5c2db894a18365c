//! Contiguous row-major storage for tile index matrices
//!
//! The grid is a single `ndarray` buffer in standard layout, so cell `(row, col)`
//! lives at flat offset `row * width + col`. Dimensions are fixed at allocation.

use ndarray::Array2;

use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::tiling::matching::TileIndex;

/// Fixed-size matrix of tile indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<TileIndex>,
}

impl TileGrid {
    /// Allocate a `width` x `height` grid with every cell set to tile 0
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - The cell count overflows or the buffer cannot be reserved
    pub fn zeroed(width: usize, height: usize) -> Result<Self> {
        let cell_count = validated_cell_count(width, height)?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(cell_count)
            .map_err(|_reserve_error| TilingError::OutOfMemory { width, height })?;
        buffer.resize(cell_count, 0);

        Self::from_buffer(width, height, buffer)
    }

    /// Build a grid from row-major cell values
    ///
    /// Values are stored as given; use [`crate::tiling::validation::check_tiling`]
    /// to confirm they form a valid tiling.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `cells` does not hold
    /// exactly `width * height` values
    pub fn from_cells(width: usize, height: usize, cells: Vec<TileIndex>) -> Result<Self> {
        let cell_count = validated_cell_count(width, height)?;
        if cells.len() != cell_count {
            return Err(invalid_parameter(
                "cells",
                &cells.len(),
                &format!("expected {cell_count} values for a {width}x{height} grid"),
            ));
        }

        Self::from_buffer(width, height, cells)
    }

    fn from_buffer(width: usize, height: usize, buffer: Vec<TileIndex>) -> Result<Self> {
        // Shape errors here can only come from exceeding isize::MAX elements
        let cells = Array2::from_shape_vec((height, width), buffer)
            .map_err(|_shape_error| TilingError::OutOfMemory { width, height })?;
        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Read a cell, or `None` when `(row, col)` is outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<TileIndex> {
        self.cells.get((row, col)).copied()
    }

    /// Overwrite a cell
    ///
    /// Callers only write inside the grid; release builds drop writes that
    /// are not.
    pub(crate) fn set(&mut self, row: usize, col: usize, tile: TileIndex) {
        debug_assert!(
            row < self.height() && col < self.width(),
            "write to ({row}, {col}) outside {}x{} grid",
            self.width(),
            self.height()
        );
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = tile;
        }
    }

    /// Flat row-major view of every cell
    pub fn as_slice(&self) -> &[TileIndex] {
        // Always Some: the buffer is built in standard layout and never sliced
        self.cells.as_slice().unwrap_or(&[])
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[TileIndex]> {
        self.as_slice().chunks_exact(self.width())
    }

    /// Iterate over `((row, col), tile)` in row-major order
    pub fn indexed_cells(&self) -> impl Iterator<Item = ((usize, usize), TileIndex)> {
        self.cells.indexed_iter().map(|(position, &tile)| (position, tile))
    }
}

fn validated_cell_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 {
        return Err(TilingError::InvalidDimension {
            dimension: "width",
            value: width,
        });
    }
    if height == 0 {
        return Err(TilingError::InvalidDimension {
            dimension: "height",
            value: height,
        });
    }

    width
        .checked_mul(height)
        .ok_or(TilingError::OutOfMemory { width, height })
}
