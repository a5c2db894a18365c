//! Wang tiling generation over a fixed-size grid
//!
//! Cells are filled row-major, top to bottom and left to right, so every cell
//! is computed from a left and top neighbour that have already been written.
//! Cells on the first row and column have no real neighbour on one side; a
//! virtual neighbour is drawn uniformly from the tile set instead.

use crate::io::error::{Result, TilingError};
use crate::spatial::TileGrid;
use crate::tiling::matching::{MAX_TILE_INDEX, TileIndex, match_tile};
use crate::tiling::random::{RandomSource, SeededSource};

/// Grid of tile indices together with the random source that fills it
#[derive(Debug, Clone)]
pub struct WangTileGrid<R = SeededSource> {
    tiles: TileGrid,
    source: R,
}

impl WangTileGrid<SeededSource> {
    /// Allocate a grid seeded from operating system entropy
    ///
    /// Every cell starts as tile 0 until [`Self::generate`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the grid cannot be allocated
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_source(width, height, SeededSource::from_entropy())
    }

    /// Allocate a grid whose tilings are reproducible from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the grid cannot be allocated
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::with_source(width, height, SeededSource::from_seed_u64(seed))
    }

    /// Restart the generator so the next tilings follow from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.source = SeededSource::from_seed_u64(seed);
    }
}

impl<R: RandomSource> WangTileGrid<R> {
    /// Allocate a grid drawing its randomness from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero
    /// - The cell count overflows or the buffer cannot be reserved
    pub fn with_source(width: usize, height: usize, source: R) -> Result<Self> {
        let tiles = TileGrid::zeroed(width, height)?;
        Ok(Self { tiles, source })
    }

    /// Overwrite every cell with a fresh tiling
    ///
    /// Never fails: every tile produced by [`match_tile`] is valid by construction.
    pub fn generate(&mut self) {
        let width = self.tiles.width();
        let height = self.tiles.height();

        let corner = self.source.uniform(MAX_TILE_INDEX);
        self.tiles.set(0, 0, corner);

        for col in 1..width {
            let left = self.cell(0, col - 1);
            let top = self.source.uniform(MAX_TILE_INDEX);
            let tile = match_tile(left, top, self.source.bit());
            self.tiles.set(0, col, tile);
        }

        for row in 1..height {
            let left = self.source.uniform(MAX_TILE_INDEX);
            let top = self.cell(row - 1, 0);
            let tile = match_tile(left, top, self.source.bit());
            self.tiles.set(row, 0, tile);

            for col in 1..width {
                let left = self.cell(row, col - 1);
                let top = self.cell(row - 1, col);
                let tile = match_tile(left, top, self.source.bit());
                self.tiles.set(row, col, tile);
            }
        }
    }

    /// Tile index at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::IndexOutOfRange`] if `row >= height` or `col >= width`
    pub fn at(&self, row: usize, col: usize) -> Result<TileIndex> {
        self.tiles
            .get(row, col)
            .ok_or(TilingError::IndexOutOfRange {
                row,
                col,
                height: self.height(),
                width: self.width(),
            })
    }

    /// Width in tiles
    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    /// Height in tiles
    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    /// Borrow the current tiling
    pub const fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    /// Owned copy of the current tiling, unaffected by later generation
    pub fn snapshot(&self) -> TileGrid {
        self.tiles.clone()
    }

    /// Mutable access to the owned random source
    pub const fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    // Only reads cells behind the traversal front, which are always in bounds
    fn cell(&self, row: usize, col: usize) -> TileIndex {
        debug_assert!(
            row < self.height() && col < self.width(),
            "read of ({row}, {col}) outside {}x{} grid",
            self.width(),
            self.height()
        );
        self.tiles.get(row, col).unwrap_or(0)
    }
}
