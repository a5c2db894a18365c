//! Spatial storage for generated tilings

/// Contiguous tile index matrix
pub mod grid;

pub use grid::TileGrid;
