//! Seamless Wang tilings of the plane from a fixed set of 8 edge-matched tiles
//!
//! The core generates a grid of tile indices in which every tile's top and left
//! edges match its neighbours. Turning indices into pixels is left to the `io`
//! layer; the core only shares its error type.

#![forbid(unsafe_code)]

/// Input/output operations, rendering and error handling
pub mod io;
/// Contiguous storage for tile index grids
pub mod spatial;
/// Edge matching and tiling generation
pub mod tiling;

pub use io::error::{Result, TilingError};
pub use spatial::TileGrid;
pub use tiling::{WangTileGrid, match_tile};
