//! Tiling generation: edge matching, randomness and the grid generator

/// Grid generator owning its random source
pub mod generator;
/// Tile index layout and the matching function
pub mod matching;
/// Injectable random number sources
pub mod random;
/// Range and adjacency invariant checks
pub mod validation;

pub use generator::WangTileGrid;
pub use matching::{TILE_COUNT, TileIndex, match_tile};
pub use random::{RandomSource, ScriptedSource, SeededSource};
