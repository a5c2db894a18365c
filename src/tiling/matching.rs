//! Edge algebra for the fixed set of 8 Wang tiles
//!
//! A tile index packs three bits. Bit 2 is the pattern on the top edge, bit 1
//! the pattern on the left edge and bit 0 a free choice. The bottom and right
//! edges are derived by folding the free bit into the top and left bits:
//!
//! ```text
//! top    = b2          bottom = b2 ^ b0
//! left   = b1          right  = b1 ^ b0
//! ```
//!
//! The tile images are authored against this layout, so the formula in
//! [`match_tile`] must stay bit-for-bit identical.

/// Index of one of the 8 tiles, always in `0..TILE_COUNT` once generated
pub type TileIndex = u8;

/// Number of tiles in the set
pub const TILE_COUNT: usize = 8;

/// Largest valid tile index
pub const MAX_TILE_INDEX: TileIndex = 7;

/// Pick a tile that fits below `top` and to the right of `left`
///
/// For any pair of neighbours there are exactly two fitting tiles, and
/// `random_bit` chooses between them by becoming bit 0 of the result.
/// Bits of the neighbours above bit 2 are ignored.
pub const fn match_tile(left: TileIndex, top: TileIndex, random_bit: bool) -> TileIndex {
    let from_top = (top & 4) ^ ((top & 1) << 2);
    let from_left = (left & 2) ^ ((left & 1) << 1);
    from_top | from_left | random_bit as TileIndex
}

/// Pattern on the top edge, matched against [`bottom_edge`] of the tile above
pub const fn top_edge(tile: TileIndex) -> u8 {
    (tile >> 2) & 1
}

/// Pattern on the bottom edge
pub const fn bottom_edge(tile: TileIndex) -> u8 {
    ((tile >> 2) ^ tile) & 1
}

/// Pattern on the left edge, matched against [`right_edge`] of the tile to the left
pub const fn left_edge(tile: TileIndex) -> u8 {
    (tile >> 1) & 1
}

/// Pattern on the right edge
pub const fn right_edge(tile: TileIndex) -> u8 {
    ((tile >> 1) ^ tile) & 1
}

/// Whether `right` may sit directly to the right of `left`
pub const fn fits_horizontally(left: TileIndex, right: TileIndex) -> bool {
    right_edge(left) == left_edge(right)
}

/// Whether `below` may sit directly under `above`
pub const fn fits_vertically(above: TileIndex, below: TileIndex) -> bool {
    bottom_edge(above) == top_edge(below)
}

/// Whether `tile` is one of the 8 tiles of the set
pub const fn is_valid_index(tile: TileIndex) -> bool {
    tile <= MAX_TILE_INDEX
}
