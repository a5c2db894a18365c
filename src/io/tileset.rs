//! Tile image sets indexed by tile index
//!
//! A tile set holds exactly one image per tile index, all of the same size.
//! Sets are either loaded from a directory of numbered images (`0.png` to
//! `7.png`) or drawn procedurally from the edge layout of each tile.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    HORIZONTAL_EDGE_COLORS, MAX_TILE_SIZE, TILE_FILE_EXTENSION, VERTICAL_EDGE_COLORS,
};
use crate::io::error::{Result, TilingError, invalid_parameter, invalid_tile_set};
use crate::tiling::matching::{
    TILE_COUNT, TileIndex, bottom_edge, left_edge, right_edge, top_edge,
};

/// Eight equally sized tile images
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: [RgbaImage; TILE_COUNT],
    tile_width: u32,
    tile_height: u32,
}

impl TileSet {
    /// Build a tile set from images ordered by tile index
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are not exactly 8 images
    /// - An image has zero width or height
    /// - The images differ in size
    pub fn from_images(images: Vec<RgbaImage>) -> Result<Self> {
        let tiles: [RgbaImage; TILE_COUNT] = images.try_into().map_err(|rejected: Vec<_>| {
            invalid_tile_set(&format!(
                "expected {TILE_COUNT} tiles, found {}",
                rejected.len()
            ))
        })?;

        let (tile_width, tile_height) = tiles
            .first()
            .map_or((0, 0), RgbaImage::dimensions);
        if tile_width == 0 || tile_height == 0 {
            return Err(invalid_tile_set(&"tile images must not be empty"));
        }

        if let Some((index, tile)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| tile.dimensions() != (tile_width, tile_height))
        {
            let (width, height) = tile.dimensions();
            return Err(invalid_tile_set(&format!(
                "tile {index} is {width}x{height}, expected {tile_width}x{tile_height}"
            )));
        }

        Ok(Self {
            tiles,
            tile_width,
            tile_height,
        })
    }

    /// Load `0.png` through `7.png` from `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if any tile image cannot be read or decoded, or if the
    /// loaded images don't form a valid set
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut images = Vec::with_capacity(TILE_COUNT);
        for index in 0..TILE_COUNT {
            let path = dir.join(format!("{index}.{TILE_FILE_EXTENSION}"));
            let image = image::open(&path)
                .map_err(|source| TilingError::TileLoad {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();
            log::debug!("Loaded tile {index} from {}", path.display());
            images.push(image);
        }

        Self::from_images(images)
    }

    /// Draw a square tile set whose edges are coloured by edge pattern
    ///
    /// Each tile is split along its diagonals into four triangles. Top and
    /// bottom triangles take a colour from [`HORIZONTAL_EDGE_COLORS`], left and
    /// right triangles from [`VERTICAL_EDGE_COLORS`], so tiles that fit together
    /// meet along a seam of one colour.
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is zero or exceeds [`MAX_TILE_SIZE`]
    pub fn procedural(tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be at least 1 pixel",
            ));
        }
        if tile_size > MAX_TILE_SIZE {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &format!("must not exceed {MAX_TILE_SIZE} pixels"),
            ));
        }

        let images = (0..TILE_COUNT as TileIndex)
            .map(|tile| draw_edge_tile(tile, tile_size))
            .collect();
        Self::from_images(images)
    }

    /// Image for `tile`, or `None` if it is not one of the 8 indices
    pub fn tile(&self, tile: TileIndex) -> Option<&RgbaImage> {
        self.tiles.get(usize::from(tile))
    }

    /// All tile images ordered by index
    pub const fn tiles(&self) -> &[RgbaImage; TILE_COUNT] {
        &self.tiles
    }

    /// Width of every tile in pixels
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Height of every tile in pixels
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }
}

fn draw_edge_tile(tile: TileIndex, size: u32) -> RgbaImage {
    let span = i64::from(size);
    RgbaImage::from_fn(size, size, |x, y| {
        // Doubled offsets from the centre keep odd sizes symmetric
        let dx = 2 * i64::from(x) + 1 - span;
        let dy = 2 * i64::from(y) + 1 - span;

        let color = if dy.abs() >= dx.abs() {
            let pattern = if dy < 0 {
                top_edge(tile)
            } else {
                bottom_edge(tile)
            };
            edge_color(&HORIZONTAL_EDGE_COLORS, pattern)
        } else {
            let pattern = if dx < 0 {
                left_edge(tile)
            } else {
                right_edge(tile)
            };
            edge_color(&VERTICAL_EDGE_COLORS, pattern)
        };
        Rgba(color)
    })
}

fn edge_color(palette: &[[u8; 4]; 2], pattern: u8) -> [u8; 4] {
    palette
        .get(usize::from(pattern))
        .copied()
        .unwrap_or([0, 0, 0, 0])
}
