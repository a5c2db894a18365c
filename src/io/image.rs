//! Rendering tilings into images and PNG export

use std::path::Path;

use image::{ImageFormat, RgbaImage, imageops};

use crate::io::configuration::MAX_OUTPUT_PIXELS;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::io::tileset::TileSet;
use crate::spatial::TileGrid;
use crate::tiling::matching::TILE_COUNT;

/// Blit one tile image per cell into a single image
///
/// The tile at `(row, col)` lands at pixel offset
/// `(col * tile_width, row * tile_height)`.
///
/// # Errors
///
/// Returns an error if:
/// - The output image would exceed `u32` pixels in either direction
/// - The output image would hold more than [`MAX_OUTPUT_PIXELS`] pixels
/// - A cell holds an index with no image in the tile set
pub fn render_tiling(grid: &TileGrid, tileset: &TileSet) -> Result<RgbaImage> {
    let width = pixel_extent("width", grid.width(), tileset.tile_width())?;
    let height = pixel_extent("height", grid.height(), tileset.tile_height())?;
    check_output_budget(width, height)?;

    let mut canvas = RgbaImage::new(width, height);

    for ((row, col), tile) in grid.indexed_cells() {
        let image = tileset
            .tile(tile)
            .ok_or(TilingError::InvalidTileIndex {
                index: usize::from(tile),
                max_tiles: TILE_COUNT,
            })?;

        // Offsets are bounded by the extents checked above
        let x = i64::from(col as u32 * tileset.tile_width());
        let y = i64::from(row as u32 * tileset.tile_height());
        imageops::replace(&mut canvas, image, x, y);
    }

    Ok(canvas)
}

fn pixel_extent(dimension: &'static str, tiles: usize, tile_pixels: u32) -> Result<u32> {
    u32::try_from(tiles)
        .ok()
        .and_then(|count| count.checked_mul(tile_pixels))
        .ok_or_else(|| {
            invalid_parameter(
                dimension,
                &tiles,
                &format!("{tiles} tiles of {tile_pixels} pixels overflow the image size"),
            )
        })
}

/// Reject canvases larger than [`MAX_OUTPUT_PIXELS`] before allocating them
///
/// # Errors
///
/// Returns [`TilingError::InvalidParameter`] naming `output_pixels` if the
/// pixel count is over budget or its RGBA buffer cannot be addressed
pub fn check_output_budget(width: u32, height: u32) -> Result<()> {
    let pixels = u64::from(width) * u64::from(height);
    let bytes = pixels * 4;
    if pixels > MAX_OUTPUT_PIXELS || usize::try_from(bytes).is_err() {
        return Err(invalid_parameter(
            "output_pixels",
            &pixels,
            &format!("{width}x{height} image exceeds the {MAX_OUTPUT_PIXELS} pixel limit"),
        ));
    }
    Ok(())
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Render a tiling and save it as PNG
///
/// # Errors
///
/// Returns an error if rendering fails or the image cannot be saved
pub fn export_tiling_as_png(grid: &TileGrid, tileset: &TileSet, output_path: &Path) -> Result<()> {
    let image = render_tiling(grid, tileset)?;
    save_png(&image, output_path)
}
