//! Runtime configuration defaults for the command-line tool

// Grid defaults match the classic 16x16 demo tiling
/// Default grid width in tiles
pub const DEFAULT_GRID_WIDTH: usize = 16;
/// Default grid height in tiles
pub const DEFAULT_GRID_HEIGHT: usize = 16;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension accepted from the command line
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default number of tilings generated per run
pub const DEFAULT_TILING_COUNT: usize = 1;

/// Edge length in pixels of procedurally drawn tiles
pub const DEFAULT_TILE_SIZE: u32 = 32;
/// Largest edge length in pixels accepted for procedural tiles
pub const MAX_TILE_SIZE: u32 = 1024;

// Rendered images are RGBA8, so this caps the canvas at 1 GiB
/// Maximum number of pixels in a rendered tiling
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Tile image file extension inside a tile set directory
pub const TILE_FILE_EXTENSION: &str = "png";

// Output settings
/// Default output image path
pub const DEFAULT_OUTPUT: &str = "wang.png";
/// Separator between output stem and tiling number in batch runs
pub const OUTPUT_INDEX_SEPARATOR: &str = "_";

// Procedural tile palette: horizontal edges use the first pair, vertical edges the second
/// Colours for top and bottom edge patterns 0 and 1
pub const HORIZONTAL_EDGE_COLORS: [[u8; 4]; 2] = [[222, 184, 65, 255], [52, 101, 164, 255]];
/// Colours for left and right edge patterns 0 and 1
pub const VERTICAL_EDGE_COLORS: [[u8; 4]; 2] = [[115, 210, 22, 255], [204, 0, 0, 255]];

// Progress bar display settings
/// Threshold above which a progress bar is shown for batch runs
pub const MIN_TILINGS_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
