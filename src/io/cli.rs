//! Command-line interface for generating and exporting Wang tilings

use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_OUTPUT, DEFAULT_TILE_SIZE,
    DEFAULT_TILING_COUNT, MAX_GRID_DIMENSION, MAX_OUTPUT_PIXELS, MAX_TILE_SIZE,
    OUTPUT_INDEX_SEPARATOR,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_tiling_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::write_indices;
use crate::io::tileset::TileSet;
use crate::tiling::WangTileGrid;
use crate::tiling::validation::is_valid_tiling;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "wangtile")]
#[command(
    author,
    version,
    about = "Generate seamless Wang tilings from a set of 8 edge-matched tiles"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Grid width in tiles
    #[arg(short, long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible tilings (entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of tilings to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_TILING_COUNT)]
    pub count: usize,

    /// Directory holding tile images 0.png to 7.png (procedural tiles when omitted)
    #[arg(short, long, value_name = "DIR")]
    pub tiles: Option<PathBuf>,

    /// Edge length in pixels of procedural tiles
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Output PNG path, numbered per tiling when count is above 1
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print tile indices to stdout instead of rendering images
    #[arg(long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite outputs that already exist
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.text
    }

    /// Reject arguments the grid itself would accept but the tool should not
    ///
    /// Zero dimensions are left to grid construction, which reports them as
    /// invalid dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A dimension exceeds [`MAX_GRID_DIMENSION`]
    /// - The tiling count is zero
    /// - The tile size exceeds [`MAX_TILE_SIZE`]
    /// - Procedural tiles at this size would render more than
    ///   [`MAX_OUTPUT_PIXELS`] pixels
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION} tiles"),
                ));
            }
        }

        if self.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"at least one tiling must be generated",
            ));
        }

        if self.tile_size > MAX_TILE_SIZE {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &format!("must not exceed {MAX_TILE_SIZE} pixels"),
            ));
        }

        // Loaded tile sets are only sized once read, so render_tiling checks those
        if !self.text && self.tiles.is_none() {
            let tile_size = u64::from(self.tile_size);
            let pixels = self.width as u64 * tile_size * (self.height as u64 * tile_size);
            if pixels > MAX_OUTPUT_PIXELS {
                return Err(invalid_parameter(
                    "output_pixels",
                    &pixels,
                    &format!("must not exceed {MAX_OUTPUT_PIXELS} pixels"),
                ));
            }
        }

        Ok(())
    }

    /// Output path for the tiling at `index`
    ///
    /// A single tiling is written to `--output` as given; batches insert the
    /// tiling number before the extension, as in `wang_3.png`.
    pub fn output_path(&self, index: usize) -> PathBuf {
        if self.count <= 1 {
            return self.output.clone();
        }

        numbered_path(&self.output, index)
    }
}

fn numbered_path(path: &Path, index: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = path.extension().map_or_else(
        || format!("{stem}{OUTPUT_INDEX_SEPARATOR}{index}"),
        |extension| {
            format!(
                "{stem}{OUTPUT_INDEX_SEPARATOR}{index}.{}",
                extension.to_string_lossy()
            )
        },
    );

    path.with_file_name(name)
}

/// Runs a batch of tilings according to CLI arguments
pub struct TilingProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TilingProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested tiling and write it out
    ///
    /// Every tiling is generated even when its output is skipped, so a seeded
    /// batch produces the same tiling at a given index regardless of which
    /// files already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Argument validation or grid construction fails
    /// - The tile set cannot be loaded
    /// - An output cannot be rendered or written
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;

        let mut grid = match self.cli.seed {
            Some(seed) => WangTileGrid::with_seed(self.cli.width, self.cli.height, seed)?,
            None => WangTileGrid::new(self.cli.width, self.cli.height)?,
        };
        log::debug!(
            "Allocated {}x{} grid (seed: {:?})",
            grid.width(),
            grid.height(),
            self.cli.seed
        );

        if self.cli.text {
            return self.write_text(&mut grid);
        }

        let tileset = self.load_tileset()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let start_time = Instant::now();
            grid.generate();
            debug_assert!(is_valid_tiling(grid.tiles()));

            let output_path = self.cli.output_path(index);
            if self.cli.skip_existing() && output_path.exists() {
                log::warn!("Skipping: {} (output exists)", output_path.display());
                if let Some(ref pm) = self.progress_manager {
                    pm.skip_tiling();
                }
                continue;
            }

            export_tiling_as_png(grid.tiles(), &tileset, &output_path)?;

            // An active bar already shows the file name; log lines would tear it
            match self.progress_manager {
                Some(ref pm) if pm.is_active() => pm.complete_tiling(&output_path),
                _ => log::info!(
                    "Saved {} in {:?}",
                    output_path.display(),
                    start_time.elapsed()
                ),
            }
        }

        if let Some(ref pm) = self.progress_manager {
            debug_assert!(!pm.is_active() || pm.position() == self.cli.count as u64);
            pm.finish();
        }

        Ok(())
    }

    fn write_text(&self, grid: &mut WangTileGrid) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for index in 0..self.cli.count {
            grid.generate();
            if index > 0 {
                writeln!(out)?;
            }
            write_indices(grid.tiles(), &mut out)?;
        }

        out.flush()?;
        Ok(())
    }

    fn load_tileset(&self) -> Result<TileSet> {
        match &self.cli.tiles {
            Some(dir) => {
                log::debug!("Loading tile set from {}", dir.display());
                TileSet::load_dir(dir)
            }
            None => {
                log::debug!("Drawing procedural tile set ({} px)", self.cli.tile_size);
                TileSet::procedural(self.cli.tile_size)
            }
        }
    }
}
