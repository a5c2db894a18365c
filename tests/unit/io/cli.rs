//! Tests for command-line parsing and batch tiling output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use wangtile::TilingError;
    use wangtile::io::cli::{Cli, TilingProcessor};
    use wangtile::io::configuration::{
        DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_OUTPUT, DEFAULT_TILE_SIZE,
        DEFAULT_TILING_COUNT, MAX_TILE_SIZE,
    };
    use wangtile::io::image::save_png;
    use wangtile::io::tileset::TileSet;

    fn cli_for(output: &Path, extra: &[&str]) -> Cli {
        let output = output.to_str().unwrap();
        let mut args = vec!["program", "--quiet", "--seed", "7", "-o", output];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests CLI parsing with no arguments uses defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.width, DEFAULT_GRID_WIDTH);
        assert_eq!(cli.height, DEFAULT_GRID_HEIGHT);
        assert_eq!(cli.count, DEFAULT_TILING_COUNT);
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.seed, None);
        assert_eq!(cli.tiles, None);
        assert!(!cli.text);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping short flag definitions
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "-w",
            "8",
            "-H",
            "4",
            "-s",
            "99",
            "-n",
            "3",
            "-t",
            "tiles/grass",
            "--tile-size",
            "12",
            "-o",
            "out/grass.png",
            "--text",
            "-q",
            "--no-skip",
        ]);

        assert_eq!((cli.width, cli.height), (8, 4));
        assert_eq!(cli.seed, Some(99));
        assert_eq!(cli.count, 3);
        assert_eq!(cli.tiles, Some(PathBuf::from("tiles/grass")));
        assert_eq!(cli.tile_size, 12);
        assert_eq!(cli.output, PathBuf::from("out/grass.png"));
        assert!(cli.text);
        assert!(cli.quiet);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests batch outputs are numbered before the extension
    // Verified by appending the index after the extension
    #[test]
    fn test_output_path_numbering() {
        let single = Cli::parse_from(["program", "-o", "out/wang.png"]);
        assert_eq!(single.output_path(0), PathBuf::from("out/wang.png"));

        let batch = Cli::parse_from(["program", "-o", "out/wang.png", "-n", "4"]);
        assert_eq!(batch.output_path(0), PathBuf::from("out/wang_0.png"));
        assert_eq!(batch.output_path(3), PathBuf::from("out/wang_3.png"));

        let bare = Cli::parse_from(["program", "-o", "wang", "-n", "2"]);
        assert_eq!(bare.output_path(1), PathBuf::from("wang_1"));
    }

    // Tests oversized dimensions and empty batches are rejected
    // Verified by removing the dimension limit
    #[test]
    fn test_validate_limits() {
        let too_wide = Cli::parse_from(["program", "-w", "10001"]);
        assert!(matches!(
            too_wide.validate(),
            Err(TilingError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));

        let no_tilings = Cli::parse_from(["program", "-n", "0"]);
        assert!(matches!(
            no_tilings.validate(),
            Err(TilingError::InvalidParameter {
                parameter: "count",
                ..
            })
        ));

        assert!(Cli::parse_from(["program"]).validate().is_ok());
    }

    // Tests procedural tile sizes and rendered extents are capped
    // Verified by only checking tile sizes in TileSet::procedural
    #[test]
    fn test_validate_pixel_limits() {
        let huge_tiles = Cli::parse_from(["program", "--tile-size", "4000000000"]);
        assert!(matches!(
            huge_tiles.validate(),
            Err(TilingError::InvalidParameter {
                parameter: "tile_size",
                ..
            })
        ));

        let huge_canvas = Cli::parse_from(["program", "-w", "10000", "-H", "10000"]);
        assert!(matches!(
            huge_canvas.validate(),
            Err(TilingError::InvalidParameter {
                parameter: "output_pixels",
                ..
            })
        ));

        let text_only = Cli::parse_from(["program", "-w", "10000", "-H", "10000", "--text"]);
        assert!(text_only.validate().is_ok());

        let largest_tiles = Cli::parse_from([
            "program",
            "-w",
            "1",
            "-H",
            "1",
            "--tile-size",
            &MAX_TILE_SIZE.to_string(),
        ]);
        assert!(largest_tiles.validate().is_ok());
    }

    // Tests an oversized tile size returns an error without writing output
    // Verified by drawing tiles before validating arguments
    #[test]
    fn test_process_oversized_tile_size() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wang.png");
        let cli = cli_for(&output, &["-w", "1", "-H", "1", "--tile-size", "4000000000"]);

        let result = TilingProcessor::new(cli).process();

        assert!(matches!(
            result,
            Err(TilingError::InvalidParameter {
                parameter: "tile_size",
                ..
            })
        ));
        assert!(!output.exists());
    }

    // Tests zero dimensions surface as grid construction errors
    // Verified by clamping zero to one in validation
    #[test]
    fn test_process_zero_width() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_for(&temp_dir.path().join("wang.png"), &["-w", "0"]);

        let result = TilingProcessor::new(cli).process();

        assert!(matches!(
            result,
            Err(TilingError::InvalidDimension {
                dimension: "width",
                ..
            })
        ));
    }

    // Tests a procedural tiling is written at grid size times tile size
    // Verified by ignoring the tile size argument
    #[test]
    fn test_process_writes_procedural_png() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wang.png");
        let cli = cli_for(&output, &["-w", "5", "-H", "3", "--tile-size", "4"]);

        TilingProcessor::new(cli).process().unwrap();

        let image = image::open(&output).unwrap();
        assert_eq!((image.width(), image.height()), (20, 12));
    }

    // Tests batches write one numbered file per tiling
    // Verified by reusing the first output path for every tiling
    #[test]
    fn test_process_batch_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("batch.png");
        let cli = cli_for(&output, &["-w", "3", "-H", "3", "--tile-size", "2", "-n", "3"]);

        TilingProcessor::new(cli).process().unwrap();

        for index in 0..3 {
            assert!(temp_dir.path().join(format!("batch_{index}.png")).exists());
        }
        assert!(!output.exists());
    }

    // Tests equal seeds write identical images
    // Verified by seeding from entropy regardless of the seed flag
    #[test]
    fn test_process_is_reproducible() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.png");
        let second = temp_dir.path().join("second.png");

        TilingProcessor::new(cli_for(&first, &["-w", "6", "-H", "6"]))
            .process()
            .unwrap();
        TilingProcessor::new(cli_for(&second, &["-w", "6", "-H", "6"]))
            .process()
            .unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    // Tests existing outputs are kept unless --no-skip is given
    // Verified by removing skip check
    #[test]
    fn test_skip_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wang.png");
        fs::write(&output, "existing").unwrap();

        TilingProcessor::new(cli_for(&output, &["-w", "2", "-H", "2"]))
            .process()
            .unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"existing");

        TilingProcessor::new(cli_for(&output, &["-w", "2", "-H", "2", "--no-skip"]))
            .process()
            .unwrap();
        assert!(fs::read(&output).unwrap().starts_with(b"\x89PNG"));
    }

    // Tests a batch with a visible bar accounts for written and skipped tilings
    // Verified by not advancing the bar for skipped outputs
    #[test]
    fn test_process_batch_with_progress() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("shown.png");
        fs::write(temp_dir.path().join("shown_1.png"), "existing").unwrap();
        let output_arg = output.to_str().unwrap();
        let cli = Cli::parse_from([
            "program", "-s", "3", "-w", "2", "-H", "2", "--tile-size", "2", "-n", "3", "-o",
            output_arg,
        ]);
        assert!(cli.should_show_progress());

        TilingProcessor::new(cli).process().unwrap();

        assert!(temp_dir.path().join("shown_0.png").exists());
        assert_eq!(fs::read(temp_dir.path().join("shown_1.png")).unwrap(), b"existing");
        assert!(temp_dir.path().join("shown_2.png").exists());
    }

    // Tests tile sets are loaded from a directory of numbered images
    // Verified by falling back to procedural tiles when a directory is given
    #[test]
    fn test_process_with_tile_directory() {
        let temp_dir = TempDir::new().unwrap();
        let tiles_dir = temp_dir.path().join("tiles");
        for (index, tile) in TileSet::procedural(5).unwrap().tiles().iter().enumerate() {
            save_png(tile, &tiles_dir.join(format!("{index}.png"))).unwrap();
        }
        let output = temp_dir.path().join("wang.png");
        let tiles_arg = tiles_dir.to_str().unwrap();

        TilingProcessor::new(cli_for(&output, &["-w", "4", "-H", "2", "-t", tiles_arg]))
            .process()
            .unwrap();

        let image = image::open(&output).unwrap();
        assert_eq!((image.width(), image.height()), (20, 10));
    }

    // Tests a missing tile directory fails with the offending path
    // Verified by ignoring tile load errors
    #[test]
    fn test_process_missing_tile_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wang.png");
        let missing = temp_dir.path().join("nowhere");

        let result = TilingProcessor::new(cli_for(
            &output,
            &["-t", missing.to_str().unwrap()],
        ))
        .process();

        assert!(matches!(result, Err(TilingError::TileLoad { .. })));
        assert!(!output.exists());
    }

    // Tests text mode renders nothing to disk
    // Verified by rendering images in text mode
    #[test]
    fn test_process_text_mode_writes_no_image() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wang.png");

        TilingProcessor::new(cli_for(&output, &["-w", "3", "-H", "2", "--text"]))
            .process()
            .unwrap();

        assert!(!output.exists());
    }
}
