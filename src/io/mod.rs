//! Rendering collaborator and command-line plumbing around the tiling core

/// Command-line parsing and batch orchestration
pub mod cli;
/// Defaults and limits for the command-line tool
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Tiling rendering and PNG export
pub mod image;
/// Progress bars for batch runs
pub mod progress;
/// Plain-text index output
pub mod text;
/// Tile image sets
pub mod tileset;
