//! Tile-map input adapters.
//!
//! Each adapter turns an on-disk map description into a solidity [`Grid`];
//! the decomposer never sees the source format.

#[cfg(feature = "io-ascii")]
pub mod ascii;
#[cfg(feature = "io-tiled")]
pub mod tiled;

#[cfg(feature = "io-ascii")]
pub use ascii::AsciiError;
#[cfg(feature = "io-tiled")]
pub use tiled::{TiledError, TiledMap};

use anyhow::{Context, Result};
use std::path::Path;

use crate::grid::Grid;

/// Options shared by the map adapters.
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Layer to read from a Tiled map, matched case-insensitively.
    pub layer: String,
    /// Tile id that reads as empty; every other id is solid.
    pub empty_tile: u32,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            layer: "terrain".to_string(),
            empty_tile: 0,
        }
    }
}

/// Load a solidity grid from a map file, dispatching on the extension:
/// `.json`/`.tmj` parse as a Tiled map, anything else as an ASCII grid.
pub fn load_grid<P: AsRef<Path>>(path: P, options: &MapOptions) -> Result<Grid> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy().to_lowercase();

    #[cfg(feature = "io-tiled")]
    if path_str.ends_with(".json") || path_str.ends_with(".tmj") {
        return tiled::load_file(path, options)
            .with_context(|| format!("failed to load Tiled map: {}", path.display()));
    }

    #[cfg(feature = "io-ascii")]
    {
        return ascii::load_file(path)
            .with_context(|| format!("failed to load ASCII map: {}", path.display()));
    }

    #[allow(unreachable_code)]
    Err(anyhow::anyhow!(
        "no adapter available for map file: {}",
        path.display()
    ))
}
