//! Tiled JSON map adapter.
//!
//! Reads the subset of the Tiled editor's JSON export needed to recover a
//! solidity grid: the `layers` array, and for the selected tile layer its
//! `width`, `height` and row-major `data` array of tile ids. A tile id
//! equal to the empty sentinel maps to an empty cell; any other id is
//! solid.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::MapOptions;
use crate::grid::{Grid, GridError};

#[derive(Debug, Error)]
pub enum TiledError {
    #[error("no layer named '{0}' found, make sure it exists")]
    LayerNotFound(String),
    #[error("layer '{name}' has {len} tiles, expected {width}x{height}")]
    DataLengthMismatch {
        name: String,
        width: u32,
        height: u32,
        len: usize,
    },
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The subset of a Tiled JSON map we read.
#[derive(Debug, Clone, Deserialize)]
pub struct TiledMap {
    pub layers: Vec<TiledLayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiledLayer {
    pub name: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub data: Vec<u32>,
}

impl TiledMap {
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, TiledError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Find a tile layer by name, case-insensitively.
    pub fn layer(&self, name: &str) -> Option<&TiledLayer> {
        self.layers
            .iter()
            .find(|layer| layer.name.eq_ignore_ascii_case(name))
    }

    /// Convert the named layer into a solidity grid.
    pub fn to_grid(&self, options: &MapOptions) -> Result<Grid, TiledError> {
        let layer = self
            .layer(&options.layer)
            .ok_or_else(|| TiledError::LayerNotFound(options.layer.clone()))?;
        layer.to_grid(options.empty_tile)
    }
}

impl TiledLayer {
    pub fn to_grid(&self, empty_tile: u32) -> Result<Grid, TiledError> {
        let expected = self.width as usize * self.height as usize;
        if self.data.len() != expected {
            return Err(TiledError::DataLengthMismatch {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
                len: self.data.len(),
            });
        }
        let solid = self.data.iter().map(|&id| id != empty_tile).collect();
        Ok(Grid::from_row_major(self.width, self.height, solid)?)
    }
}

/// Parse a Tiled JSON file and convert its terrain layer into a grid.
pub fn load_file<P: AsRef<Path>>(path: P, options: &MapOptions) -> Result<Grid, TiledError> {
    let file = File::open(path.as_ref())?;
    let map = TiledMap::from_reader(BufReader::new(file))?;
    let grid = map.to_grid(options)?;
    log::info!(
        "loaded terrain layer '{}': {}x{} tiles, {} solid",
        options.layer,
        grid.width(),
        grid.height(),
        grid.solid_count()
    );
    Ok(grid)
}
