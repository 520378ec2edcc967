//! Configuration handling for the collidergen CLI
//!
//! Supports loading configuration from collidergen.toml files with CLI
//! argument overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Terrain layer name in Tiled maps, matched case-insensitively
    #[serde(default = "default_layer")]
    pub layer: String,

    /// Tile id treated as empty
    #[serde(default)]
    pub empty_tile: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Pixels per tile in preview images
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Seed for the per-rectangle color sequence
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Background color as #rrggbb
    #[serde(default = "default_background")]
    pub background: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output by default
    #[serde(default)]
    pub pretty: bool,
}

// Default value functions
fn default_layer() -> String {
    "terrain".to_string()
}
fn default_tile_size() -> u32 {
    32
}
fn default_seed() -> u64 {
    collidergen_core::RenderOptions::default().seed
}
fn default_background() -> String {
    "#000000".to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            layer: default_layer(),
            empty_tile: 0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            seed: default_seed(),
            background: default_background(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl Config {
    /// Load configuration: explicit path, else collidergen.toml in the
    /// working directory, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = Path::new("collidergen.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: collidergen.toml");
                    Self::load_from_file(default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }
}
