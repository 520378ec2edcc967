//! Generate command implementation - decompose a map into a collider set

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use collidergen_core::io::{load_grid, MapOptions};
use collidergen_core::{decompose, ColliderSet};

pub fn execute(
    config: &Config,
    map: PathBuf,
    out: Option<PathBuf>,
    layer: Option<String>,
    empty_tile: Option<u32>,
    tile_size: Option<u32>,
    pretty: bool,
) -> Result<()> {
    if !map.exists() {
        return Err(anyhow!("Map file does not exist: {}", map.display()));
    }

    let map_options = MapOptions {
        layer: layer.unwrap_or_else(|| config.map.layer.clone()),
        empty_tile: empty_tile.unwrap_or(config.map.empty_tile),
    };

    let grid = load_grid(&map, &map_options)?;
    log::info!(
        "Loaded terrain with width of {} and height of {} tiles",
        grid.width(),
        grid.height()
    );

    if grid.solid_count() == 0 {
        return Err(anyhow!(
            "No solid cells found in layer '{}' of {}",
            map_options.layer,
            map.display()
        ));
    }

    let (width, height) = (grid.width(), grid.height());
    let colliders = decompose(grid);
    log::info!("Converted terrain to {} colliders", colliders.len());

    let set = ColliderSet::new(
        width,
        height,
        tile_size.unwrap_or(config.render.tile_size),
        colliders,
    );

    let json = if pretty || config.output.pretty {
        serde_json::to_string_pretty(&set)
    } else {
        serde_json::to_string(&set)
    }
    .context("Failed to serialize collider set")?;

    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write collider set: {}", path.display()))?;
            log::info!("Wrote collider set to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
