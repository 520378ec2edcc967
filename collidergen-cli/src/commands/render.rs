//! Render command implementation - write a raster preview of the colliders

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use collidergen_core::decompose;
use collidergen_core::io::{load_grid, MapOptions};
use collidergen_core::render::{save_preview, RenderOptions};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &Config,
    map: PathBuf,
    out: PathBuf,
    layer: Option<String>,
    empty_tile: Option<u32>,
    tile_size: Option<u32>,
    seed: Option<u64>,
    background: Option<String>,
) -> Result<()> {
    if !map.exists() {
        return Err(anyhow!("Map file does not exist: {}", map.display()));
    }

    let map_options = MapOptions {
        layer: layer.unwrap_or_else(|| config.map.layer.clone()),
        empty_tile: empty_tile.unwrap_or(config.map.empty_tile),
    };

    let grid = load_grid(&map, &map_options)?;
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

    let background = background.as_deref().unwrap_or(&config.render.background);
    let render_options = RenderOptions {
        tile_size: tile_size.unwrap_or(config.render.tile_size),
        seed: seed.unwrap_or(config.render.seed),
        background: parse_background(background)?,
    };

    save_preview(&colliders, width, height, &render_options, &out)
        .with_context(|| format!("Failed to write preview image: {}", out.display()))?;
    log::info!("Wrote preview image to {}", out.display());

    Ok(())
}

/// Parse a `#rrggbb` color into an opaque RGBA value.
fn parse_background(value: &str) -> Result<[u8; 4]> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!("Invalid background color '{value}', expected #rrggbb"));
    }
    let r = u8::from_str_radix(&hex[0..2], 16)?;
    let g = u8::from_str_radix(&hex[2..4], 16)?;
    let b = u8::from_str_radix(&hex[4..6], 16)?;
    Ok([r, g, b, 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_background() {
        assert_eq!(parse_background("#000000").unwrap(), [0, 0, 0, 255]);
        assert_eq!(parse_background("20404f").unwrap(), [0x20, 0x40, 0x4f, 255]);
        assert!(parse_background("#fff").is_err());
        assert!(parse_background("#zzzzzz").is_err());
    }
}
