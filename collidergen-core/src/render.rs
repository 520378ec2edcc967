//! Raster preview of a decomposition, one filled block per rectangle.
//!
//! Each rectangle gets its own color so adjacent colliders can be told
//! apart by eye. Colors come from a seeded RNG, so a given seed always
//! produces the same image for the same input.

use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use thiserror::Error;

use crate::types::Rect;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("tile size must be at least 1 pixel")]
    ZeroTileSize,
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pixels per tile edge.
    pub tile_size: u32,
    /// Seed for the per-rectangle color sequence.
    pub seed: u64,
    /// Background fill for empty cells.
    pub background: [u8; 4],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tile_size: 32,
            seed: 0x001_1DE5,
            background: [0, 0, 0, 255],
        }
    }
}

/// Rasterize the rectangles of a `map_width` x `map_height` tile map.
pub fn render_colliders(
    rects: &[Rect],
    map_width: u32,
    map_height: u32,
    options: &RenderOptions,
) -> Result<RgbaImage, RenderError> {
    if options.tile_size == 0 {
        return Err(RenderError::ZeroTileSize);
    }
    let scale = options.tile_size;
    let mut image = RgbaImage::from_pixel(
        map_width * scale,
        map_height * scale,
        Rgba(options.background),
    );

    let mut rng = StdRng::seed_from_u64(options.seed);
    for rect in rects {
        let color = next_color(&mut rng);
        for py in rect.y * scale..rect.bottom() * scale {
            for px in rect.x * scale..rect.right() * scale {
                image.put_pixel(px, py, color);
            }
        }
    }

    log::debug!(
        "rendered {} rectangles at {} px/tile ({}x{} px)",
        rects.len(),
        scale,
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Render and write in one step; the format follows the file extension.
pub fn save_preview<P: AsRef<Path>>(
    rects: &[Rect],
    map_width: u32,
    map_height: u32,
    options: &RenderOptions,
    path: P,
) -> Result<(), RenderError> {
    let image = render_colliders(rects, map_width, map_height, options)?;
    image.save(path.as_ref())?;
    Ok(())
}

/// Channels are floored at 32 so no rectangle disappears into a dark
/// background.
fn next_color(rng: &mut StdRng) -> Rgba<u8> {
    Rgba([
        rng.gen_range(32..=255),
        rng.gen_range(32..=255),
        rng.gen_range(32..=255),
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_tile_size_is_an_error() {
        let options = RenderOptions {
            tile_size: 0,
            ..RenderOptions::default()
        };
        let err = render_colliders(&[], 2, 2, &options).unwrap_err();
        assert!(matches!(err, RenderError::ZeroTileSize));
    }

    #[test]
    fn test_image_dimensions_follow_tile_size() {
        let options = RenderOptions {
            tile_size: 4,
            ..RenderOptions::default()
        };
        let image = render_colliders(&[], 3, 2, &options).unwrap();
        assert_eq!((image.width(), image.height()), (12, 8));
    }

    #[test]
    fn test_rect_pixels_differ_from_background() {
        let options = RenderOptions {
            tile_size: 2,
            ..RenderOptions::default()
        };
        let rects = [Rect::new(0, 0, 1, 1)];
        let image = render_colliders(&rects, 2, 1, &options).unwrap();
        let background = Rgba(options.background);
        assert_ne!(*image.get_pixel(0, 0), background);
        assert_ne!(*image.get_pixel(1, 1), background);
        // outside the rect stays background
        assert_eq!(*image.get_pixel(2, 0), background);
    }

    #[test]
    fn test_rendering_is_deterministic_for_a_seed() {
        let options = RenderOptions::default();
        let rects = [Rect::new(0, 0, 2, 1), Rect::new(0, 1, 1, 1)];
        let a = render_colliders(&rects, 2, 2, &options).unwrap();
        let b = render_colliders(&rects, 2, 2, &options).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_adjacent_rects_get_distinct_colors() {
        let options = RenderOptions {
            tile_size: 1,
            ..RenderOptions::default()
        };
        let rects = [Rect::new(0, 0, 1, 1), Rect::new(1, 0, 1, 1)];
        let image = render_colliders(&rects, 2, 1, &options).unwrap();
        assert_ne!(image.get_pixel(0, 0), image.get_pixel(1, 0));
    }
}
