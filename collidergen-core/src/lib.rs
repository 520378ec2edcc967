//! collidergen core library
//!
//! Grid types, the greedy rectangle decomposer, tile-map input adapters,
//! and the raster preview renderer.

pub mod decompose;
pub mod grid;
pub mod io;
#[cfg(feature = "render")]
pub mod render;
pub mod types;

// Re-export commonly used types and functions
pub use decompose::decompose;
pub use grid::{Grid, GridError};
#[cfg(feature = "render")]
pub use render::{render_colliders, RenderOptions};
pub use types::{ColliderSet, Rect};

/// Version information for the collidergen core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
