//! Command implementations for the collidergen CLI

pub mod generate;
pub mod render;
