//! Spatial data structures
//!
//! This module contains the grid storage and its cell values:
//! - Tile colors and their parsing
//! - Grid storage with bounds-checked access

/// Tile color values
pub mod color;
/// Grid storage and the capability trait used by the fill engine
pub mod grid;

pub use color::Color;
pub use grid::{BoundingBox, Grid, TileGrid};
