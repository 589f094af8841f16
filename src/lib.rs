//! Colored tile grid with an iterative four-directional flood fill
//!
//! A fill recolors the maximal 4-connected region sharing the start cell's
//! color. The engine runs against the small [`spatial::TileGrid`] capability
//! trait, so it has no dependency on how tiles are stored or drawn.

#![forbid(unsafe_code)]

/// Flood fill and connected region queries
pub mod algorithm;
/// Grid initialization, pointer mapping, rendering and the command-line session
pub mod io;
/// Grid storage and tile colors
pub mod spatial;

pub use algorithm::{FillResult, FillStrategy, FloodFill, flood_fill};
pub use io::error::{FloodError, Result};
pub use spatial::{Color, Grid, TileGrid};
