//! Grid defaults and runtime configuration constants

use crate::spatial::color::Color;

// Grid shape used when no input image is given
/// Default number of columns
pub const DEFAULT_GRID_WIDTH: usize = 10;
/// Default number of rows
pub const DEFAULT_GRID_HEIGHT: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Rendered size of one tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 50;

// World units are tile pixels scaled by this factor
/// Pixels per world unit when mapping pointer positions
pub const PIXELS_PER_UNIT: f64 = 100.0;

/// Color written by a fill when none is given
pub const DEFAULT_REPLACE_COLOR: Color = Color::RED;

/// Colors the random initializer picks from
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::RED,
    Color::BLUE,
    Color::GREEN,
    Color::YELLOW,
    Color::MAGENTA,
];

/// Fixed seed for reproducible grids
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "floodtile_result.png";
/// Suffix added to the output stem for the fill animation
pub const VISUALIZATION_SUFFIX: &str = "_visualization";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
