//! Initial grid coloring

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_argument};
use crate::spatial::{Color, Grid};

/// Fill every cell with a color drawn uniformly from `palette`
///
/// The same seed always produces the same grid.
///
/// # Errors
///
/// Returns [`crate::FloodError::InvalidArgument`] if the palette is empty or
/// the dimensions are invalid
pub fn random_palette_grid(
    width: usize,
    height: usize,
    palette: &[Color],
    seed: u64,
) -> Result<Grid<Color>> {
    if palette.is_empty() {
        return Err(invalid_argument(
            "palette",
            &"at least one color is required",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(width, height, |_, _| {
        let index = rng.random_range(0..palette.len());
        palette.get(index).copied().unwrap_or(Color::WHITE)
    })
}

/// Grid with every cell the same color
///
/// # Errors
///
/// Returns [`crate::FloodError::InvalidArgument`] if the dimensions are invalid
pub fn uniform_grid(width: usize, height: usize, color: Color) -> Result<Grid<Color>> {
    Grid::new(width, height, color)
}
