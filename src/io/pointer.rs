//! World-space pointer positions to grid cells
//!
//! Tiles are laid out from `origin` with cell `(x, y)` covering
//! `[origin + x * unit_size, origin + (x + 1) * unit_size)` on each axis.
//! Mapping never clamps: positions left of or below the grid give negative
//! cells, and bounds are left to the fill.

use num_traits::Float;

use crate::io::configuration::PIXELS_PER_UNIT;
use crate::io::error::{Result, invalid_argument};

/// Converts pointer positions into grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMapper<F = f64> {
    origin: [F; 2],
    unit_size: F,
}

impl<F: Float> PointerMapper<F> {
    /// Mapper for a grid whose lower-left corner sits at `origin`
    ///
    /// # Errors
    ///
    /// Returns [`crate::FloodError::InvalidArgument`] if `unit_size` is not a
    /// positive finite number
    pub fn new(origin: [F; 2], unit_size: F) -> Result<Self> {
        if !unit_size.is_finite() || unit_size <= F::zero() {
            return Err(invalid_argument(
                "unit_size",
                &"must be a positive finite number",
            ));
        }
        Ok(Self { origin, unit_size })
    }

    /// World size of one cell
    pub const fn unit_size(&self) -> F {
        self.unit_size
    }

    /// Cell under a world position, `None` if the position is not finite or
    /// the cell index does not fit in an `i64`
    pub fn cell_at(&self, world: [F; 2]) -> Option<[i64; 2]> {
        let x = self.axis_cell(world[0], self.origin[0])?;
        let y = self.axis_cell(world[1], self.origin[1])?;
        Some([x, y])
    }

    /// World position of the center of a cell
    pub fn cell_center(&self, cell: [i64; 2]) -> Option<[F; 2]> {
        let half = F::from(0.5)?;
        let x = F::from(cell[0])?;
        let y = F::from(cell[1])?;
        Some([
            self.origin[0] + (x + half) * self.unit_size,
            self.origin[1] + (y + half) * self.unit_size,
        ])
    }

    fn axis_cell(&self, world: F, origin: F) -> Option<i64> {
        num_traits::cast::<F, i64>(((world - origin) / self.unit_size).floor())
    }
}

impl PointerMapper<f64> {
    /// Mapper for tiles of `tile_size` pixels with the grid at the world origin
    ///
    /// # Errors
    ///
    /// Returns [`crate::FloodError::InvalidArgument`] if `tile_size` is zero
    pub fn for_tile_size(tile_size: u32) -> Result<Self> {
        Self::new([0.0, 0.0], f64::from(tile_size) / PIXELS_PER_UNIT)
    }
}
