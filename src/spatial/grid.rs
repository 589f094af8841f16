//! Fixed-size tile grid storage and the capability interface fills run against
//!
//! Cells are addressed as `(x, y)` with `x` growing to the right and `y`
//! growing upward, matching the world layout of the tiles. Every in-bounds
//! cell always holds a color; there are no sparse entries.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{FloodError, Result, invalid_argument};
use crate::spatial::color::Color;

/// Minimal grid capability needed by the fill engine
///
/// Hosts that keep tile colors in their own storage (scene objects, GPU
/// buffers) implement this directly instead of copying into a [`Grid`].
pub trait TileGrid {
    /// Cell value type; only equality is ever inspected
    type Color: Copy + PartialEq;

    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Read the color of a cell
    ///
    /// # Errors
    ///
    /// Returns [`FloodError::OutOfBounds`] if the cell lies outside the grid
    fn get(&self, x: usize, y: usize) -> Result<Self::Color>;

    /// Overwrite the color of a cell
    ///
    /// # Errors
    ///
    /// Returns [`FloodError::OutOfBounds`] if the cell lies outside the grid
    fn set(&mut self, x: usize, y: usize, color: Self::Color) -> Result<()>;

    /// Check whether a cell lies inside the grid
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }
}

/// Inclusive axis-aligned rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum `[x, y]` (inclusive)
    pub min: [usize; 2],
    /// Maximum `[x, y]` (inclusive)
    pub max: [usize; 2],
}

impl BoundingBox {
    /// Rectangle covering a single cell
    pub const fn point(x: usize, y: usize) -> Self {
        Self {
            min: [x, y],
            max: [x, y],
        }
    }

    /// Grow the rectangle to cover another cell
    pub fn include(&mut self, x: usize, y: usize) {
        self.min = [self.min[0].min(x), self.min[1].min(y)];
        self.max = [self.max[0].max(x), self.max[1].max(y)];
    }

    /// Check if a cell is within the rectangle
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.min[0] && x <= self.max[0] && y >= self.min[1] && y <= self.max[1]
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        self.max[0] - self.min[0] + 1
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        self.max[1] - self.min[1] + 1
    }
}

/// Dense 2D grid of tile colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<C = Color> {
    // Indexed as [x, y]
    cells: Array2<C>,
}

impl<C: Copy + PartialEq> Grid<C> {
    /// Create a grid with every cell set to the same color
    ///
    /// # Errors
    ///
    /// Returns [`FloodError::InvalidArgument`] if either dimension is zero or
    /// exceeds the maximum supported grid dimension
    pub fn new(width: usize, height: usize, color: C) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::from_elem((width, height), color),
        })
    }

    /// Create a grid whose cell colors are produced by `f(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`FloodError::InvalidArgument`] if either dimension is zero or
    /// exceeds the maximum supported grid dimension
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> C,
    ) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::from_shape_fn((width, height), |(x, y)| f(x, y)),
        })
    }

    /// Build a grid from rows listed top to bottom
    ///
    /// Convenient for writing grids literally: the first row becomes the
    /// highest `y`.
    ///
    /// # Errors
    ///
    /// Returns [`FloodError::InvalidArgument`] if there are no rows, the rows
    /// are empty, or the rows differ in length
    pub fn from_rows(rows: &[Vec<C>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != width) {
            return Err(invalid_argument("rows", &"all rows must have the same length"));
        }
        validate_dimensions(width, height)?;

        let mut values = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                let color = rows
                    .get(height - 1 - y)
                    .and_then(|row| row.get(x))
                    .copied()
                    .ok_or_else(|| invalid_argument("rows", &"ragged row data"))?;
                values.push(color);
            }
        }

        let cells = Array2::from_shape_vec((width, height), values)
            .map_err(|e| invalid_argument("rows", &e))?;
        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Check whether a cell lies inside the grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Read the color of a cell
    ///
    /// # Errors
    ///
    /// Returns [`FloodError::OutOfBounds`] if the cell lies outside the grid
    pub fn get(&self, x: usize, y: usize) -> Result<C> {
        self.cells
            .get([x, y])
            .copied()
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Overwrite the color of a cell
    ///
    /// # Errors
    ///
    /// Returns [`FloodError::OutOfBounds`] if the cell lies outside the grid
    pub fn set(&mut self, x: usize, y: usize, color: C) -> Result<()> {
        let err = self.out_of_bounds(x, y);
        let cell = self.cells.get_mut([x, y]).ok_or(err)?;
        *cell = color;
        Ok(())
    }

    /// Number of cells currently holding `color`
    pub fn count(&self, color: C) -> usize {
        self.cells.iter().filter(|&&cell| cell == color).count()
    }

    /// Iterate over every cell as `((x, y), color)`
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), C)> + '_ {
        self.cells.indexed_iter().map(|(position, &color)| (position, color))
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> FloodError {
        FloodError::OutOfBounds {
            position: [x, y],
            dimensions: (self.width(), self.height()),
        }
    }
}

impl<C: Copy + PartialEq> TileGrid for Grid<C> {
    type Color = C;

    fn width(&self) -> usize {
        Self::width(self)
    }

    fn height(&self) -> usize {
        Self::height(self)
    }

    fn get(&self, x: usize, y: usize) -> Result<C> {
        Self::get(self, x, y)
    }

    fn set(&mut self, x: usize, y: usize, color: C) -> Result<()> {
        Self::set(self, x, y, color)
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_argument(
            "dimensions",
            &format!("grid must have at least one cell, got {width}x{height}"),
        ));
    }
    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(invalid_argument(
            "dimensions",
            &format!("{width}x{height} exceeds the maximum of {MAX_GRID_DIMENSION} per side"),
        ));
    }
    Ok(())
}
