//! PNG rendering of tile grids and loading grids back from images
//!
//! Grid `y` grows upward while image rows grow downward, so the top image
//! row always shows the highest grid row.

use crate::io::error::{FloodError, Result, invalid_argument};
use crate::spatial::{Color, Grid};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Render each cell as a `tile_size` x `tile_size` square
///
/// # Errors
///
/// Returns an error if `tile_size` is zero or the image would not fit in
/// `u32` pixel dimensions
pub fn render_grid(grid: &Grid<Color>, tile_size: u32) -> Result<RgbaImage> {
    if tile_size == 0 {
        return Err(invalid_argument("tile_size", &"must be at least 1 pixel"));
    }

    let rows = u32::try_from(grid.height()).map_err(|e| invalid_argument("grid", &e))?;
    let cols = u32::try_from(grid.width()).map_err(|e| invalid_argument("grid", &e))?;
    let width = cols
        .checked_mul(tile_size)
        .ok_or_else(|| invalid_argument("tile_size", &"rendered width overflows"))?;
    let height = rows
        .checked_mul(tile_size)
        .ok_or_else(|| invalid_argument("tile_size", &"rendered height overflows"))?;

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let x = (px / tile_size) as usize;
        let y = (rows - 1 - py / tile_size) as usize;
        let color = grid.get(x, y).map_or([0, 0, 0, 0], Color::channels);
        Rgba(color)
    });

    Ok(img)
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid cannot be rendered at the requested tile size
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid<Color>, tile_size: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, tile_size)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FloodError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| FloodError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Load a grid from an image with one pixel per cell
///
/// # Errors
///
/// Returns an error if the image cannot be loaded or has invalid dimensions
pub fn load_grid_from_png(path: &Path) -> Result<Grid<Color>> {
    let img = image::open(path).map_err(|e| FloodError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    Grid::from_fn(width as usize, height as usize, |x, y| {
        let py = height as usize - 1 - y;
        rgba_img
            .get_pixel_checked(x as u32, py as u32)
            .map_or(Color::BLACK, |pixel| Color(pixel.0))
    })
}
