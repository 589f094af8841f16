//! Frame capture and GIF generation for fill sequences

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{FloodError, Result};
use crate::io::image::render_grid;
use crate::spatial::{Color, Grid};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Captures rendered grid snapshots between fills
///
/// Call [`FillRecorder::capture`] once before the first fill and once after
/// each fill to get one animation frame per step.
pub struct FillRecorder {
    frames: Vec<RgbaImage>,
    tile_size: u32,
}

impl FillRecorder {
    /// Create a recorder rendering cells at `tile_size` pixels
    pub const fn new(tile_size: u32) -> Self {
        Self {
            frames: Vec::new(),
            tile_size,
        }
    }

    /// Render the current grid state as the next frame
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be rendered
    pub fn capture(&mut self, grid: &Grid<Color>) -> Result<()> {
        self.frames.push(render_grid(grid, self.tile_size)?);
        Ok(())
    }

    /// Number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// Delays below what viewers reliably honour are raised to the viewer
    /// minimum. The final frame is held longer so the end state is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(FloodError::InvalidArgument {
                argument: "frames",
                reason: "No frames captured for visualization".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let last_index = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, img)| {
            let delay = if index == last_index {
                delay_ms * 4
            } else {
                delay_ms
            };
            Frame::from_parts(img.clone(), 0, 0, Delay::from_numer_denom_ms(delay, 1))
        });

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FloodError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| FloodError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| FloodError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
