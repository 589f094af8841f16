use bitvec::prelude::*;
use std::fmt;

use crate::algorithm::fill::{neighbors, start_cell};
use crate::io::error::{Result, invalid_argument};
use crate::spatial::grid::{BoundingBox, TileGrid};

/// Membership mask of a connected region over a fixed grid size
///
/// Bits are stored row-major (`y * width + x`). Provides O(1) membership
/// testing without touching the grid the region was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl RegionMask {
    /// Create an empty mask for a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Add a cell, ignoring cells outside the grid
    pub fn insert(&mut self, x: usize, y: usize) {
        if let Some(index) = self.index(x, y) {
            self.bits.set(index, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of cells in the region
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// All member cells as `[x, y]`, row by row from `y = 0`
    pub fn cells(&self) -> Vec<[usize; 2]> {
        self.bits
            .iter_ones()
            .map(|index| [index % self.width, index / self.width])
            .collect()
    }

    /// Smallest rectangle enclosing the region
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut cells = self.cells().into_iter();
        let [x, y] = cells.next()?;
        let mut bounds = BoundingBox::point(x, y);
        for [cx, cy] in cells {
            bounds.include(cx, cy);
        }
        Some(bounds)
    }

    /// Grid dimensions the mask was built for
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

impl fmt::Display for RegionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegionMask({} of {}x{} cells)",
            self.len(),
            self.width,
            self.height
        )
    }
}

/// Compute the 4-connected region sharing the color of `(start_x, start_y)`
///
/// Read-only counterpart of a fill: the grid is not modified, so membership
/// is tracked in the returned mask instead of by recoloring. Returns `None`
/// for an out-of-bounds start.
///
/// # Errors
///
/// Returns [`crate::FloodError::InvalidArgument`] if the grid has no cells,
/// and propagates any access error raised by the [`TileGrid`] implementation.
pub fn connected_region<G>(grid: &G, start_x: i64, start_y: i64) -> Result<Option<RegionMask>>
where
    G: TileGrid + ?Sized,
{
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(invalid_argument("grid", &"grid has no cells"));
    }

    let Some([x, y]) = start_cell(start_x, start_y, width, height) else {
        return Ok(None);
    };

    let target = grid.get(x, y)?;
    let mut region = RegionMask::new(width, height);
    let mut stack = vec![[x, y]];
    region.insert(x, y);

    while let Some([cx, cy]) = stack.pop() {
        for [nx, ny] in neighbors(cx, cy, width, height) {
            if !region.contains(nx, ny) && grid.get(nx, ny)? == target {
                region.insert(nx, ny);
                stack.push([nx, ny]);
            }
        }
    }

    Ok(Some(region))
}
