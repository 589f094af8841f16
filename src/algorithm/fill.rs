//! Iterative four-directional flood fill
//!
//! Recolors the maximal 4-connected region sharing the start cell's color.
//! A cell is overwritten the moment it is discovered, so the live color
//! comparison doubles as the visited check and no separate visited set is
//! kept. This is only sound because a fill whose replacement equals the
//! target color is rejected up front as a no-op.

use std::collections::VecDeque;

use crate::io::error::{Result, invalid_argument};
use crate::spatial::grid::{BoundingBox, TileGrid};

/// Order in which discovered cells are expanded
///
/// Both orders yield the same final grid; they differ only in the shape of
/// the work-list while the fill is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillStrategy {
    /// Explicit stack, last discovered cell expanded first
    #[default]
    DepthFirst,
    /// Explicit queue, cells expanded in discovery order
    BreadthFirst,
}

/// Outcome of a single fill call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillResult {
    /// Number of cells recolored
    pub changed: usize,
    /// Rectangle enclosing every recolored cell, `None` if nothing changed
    pub dirty: Option<BoundingBox>,
}

impl FillResult {
    /// Result for a call that left the grid untouched
    pub const fn unchanged() -> Self {
        Self {
            changed: 0,
            dirty: None,
        }
    }

    /// Check whether the call modified the grid
    pub const fn is_noop(&self) -> bool {
        self.changed == 0
    }

    fn record(&mut self, x: usize, y: usize) {
        self.changed += 1;
        match &mut self.dirty {
            Some(bounds) => bounds.include(x, y),
            None => self.dirty = Some(BoundingBox::point(x, y)),
        }
    }
}

/// Stateless flood-fill engine
///
/// Holds only the traversal strategy; no grid state survives between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloodFill {
    strategy: FillStrategy,
}

impl FloodFill {
    /// Depth-first engine
    pub const fn new() -> Self {
        Self {
            strategy: FillStrategy::DepthFirst,
        }
    }

    /// Engine using the given traversal order
    pub const fn with_strategy(strategy: FillStrategy) -> Self {
        Self { strategy }
    }

    /// Traversal order used by this engine
    pub const fn strategy(&self) -> FillStrategy {
        self.strategy
    }

    /// Recolor the region containing `(start_x, start_y)` with `replacement`
    ///
    /// An out-of-bounds start (negative coordinates included) and a start
    /// cell already colored `replacement` are both silent no-ops that report
    /// zero changed cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FloodError::InvalidArgument`] if the grid has no cells,
    /// and propagates any access error raised by the [`TileGrid`]
    /// implementation.
    pub fn fill<G>(
        &self,
        grid: &mut G,
        start_x: i64,
        start_y: i64,
        replacement: G::Color,
    ) -> Result<FillResult>
    where
        G: TileGrid + ?Sized,
    {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            return Err(invalid_argument("grid", &"grid has no cells"));
        }

        let Some([x, y]) = start_cell(start_x, start_y, width, height) else {
            return Ok(FillResult::unchanged());
        };

        let target = grid.get(x, y)?;
        if target == replacement {
            return Ok(FillResult::unchanged());
        }

        let mut result = FillResult::unchanged();
        let mut frontier = Frontier::new(self.strategy);

        grid.set(x, y, replacement)?;
        result.record(x, y);
        frontier.push([x, y]);

        while let Some([cx, cy]) = frontier.pop() {
            for [nx, ny] in neighbors(cx, cy, width, height) {
                if grid.get(nx, ny)? == target {
                    grid.set(nx, ny, replacement)?;
                    result.record(nx, ny);
                    frontier.push([nx, ny]);
                }
            }
        }

        Ok(result)
    }
}

/// Flood fill with the default depth-first engine
///
/// # Errors
///
/// Same conditions as [`FloodFill::fill`]
pub fn flood_fill<G>(
    grid: &mut G,
    start_x: i64,
    start_y: i64,
    replacement: G::Color,
) -> Result<FillResult>
where
    G: TileGrid + ?Sized,
{
    FloodFill::new().fill(grid, start_x, start_y, replacement)
}

// Cells are pushed only after being recolored, so each enters at most once
// and the work-list never grows past the grid area.
enum Frontier {
    Stack(Vec<[usize; 2]>),
    Queue(VecDeque<[usize; 2]>),
}

impl Frontier {
    const fn new(strategy: FillStrategy) -> Self {
        match strategy {
            FillStrategy::DepthFirst => Self::Stack(Vec::new()),
            FillStrategy::BreadthFirst => Self::Queue(VecDeque::new()),
        }
    }

    fn push(&mut self, cell: [usize; 2]) {
        match self {
            Self::Stack(stack) => stack.push(cell),
            Self::Queue(queue) => queue.push_back(cell),
        }
    }

    fn pop(&mut self) -> Option<[usize; 2]> {
        match self {
            Self::Stack(stack) => stack.pop(),
            Self::Queue(queue) => queue.pop_front(),
        }
    }
}

/// Convert signed start coordinates to a cell, `None` if outside the grid
pub(crate) fn start_cell(x: i64, y: i64, width: usize, height: usize) -> Option<[usize; 2]> {
    let col = usize::try_from(x).ok().filter(|&col| col < width)?;
    let row = usize::try_from(y).ok().filter(|&row| row < height)?;
    Some([col, row])
}

/// In-bounds 4-neighbours of a cell: right, left, up, down
pub(crate) fn neighbors(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = [usize; 2]> {
    [
        (x + 1 < width).then_some([x + 1, y]),
        x.checked_sub(1).map(|left| [left, y]),
        (y + 1 < height).then_some([x, y + 1]),
        y.checked_sub(1).map(|down| [x, down]),
    ]
    .into_iter()
    .flatten()
}
