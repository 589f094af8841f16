/// Flood-fill engine and traversal strategies
pub mod fill;
/// Read-only connected region queries
pub mod region;

pub use fill::{FillResult, FillStrategy, FloodFill, flood_fill};
pub use region::{RegionMask, connected_region};
