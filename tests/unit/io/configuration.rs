//! Tests for configuration constants consistency

#[cfg(test)]
mod tests {
    use floodtile::Color;
    use floodtile::io::configuration::{
        DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_PALETTE, DEFAULT_REPLACE_COLOR,
        DEFAULT_TILE_SIZE, GIF_FRAME_DELAY_MS, MAX_GRID_DIMENSION, PIXELS_PER_UNIT,
        VIEWER_MIN_FRAME_DELAY_MS,
    };
    use std::collections::HashSet;

    // Tests the default grid fits within the dimension limit
    // Verified by setting a default above the maximum
    #[test]
    fn test_default_grid_within_limits() {
        assert!(DEFAULT_GRID_WIDTH > 0 && DEFAULT_GRID_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_GRID_HEIGHT > 0 && DEFAULT_GRID_HEIGHT <= MAX_GRID_DIMENSION);
    }

    // Tests the palette has distinct colors including the replacement color
    // Verified by duplicating a palette entry
    #[test]
    fn test_palette_distinct() {
        let unique: HashSet<Color> = DEFAULT_PALETTE.iter().copied().collect();

        assert_eq!(unique.len(), DEFAULT_PALETTE.len());
        assert!(unique.contains(&DEFAULT_REPLACE_COLOR));
    }

    // Tests the default tile maps to half a world unit
    // Verified by changing pixels per unit
    #[test]
    fn test_default_unit_size() {
        let unit = f64::from(DEFAULT_TILE_SIZE) / PIXELS_PER_UNIT;
        assert!((unit - 0.5).abs() < f64::EPSILON);
    }

    // Tests the animation delay is something viewers can display
    // Verified by lowering the frame delay below the viewer minimum
    #[test]
    fn test_frame_delay_supported() {
        assert!(GIF_FRAME_DELAY_MS >= VIEWER_MIN_FRAME_DELAY_MS);
    }
}
