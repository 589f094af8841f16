//! Tests for PNG rendering, export and loading

#[cfg(test)]
mod tests {
    use floodtile::io::image::{export_grid_as_png, load_grid_from_png, render_grid};
    use floodtile::{Color, Grid};

    fn sample_grid() -> Grid<Color> {
        Grid::from_rows(&[
            vec![Color::RED, Color::GREEN, Color::BLUE],
            vec![Color::YELLOW, Color::MAGENTA, Color::WHITE],
        ])
        .unwrap_or_else(|e| panic!("grid: {e}"))
    }

    // Tests each cell becomes a tile-sized square with y flipped
    // Verified by rendering without the vertical flip
    #[test]
    fn test_render_grid_layout() {
        let img = render_grid(&sample_grid(), 4).unwrap_or_else(|e| panic!("render: {e}"));

        assert_eq!(img.dimensions(), (12, 8));
        assert_eq!(img.get_pixel(0, 0).0, Color::RED.channels());
        assert_eq!(img.get_pixel(11, 3).0, Color::BLUE.channels());
        assert_eq!(img.get_pixel(5, 7).0, Color::MAGENTA.channels());
    }

    // Tests a zero tile size is rejected
    // Verified by removing the tile size check
    #[test]
    fn test_render_grid_zero_tile_size() {
        assert!(render_grid(&sample_grid(), 0).is_err());
    }

    // Tests PNG export creates parent directories and loads back per cell
    // Verified by disabling file save operation
    #[test]
    fn test_export_then_load_one_pixel_tiles() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let path = dir.path().join("nested").join("grid.png");
        let grid = sample_grid();

        let result = export_grid_as_png(&grid, 1, &path);
        assert!(result.is_ok(), "PNG export should succeed: {result:?}");
        assert!(path.exists(), "PNG file should be created");

        let loaded = load_grid_from_png(&path).unwrap_or_else(|e| panic!("load: {e}"));
        assert_eq!(loaded, grid);
    }

    // Tests loading a missing file reports the path
    // Verified by returning an empty grid on failure
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let path = dir.path().join("missing.png");

        let error = load_grid_from_png(&path).err();
        assert!(
            error.is_some_and(|e| e.to_string().contains("missing.png")),
            "missing file should produce an ImageLoad error"
        );
    }
}
