//! Tests for pointer position to grid cell mapping

#[cfg(test)]
mod tests {
    use floodtile::FloodError;
    use floodtile::io::pointer::PointerMapper;

    // Tests positions map by flooring the scaled local offset
    // Verified by rounding instead of flooring
    #[test]
    fn test_cell_at_floors() {
        let mapper = PointerMapper::for_tile_size(50).unwrap_or_else(|e| panic!("mapper: {e}"));

        assert_eq!(mapper.cell_at([0.0, 0.0]), Some([0, 0]));
        assert_eq!(mapper.cell_at([0.49, 0.99]), Some([0, 1]));
        assert_eq!(mapper.cell_at([4.75, 2.5]), Some([9, 5]));
    }

    // Tests positions outside the grid are not clamped
    // Verified by clamping negative cells to zero
    #[test]
    fn test_cell_at_negative_positions() {
        let mapper = PointerMapper::for_tile_size(50).unwrap_or_else(|e| panic!("mapper: {e}"));

        assert_eq!(mapper.cell_at([-0.1, 0.2]), Some([-1, 0]));
        assert_eq!(mapper.cell_at([-1.0, -1.01]), Some([-2, -3]));
    }

    // Tests the origin offset is removed before scaling
    // Verified by adding the origin instead of subtracting
    #[test]
    fn test_cell_at_with_origin() {
        let mapper = PointerMapper::new([10.0_f32, -2.0], 0.25)
            .unwrap_or_else(|e| panic!("mapper: {e}"));

        assert_eq!(mapper.cell_at([10.0, -2.0]), Some([0, 0]));
        assert_eq!(mapper.cell_at([10.6, -1.5]), Some([2, 2]));
        assert_eq!(mapper.cell_at([9.9, -2.1]), Some([-1, -1]));
    }

    // Tests non-finite positions have no cell
    // Verified by casting NaN to zero
    #[test]
    fn test_cell_at_non_finite() {
        let mapper = PointerMapper::for_tile_size(50).unwrap_or_else(|e| panic!("mapper: {e}"));

        assert_eq!(mapper.cell_at([f64::NAN, 0.0]), None);
        assert_eq!(mapper.cell_at([0.0, f64::INFINITY]), None);
    }

    // Tests cell centers map back to the same cell
    // Verified by omitting the half-cell offset
    #[test]
    fn test_cell_center_round_trip() {
        let mapper = PointerMapper::new([1.0, 1.0], 0.5).unwrap_or_else(|e| panic!("mapper: {e}"));

        let center = mapper
            .cell_center([3, -2])
            .unwrap_or_else(|| panic!("center should exist"));
        assert!((center[0] - 2.75_f64).abs() < 1e-12);
        assert!((center[1] - 0.25_f64).abs() < 1e-12);
        assert_eq!(mapper.cell_at(center), Some([3, -2]));
    }

    // Tests mappers built from a tile size compare equal to explicit ones
    // Verified by dividing the tile size by the wrong scale
    #[test]
    fn test_for_tile_size_matches_explicit_mapper() {
        let from_tile = PointerMapper::for_tile_size(50).unwrap_or_else(|e| panic!("mapper: {e}"));
        let explicit =
            PointerMapper::new([0.0_f64, 0.0], 0.5).unwrap_or_else(|e| panic!("mapper: {e}"));

        assert_eq!(from_tile, explicit);
        assert!((from_tile.unit_size() - 0.5_f64).abs() < 1e-12);
    }

    // Tests invalid unit sizes are rejected
    // Verified by accepting zero
    #[test]
    fn test_invalid_unit_size() {
        assert!(matches!(
            PointerMapper::new([0.0, 0.0], 0.0),
            Err(FloodError::InvalidArgument { .. })
        ));
        assert!(PointerMapper::new([0.0, 0.0], -1.0).is_err());
        assert!(PointerMapper::new([0.0, 0.0], f64::NAN).is_err());
        assert!(PointerMapper::for_tile_size(0).is_err());
    }
}
