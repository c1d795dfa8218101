//! Property tests for the geometric invariants the interaction layer
//! relies on.

use battlemat_board::euclidean_distance;
use battlemat_core::{snap_delta, GridConfig, GridPoint, PixelVec};
use proptest::prelude::*;

proptest! {
    #[test]
    fn clamped_positions_always_fit_the_grid(
        x in -100i32..100,
        y in -100i32..100,
        footprint in 1i32..4,
    ) {
        let config = GridConfig::default(); // 20x15
        let clamped = config.clamp_for_footprint(GridPoint::new(x, y), footprint);
        prop_assert!(clamped.x >= 0);
        prop_assert!(clamped.y >= 0);
        prop_assert!(clamped.x + footprint <= config.width_cells);
        prop_assert!(clamped.y + footprint <= config.height_cells);
    }

    #[test]
    fn clamping_in_bounds_is_identity(
        x in 0i32..19,
        y in 0i32..14,
    ) {
        let config = GridConfig::default();
        let point = GridPoint::new(x, y);
        prop_assert_eq!(config.clamp_for_footprint(point, 1), point);
    }

    #[test]
    fn distance_is_symmetric_and_nonnegative(
        ax in -50i32..50, ay in -50i32..50,
        bx in -50i32..50, by in -50i32..50,
    ) {
        let a = GridPoint::new(ax, ay);
        let b = GridPoint::new(bx, by);
        let d = euclidean_distance(a, b);
        prop_assert!(d >= 0.0);
        prop_assert_eq!(d, euclidean_distance(b, a));
        // Zero exactly at coincident points
        prop_assert_eq!(d == 0.0, a == b);
    }

    #[test]
    fn snapping_never_moves_more_than_the_drag(
        dx in -2000.0f64..2000.0,
        dy in -2000.0f64..2000.0,
    ) {
        let (cx, cy) = snap_delta(PixelVec::new(dx, dy), 50.0);
        // Rounding moves at most half a cell beyond the true displacement
        prop_assert!((cx as f64 * 50.0 - dx).abs() <= 25.0);
        prop_assert!((cy as f64 * 50.0 - dy).abs() <= 25.0);
    }
}
