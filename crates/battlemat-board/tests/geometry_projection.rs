//! Spell template projection through the board facade, including pan and
//! zoom effects on the produced pixel geometry.

use battlemat_board::{Board, ShapeGeometry, SpellShape, WheelDirection};
use battlemat_core::{GridConfig, PixelPoint, PixelVec};
use serde_json::json;

fn board() -> Board {
    let mut board = Board::new(GridConfig::default()).unwrap();
    let records: Vec<battlemat_store::EntityRecord> = serde_json::from_value(json!([
        { "id_entity": 1, "id_user": 1, "name": "wizard",
          "positionx": 4, "positiony": 4, "size": 1, "speed": 30.0 },
    ]))
    .unwrap();
    board.load_records(&records);
    board
}

#[test]
fn template_needs_anchor_and_shape() {
    let mut board = board();
    board.set_measurement_mode(true);
    board.set_spell_shape(SpellShape::Circle);
    // Shape set but nothing anchored yet
    assert!(board.spell_geometry().is_none());

    board.token_click(1).unwrap();
    assert!(board.spell_geometry().is_some());

    board.set_spell_shape(SpellShape::None);
    assert!(board.spell_geometry().is_none());
}

#[test]
fn circle_tracks_anchor_and_pan() {
    let mut board = board();
    board.set_measurement_mode(true);
    board.set_spell_shape(SpellShape::Circle);
    board.set_spell_range(30.0);
    board.token_click(1).unwrap();

    match board.spell_geometry().unwrap() {
        ShapeGeometry::Circle { center, radius_px } => {
            // Cell (4,4) center at 50 px cells
            assert_eq!(center, PixelPoint::new(225.0, 225.0));
            assert_eq!(radius_px, 300.0);
        }
        other => panic!("expected circle, got {:?}", other),
    }

    board.pan_by(PixelVec::new(40.0, -10.0));
    match board.spell_geometry().unwrap() {
        ShapeGeometry::Circle { center, .. } => {
            assert_eq!(center, PixelPoint::new(265.0, 215.0));
        }
        other => panic!("expected circle, got {:?}", other),
    }
}

#[test]
fn cone_rotation_is_deterministic() {
    let mut board = board();
    board.set_measurement_mode(true);
    board.set_spell_shape(SpellShape::Cone);
    board.set_spell_range(30.0);
    board.token_click(1).unwrap();

    let before = board.spell_geometry().unwrap();
    // Projection is a pure function of the template state
    assert_eq!(board.spell_geometry().unwrap(), before);

    // Two wheel ticks down: facing 30 degrees
    board.wheel(WheelDirection::Down);
    board.wheel(WheelDirection::Down);

    match board.spell_geometry().unwrap() {
        ShapeGeometry::Cone {
            apex,
            rim_a,
            rim_b,
            radius_px,
        } => {
            assert_eq!(apex, PixelPoint::new(225.0, 225.0));
            assert_eq!(radius_px, 300.0);
            // Rims at 0 and 60 degrees around the 30 degree facing
            assert!((rim_a.x - 525.0).abs() < 1e-9);
            assert!((rim_a.y - 225.0).abs() < 1e-9);
            assert!((rim_b.x - (225.0 + 150.0)).abs() < 1e-9);
            assert!((rim_b.y - (225.0 + 300.0 * 60f64.to_radians().sin())).abs() < 1e-9);
        }
        other => panic!("expected cone, got {:?}", other),
    }
}

#[test]
fn square_is_centered_on_anchor() {
    let mut board = board();
    board.set_measurement_mode(true);
    board.set_spell_shape(SpellShape::Square);
    board.set_spell_range(10.0); // 2 cells: 100 px radius
    board.token_click(1).unwrap();

    match board.spell_geometry().unwrap() {
        ShapeGeometry::Square { top_left, side_px } => {
            assert_eq!(top_left, PixelPoint::new(125.0, 125.0));
            assert_eq!(side_px, 200.0);
        }
        other => panic!("expected square, got {:?}", other),
    }
}

#[test]
fn range_scales_with_zoom() {
    let mut board = board();
    board.set_measurement_mode(true);
    board.set_spell_shape(SpellShape::Circle);
    board.set_spell_range(30.0);
    board.token_click(1).unwrap();

    // Leave measurement mode to zoom, then re-anchor
    board.set_measurement_mode(false);
    board.wheel(WheelDirection::Down); // 45 px cells
    board.set_measurement_mode(true);
    board.set_spell_shape(SpellShape::Circle);
    board.token_click(1).unwrap();

    match board.spell_geometry().unwrap() {
        ShapeGeometry::Circle { radius_px, .. } => {
            // Still 6 cells, now 45 px each
            assert_eq!(radius_px, 270.0);
        }
        other => panic!("expected circle, got {:?}", other),
    }
}

#[test]
fn movement_range_follows_token() {
    let mut board = board();
    match board.movement_range_for(1).unwrap().unwrap() {
        ShapeGeometry::Circle { center, radius_px } => {
            assert_eq!(center, PixelPoint::new(225.0, 225.0));
            // 30 ft speed: 6 cells
            assert_eq!(radius_px, 300.0);
        }
        other => panic!("expected circle, got {:?}", other),
    }
    assert!(board.movement_range_for(42).is_err());
}
