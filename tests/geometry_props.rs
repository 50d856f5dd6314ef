use deploymap::render::geometry::{TableDimensions, to_normalized_position};
use deploymap::render::ruler::layout_inside;
use deploymap::{GameSize, InsideRuler, MapError, Vector2D};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0
}

fn game_size() -> impl Strategy<Value = GameSize> {
    prop::sample::select(GameSize::ALL.to_vec())
}

proptest! {
    #[test]
    fn normalize_yields_unit_length(x in coord(), y in coord()) {
        let v = Vector2D::new(x, y);
        match v.normalize() {
            Ok(unit) => prop_assert!((unit.magnitude() - 1.0).abs() < 1e-9),
            Err(err) => {
                prop_assert_eq!(err, MapError::ZeroVectorNormalize);
                prop_assert_eq!(v.magnitude(), 0.0);
            }
        }
    }

    #[test]
    fn subtract_then_add_restores(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Vector2D::new(ax, ay);
        let b = Vector2D::new(bx, by);
        let back = a.subtract(b).add(b);
        prop_assert!((back.x - a.x).abs() < 1e-9);
        prop_assert!((back.y - a.y).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Vector2D::new(ax, ay);
        let b = Vector2D::new(bx, by);
        prop_assert!((a.distance_to(b) - b.distance_to(a)).abs() < 1e-9);
        prop_assert!(a.distance_to(b) >= 0.0);
    }

    #[test]
    fn table_positions_normalize_into_range(size in game_size(), fx in 0.0f64..=1.0, fy in 0.0f64..=1.0) {
        let dims = TableDimensions::for_game_size(size);
        let pos = [fx * dims.width.0, fy * dims.height.0];
        prop_assert!(dims.contains(pos));
        let pct = to_normalized_position(pos, &dims);
        prop_assert!(pct.x.0 >= 0.0 && pct.x.0 <= 100.0 + 1e-9);
        prop_assert!(pct.y.0 >= 0.0 && pct.y.0 <= 100.0 + 1e-9);
    }

    #[test]
    fn inside_ruler_length_override_is_exact(
        sx in 0.0f64..48.0, sy in 0.0f64..48.0,
        dx in 1.0f64..10.0, dy in 1.0f64..10.0,
        length in 1.0f64..48.0,
    ) {
        let dims = TableDimensions::for_game_size(GameSize::Large);
        let ruler = InsideRuler { start: [sx, sy], end: [sx + dx, sy + dy], length: Some(length) };
        let layout = layout_inside(0, &ruler, &dims).unwrap();
        prop_assert!((layout.inches.0 - length).abs() < 1e-9);
        // Same direction as the unscaled ruler
        let plain = layout_inside(0, &InsideRuler { length: None, ..ruler }, &dims).unwrap();
        prop_assert!((layout.angle().0 - plain.angle().0).abs() < 1e-6);
    }
}
