// Tests for the drifting wireframe-polygon layer.

use fx_core::floaters::FloaterField;
use glam::Vec2;

#[test]
fn floaters_stay_within_padded_bounds() {
    let bounds = Vec2::new(320.0, 200.0);
    let mut field = FloaterField::new(15, bounds, 5);
    for frame in 0..20_000 {
        field.step(frame as f64 * 16.0);
        for f in field.floaters() {
            assert!(f.pos.x >= -f.size && f.pos.x <= bounds.x + f.size);
            assert!(f.pos.y >= -f.size && f.pos.y <= bounds.y + f.size);
        }
    }
}

#[test]
fn polygon_side_counts_are_three_to_five() {
    let field = FloaterField::new(50, Vec2::new(100.0, 100.0), 8);
    for f in field.floaters() {
        assert!((3..=5).contains(&f.sides));
    }
}

#[test]
fn rotation_grows_with_time_and_speed() {
    let field = FloaterField::new(1, Vec2::new(100.0, 100.0), 2);
    let f = field.floaters()[0];
    assert_eq!(f.rotation(0.0), 0.0);
    assert!(f.rotation(10_000.0) > f.rotation(1_000.0));
}

#[test]
fn zero_bounds_skip_motion() {
    let mut field = FloaterField::new(5, Vec2::ZERO, 3);
    let before: Vec<_> = field.floaters().iter().map(|f| f.pos).collect();
    field.step(16.0);
    let after: Vec<_> = field.floaters().iter().map(|f| f.pos).collect();
    assert_eq!(before, after);
}
