//! Unit tests for joint angle geometry.

use liftform::angle_between_points;

#[test]
fn test_collinear_opposite_rays_are_180() {
    let angle = angle_between_points((0.2, 0.5), (0.5, 0.5), (0.8, 0.5));
    assert!((angle - 180.0).abs() <= 0.5);

    // Vertical leg: hip above knee above ankle
    let angle = angle_between_points((0.45, 0.5), (0.45, 0.7), (0.45, 0.9));
    assert!((angle - 180.0).abs() <= 0.5);
}

#[test]
fn test_perpendicular_rays_are_90() {
    let angle = angle_between_points((0.0, 1.0), (0.0, 0.0), (1.0, 0.0));
    assert!((angle - 90.0).abs() <= 0.5);
}

#[test]
fn test_zero_length_ray_is_exactly_zero() {
    assert_eq!(angle_between_points((0.0, 0.0), (0.0, 0.0), (1.0, 0.0)), 0.0);
    assert_eq!(angle_between_points((1.0, 0.0), (0.0, 0.0), (0.0, 0.0)), 0.0);
}

#[test]
fn test_result_is_within_range() {
    let points = [(0.1, 0.9), (0.3, 0.2), (0.7, 0.6), (0.95, 0.05), (0.5, 0.5)];
    for a in points {
        for v in points {
            for c in points {
                let angle = angle_between_points(a, v, c);
                assert!((0.0..=180.0).contains(&angle), "{} out of range", angle);
            }
        }
    }
}

#[test]
fn test_angle_is_symmetric_in_outer_points() {
    let a = (0.2, 0.3);
    let v = (0.5, 0.6);
    let c = (0.9, 0.4);
    assert!((angle_between_points(a, v, c) - angle_between_points(c, v, a)).abs() < 1e-4);
}
