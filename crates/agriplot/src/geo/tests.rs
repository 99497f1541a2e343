use super::*;
use nalgebra::vector;

fn toy_square() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 10.0),
        GeoPoint::new(10.0, 10.0),
        GeoPoint::new(10.0, 0.0),
    ]
}

#[test]
fn project_moves_north_and_east() {
    let c = GeoPoint::new(0.0, 0.0);
    let p = project(c, vector![METERS_PER_DEG_LNG, METERS_PER_DEG_LAT]).unwrap();
    assert!((p.latitude - 1.0).abs() < 1e-12);
    assert!((p.longitude - 1.0).abs() < 1e-12);
}

#[test]
fn project_scales_longitude_by_cosine() {
    let c = GeoPoint::new(60.0, 10.0);
    let p = project(c, vector![100.0, 0.0]).unwrap();
    let expected = 100.0 / (METERS_PER_DEG_LNG * 0.5);
    assert!((p.longitude - 10.0 - expected).abs() < 1e-12);
    assert_eq!(p.latitude, 60.0);
}

#[test]
fn unproject_inverts_project() {
    let c = GeoPoint::new(9.3093, 123.308);
    for off in [vector![0.0, 0.0], vector![12.5, -3.0], vector![-250.0, 800.0]] {
        let p = project(c, off).unwrap();
        let back = unproject(c, p).unwrap();
        assert!((back - off).norm() < 1e-6, "{off:?} -> {back:?}");
    }
}

#[test]
fn pole_reference_is_undefined() {
    let north = GeoPoint::new(90.0, 0.0);
    let south = GeoPoint::new(-90.0, 45.0);
    assert!(project(north, vector![1.0, 1.0]).is_none());
    assert!(project(south, vector![0.0, 0.0]).is_none());
    assert!(unproject(north, GeoPoint::new(89.0, 0.0)).is_none());
    // Just off the pole still works.
    assert!(project(GeoPoint::new(89.9, 0.0), vector![1.0, 1.0]).is_some());
}

#[test]
fn non_finite_inputs_are_undefined() {
    let c = GeoPoint::new(f64::NAN, 0.0);
    assert!(project(c, vector![0.0, 0.0]).is_none());
    let c = GeoPoint::new(1.0, 1.0);
    assert!(project(c, vector![f64::INFINITY, 0.0]).is_none());
}

#[test]
fn inside_and_outside_toy_square() {
    let sq = toy_square();
    assert!(is_inside(GeoPoint::new(5.0, 5.0), &sq));
    assert!(!is_inside(GeoPoint::new(15.0, 15.0), &sq));
    assert!(!is_inside(GeoPoint::new(5.0, -1.0), &sq));
}

#[test]
fn edge_points_follow_half_open_rule() {
    let sq = toy_square();
    // Bottom edge (lat 0) counts as inside, top edge (lat 10) as outside.
    assert!(is_inside(GeoPoint::new(0.0, 5.0), &sq));
    assert!(!is_inside(GeoPoint::new(10.0, 5.0), &sq));
    // Western edge (lng 0) lies on the ray's origin side: vertical edges never straddle.
    assert!(is_inside(GeoPoint::new(5.0, 0.0), &sq));
    assert!(!is_inside(GeoPoint::new(5.0, 10.0), &sq));
}

#[test]
fn degenerate_polygons_contain_nothing() {
    let p = GeoPoint::new(0.5, 0.5);
    assert!(!is_inside(p, &[]));
    assert!(!is_inside(p, &[GeoPoint::new(0.0, 0.0)]));
    assert!(!is_inside(p, &[GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]));
}

#[test]
fn winding_order_does_not_matter() {
    let mut sq = toy_square();
    sq.reverse();
    assert!(is_inside(GeoPoint::new(5.0, 5.0), &sq));
    assert!(!is_inside(GeoPoint::new(-5.0, 5.0), &sq));
}

#[test]
fn bounding_box_of_points() {
    assert!(BoundingBox::of(&[]).is_none());
    let b = BoundingBox::of(&toy_square()).unwrap();
    assert_eq!((b.min_lat, b.max_lat, b.min_lng, b.max_lng), (0.0, 10.0, 0.0, 10.0));
    assert_eq!(b.mean_latitude(), 5.0);
}
