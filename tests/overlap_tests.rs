use nalgebra::{Point2, Vector3};
use reflectrs::{
    Scene,
    errors::GeometryError,
    overlap::{compute_overlap, compute_overlap_report},
    quad::Quad3,
};

mod support;

use crate::support::{approx_eq, horizontal_quad, vec_approx_eq};

#[test]
fn flat_mirror_under_larger_target() {
    let mirror = horizontal_quad(0.0, 0.0, 0.0, 1.0);
    let target = horizontal_quad(0.0, 0.0, 10.0, 2.0);
    let result = compute_overlap(&mirror, &target, &Vector3::new(0.0, 0.0, -1.0)).unwrap();
    assert!(approx_eq(result.area, 1.0, 1e-9));
    assert_eq!(result.polygon.len(), 4);
}

#[test]
fn incident_magnitude_does_not_matter() {
    let mirror = horizontal_quad(0.0, 0.0, 0.0, 1.0);
    let target = horizontal_quad(0.0, 0.0, 10.0, 2.0);
    let unit = compute_overlap(&mirror, &target, &Vector3::new(0.1, 0.05, -1.0).normalize()).unwrap();
    let long = compute_overlap(&mirror, &target, &(Vector3::new(0.1, 0.05, -1.0) * 30.0)).unwrap();
    assert!(approx_eq(unit.area, long.area, 1e-9));
}

#[test]
fn slanted_beam_shifts_footprint_partly_off_target() {
    // reflected direction (0.1, 0, 1) moves the footprint 1 unit along x over 10 units of height
    let mirror = horizontal_quad(0.5, 0.0, 0.0, 1.0);
    let target = horizontal_quad(0.0, 0.0, 10.0, 2.0);
    let result = compute_overlap(&mirror, &target, &Vector3::new(0.1, 0.0, -1.0)).unwrap();
    // footprint spans x in [1.5, 2.5], target x in [0, 2]
    assert!(approx_eq(result.area, 0.5, 1e-9));
}

#[test]
fn heliostat_example() {
    let scene = Scene::heliostat_example();
    let report = scene.report().unwrap();

    assert!(approx_eq(report.reflector_plane.normal.norm(), 1.0, 1e-12));
    assert!(vec_approx_eq(
        &report.reflected_direction,
        &Vector3::new(0.44499420858957045, 0.09950373, 0.8899884171791409),
        1e-9
    ));
    assert_eq!(report.projected_corners.len(), 4);
    for corner in &report.projected_corners {
        assert!(report.target_plane.contains_point(corner, 1e-9));
    }

    assert!(approx_eq(report.target_polygon.area(), 4.0, 1e-6));
    assert!(approx_eq(report.projected_polygon.area(), 2.6443972189078093, 1e-6));
    assert!(approx_eq(report.intersection.area, 0.5569054346244785, 1e-6));
    assert!(report.target_polygon.is_valid());
    assert!(report.projected_polygon.is_valid());
    assert!(approx_eq(report.overlap_fraction(), 0.5569054346244785 / 2.6443972189078093, 1e-6));

    // the overlap's corners sit on the receiver plane in world space
    for p in report.intersection_world() {
        assert!(report.target_plane.contains_point(&p, 1e-9));
    }
}

#[test]
fn pipeline_is_pure() {
    let scene = Scene::heliostat_example();
    let first = compute_overlap(&scene.reflector, &scene.target, &scene.incident).unwrap();
    let second = compute_overlap(&scene.reflector, &scene.target, &scene.incident).unwrap();
    assert_eq!(first, second);
    assert_eq!(scene.report().unwrap(), scene.report().unwrap());
}

#[test]
fn overlap_never_exceeds_either_polygon() {
    let scene = Scene::heliostat_example();
    let report = scene.report().unwrap();
    let bound = report.target_polygon.area().min(report.projected_polygon.area());
    assert!(report.intersection.area <= bound + 1e-9);
}

#[test]
fn beam_parallel_to_target_is_a_miss_not_an_error() {
    // mirror faces +Z; (1, 0, -1) reflects to (1, 0, 1), which lies in the plane y = 5
    let mirror = horizontal_quad(0.0, 0.0, 0.0, 1.0);
    let target = Quad3::from_arrays([
        [0.0, 5.0, 0.0],
        [1.0, 5.0, 0.0],
        [1.0, 5.0, 1.0],
        [0.0, 5.0, 1.0],
    ]);
    let report = compute_overlap_report(&mirror, &target, &Vector3::new(1.0, 0.0, -1.0)).unwrap();
    assert!(report.projected_corners.len() <= 3);
    assert!(report.projected_polygon.is_empty());
    assert!(report.intersection.is_empty());
    assert_eq!(report.intersection.area, 0.0);
    assert_eq!(report.overlap_fraction(), 0.0);
    assert_eq!(report.target_polygon.len(), 4);
}

#[test]
fn beam_missing_target_gives_empty_result() {
    let mirror = horizontal_quad(0.0, 0.0, 0.0, 1.0);
    let target = horizontal_quad(50.0, 50.0, 10.0, 2.0);
    let result = compute_overlap(&mirror, &target, &-Vector3::z()).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.area, 0.0);
}

#[test]
fn collinear_reflector_aborts_the_query() {
    let bad = Quad3::from_arrays([
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);
    let target = horizontal_quad(0.0, 0.0, 10.0, 2.0);
    assert!(matches!(
        compute_overlap(&bad, &target, &-Vector3::z()),
        Err(GeometryError::DegenerateVector { .. })
    ));
    assert!(matches!(
        compute_overlap(&target, &bad, &-Vector3::z()),
        Err(GeometryError::DegenerateVector { .. })
    ));
}

#[test]
fn zero_incident_direction_aborts_the_query() {
    let mirror = horizontal_quad(0.0, 0.0, 0.0, 1.0);
    let target = horizontal_quad(0.0, 0.0, 10.0, 2.0);
    assert!(matches!(
        compute_overlap(&mirror, &target, &Vector3::zeros()),
        Err(GeometryError::DegenerateVector { .. })
    ));
}

#[test]
fn aimed_heliostat_sends_light_to_its_aim_point() {
    // sun straight overhead; a heliostat aimed along the bisector of the sun
    // direction and the receiver direction reflects onto the receiver centre
    let receiver_center = nalgebra::Point3::new(0.0, 0.0, 10.0);
    let heliostat_center = nalgebra::Point3::new(-6.0, 0.0, 0.0);
    let to_sun = Vector3::z();
    let to_receiver = (receiver_center - heliostat_center).normalize();
    let bisector = heliostat_center + (to_sun + to_receiver).normalize();

    let heliostat = Quad3::aimed_rectangle(heliostat_center, bisector, 1.0, 1.0).unwrap();
    let receiver = Quad3::aimed_rectangle(receiver_center, heliostat_center, 4.0, 4.0).unwrap();

    let report = compute_overlap_report(&heliostat, &receiver, &-to_sun).unwrap();
    assert!(vec_approx_eq(&report.reflected_direction.normalize(), &to_receiver, 1e-9));
    // the whole footprint lands on the 4 x 4 receiver
    assert!(approx_eq(report.overlap_fraction(), 1.0, 1e-9));
    let centroid = report.intersection.polygon.centroid().unwrap();
    let center_local = report.frame.to_local(&receiver_center);
    assert!((centroid - center_local).norm() < 1e-9);
    assert_ne!(center_local, Point2::origin());
}
