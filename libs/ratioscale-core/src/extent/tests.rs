use super::*;
use approx::assert_relative_eq;

fn unit_cube_corners() -> [Vec3; 8] {
    Extent3::new(Vec3::ZERO, Vec3::ONE).corners()
}

#[test]
fn test_expand_tracks_min_and_max() {
    let mut extent = Extent3::from_point(Vec3::new(1.0, 2.0, 3.0));
    extent.expand(Vec3::new(-1.0, 5.0, 3.0));
    assert_eq!(extent.min, Vec3::new(-1.0, 2.0, 3.0));
    assert_eq!(extent.max, Vec3::new(1.0, 5.0, 3.0));
}

#[test]
fn test_union_covers_both() {
    let a = Extent3::new(Vec3::ZERO, Vec3::ONE);
    let b = Extent3::new(Vec3::new(2.0, -1.0, 0.5), Vec3::new(3.0, 0.0, 0.5));
    let u = a.union(&b);
    assert_eq!(u.min, Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(u.max, Vec3::new(3.0, 1.0, 1.0));
}

#[test]
fn test_corners_round_trip_through_expand() {
    let extent = Extent3::new(Vec3::new(-2.0, 0.0, 1.0), Vec3::new(4.0, 3.0, 5.0));
    let mut rebuilt = Extent3::from_point(extent.corners()[0]);
    for corner in extent.corners() {
        rebuilt.expand(corner);
    }
    assert_eq!(rebuilt, extent);
}

#[test]
fn test_unit_cube_identity_size_is_one() {
    let extent = world_extent([(unit_cube_corners(), Mat4::IDENTITY)]).unwrap();
    assert_eq!(extent.size(), Vec3::ONE);
}

#[test]
fn test_world_extent_applies_transform() {
    let matrix = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
    let extent = world_extent([(unit_cube_corners(), matrix)]).unwrap();
    assert_relative_eq!(extent.size().x, 2.0);
    assert_relative_eq!(extent.size().y, 3.0);
    assert_relative_eq!(extent.size().z, 4.0);
}

#[test]
fn test_world_extent_folds_across_objects() {
    let near = Mat4::IDENTITY;
    let far = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
    let extent = world_extent([
        (unit_cube_corners(), near),
        (unit_cube_corners(), far),
    ])
    .unwrap();
    // Two unit cubes 10 apart span 11 on X, 1 on Y and Z.
    assert_relative_eq!(extent.size().x, 11.0);
    assert_relative_eq!(extent.size().y, 1.0);
    assert_relative_eq!(extent.size().z, 1.0);
}

#[test]
fn test_world_extent_empty_collection_is_none() {
    assert!(world_extent(std::iter::empty::<([Vec3; 8], Mat4)>()).is_none());
}
