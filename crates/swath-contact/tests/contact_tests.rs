//! Integration tests for swath-contact.

use glam::Vec3;

use swath_cloth::{GridSpec, Orientation, PointMass};
use swath_contact::self_collision::resolve_self_collisions;
use swath_contact::{Collider, CollisionObject, Plane, SpatialHash, Sphere};

fn free_point(pos: Vec3) -> PointMass {
    PointMass::new(pos, false)
}

fn hash_spec() -> GridSpec {
    GridSpec {
        width: 1.0,
        height: 1.0,
        num_width_points: 10,
        num_height_points: 10,
        thickness: 0.05,
        orientation: Orientation::Vertical,
        pinned: Vec::new(),
    }
}

// ─── Sphere Tests ─────────────────────────────────────────────

#[test]
fn sphere_projects_to_surface() {
    let sphere = Sphere::new(Vec3::ZERO, 1.0, 0.0);
    let mut pm = free_point(Vec3::new(0.5, 0.0, 0.0));

    sphere.resolve(&mut pm);

    // Frictionless: lands exactly on the surface, along the original
    // direction from the origin.
    assert!((pm.position.distance(Vec3::ZERO) - 1.0).abs() < 1e-5);
    assert!((pm.position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn sphere_full_friction_holds_at_last_position() {
    let sphere = Sphere::new(Vec3::ZERO, 1.0, 1.0);
    let mut pm = free_point(Vec3::new(0.2, 0.0, 0.0));
    pm.last_position = Vec3::new(0.0, 1.5, 0.0);

    sphere.resolve(&mut pm);
    assert_eq!(pm.position, Vec3::new(0.0, 1.5, 0.0));
}

#[test]
fn sphere_ignores_outside_points() {
    let sphere = Sphere::new(Vec3::ZERO, 1.0, 0.3);
    let mut pm = free_point(Vec3::new(2.0, 0.0, 0.0));

    sphere.resolve(&mut pm);
    assert_eq!(pm.position, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn sphere_skips_point_at_origin() {
    let sphere = Sphere::new(Vec3::new(1.0, 1.0, 1.0), 0.5, 0.0);
    let mut pm = free_point(Vec3::new(1.0, 1.0, 1.0));

    // No radial direction to project along
    sphere.resolve(&mut pm);
    assert_eq!(pm.position, Vec3::new(1.0, 1.0, 1.0));
}

// ─── Plane Tests ──────────────────────────────────────────────

#[test]
fn plane_ignores_non_crossing_motion() {
    let plane = Plane::new(Vec3::ZERO, Vec3::Y, 0.0);
    let mut pm = free_point(Vec3::new(0.0, 0.3, 0.0));
    pm.last_position = Vec3::new(0.0, 0.8, 0.0);

    plane.resolve(&mut pm);
    assert_eq!(pm.position, Vec3::new(0.0, 0.3, 0.0)); // Same side: no-op
}

#[test]
fn plane_crossing_lands_in_front() {
    let plane = Plane::new(Vec3::ZERO, Vec3::Y, 0.0);
    let mut pm = free_point(Vec3::new(0.4, -0.3, 0.0));
    pm.last_position = Vec3::new(0.0, 0.5, 0.0);

    plane.resolve(&mut pm);

    // Back on the front side, just above the surface…
    assert!(plane.normal.dot(pm.position - plane.point) > 0.0);
    // …with the frictionless tangential travel preserved.
    assert!((pm.position.x - 0.4).abs() < 1e-5);
}

#[test]
fn plane_full_friction_cancels_sliding() {
    let plane = Plane::new(Vec3::ZERO, Vec3::Y, 1.0);
    let mut pm = free_point(Vec3::new(0.4, -0.3, 0.0));
    pm.last_position = Vec3::new(0.0, 0.5, 0.0);

    plane.resolve(&mut pm);
    assert_eq!(pm.position, Vec3::new(0.0, 0.5, 0.0));
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn primitives_are_unaware_of_pinning() {
    // The contract: resolve moves whatever it is given. Excluding
    // pinned point masses is the caller's job.
    let sphere = Sphere::new(Vec3::ZERO, 1.0, 0.0);
    let mut pm = PointMass::new(Vec3::new(0.5, 0.0, 0.0), true);

    sphere.resolve(&mut pm);
    assert!((pm.position.distance(Vec3::ZERO) - 1.0).abs() < 1e-5);
}

#[test]
fn collider_enum_dispatches() {
    let collider = Collider::Sphere(Sphere::new(Vec3::ZERO, 1.0, 0.25));
    assert!((collider.friction() - 0.25).abs() < 1e-6);

    let mut pm = free_point(Vec3::new(0.5, 0.0, 0.0));
    collider.resolve(&mut pm);
    assert!(pm.position.distance(Vec3::ZERO) > 0.5);
}

#[test]
fn collider_serialization() {
    let collider = Collider::Plane(Plane::new(Vec3::ZERO, Vec3::Y, 0.5));
    let json = serde_json::to_string(&collider).unwrap();
    let recovered: Collider = serde_json::from_str(&json).unwrap();
    match recovered {
        Collider::Plane(p) => assert!((p.friction - 0.5).abs() < 1e-6),
        Collider::Sphere(_) => panic!("wrong variant"),
    }
}

// ─── Spatial Hash Tests ───────────────────────────────────────

#[test]
fn hash_groups_nearby_points() {
    let hash = SpatialHash::new(&hash_spec());
    // Cell size is 3 * 1.0 / 10 = 0.3 on every axis here
    let a = Vec3::new(0.05, 0.05, 0.05);
    let b = Vec3::new(0.20, 0.10, 0.25);
    let c = Vec3::new(0.95, 0.05, 0.05);

    assert_eq!(hash.cell_key(a), hash.cell_key(b));
    assert_ne!(hash.cell_key(a), hash.cell_key(c));
}

#[test]
fn rebuild_buckets_every_point_exactly_once() {
    let mut hash = SpatialHash::new(&hash_spec());
    let points: Vec<PointMass> = (0..25)
        .map(|i| free_point(Vec3::new(i as f32 * 0.17, (i % 5) as f32 * 0.13, 0.0)))
        .collect();

    hash.rebuild(&points);

    let mut keys: Vec<u32> = points.iter().map(|p| hash.cell_key(p.position)).collect();
    keys.sort_unstable();
    keys.dedup();

    let total: usize = keys.iter().map(|&k| hash.bucket(k).len()).sum();
    assert_eq!(total, points.len());

    for (i, pm) in points.iter().enumerate() {
        let bucket = hash.bucket(hash.cell_key(pm.position));
        let hits = bucket.iter().filter(|idx| idx.index() == i).count();
        assert_eq!(hits, 1);
    }
}

#[test]
fn rebuild_replaces_previous_contents() {
    let mut hash = SpatialHash::new(&hash_spec());
    let a = vec![free_point(Vec3::new(0.05, 0.05, 0.0))];
    hash.rebuild(&a);
    let old_key = hash.cell_key(Vec3::new(0.05, 0.05, 0.0));
    assert_eq!(hash.bucket(old_key).len(), 1);

    let b = vec![free_point(Vec3::new(0.95, 0.95, 0.0))];
    hash.rebuild(&b);
    assert!(hash.bucket(old_key).is_empty());
    assert_eq!(hash.bucket_count(), 1);
}

// ─── Self-Collision Tests ─────────────────────────────────────

#[test]
fn self_collision_separates_close_pair() {
    let thickness = 0.05;
    let mut points = vec![
        free_point(Vec3::new(0.10, 0.10, 0.10)),
        free_point(Vec3::new(0.15, 0.10, 0.10)), // thickness apart
    ];
    let mut hash = SpatialHash::new(&hash_spec());
    hash.rebuild(&points);

    let before = points[0].position.distance(points[1].position);
    let moved = resolve_self_collisions(&mut points, &hash, thickness, 4);
    let after = points[0].position.distance(points[1].position);

    assert_eq!(moved, 2);
    assert!(after > before);
    assert!(after < 2.0 * thickness); // Converging, not teleporting
}

#[test]
fn self_collision_uses_start_of_pass_positions() {
    let thickness = 0.05;
    let mut points = vec![
        free_point(Vec3::new(0.10, 0.10, 0.10)),
        free_point(Vec3::new(0.15, 0.10, 0.10)),
    ];
    let mut hash = SpatialHash::new(&hash_spec());
    hash.rebuild(&points);

    let midpoint_before = (points[0].position + points[1].position) / 2.0;
    resolve_self_collisions(&mut points, &hash, thickness, 2);
    let midpoint_after = (points[0].position + points[1].position) / 2.0;

    // Symmetric pair, symmetric corrections: the midpoint moves only
    // if one side read the other's already-corrected position.
    assert!((midpoint_after - midpoint_before).length() < 1e-6);
}

#[test]
fn self_collision_skips_pinned_points() {
    let thickness = 0.05;
    let mut points = vec![
        PointMass::new(Vec3::new(0.10, 0.10, 0.10), true),
        free_point(Vec3::new(0.15, 0.10, 0.10)),
    ];
    let mut hash = SpatialHash::new(&hash_spec());
    hash.rebuild(&points);

    resolve_self_collisions(&mut points, &hash, thickness, 1);

    assert_eq!(points[0].position, points[0].start_position);
    assert!(points[1].position.x > 0.15); // Pushed away from the pinned point
}

#[test]
fn self_collision_skips_coincident_points() {
    let thickness = 0.05;
    let mut points = vec![
        free_point(Vec3::new(0.10, 0.10, 0.10)),
        free_point(Vec3::new(0.10, 0.10, 0.10)),
    ];
    let mut hash = SpatialHash::new(&hash_spec());
    hash.rebuild(&points);

    // No separation direction: nothing moves, nothing panics
    let moved = resolve_self_collisions(&mut points, &hash, thickness, 1);
    assert_eq!(moved, 0);
    assert_eq!(points[0].position, points[1].position);
}

#[test]
fn self_collision_ignores_distant_bucket_mates() {
    let thickness = 0.01;
    // Same 0.3-cell, but 0.2 apart — farther than 2 * thickness
    let mut points = vec![
        free_point(Vec3::new(0.05, 0.05, 0.05)),
        free_point(Vec3::new(0.25, 0.05, 0.05)),
    ];
    let mut hash = SpatialHash::new(&hash_spec());
    hash.rebuild(&points);

    let moved = resolve_self_collisions(&mut points, &hash, thickness, 1);
    assert_eq!(moved, 0);
}
