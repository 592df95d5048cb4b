//! Integration tests for swath-cloth.

use rand::rngs::StdRng;
use rand::SeedableRng;

use swath_cloth::{ClothGrid, GridSpec, Orientation, SpringKind};

fn spec(w: usize, h: usize) -> GridSpec {
    GridSpec {
        width: 1.0,
        height: 1.0,
        num_width_points: w,
        num_height_points: h,
        thickness: 0.002,
        orientation: Orientation::Vertical,
        pinned: Vec::new(),
    }
}

// ─── Lattice Tests ────────────────────────────────────────────

#[test]
fn grid_point_count_row_major() {
    let mut rng = StdRng::seed_from_u64(1);
    let grid = ClothGrid::build(spec(4, 3), &mut rng).unwrap();
    assert_eq!(grid.len(), 12);

    // Row-major: point (x=2, y=1) sits at index 1*4 + 2
    let pm = &grid.point_masses()[6];
    assert!((pm.position.x - 2.0 / 4.0).abs() < 1e-6);
    assert!((pm.position.y - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn vertical_lattice_jitter_is_small_and_seeded() {
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let a = ClothGrid::build(spec(5, 5), &mut rng_a).unwrap();
    let b = ClothGrid::build(spec(5, 5), &mut rng_b).unwrap();

    for (pa, pb) in a.point_masses().iter().zip(b.point_masses()) {
        assert_eq!(pa.position, pb.position); // Same seed, same lattice
        assert!(pa.position.z >= 0.0 && pa.position.z < 1e-3);
    }
}

#[test]
fn horizontal_lattice_is_flat_at_unit_height() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = spec(3, 3);
    s.orientation = Orientation::Horizontal;
    let grid = ClothGrid::build(s, &mut rng).unwrap();

    for pm in grid.point_masses() {
        assert_eq!(pm.position.y, 1.0);
    }
}

#[test]
fn pins_are_applied_and_validated() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = spec(3, 3);
    s.pinned = vec![[0, 0], [2, 2]];
    let grid = ClothGrid::build(s, &mut rng).unwrap();

    assert!(grid.point_masses()[0].pinned);
    assert!(grid.point_masses()[8].pinned);
    assert!(!grid.point_masses()[4].pinned);

    let mut bad = spec(3, 3);
    bad.pinned = vec![[3, 0]];
    assert!(ClothGrid::build(bad, &mut StdRng::seed_from_u64(1)).is_err());
}

#[test]
fn empty_grid_builds() {
    let mut rng = StdRng::seed_from_u64(1);
    let grid = ClothGrid::build(spec(0, 0), &mut rng).unwrap();
    assert!(grid.is_empty());
    assert!(grid.springs().is_empty());
}

// ─── Spring Graph Tests ───────────────────────────────────────

fn count_kind(grid: &ClothGrid, kind: SpringKind) -> usize {
    grid.springs().iter().filter(|s| s.kind == kind).count()
}

#[test]
fn spring_census_3x3() {
    let mut rng = StdRng::seed_from_u64(1);
    let grid = ClothGrid::build(spec(3, 3), &mut rng).unwrap();

    // Structural: (w-1)*h + w*(h-1); shearing: 2*(w-1)*(h-1);
    // bending: w*(h-2) + (w-2)*h
    assert_eq!(count_kind(&grid, SpringKind::Structural), 12);
    assert_eq!(count_kind(&grid, SpringKind::Shearing), 8);
    assert_eq!(count_kind(&grid, SpringKind::Bending), 6);
}

#[test]
fn single_row_has_no_vertical_springs() {
    let mut rng = StdRng::seed_from_u64(1);
    let grid = ClothGrid::build(spec(4, 1), &mut rng).unwrap();

    assert_eq!(count_kind(&grid, SpringKind::Structural), 3);
    assert_eq!(count_kind(&grid, SpringKind::Shearing), 0);
    assert_eq!(count_kind(&grid, SpringKind::Bending), 2); // two-right only
}

#[test]
fn rest_length_matches_construction_distance() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = spec(4, 4);
    s.orientation = Orientation::Horizontal; // No jitter, exact spacing
    let grid = ClothGrid::build(s, &mut rng).unwrap();

    for spring in grid.springs() {
        let a = grid.point_masses()[spring.a.index()].position;
        let b = grid.point_masses()[spring.b.index()].position;
        assert!((spring.rest_length - a.distance(b)).abs() < 1e-6);
    }

    // Horizontal structural neighbors are exactly one cell apart
    let structural = grid
        .springs()
        .iter()
        .find(|s| s.kind == SpringKind::Structural)
        .unwrap();
    assert!((structural.rest_length - 0.25).abs() < 1e-6);
}

#[test]
fn bending_reaches_two_apart() {
    let mut rng = StdRng::seed_from_u64(1);
    let grid = ClothGrid::build(spec(5, 5), &mut rng).unwrap();

    for s in grid.springs().iter().filter(|s| s.kind == SpringKind::Bending) {
        let gap = s.a.index().abs_diff(s.b.index());
        // Two right (gap 2) or two above (gap 2*w = 10)
        assert!(gap == 2 || gap == 10, "unexpected bending gap {gap}");
    }
}

// ─── Reset Tests ──────────────────────────────────────────────

#[test]
fn reset_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut grid = ClothGrid::build(spec(3, 3), &mut rng).unwrap();

    // Deform: shove every point somewhere else
    for pm in grid.point_masses_mut() {
        pm.position += glam::Vec3::new(0.3, -0.2, 0.1);
        pm.last_position += glam::Vec3::new(0.1, 0.0, 0.0);
    }

    grid.reset();
    let after_one: Vec<_> = grid.point_masses().iter().map(|p| p.position).collect();
    grid.reset();

    for (pm, &once) in grid.point_masses().iter().zip(&after_one) {
        assert_eq!(pm.position, once);
        assert_eq!(pm.position, pm.start_position);
        assert_eq!(pm.last_position, pm.start_position);
    }
}

#[test]
fn grid_spec_serialization() {
    let s = GridSpec {
        width: 2.0,
        height: 1.5,
        num_width_points: 20,
        num_height_points: 15,
        thickness: 0.01,
        orientation: Orientation::Horizontal,
        pinned: vec![[0, 0], [19, 0]],
    };
    let json = serde_json::to_string(&s).unwrap();
    let recovered: GridSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.num_width_points, 20);
    assert_eq!(recovered.orientation, Orientation::Horizontal);
    assert_eq!(recovered.pinned.len(), 2);
}
