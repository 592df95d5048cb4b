//! Self-collision — bucket-local push-apart pass.
//!
//! A positional decollision pass, not an impulse response. Each point
//! mass is corrected against its same-bucket neighbors; corrections are
//! computed from a snapshot of positions taken when the pass starts, so
//! no point mass reads another's already-corrected position.

use glam::Vec3;

use swath_cloth::PointMass;
use swath_types::Scalar;

use crate::spatial_hash::SpatialHash;

/// Pushes overlapping point masses apart.
///
/// For each non-pinned point mass, every same-bucket neighbor closer
/// than `2 * thickness` contributes a correction of magnitude
/// `2 * thickness - dist` along the separation direction. The mean of
/// the contributions, further divided by the substep count (several
/// substeps per frame would otherwise overcorrect), moves the point.
/// Coincident pairs have no separation direction and are skipped.
///
/// Returns the number of point masses that were moved. `hash` must have
/// been rebuilt from the same `point_masses` this substep.
pub fn resolve_self_collisions(
    point_masses: &mut [PointMass],
    hash: &SpatialHash,
    thickness: Scalar,
    simulation_steps: u32,
) -> u32 {
    let snapshot: Vec<Vec3> = point_masses.iter().map(|pm| pm.position).collect();
    let mut moved = 0;

    for (i, pm) in point_masses.iter_mut().enumerate() {
        if pm.pinned {
            continue;
        }

        let pos = snapshot[i];
        let mut correction = Vec3::ZERO;
        let mut neighbors = 0u32;

        for &other in hash.bucket(hash.cell_key(pos)) {
            let j = other.index();
            if j == i {
                continue;
            }

            let dir = pos - snapshot[j];
            let dist = dir.length();
            if dist == 0.0 {
                continue;
            }
            if dist < 2.0 * thickness {
                correction += (2.0 * thickness - dist) * (dir / dist);
                neighbors += 1;
            }
        }

        if neighbors > 0 {
            pm.position += correction / neighbors as Scalar / simulation_steps as Scalar;
            moved += 1;
        }
    }

    moved
}
