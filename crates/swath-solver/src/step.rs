//! The simulation orchestrator — one call, one substep.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use swath_cloth::ClothGrid;
use swath_contact::self_collision::resolve_self_collisions;
use swath_contact::{Collider, CollisionObject, SpatialHash};
use swath_types::Scalar;

use crate::config::ClothParameters;
use crate::{constraint, forces, integrate};

/// What one substep did. Consumed by telemetry, benchmarks, and tests.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StepReport {
    /// Springs that exerted force (enabled kind, non-degenerate).
    pub springs_evaluated: u32,
    /// Point-mass positions changed by external collision primitives.
    pub external_contacts: u32,
    /// Springs clamped by the length constraint.
    pub stretch_corrections: u32,
    /// Point masses moved by the self-collision pass.
    pub self_collisions: u32,
}

/// Advances the cloth by exactly one substep.
///
/// Stage order is fixed: force accumulation → Verlet integration →
/// external collision → length constraint → spatial-hash rebuild →
/// self-collision. The caller runs this `simulation_steps` times per
/// rendered frame; `dt = 1 / (frames_per_sec * simulation_steps)`.
///
/// Collision primitives are pin-unaware, so pinned point masses are
/// excluded here before the primitives see them. A zero-point cloth
/// short-circuits to an empty report.
pub fn simulate(
    cloth: &mut ClothGrid,
    frames_per_sec: Scalar,
    simulation_steps: u32,
    params: &ClothParameters,
    external_accelerations: &[Vec3],
    collision_objects: &[Collider],
) -> StepReport {
    if cloth.is_empty() {
        return StepReport::default();
    }

    let spec = cloth.spec().clone();
    let thickness = cloth.thickness();
    let mass = cloth.mass_per_point(params.density);
    let dt = 1.0 / (frames_per_sec * simulation_steps as Scalar);

    let (springs, point_masses) = cloth.springs_and_points_mut();

    let springs_evaluated =
        forces::accumulate(springs, point_masses, params, mass, external_accelerations);

    integrate::integrate(point_masses, mass, params.damping, dt);

    let mut external_contacts = 0;
    for pm in point_masses.iter_mut().filter(|pm| !pm.pinned) {
        for collider in collision_objects {
            let before = pm.position;
            collider.resolve(pm);
            if pm.position != before {
                external_contacts += 1;
            }
        }
    }

    let stretch_corrections = constraint::enforce_stretch_limit(springs, point_masses);

    let mut hash = SpatialHash::new(&spec);
    hash.rebuild(point_masses);
    let self_collisions =
        resolve_self_collisions(point_masses, &hash, thickness, simulation_steps);

    StepReport {
        springs_evaluated,
        external_contacts,
        stretch_corrections,
        self_collisions,
    }
}
