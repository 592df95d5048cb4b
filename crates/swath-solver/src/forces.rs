//! Force accumulation — external accelerations plus Hooke spring forces.

use glam::Vec3;

use swath_cloth::{PointMass, Spring, SpringKind};
use swath_types::constants::BENDING_FORCE_SCALE;
use swath_types::Scalar;

use crate::config::ClothParameters;

/// Accumulates this substep's forces into every point mass.
///
/// External accelerations are summed, scaled by the per-point mass, and
/// *assigned* — the accumulator carries nothing over from the previous
/// substep. Spring forces are then added pairwise: a stretched spring
/// pulls its endpoints together, a compressed one pushes them apart.
/// Bending springs act at [`BENDING_FORCE_SCALE`] of the configured
/// stiffness. Springs whose kind is disabled, and springs whose
/// endpoints currently coincide (no direction to pull along), are
/// skipped.
///
/// Returns the number of springs that exerted force.
pub fn accumulate(
    springs: &[Spring],
    point_masses: &mut [PointMass],
    params: &ClothParameters,
    mass: Scalar,
    external_accelerations: &[Vec3],
) -> u32 {
    let external = external_accelerations
        .iter()
        .fold(Vec3::ZERO, |sum, &a| sum + a)
        * mass;

    for pm in point_masses.iter_mut() {
        pm.forces = external;
    }

    let mut evaluated = 0;
    for spring in springs {
        if !params.kind_enabled(spring.kind) {
            continue;
        }

        let (a, b) = (spring.a.index(), spring.b.index());
        let diff = point_masses[b].position - point_masses[a].position;
        let length = diff.length();
        if length == 0.0 {
            continue;
        }

        let mut correction = params.ks * (length - spring.rest_length);
        if spring.kind == SpringKind::Bending {
            correction *= BENDING_FORCE_SCALE;
        }

        let force = diff / length * correction;
        point_masses[a].forces += force;
        point_masses[b].forces -= force;
        evaluated += 1;
    }

    evaluated
}
