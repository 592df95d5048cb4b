//! Störmer–Verlet position update.

use swath_cloth::PointMass;
use swath_types::Scalar;

/// Advances every non-pinned point mass by one substep.
///
/// Velocity-free Verlet: the new position is
/// `p + (1 - damping/100) * (p - p_last) + (f/m) * dt²`.
/// Damping decays the implicit velocity term multiplicatively.
/// `last_position` is updated to the pre-step position first, so the
/// next substep sees this one's displacement as its velocity.
///
/// Pinned point masses are skipped entirely — position and
/// `last_position` stay at their constructed values.
pub fn integrate(point_masses: &mut [PointMass], mass: Scalar, damping: Scalar, dt: Scalar) {
    let decay = 1.0 - damping / 100.0;

    for pm in point_masses.iter_mut() {
        if pm.pinned {
            continue;
        }

        let acceleration = pm.forces / mass;
        let new_position = pm.position + decay * pm.implicit_velocity() + acceleration * dt * dt;

        pm.last_position = pm.position;
        pm.position = new_position;
    }
}
