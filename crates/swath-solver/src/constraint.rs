//! Length constraint — Provot's 10% stretch correction.
//!
//! A positional constraint, independent of the Hookean soft force,
//! and the primary source of the cloth's inextensibility.

use swath_cloth::{PointMass, Spring};
use swath_types::constants::MAX_STRETCH_FACTOR;

/// Clamps every over-stretched spring back to its length bound.
///
/// A spring longer than `rest_length * 1.1` is corrected by moving its
/// endpoints: the free endpoint takes the whole correction when the
/// other is pinned, both take half when neither is, and a fully pinned
/// spring is left alone.
///
/// One pass per substep. Correcting a spring can re-stretch an earlier
/// one; the bound is enforced per spring per pass, and residual excess
/// is picked up next substep.
///
/// Returns the number of springs corrected.
pub fn enforce_stretch_limit(springs: &[Spring], point_masses: &mut [PointMass]) -> u32 {
    let mut corrected = 0;

    for spring in springs {
        let (a, b) = (spring.a.index(), spring.b.index());
        let delta = point_masses[a].position - point_masses[b].position;
        let dist = delta.length();
        let max_len = spring.rest_length * MAX_STRETCH_FACTOR;

        if dist <= max_len {
            continue;
        }

        // dist > max_len >= 0, so the direction is well-defined.
        let correction = delta / dist * (dist - max_len);

        match (point_masses[a].pinned, point_masses[b].pinned) {
            (true, true) => {}
            (true, false) => {
                point_masses[b].position += correction;
                corrected += 1;
            }
            (false, true) => {
                point_masses[a].position -= correction;
                corrected += 1;
            }
            (false, false) => {
                point_masses[a].position -= correction * 0.5;
                point_masses[b].position += correction * 0.5;
                corrected += 1;
            }
        }
    }

    corrected
}
