//! Analytical plane collision.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use swath_cloth::PointMass;
use swath_types::constants::SURFACE_OFFSET;
use swath_types::Scalar;

use crate::collider::CollisionObject;

/// An infinite plane, given by a point on it and its unit normal.
///
/// A point mass collides when its motion over the last substep crossed
/// the plane — a sign change of the signed distance between
/// `last_position` and `position`. Tunneling within a single substep is
/// out of scope; the crossing test is as close as this core gets to
/// continuous detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plane {
    /// A point on the plane.
    pub point: Vec3,
    /// Unit normal.
    pub normal: Vec3,
    /// Tangential friction coefficient in `[0, 1]`.
    pub friction: Scalar,
}

impl Plane {
    /// Creates a plane collider.
    pub fn new(point: Vec3, normal: Vec3, friction: Scalar) -> Self {
        Self {
            point,
            normal,
            friction,
        }
    }

    /// Signed distance from `pos` to the plane.
    #[inline]
    fn signed_distance(&self, pos: Vec3) -> Scalar {
        self.normal.dot(pos - self.point)
    }
}

impl CollisionObject for Plane {
    fn resolve(&self, pm: &mut PointMass) {
        let dist_last = self.signed_distance(pm.last_position);
        let dist_cur = self.signed_distance(pm.position);

        // Same side as last substep: no crossing, no contact.
        if (dist_last >= 0.0) == (dist_cur >= 0.0) {
            return;
        }

        // Project onto the plane, then keep only the travel component
        // tangent to it, offset slightly above the surface so the
        // corrected point does not re-collide next substep.
        let bumped = pm.position - dist_cur * self.normal;
        let travel = bumped - pm.last_position;
        let tangent = travel - (travel.dot(self.normal) - SURFACE_OFFSET) * self.normal;

        pm.position = pm.last_position + tangent * (1.0 - self.friction);
    }

    fn friction(&self) -> Scalar {
        self.friction
    }
}
