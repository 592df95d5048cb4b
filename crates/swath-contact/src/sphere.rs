//! Analytical sphere collision.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use swath_cloth::PointMass;
use swath_types::Scalar;

use crate::collider::CollisionObject;

/// A solid sphere, given by its origin and radius.
///
/// A point mass strictly inside the sphere is projected onto the
/// surface along the radial direction, then blended toward its
/// `last_position` by `1 - friction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere.
    pub origin: Vec3,
    /// Radius.
    pub radius: Scalar,
    /// Tangential friction coefficient in `[0, 1]`.
    pub friction: Scalar,
}

impl Sphere {
    /// Creates a sphere collider.
    pub fn new(origin: Vec3, radius: Scalar, friction: Scalar) -> Self {
        Self {
            origin,
            radius,
            friction,
        }
    }
}

impl CollisionObject for Sphere {
    fn resolve(&self, pm: &mut PointMass) {
        let offset = pm.position - self.origin;
        let dist = offset.length();

        if dist >= self.radius {
            return;
        }
        // Exactly at the origin there is no radial direction to
        // project along; skip rather than normalize a zero vector.
        if offset == Vec3::ZERO {
            return;
        }

        let surface = self.origin + offset * (self.radius / dist);
        pm.position = pm.last_position + (surface - pm.last_position) * (1.0 - self.friction);
    }

    fn friction(&self) -> Scalar {
        self.friction
    }
}
