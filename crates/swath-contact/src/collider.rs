//! The external collision primitive contract.

use serde::{Deserialize, Serialize};
use swath_cloth::PointMass;
use swath_types::Scalar;

use crate::plane::Plane;
use crate::sphere::Sphere;

/// Capability exposed by every external collision primitive.
///
/// `resolve` is called once per point mass per substep; it either
/// leaves the point mass alone or moves it out of the primitive,
/// blending toward `last_position` by `1 - friction` to damp
/// tangential sliding. Primitives are unaware of pin state — callers
/// that want pinned point masses untouched must not pass them in.
pub trait CollisionObject {
    /// Resolve the point mass against this primitive, by side effect.
    fn resolve(&self, pm: &mut PointMass);

    /// Tangential friction coefficient in `[0, 1]`.
    fn friction(&self) -> Scalar;
}

/// The closed set of external collision primitives.
///
/// New primitive kinds are added by extending this enum, not by
/// implementing [`CollisionObject`] on open types elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collider {
    /// Infinite plane given by a point and a normal.
    Plane(Plane),
    /// Solid sphere given by an origin and a radius.
    Sphere(Sphere),
}

impl CollisionObject for Collider {
    fn resolve(&self, pm: &mut PointMass) {
        match self {
            Collider::Plane(plane) => plane.resolve(pm),
            Collider::Sphere(sphere) => sphere.resolve(pm),
        }
    }

    fn friction(&self) -> Scalar {
        match self {
            Collider::Plane(plane) => plane.friction(),
            Collider::Sphere(sphere) => sphere.friction(),
        }
    }
}
