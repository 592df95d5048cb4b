//! # swath-contact
//!
//! Collision handling for the cloth simulation:
//!
//! - [`CollisionObject`] — the capability every external primitive exposes
//! - [`Collider`] — the closed primitive set ({Plane, Sphere})
//! - [`SpatialHash`] — per-substep uniform partition of the point masses
//! - [`self_collision`] — the bucket-local push-apart pass
//!
//! Primitives mutate point masses directly and know nothing about
//! pinning; the step pipeline decides which point masses they see.

pub mod collider;
pub mod plane;
pub mod self_collision;
pub mod spatial_hash;
pub mod sphere;

pub use collider::{Collider, CollisionObject};
pub use plane::Plane;
pub use spatial_hash::SpatialHash;
pub use sphere::Sphere;
