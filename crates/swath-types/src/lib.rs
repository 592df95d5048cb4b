//! # swath-types
//!
//! Shared types, identifiers, error types, and simulation constants
//! for the Swath cloth simulation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Swath crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{SwathError, SwathResult};
pub use ids::PointIndex;
pub use scalar::Scalar;
