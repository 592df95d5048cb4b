//! # swath-cloth
//!
//! The cloth entity: point masses, springs, and the grid topology builder.
//!
//! ## Key Types
//!
//! - [`PointMass`] — one simulated vertex (position, Verlet history, forces)
//! - [`Spring`] — a structural/shearing/bending edge between two point masses
//! - [`ClothGrid`] — owns the point-mass arena and the spring graph
//! - [`GridSpec`] — construction parameters (dimensions, resolution, pins)
//!
//! Topology is built once; simulation stages in `swath-solver` and
//! `swath-contact` mutate point masses through the grid, never the
//! topology itself.

pub mod grid;
pub mod point_mass;
pub mod spring;

pub use grid::{ClothGrid, GridSpec, Orientation};
pub use point_mass::PointMass;
pub use spring::{Spring, SpringKind};
