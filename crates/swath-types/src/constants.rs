//! Simulation constants and defaults.

use crate::scalar::Scalar;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: Scalar = 9.8;

/// Default rendered frames per second.
pub const DEFAULT_FRAMES_PER_SEC: Scalar = 90.0;

/// Default number of simulation substeps per rendered frame.
pub const DEFAULT_SIMULATION_STEPS: u32 = 30;

/// Maximum elongation of a spring per substep, as a factor of its
/// rest length. Springs longer than this are corrected positionally.
pub const MAX_STRETCH_FACTOR: Scalar = 1.1;

/// Bending springs resist stretch at a fraction of the structural
/// stiffness — stability tuning, not physically derived.
pub const BENDING_FORCE_SCALE: Scalar = 0.2;

/// Prime used to fold a truncated cell coordinate triple into one
/// scalar spatial-hash key.
pub const CELL_KEY_PRIME: Scalar = 223.0;

/// How far a plane pushes a crossing point mass above its surface,
/// so the corrected point does not immediately re-collide.
pub const SURFACE_OFFSET: Scalar = 1.0e-4;

/// Magnitude of the off-plane jitter applied to freshly built vertical
/// lattices. Breaks exact coplanarity of the initial spring directions.
pub const LATTICE_JITTER: Scalar = 1.0e-3;

/// Epsilon for floating-point comparisons.
pub const EPSILON: Scalar = 1.0e-7;
