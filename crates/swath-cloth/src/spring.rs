//! Springs — the constraint edges of the mass-spring network.

use serde::{Deserialize, Serialize};
use swath_types::{PointIndex, Scalar};

/// Which role a spring plays in the cloth's constraint graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpringKind {
    /// Adjacent neighbors (left, above). Resist stretch.
    Structural,
    /// Diagonal neighbors (upper-left, upper-right). Resist shear.
    Shearing,
    /// Two-apart neighbors (two above, two right). Resist folding,
    /// at a reduced stiffness.
    Bending,
}

/// A spring between two point masses.
///
/// Endpoints are stable indices into the grid's point-mass arena;
/// the arena is fully allocated before any spring is built, so the
/// indices never dangle.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    /// First endpoint.
    pub a: PointIndex,
    /// Second endpoint.
    pub b: PointIndex,
    /// Constraint role.
    pub kind: SpringKind,
    /// Endpoint separation at construction time. Fixed for the
    /// spring's lifetime.
    pub rest_length: Scalar,
}

impl Spring {
    /// Creates a spring with the given rest length.
    pub fn new(a: PointIndex, b: PointIndex, kind: SpringKind, rest_length: Scalar) -> Self {
        Self {
            a,
            b,
            kind,
            rest_length,
        }
    }
}
