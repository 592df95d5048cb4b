//! Point masses — the simulated vertices of the cloth.

use glam::Vec3;

/// One simulated vertex of the cloth.
///
/// Verlet integration needs no explicit velocity: the implicit velocity
/// is `position - last_position`. `start_position` is kept so the cloth
/// can be reset without rebuilding topology.
#[derive(Debug, Clone)]
pub struct PointMass {
    /// Current position.
    pub position: Vec3,
    /// Position at the previous substep.
    pub last_position: Vec3,
    /// Position at construction time.
    pub start_position: Vec3,
    /// Force accumulator. Overwritten at the start of every substep.
    pub forces: Vec3,
    /// Pinned point masses are skipped by integration and every
    /// correction pass; their position never changes after construction.
    pub pinned: bool,
}

impl PointMass {
    /// Creates a point mass at rest at `position`.
    pub fn new(position: Vec3, pinned: bool) -> Self {
        Self {
            position,
            last_position: position,
            start_position: position,
            forces: Vec3::ZERO,
            pinned,
        }
    }

    /// Restores current and previous position to the constructed
    /// position, discarding all velocity and deformation state.
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.last_position = self.start_position;
    }

    /// The implicit Verlet velocity term, `position - last_position`.
    #[inline]
    pub fn implicit_velocity(&self) -> Vec3 {
        self.position - self.last_position
    }
}
