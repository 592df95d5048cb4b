//! Cloth material configuration.
//!
//! Supplied per step, not baked into the grid — a running simulation
//! can change stiffness or damping between frames.

use serde::{Deserialize, Serialize};
use swath_cloth::SpringKind;
use swath_types::{Scalar, SwathError, SwathResult};

/// Material parameters for one simulation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothParameters {
    /// Area density of the cloth. Total mass is
    /// `width * height * density`, spread equally over all points.
    pub density: Scalar,

    /// Hooke spring constant.
    pub ks: Scalar,

    /// Damping as a percentage: each substep the implicit velocity is
    /// scaled by `1 - damping / 100`.
    pub damping: Scalar,

    /// Whether structural springs exert force.
    pub enable_structural: bool,
    /// Whether shearing springs exert force.
    pub enable_shearing: bool,
    /// Whether bending springs exert force.
    pub enable_bending: bool,
}

impl Default for ClothParameters {
    fn default() -> Self {
        Self {
            density: 15.0,
            ks: 5000.0,
            damping: 0.2,
            enable_structural: true,
            enable_shearing: true,
            enable_bending: true,
        }
    }
}

impl ClothParameters {
    /// Whether springs of `kind` are enabled.
    pub fn kind_enabled(&self, kind: SpringKind) -> bool {
        match kind {
            SpringKind::Structural => self.enable_structural,
            SpringKind::Shearing => self.enable_shearing,
            SpringKind::Bending => self.enable_bending,
        }
    }

    /// Checks the configuration at the loading boundary.
    ///
    /// The step pipeline itself does not validate — a non-positive
    /// density would divide the mass computation by zero, so configs
    /// must be rejected before they reach it.
    pub fn validate(&self) -> SwathResult<()> {
        if self.density <= 0.0 {
            return Err(SwathError::InvalidConfig(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        if self.ks < 0.0 {
            return Err(SwathError::InvalidConfig(format!(
                "spring constant must be non-negative, got {}",
                self.ks
            )));
        }
        if !(0.0..=100.0).contains(&self.damping) {
            return Err(SwathError::InvalidConfig(format!(
                "damping is a percentage in [0, 100], got {}",
                self.damping
            )));
        }
        Ok(())
    }
}
