//! TOML-facing simulation configuration.
//!
//! The file format the CLI consumes: a grid, material parameters, and
//! the run's environment. Everything but the grid has defaults, so a
//! minimal config is just a `[grid]` table.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use swath_cloth::GridSpec;
use swath_contact::{Collider, CollisionObject};
use swath_solver::ClothParameters;
use swath_types::constants::{DEFAULT_FRAMES_PER_SEC, DEFAULT_SIMULATION_STEPS, GRAVITY};
use swath_types::{Scalar, SwathError, SwathResult};

/// A complete simulation run, as declared in a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Cloth grid to build.
    pub grid: GridSpec,

    /// Material parameters.
    #[serde(default)]
    pub params: ClothParameters,

    /// Rendered frames per second.
    #[serde(default = "default_fps")]
    pub frames_per_sec: Scalar,

    /// Substeps per rendered frame.
    #[serde(default = "default_steps")]
    pub simulation_steps: u32,

    /// Number of rendered frames to simulate.
    #[serde(default = "default_frames")]
    pub frames: u32,

    /// Seed for the lattice jitter.
    #[serde(default)]
    pub seed: u64,

    /// External accelerations. Defaults to gravity.
    #[serde(default = "default_accelerations")]
    pub accelerations: Vec<Vec3>,

    /// External collision primitives.
    #[serde(default)]
    pub colliders: Vec<Collider>,
}

fn default_fps() -> Scalar {
    DEFAULT_FRAMES_PER_SEC
}

fn default_steps() -> u32 {
    DEFAULT_SIMULATION_STEPS
}

fn default_frames() -> u32 {
    120
}

fn default_accelerations() -> Vec<Vec3> {
    vec![Vec3::new(0.0, -GRAVITY, 0.0)]
}

impl SimulationConfig {
    /// Rejects configs the pipeline cannot safely run.
    pub fn validate(&self) -> SwathResult<()> {
        self.params.validate()?;

        if self.frames_per_sec <= 0.0 {
            return Err(SwathError::InvalidConfig(format!(
                "frames_per_sec must be positive, got {}",
                self.frames_per_sec
            )));
        }
        if self.simulation_steps == 0 {
            return Err(SwathError::InvalidConfig(
                "simulation_steps must be at least 1".into(),
            ));
        }
        for (i, collider) in self.colliders.iter().enumerate() {
            let friction = collider.friction();
            if !(0.0..=1.0).contains(&friction) {
                return Err(SwathError::InvalidConfig(format!(
                    "collider {i}: friction must be in [0, 1], got {friction}"
                )));
            }
        }

        Ok(())
    }
}
