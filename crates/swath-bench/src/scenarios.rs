//! Benchmark scenarios — grid spec + parameters + environment per case.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use swath_cloth::{GridSpec, Orientation};
use swath_contact::{Collider, Plane, Sphere};
use swath_solver::ClothParameters;
use swath_types::constants::{DEFAULT_FRAMES_PER_SEC, DEFAULT_SIMULATION_STEPS, GRAVITY};
use swath_types::Scalar;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Cloth pinned along its top row, hanging under gravity.
    HangingSheet,
    /// Horizontal cloth dropped onto a sphere.
    SphereDrape,
    /// Unpinned cloth collapsing onto a floor plane.
    SelfFold,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingSheet,
            ScenarioKind::SphereDrape,
            ScenarioKind::SelfFold,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingSheet => "hanging_sheet",
            ScenarioKind::SphereDrape => "sphere_drape",
            ScenarioKind::SelfFold => "self_fold",
        }
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Cloth grid to build.
    pub grid: GridSpec,
    /// Material parameters.
    pub params: ClothParameters,
    /// Rendered frames per second.
    pub frames_per_sec: Scalar,
    /// Substeps per rendered frame.
    pub simulation_steps: u32,
    /// Number of rendered frames to simulate.
    pub frames: u32,
    /// External accelerations (gravity, wind).
    pub accelerations: Vec<Vec3>,
    /// External collision primitives.
    pub colliders: Vec<Collider>,
    /// Seed for the lattice jitter. Fixed per scenario so runs are
    /// reproducible.
    pub seed: u64,
}

impl Scenario {
    /// Creates the scenario for a kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingSheet => Self::hanging_sheet(),
            ScenarioKind::SphereDrape => Self::sphere_drape(),
            ScenarioKind::SelfFold => Self::self_fold(),
        }
    }

    /// A 1m × 1m sheet at 16×16, pinned along the top row, hanging
    /// under gravity for two seconds of simulated time.
    pub fn hanging_sheet() -> Self {
        let resolution = 16;
        let pinned = (0..resolution).map(|x| [x, resolution - 1]).collect();
        Self {
            kind: ScenarioKind::HangingSheet,
            grid: GridSpec {
                width: 1.0,
                height: 1.0,
                num_width_points: resolution,
                num_height_points: resolution,
                thickness: 0.002,
                orientation: Orientation::Vertical,
                pinned,
            },
            params: ClothParameters::default(),
            frames_per_sec: DEFAULT_FRAMES_PER_SEC,
            simulation_steps: DEFAULT_SIMULATION_STEPS,
            frames: 60,
            accelerations: vec![Vec3::new(0.0, -GRAVITY, 0.0)],
            colliders: Vec::new(),
            seed: 0x5eed_0001,
        }
    }

    /// A horizontal sheet dropped onto a frictional sphere.
    pub fn sphere_drape() -> Self {
        Self {
            kind: ScenarioKind::SphereDrape,
            grid: GridSpec {
                width: 1.0,
                height: 1.0,
                num_width_points: 16,
                num_height_points: 16,
                thickness: 0.002,
                orientation: Orientation::Horizontal,
                pinned: Vec::new(),
            },
            params: ClothParameters::default(),
            frames_per_sec: DEFAULT_FRAMES_PER_SEC,
            simulation_steps: DEFAULT_SIMULATION_STEPS,
            frames: 60,
            accelerations: vec![Vec3::new(0.0, -GRAVITY, 0.0)],
            colliders: vec![Collider::Sphere(Sphere::new(
                Vec3::new(0.5, 0.5, 0.5),
                0.25,
                0.3,
            ))],
            seed: 0x5eed_0002,
        }
    }

    /// An unpinned sheet collapsing onto a floor. A thicker cloth at
    /// finer resolution, so the self-collision pass does real work as
    /// the folds land on each other.
    pub fn self_fold() -> Self {
        Self {
            kind: ScenarioKind::SelfFold,
            grid: GridSpec {
                width: 1.0,
                height: 1.0,
                num_width_points: 20,
                num_height_points: 20,
                thickness: 0.02,
                orientation: Orientation::Vertical,
                pinned: Vec::new(),
            },
            params: ClothParameters::default(),
            frames_per_sec: DEFAULT_FRAMES_PER_SEC,
            simulation_steps: DEFAULT_SIMULATION_STEPS,
            frames: 90,
            accelerations: vec![Vec3::new(0.0, -GRAVITY, 0.0)],
            colliders: vec![Collider::Plane(Plane::new(
                Vec3::new(0.0, -0.5, 0.0),
                Vec3::Y,
                0.3,
            ))],
            seed: 0x5eed_0003,
        }
    }
}
