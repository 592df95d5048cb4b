//! Cloth grid construction — the topology builder.
//!
//! Builds the point-mass lattice and the spring graph once, at
//! construction time. Point masses live in one pre-allocated vec;
//! springs refer to them by index.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use swath_types::constants::LATTICE_JITTER;
use swath_types::{PointIndex, Scalar, SwathError, SwathResult};

use crate::point_mass::PointMass;
use crate::spring::{Spring, SpringKind};

/// How the initial lattice is oriented in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Lattice in the XY plane. Each point mass gets a small random
    /// Z offset so the initial spring directions are not exactly
    /// coplanar.
    #[default]
    Vertical,
    /// Lattice in the XZ plane at unit height, no jitter.
    Horizontal,
}

/// Construction parameters for a cloth grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSpec {
    /// Physical width (meters).
    pub width: Scalar,
    /// Physical height (meters).
    pub height: Scalar,
    /// Lattice resolution along the width.
    pub num_width_points: usize,
    /// Lattice resolution along the height.
    pub num_height_points: usize,
    /// Material thickness. Self-collision keeps point masses at least
    /// twice this far apart.
    pub thickness: Scalar,
    /// Initial orientation of the lattice.
    #[serde(default)]
    pub orientation: Orientation,
    /// Grid coordinates `[x, y]` of pinned point masses.
    #[serde(default)]
    pub pinned: Vec<[usize; 2]>,
}

/// The cloth: a point-mass arena plus the spring graph over it.
///
/// Exclusively owns its point masses. Every other structure — springs,
/// spatial-hash buckets, collision stages — refers to them by
/// [`PointIndex`], never by reference.
pub struct ClothGrid {
    spec: GridSpec,
    point_masses: Vec<PointMass>,
    springs: Vec<Spring>,
}

impl ClothGrid {
    /// Builds the lattice and the spring graph.
    ///
    /// Point masses are laid out in row-major order
    /// (`idx = y * num_width_points + x`). The full arena is allocated
    /// before the first spring is built. `rng` drives the
    /// anti-coplanarity jitter of [`Orientation::Vertical`] lattices;
    /// pass a seeded generator for reproducible topology.
    pub fn build(spec: GridSpec, rng: &mut impl Rng) -> SwathResult<Self> {
        let w = spec.num_width_points;
        let h = spec.num_height_points;

        for &[px, py] in &spec.pinned {
            if px >= w || py >= h {
                return Err(SwathError::InvalidGrid(format!(
                    "pin ({px}, {py}) outside {w}x{h} grid"
                )));
            }
        }

        let mut point_masses = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                let position = match spec.orientation {
                    Orientation::Vertical => Vec3::new(
                        x as Scalar * spec.width / w as Scalar,
                        y as Scalar * spec.height / h as Scalar,
                        rng.random_range(0.0..LATTICE_JITTER),
                    ),
                    Orientation::Horizontal => Vec3::new(
                        x as Scalar * spec.width / w as Scalar,
                        1.0,
                        y as Scalar * spec.height / h as Scalar,
                    ),
                };
                let pinned = spec.pinned.iter().any(|&[px, py]| px == x && py == y);
                point_masses.push(PointMass::new(position, pinned));
            }
        }

        let springs = build_springs(&point_masses, w, h);

        Ok(Self {
            spec,
            point_masses,
            springs,
        })
    }

    /// The construction parameters.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Material thickness.
    pub fn thickness(&self) -> Scalar {
        self.spec.thickness
    }

    /// The point-mass arena.
    pub fn point_masses(&self) -> &[PointMass] {
        &self.point_masses
    }

    /// Mutable access for the simulation stages.
    pub fn point_masses_mut(&mut self) -> &mut [PointMass] {
        &mut self.point_masses
    }

    /// The spring graph.
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Splits the grid into its springs and mutable point masses, so a
    /// stage can walk the spring graph while correcting positions.
    pub fn springs_and_points_mut(&mut self) -> (&[Spring], &mut [PointMass]) {
        (&self.springs, &mut self.point_masses)
    }

    /// Number of point masses.
    pub fn len(&self) -> usize {
        self.point_masses.len()
    }

    /// True for a zero-point grid. Every simulation stage tolerates
    /// this by iterating zero times.
    pub fn is_empty(&self) -> bool {
        self.point_masses.is_empty()
    }

    /// Mass of a single point: total cloth mass spread equally,
    /// independent of pinning.
    pub fn mass_per_point(&self, density: Scalar) -> Scalar {
        self.spec.width * self.spec.height * density
            / (self.spec.num_width_points * self.spec.num_height_points) as Scalar
    }

    /// Restores every point mass's current and previous position to its
    /// constructed position. Idempotent; topology is untouched.
    pub fn reset(&mut self) {
        for pm in &mut self.point_masses {
            pm.reset();
        }
    }
}

/// The fixed neighbor-offset pattern, relative to `idx = y * w + x`.
///
/// The pattern is intentionally asymmetric (bending reaches two rows
/// *up* but two columns *right*); the force field depends on it, so it
/// is reproduced exactly.
fn build_springs(point_masses: &[PointMass], w: usize, h: usize) -> Vec<Spring> {
    let mut springs = Vec::new();

    let link = |springs: &mut Vec<Spring>, a: usize, b: usize, kind: SpringKind| {
        let rest_length = point_masses[a].position.distance(point_masses[b].position);
        springs.push(Spring::new(
            PointIndex(a as u32),
            PointIndex(b as u32),
            kind,
            rest_length,
        ));
    };

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;

            // Structural: left, above
            if x > 0 {
                link(&mut springs, idx, idx - 1, SpringKind::Structural);
            }
            if y > 0 {
                link(&mut springs, idx, idx - w, SpringKind::Structural);
            }

            // Shearing: upper-left, upper-right
            if x > 0 && y > 0 {
                link(&mut springs, idx, idx - w - 1, SpringKind::Shearing);
            }
            if x + 1 < w && y > 0 {
                link(&mut springs, idx, idx - w + 1, SpringKind::Shearing);
            }

            // Bending: two above, two right
            if y > 1 {
                link(&mut springs, idx, idx - 2 * w, SpringKind::Bending);
            }
            if x + 2 < w {
                link(&mut springs, idx, idx + 2, SpringKind::Bending);
            }
        }
    }

    springs
}
