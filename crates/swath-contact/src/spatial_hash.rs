//! Spatial hash — coarse uniform partition for self-collision.
//!
//! Bins point masses into 3D cells sized relative to the grid's own
//! resolution, so finer cloths get finer self-collision resolution
//! automatically. Rebuilt from scratch every substep; buckets are
//! never updated incrementally.

use std::collections::HashMap;

use glam::Vec3;

use swath_cloth::{GridSpec, PointMass};
use swath_types::constants::CELL_KEY_PRIME;
use swath_types::{PointIndex, Scalar};

/// Uniform spatial partition of the point masses.
///
/// Cells extend three average point spacings along the width and height
/// axes; the third axis uses the larger of the two. The cell key is a
/// single scalar — each coordinate truncated to its cell's lower
/// boundary, folded with a fixed polynomial. Distinct cells can collide
/// onto one key; merged buckets only add candidates, and candidates are
/// re-tested by exact distance.
pub struct SpatialHash {
    cell_w: Scalar,
    cell_h: Scalar,
    cell_t: Scalar,
    buckets: HashMap<u32, Vec<PointIndex>>,
}

impl SpatialHash {
    /// Creates an empty hash with cell sizes derived from the grid
    /// dimensions: `3 * width / num_width_points` along X,
    /// `3 * height / num_height_points` along Y, the maximum of the
    /// two along Z.
    pub fn new(spec: &GridSpec) -> Self {
        let cell_w = 3.0 * spec.width / spec.num_width_points as Scalar;
        let cell_h = 3.0 * spec.height / spec.num_height_points as Scalar;
        Self {
            cell_w,
            cell_h,
            cell_t: cell_w.max(cell_h),
            buckets: HashMap::new(),
        }
    }

    /// Clears and repopulates every bucket from current positions.
    ///
    /// Afterwards every point mass appears in exactly one bucket,
    /// determined purely by its position and the fixed cell sizes.
    pub fn rebuild(&mut self, point_masses: &[PointMass]) {
        self.buckets.clear();
        for (i, pm) in point_masses.iter().enumerate() {
            let key = self.cell_key(pm.position);
            self.buckets
                .entry(key)
                .or_default()
                .push(PointIndex(i as u32));
        }
    }

    /// The bucket key for a position.
    ///
    /// Truncates each coordinate to its cell's lower boundary with
    /// `c - (c mod cell)`, then folds the triple into one scalar with
    /// `p²x + py + z`. The scalar's bit pattern is the map key — equal
    /// keys always come out of this same arithmetic, so bucket identity
    /// survives the float-to-bits trip.
    pub fn cell_key(&self, pos: Vec3) -> u32 {
        let p = CELL_KEY_PRIME;
        let x = pos.x - pos.x % self.cell_w;
        let y = pos.y - pos.y % self.cell_h;
        let z = pos.z - pos.z % self.cell_t;
        (p * p * x + p * y + z).to_bits()
    }

    /// The point masses currently in the bucket for `key`.
    pub fn bucket(&self, key: u32) -> &[PointIndex] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of occupied buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
