//! Benchmark metrics — data collected during a scenario run.

use serde::{Deserialize, Serialize};

/// Metrics collected from one scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Point-mass count.
    pub point_count: usize,
    /// Spring count.
    pub spring_count: usize,
    /// Rendered frames executed.
    pub frames: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per frame (seconds).
    pub avg_frame_time: f64,
    /// Slowest frame (seconds).
    pub max_frame_time: f64,
    /// Maximum point displacement from its start position (meters).
    pub max_displacement: f32,
    /// Worst spring elongation at the end of the run, as a ratio of
    /// rest length. Stays near the stretch limit in a stable run.
    pub final_max_stretch: f32,
    /// External-primitive contacts over the whole run.
    pub total_external_contacts: u64,
    /// Self-collision corrections over the whole run.
    pub total_self_collisions: u64,
}

impl RunMetrics {
    /// CSV header matching [`RunMetrics::to_csv_row`].
    pub fn to_csv_header() -> String {
        "scenario,points,springs,frames,total_wall_time_s,avg_frame_ms,max_frame_ms,\
         max_displacement,final_max_stretch,external_contacts,self_collisions"
            .to_string()
    }

    /// Formats this metrics instance as one CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.6},{:.4},{},{}",
            self.scenario,
            self.point_count,
            self.spring_count,
            self.frames,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.max_displacement,
            self.final_max_stretch,
            self.total_external_contacts,
            self.total_self_collisions,
        )
    }

    /// Formats multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[RunMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
