//! Frame runner — executes a scenario and collects metrics.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use swath_cloth::ClothGrid;
use swath_solver::simulate;
use swath_types::SwathResult;

use crate::metrics::RunMetrics;
use crate::scenarios::Scenario;

/// Runs scenarios frame by frame and collects metrics.
pub struct FrameRunner;

impl FrameRunner {
    /// Run a scenario to completion.
    ///
    /// Builds the cloth from the scenario's seed, then advances
    /// `frames * simulation_steps` substeps, timing each frame.
    pub fn run(scenario: &Scenario) -> SwathResult<RunMetrics> {
        scenario.params.validate()?;

        let mut rng = StdRng::seed_from_u64(scenario.seed);
        let mut cloth = ClothGrid::build(scenario.grid.clone(), &mut rng)?;

        let start_positions: Vec<_> = cloth.point_masses().iter().map(|p| p.position).collect();

        let mut frame_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        let mut total_external_contacts = 0u64;
        let mut total_self_collisions = 0u64;

        let total_start = Instant::now();

        for _ in 0..scenario.frames {
            let frame_start = Instant::now();

            for _ in 0..scenario.simulation_steps {
                let report = simulate(
                    &mut cloth,
                    scenario.frames_per_sec,
                    scenario.simulation_steps,
                    &scenario.params,
                    &scenario.accelerations,
                    &scenario.colliders,
                );
                total_external_contacts += u64::from(report.external_contacts);
                total_self_collisions += u64::from(report.self_collisions);
            }

            frame_times.push(frame_start.elapsed().as_secs_f64());
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let max_displacement = cloth
            .point_masses()
            .iter()
            .zip(&start_positions)
            .map(|(pm, &start)| pm.position.distance(start))
            .fold(0.0f32, f32::max);

        let final_max_stretch = cloth
            .springs()
            .iter()
            .map(|s| {
                let a = cloth.point_masses()[s.a.index()].position;
                let b = cloth.point_masses()[s.b.index()].position;
                a.distance(b) / s.rest_length
            })
            .fold(0.0f32, f32::max);

        let avg_frame_time = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let max_frame_time = frame_times.iter().copied().fold(0.0, f64::max);

        Ok(RunMetrics {
            scenario: scenario.kind.name().to_string(),
            point_count: cloth.len(),
            spring_count: cloth.springs().len(),
            frames: scenario.frames,
            total_wall_time,
            avg_frame_time,
            max_frame_time,
            max_displacement,
            final_max_stretch,
            total_external_contacts,
            total_self_collisions,
        })
    }
}
