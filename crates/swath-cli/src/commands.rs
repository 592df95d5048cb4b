//! CLI command implementations.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use swath_bench::{FrameRunner, RunMetrics, Scenario, ScenarioKind};
use swath_cloth::ClothGrid;
use swath_telemetry::{EventBus, EventKind, SimulationEvent, TracingSink};

use crate::config::SimulationConfig;

/// Run a simulation from a config file.
pub fn simulate(
    config_path: &str,
    snapshot_path: Option<&str>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(config_path)?;
    let config: SimulationConfig = toml::from_str(&content)?;
    config.validate()?;

    let mut bus = EventBus::new();
    if verbose {
        bus.add_sink(Box::new(TracingSink));
    } else {
        bus.set_enabled(false);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut cloth = ClothGrid::build(config.grid.clone(), &mut rng)?;

    println!("Swath Simulation");
    println!("────────────────");
    println!("Config:   {config_path}");
    println!(
        "Cloth:    {} points, {} springs",
        cloth.len(),
        cloth.springs().len()
    );
    println!(
        "Run:      {} frames × {} substeps at {} fps",
        config.frames, config.simulation_steps, config.frames_per_sec
    );
    println!();

    let mut substep = 0u64;
    let run_start = Instant::now();

    for frame in 0..config.frames {
        bus.emit(SimulationEvent::new(substep, EventKind::FrameBegin { frame }));
        let frame_start = Instant::now();

        for _ in 0..config.simulation_steps {
            let report = swath_solver::simulate(
                &mut cloth,
                config.frames_per_sec,
                config.simulation_steps,
                &config.params,
                &config.accelerations,
                &config.colliders,
            );
            bus.emit(SimulationEvent::new(
                substep,
                EventKind::StageCounts {
                    springs_evaluated: report.springs_evaluated,
                    external_contacts: report.external_contacts,
                    stretch_corrections: report.stretch_corrections,
                    self_collisions: report.self_collisions,
                },
            ));
            substep += 1;
        }

        bus.emit(SimulationEvent::new(
            substep,
            EventKind::FrameEnd {
                wall_time: frame_start.elapsed().as_secs_f64(),
            },
        ));
        bus.emit(SimulationEvent::new(
            substep,
            EventKind::MaxStretch {
                ratio: max_stretch(&cloth),
            },
        ));
        bus.flush();
    }

    bus.finalize();

    let (min_y, max_y) = y_range(&cloth);
    println!("Wall time:    {:.3}s", run_start.elapsed().as_secs_f64());
    println!("Max stretch:  {:.4}", max_stretch(&cloth));
    println!("Y range:      [{min_y:.4}, {max_y:.4}]");

    if let Some(path) = snapshot_path {
        let positions: Vec<[f32; 3]> = cloth
            .point_masses()
            .iter()
            .map(|pm| pm.position.to_array())
            .collect();
        std::fs::write(path, serde_json::to_string_pretty(&positions)?)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Swath Benchmark Suite");
    println!("═════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = match scenario_name {
            "hanging_sheet" => ScenarioKind::HangingSheet,
            "sphere_drape" => ScenarioKind::SphereDrape,
            "self_fold" => ScenarioKind::SelfFold,
            other => {
                eprintln!("Unknown scenario: {other}");
                eprintln!("Available: hanging_sheet, sphere_drape, self_fold, all");
                return Err("Unknown scenario".into());
            }
        };
        vec![kind]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({}×{} points, {} frames)",
            kind.name(),
            scenario.grid.num_width_points,
            scenario.grid.num_height_points,
            scenario.frames,
        );

        let metrics =
            FrameRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:     {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  Max stretch:   {:.4}", metrics.final_max_stretch);
        println!("  Max displace:  {:.4}m", metrics.max_displacement);
        println!("  Contacts:      {}", metrics.total_external_contacts);
        println!("  Self-collide:  {}", metrics.total_self_collisions);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = RunMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", RunMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a simulation config.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Swath Validator");
    println!("───────────────");
    println!();

    if !path.ends_with(".toml") {
        println!("Unsupported file format. Use .toml (simulation config).");
        return Ok(());
    }

    println!("Validating config: {path}");
    let content = std::fs::read_to_string(path)?;
    let config: SimulationConfig = toml::from_str(&content)?;
    config.validate()?;

    // Building the grid catches out-of-range pins too
    let mut rng = StdRng::seed_from_u64(config.seed);
    let cloth = ClothGrid::build(config.grid.clone(), &mut rng)?;
    println!(
        "Config is valid ({} points, {} springs).",
        cloth.len(),
        cloth.springs().len()
    );

    Ok(())
}

fn max_stretch(cloth: &ClothGrid) -> f32 {
    cloth
        .springs()
        .iter()
        .map(|s| {
            let a = cloth.point_masses()[s.a.index()].position;
            let b = cloth.point_masses()[s.b.index()].position;
            a.distance(b) / s.rest_length
        })
        .fold(0.0f32, f32::max)
}

fn y_range(cloth: &ClothGrid) -> (f32, f32) {
    cloth.point_masses().iter().fold(
        (f32::INFINITY, f32::NEG_INFINITY),
        |(lo, hi), pm| (lo.min(pm.position.y), hi.max(pm.position.y)),
    )
}
