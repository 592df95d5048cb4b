//! # swath-bench
//!
//! Procedural regression scenarios and a frame runner for the cloth
//! pipeline. Three canonical scenarios:
//!
//! 1. **Hanging sheet** — pinned top row, drapes under gravity
//! 2. **Sphere drape** — horizontal cloth falls onto a sphere
//! 3. **Self-fold** — unpinned cloth collapses onto a floor plane
//!    (self-collision stress test)

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::RunMetrics;
pub use runner::FrameRunner;
pub use scenarios::{Scenario, ScenarioKind};
