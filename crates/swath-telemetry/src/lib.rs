//! # swath-telemetry
//!
//! Structured events for simulation observability. The step pipeline's
//! driver emits per-substep events onto an [`EventBus`]; pluggable
//! sinks consume them (a capture sink for tests, a `tracing` sink for
//! logs). The simulation core itself never depends on this crate —
//! drivers (CLI, benchmarks) wire it in.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
