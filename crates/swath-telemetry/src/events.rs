//! Simulation event types.
//!
//! Lightweight value types tagged with the substep that produced them.
//! They carry stage counters rather than raw state — enough to watch a
//! run converge (or blow up) without copying point masses around.

use serde::{Deserialize, Serialize};

/// An event emitted while driving the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Substep number since the run started (0-indexed).
    pub substep: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A rendered frame's worth of substeps is starting.
    FrameBegin {
        /// Frame number (0-indexed).
        frame: u32,
    },

    /// A rendered frame completed.
    FrameEnd {
        /// Wall-clock time for the whole frame (seconds).
        wall_time: f64,
    },

    /// Stage counters for one substep.
    StageCounts {
        /// Springs that exerted force.
        springs_evaluated: u32,
        /// Point masses moved by external primitives.
        external_contacts: u32,
        /// Springs clamped by the length constraint.
        stretch_corrections: u32,
        /// Point masses moved by the self-collision pass.
        self_collisions: u32,
    },

    /// Worst spring elongation observed after a substep, as a ratio
    /// of rest length. Hovers at or below the stretch limit in a
    /// stable run.
    MaxStretch {
        /// `max(distance / rest_length)` over all springs.
        ratio: f32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given substep.
    pub fn new(substep: u64, kind: EventKind) -> Self {
        Self { substep, kind }
    }
}
