//! Integration tests for swath-telemetry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use swath_telemetry::{EventBus, EventKind, EventSink, SimulationEvent, VecSink};

/// Counts deliveries through a shared counter, so the test can watch a
/// sink that the bus owns.
struct CountingSink {
    delivered: Arc<AtomicUsize>,
    finalized: Arc<AtomicUsize>,
}

impl EventSink for CountingSink {
    fn handle(&mut self, _event: &SimulationEvent) {
        self.delivered.fetch_add(1, Ordering::SeqCst);
    }

    fn finalize(&mut self) {
        self.finalized.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "counting_sink"
    }
}

#[test]
fn emit_and_flush_delivers_in_order() {
    let delivered = Arc::new(AtomicUsize::new(0));
    let finalized = Arc::new(AtomicUsize::new(0));

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CountingSink {
        delivered: delivered.clone(),
        finalized: finalized.clone(),
    }));

    bus.emit(SimulationEvent::new(0, EventKind::FrameBegin { frame: 0 }));
    bus.emit(SimulationEvent::new(
        29,
        EventKind::FrameEnd { wall_time: 0.002 },
    ));
    assert_eq!(delivered.load(Ordering::SeqCst), 0); // Queued, not delivered

    bus.flush();
    assert_eq!(delivered.load(Ordering::SeqCst), 2);

    bus.finalize();
    assert_eq!(finalized.load(Ordering::SeqCst), 1);
}

#[test]
fn disabled_bus_drops_events() {
    let delivered = Arc::new(AtomicUsize::new(0));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CountingSink {
        delivered: delivered.clone(),
        finalized: Arc::new(AtomicUsize::new(0)),
    }));

    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(SimulationEvent::new(0, EventKind::FrameBegin { frame: 0 }));
    bus.flush();

    assert_eq!(delivered.load(Ordering::SeqCst), 0);
}

#[test]
fn multiple_sinks() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    bus.add_sink(Box::new(VecSink::new()));
    assert_eq!(bus.sink_count(), 2);
}

#[test]
fn vec_sink_collects() {
    let mut sink = VecSink::new();
    sink.handle(&SimulationEvent::new(
        3,
        EventKind::MaxStretch { ratio: 1.08 },
    ));
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0].substep, 3);
    assert_eq!(sink.name(), "vec_sink");
}

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::StageCounts {
            springs_evaluated: 26,
            external_contacts: 3,
            stretch_corrections: 1,
            self_collisions: 0,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.substep, 5);
    assert!(json.contains("springs_evaluated"));
}
