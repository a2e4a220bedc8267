//! Tests for the smoothed-sensor adapter and the fluent builder.
//!
//! The adapter bridges a raw temperature source to the host: smoothed
//! readings and faults flow through the same event contract raw sensors use.
//!
//! ## Test Organization
//!
//! 1. **Republishing** - smoothed readings through the callback contract
//! 2. **Fault Propagation** - upstream faults and invalid readings
//! 3. **Range Enforcement** - out-of-range smoothed values fault, not clamp
//! 4. **Wiring** - attach to an upstream source, source capability set
//! 5. **Builder Validation** - parameter errors and duplicate detection

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use tempsmooth::prelude::*;

/// Collect every event a sensor publishes.
fn collector(
    sensor: &mut dyn TemperatureSource<f64>,
) -> Rc<RefCell<Vec<SensorEvent<f64>>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    sensor.subscribe(Box::new(move |event| sink.borrow_mut().push(event)));
    events
}

/// A scripted upstream source for wiring tests.
#[derive(Default)]
struct ScriptedSensor {
    callback: Option<EventCallback<f64>>,
    last: Option<Sample<f64>>,
    fault: Option<FaultKind<f64>>,
}

impl ScriptedSensor {
    fn emit_reading(&mut self, timestamp: f64, value: f64) {
        let sample = Sample { timestamp, value };
        self.last = Some(sample);
        if let Some(cb) = self.callback.as_mut() {
            cb(SensorEvent::Reading(sample));
        }
    }

    fn emit_fault(&mut self, fault: FaultKind<f64>) {
        self.fault = Some(fault);
        if let Some(cb) = self.callback.as_mut() {
            cb(SensorEvent::Fault(fault));
        }
    }
}

impl TemperatureSource<f64> for ScriptedSensor {
    fn subscribe(&mut self, callback: EventCallback<f64>) {
        self.callback = Some(callback);
    }

    fn current(&self) -> Option<Sample<f64>> {
        self.last
    }

    fn fault(&self) -> Option<FaultKind<f64>> {
        self.fault
    }
}

// ============================================================================
// Republishing Tests
// ============================================================================

/// Test that every accepted reading republishes a smoothed reading with the
/// newest timestamp.
#[test]
fn test_adapter_republishes_smoothed_readings() {
    let mut sensor = Smoother::new()
        .smooth_time(10.0)
        .savitzky_golay(2)
        .build()
        .expect("build should succeed");
    let events = collector(&mut sensor);

    let t = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [20.0, 20.5, 25.0, 20.6, 20.4];
    for (&ti, &yi) in t.iter().zip(y.iter()) {
        sensor.on_reading(ti, yi).expect("reading should succeed");
    }

    let events = events.borrow();
    assert_eq!(events.len(), 5, "One event per reading");
    match events[4] {
        SensorEvent::Reading(sample) => {
            assert_eq!(sample.timestamp, 4.0);
            assert_relative_eq!(sample.value, 20.008_571_428_571_44, max_relative = 1e-9);
        }
        SensorEvent::Fault(_) => panic!("In-range reading must not fault"),
    }
}

/// Test that warm-up readings pass the raw value through.
#[test]
fn test_adapter_warmup_passthrough() {
    let mut sensor = Smoother::new()
        .smooth_time(5.0)
        .savitzky_golay(2)
        .build()
        .expect("build should succeed");

    let first = sensor.on_reading(0.0, 21.2).expect("reading should succeed");
    assert_eq!(first.value, 21.2);

    let second = sensor.on_reading(0.3, 21.8).expect("reading should succeed");
    assert_eq!(second.value, 21.8, "Two samples cannot fit a quadratic");
}

/// Test that the adapter exposes the source capability set itself.
#[test]
fn test_adapter_implements_temperature_source() {
    let mut sensor = Smoother::new()
        .smooth_time(5.0)
        .whittaker_eilers(2, 20_000.0)
        .build()
        .expect("build should succeed");

    assert!(sensor.current().is_none());
    assert!(sensor.fault().is_none());

    sensor.on_reading(1.0, 22.5).expect("reading should succeed");
    let current = sensor.current().expect("current should be set");
    assert_eq!((current.timestamp, current.value), (1.0, 22.5));

    sensor.on_fault(FaultKind::Disconnected);
    assert_eq!(sensor.fault(), Some(FaultKind::Disconnected));
}

/// Test that reset discards history and fault state.
#[test]
fn test_adapter_reset() {
    let mut sensor = Smoother::new()
        .smooth_time(5.0)
        .savitzky_golay(2)
        .build()
        .expect("build should succeed");

    sensor.on_reading(0.0, 20.0).expect("reading should succeed");
    sensor.on_fault(FaultKind::Disconnected);
    assert_eq!(sensor.window_len(), 1);

    sensor.reset();
    assert_eq!(sensor.window_len(), 0);
    assert!(sensor.current().is_none());
    assert!(sensor.fault().is_none());
}

// ============================================================================
// Fault Propagation Tests
// ============================================================================

/// Test that an upstream fault is republished unmodified and the window is
/// left untouched.
#[test]
fn test_adapter_propagates_fault_window_unchanged() {
    let mut sensor = Smoother::new()
        .smooth_time(10.0)
        .savitzky_golay(2)
        .build()
        .expect("build should succeed");
    let events = collector(&mut sensor);

    sensor.on_reading(0.0, 20.0).expect("reading should succeed");
    sensor.on_reading(1.0, 20.2).expect("reading should succeed");
    let before = sensor.window_len();

    sensor.on_fault(FaultKind::Disconnected);

    assert_eq!(sensor.window_len(), before, "Faults carry no sample");
    let events = events.borrow();
    assert_eq!(
        events.last(),
        Some(&SensorEvent::Fault(FaultKind::Disconnected)),
        "Fault must be forwarded as-is"
    );
}

/// Test that a non-finite reading is rejected, faulted downstream, and kept
/// out of the window.
#[test]
fn test_adapter_rejects_non_finite_reading() {
    let mut sensor = Smoother::new()
        .smooth_time(10.0)
        .savitzky_golay(2)
        .build()
        .expect("build should succeed");
    let events = collector(&mut sensor);

    sensor.on_reading(0.0, 20.0).expect("reading should succeed");
    let err = sensor
        .on_reading(1.0, f64::NAN)
        .expect_err("NaN must be rejected");

    assert!(matches!(err, SmoothError::InvalidSample { .. }));
    assert_eq!(sensor.window_len(), 1, "Rejected reading must not be stored");
    assert_eq!(
        events.borrow().last(),
        Some(&SensorEvent::Fault(FaultKind::InvalidReading))
    );
}

// ============================================================================
// Range Enforcement Tests
// ============================================================================

/// Test that an out-of-range smoothed value raises a fault, not a clamp.
#[test]
fn test_adapter_out_of_range_faults_not_clamps() {
    let mut sensor = Smoother::new()
        .smooth_time(10.0)
        .savitzky_golay(2)
        .min_temp(0.0)
        .max_temp(100.0)
        .build()
        .expect("build should succeed");
    let events = collector(&mut sensor);

    let err = sensor
        .on_reading(0.0, 105.0)
        .expect_err("105 exceeds max_temp");

    match err {
        SmoothError::OutOfRange { value, min, max } => {
            assert_relative_eq!(value, 105.0, max_relative = 1e-12);
            assert_eq!((min, max), (0.0, 100.0));
        }
        other => panic!("Expected OutOfRange, got {other:?}"),
    }

    match events.borrow().last() {
        Some(SensorEvent::Fault(FaultKind::OutOfRange { value, .. })) => {
            assert_relative_eq!(*value, 105.0, max_relative = 1e-12, epsilon = 1e-12);
        }
        other => panic!("Expected OutOfRange fault event, got {other:?}"),
    }

    assert!(
        sensor.current().is_none(),
        "An out-of-range value must never be reported as a reading"
    );
}

/// Test the lower bound symmetrically.
#[test]
fn test_adapter_below_min_faults() {
    let mut sensor = Smoother::new()
        .smooth_time(10.0)
        .whittaker_eilers(2, 20_000.0)
        .min_temp(10.0)
        .max_temp(100.0)
        .build()
        .expect("build should succeed");

    let err = sensor.on_reading(0.0, 5.0).expect_err("5 is below min_temp");
    assert!(matches!(err, SmoothError::OutOfRange { .. }));
}

// ============================================================================
// Wiring Tests
// ============================================================================

/// Test attaching the adapter to an upstream source: readings are smoothed
/// and faults pass through, with the host subscribed downstream.
#[test]
fn test_adapter_attach_forwards_upstream_events() {
    let mut upstream = ScriptedSensor::default();

    let sensor = Smoother::new()
        .smooth_time(10.0)
        .savitzky_golay(1)
        .build()
        .expect("build should succeed");
    let sensor = Rc::new(RefCell::new(sensor));

    let events = collector(&mut *sensor.borrow_mut());
    SmoothedSensor::attach(Rc::clone(&sensor), &mut upstream);

    // y = 2t + 1: an order-1 fit reproduces it exactly once warmed up.
    upstream.emit_reading(0.0, 1.0);
    upstream.emit_reading(1.0, 3.0);
    upstream.emit_reading(2.0, 5.0);
    upstream.emit_fault(FaultKind::Disconnected);

    let events = events.borrow();
    assert_eq!(events.len(), 4);
    match events[2] {
        SensorEvent::Reading(sample) => {
            assert_relative_eq!(sample.value, 5.0, max_relative = 1e-12);
        }
        SensorEvent::Fault(_) => panic!("Reading expected"),
    }
    assert_eq!(
        events[3],
        SensorEvent::Fault(FaultKind::Disconnected),
        "Upstream fault must reach the host unmodified"
    );
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test that from_config builds a working Whittaker-Eilers sensor.
#[test]
fn test_from_config_whittaker() {
    let config = SmootherConfig {
        sensor_name: "extruder_raw".into(),
        smooth_time: 10.0,
        min_temp: 0.0,
        max_temp: 300.0,
        smooth_order: 2,
        smooth_lambda: 20_000.0,
        algorithm: Algorithm::WhittakerEilers,
    };

    let mut sensor = Smoother::from_config(&config).expect("build should succeed");
    let t = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [20.0, 20.5, 25.0, 20.6, 20.4];
    let mut last = 0.0;
    for (&ti, &yi) in t.iter().zip(y.iter()) {
        last = sensor.on_reading(ti, yi).expect("reading should succeed").value;
    }
    assert_relative_eq!(last, 21.479_908_205_698_088, max_relative = 1e-9);
}

/// Test that each invalid parameter is rejected at build time.
#[test]
fn test_builder_rejects_invalid_parameters() {
    assert_eq!(
        Smoother::<f64>::new().savitzky_golay(0).build().unwrap_err(),
        SmoothError::InvalidOrder(0)
    );
    assert_eq!(
        Smoother::new().whittaker_eilers(2, -1.0).build().unwrap_err(),
        SmoothError::InvalidLambda(-1.0)
    );
    assert_eq!(
        Smoother::new().smooth_time(0.0).build().unwrap_err(),
        SmoothError::InvalidSmoothTime(0.0)
    );
    assert_eq!(
        Smoother::new()
            .min_temp(100.0)
            .max_temp(100.0)
            .build()
            .unwrap_err(),
        SmoothError::InvalidBounds {
            min: 100.0,
            max: 100.0
        }
    );
}

/// Test that setting a parameter twice is reported, not silently kept.
#[test]
fn test_builder_rejects_duplicate_parameter() {
    let err = Smoother::<f64>::new()
        .smooth_time(1.0)
        .smooth_time(2.0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SmoothError::DuplicateParameter {
            parameter: "smooth_time"
        }
    );
}

/// Test that defaults build successfully.
#[test]
fn test_builder_defaults() {
    let sensor = Smoother::<f64>::new().build().expect("defaults should build");
    let (min, max) = sensor.bounds();
    assert!(min < max);
}

/// Test that the adapter debug-formats its inspectable state. Build results
/// rely on this for `unwrap_err` and `{:?}` in assertion messages.
#[test]
fn test_adapter_debug_format() {
    let mut sensor = Smoother::new()
        .smooth_time(10.0)
        .savitzky_golay(2)
        .min_temp(0.0)
        .max_temp(100.0)
        .build()
        .expect("build should succeed");
    sensor.on_reading(0.0, 20.0).expect("reading should succeed");

    let repr = format!("{sensor:?}");
    assert!(repr.starts_with("SmoothedSensor"));
    assert!(repr.contains("window"), "Window state must be visible: {repr}");
    assert!(repr.contains("min_temp"), "Bounds must be visible: {repr}");
}
