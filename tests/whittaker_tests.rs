//! Tests for the Whittaker-Eilers smoother.
//!
//! Reference values were computed with an independent dense solver on the
//! same penalized systems.
//!
//! ## Test Organization
//!
//! 1. **Degenerate Configurations** - warm-up and lambda 0
//! 2. **Reference Values** - banded solve against dense-solver results
//! 3. **Smoothness** - penalty monotonically decreasing in lambda
//! 4. **Irregular Spacing** - resampling policy
//! 5. **Determinism** - idempotence

use approx::assert_relative_eq;
use tempsmooth::prelude::*;

const SCENARIO_T: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
const SCENARIO_Y: [f64; 5] = [20.0, 20.5, 25.0, 20.6, 20.4];

fn rel(times: &[f64]) -> Vec<f64> {
    let newest = *times.last().unwrap();
    times.iter().map(|t| t - newest).collect()
}

/// Sum of squared order-`p` discrete differences of `z`.
fn roughness(z: &[f64], p: usize) -> f64 {
    let mut d = z.to_vec();
    for _ in 0..p {
        d = d.windows(2).map(|w| w[1] - w[0]).collect();
    }
    d.iter().map(|v| v * v).sum()
}

// ============================================================================
// Degenerate Configuration Tests
// ============================================================================

/// Test that a single sample passes through unchanged regardless of lambda.
#[test]
fn test_whittaker_single_sample_passthrough() {
    for lambda in [0.0, 1.0, 50_000.0] {
        let we = WhittakerEilers::new(2, lambda);
        let out = we.compute(&[0.0], &[19.3]).expect("compute should succeed");
        assert_eq!(out, 19.3, "Single sample must pass through (lambda {lambda})");
    }
}

/// Test that lambda 0 degenerates to the newest raw value.
#[test]
fn test_whittaker_lambda_zero_identity() {
    let we = WhittakerEilers::new(2, 0.0);
    let out = we
        .compute(&rel(&SCENARIO_T), &SCENARIO_Y)
        .expect("compute should succeed");
    assert_eq!(out, 20.4, "No penalty means no smoothing");
}

/// Test that fewer than order+1 samples return the newest raw value.
#[test]
fn test_whittaker_warmup_returns_newest() {
    let we = WhittakerEilers::new(2, 20_000.0);
    let out = we
        .compute(&[-1.0, 0.0], &[20.0, 23.0])
        .expect("compute should succeed");
    assert_eq!(out, 23.0, "Warm-up must return the newest raw value");
}

// ============================================================================
// Reference Value Tests
// ============================================================================

/// Test the reference scenario at the default penalty weight.
#[test]
fn test_whittaker_scenario_default_lambda() {
    let we = WhittakerEilers::new(2, 20_000.0);
    let out = we
        .compute(&rel(&SCENARIO_T), &SCENARIO_Y)
        .expect("compute should succeed");
    assert_relative_eq!(out, 21.479_908_205_698_088, max_relative = 1e-9);
}

/// Test the reference scenario at a large penalty weight.
///
/// At lambda 50000 the order-2 penalty pushes the solution to a near-linear
/// trend; the +4.5 outlier contributes under a degree to the reported value.
#[test]
fn test_whittaker_scenario_large_lambda() {
    let we = WhittakerEilers::new(2, 50_000.0);
    let out = we
        .compute(&rel(&SCENARIO_T), &SCENARIO_Y)
        .expect("compute should succeed");

    assert_relative_eq!(out, 21.479_963_281_014_882, max_relative = 1e-9);
    assert!(out < 22.0, "Outlier at 25.0 must not be reproduced");
}

/// Test an order-1 penalty against the dense reference.
#[test]
fn test_whittaker_order1_reference() {
    let we = WhittakerEilers::new(1, 1_000.0);
    let out = we
        .compute(&rel(&SCENARIO_T), &SCENARIO_Y)
        .expect("compute should succeed");
    assert_relative_eq!(out, 21.299_419_662_388_736, max_relative = 1e-9);
}

// ============================================================================
// Smoothness Tests
// ============================================================================

/// Test that the order-2 roughness of the solution strictly decreases as
/// lambda increases, for fixed jagged input.
#[test]
fn test_whittaker_roughness_monotone_in_lambda() {
    let y = [
        20.3, 19.6, 21.1, 20.0, 20.9, 19.4, 20.7, 20.1, 19.9, 20.8, 19.7, 20.5,
    ];
    let x: Vec<f64> = (0..y.len()).map(|i| i as f64 - 11.0).collect();

    let mut previous = f64::INFINITY;
    for lambda in [0.0, 1.0, 10.0, 100.0, 1_000.0] {
        let we = WhittakerEilers::new(2, lambda);
        let z = we.smooth(&x, &y).expect("smooth should succeed");
        let r = roughness(&z, 2);
        assert!(
            r < previous,
            "Roughness must decrease with lambda (lambda {lambda}: {r} vs {previous})"
        );
        previous = r;
    }
}

/// Test that the full-window solution is smoother than the raw input.
#[test]
fn test_whittaker_smooths_raw_window() {
    let we = WhittakerEilers::new(2, 100.0);
    let x = rel(&SCENARIO_T);
    let z = we.smooth(&x, &SCENARIO_Y).expect("smooth should succeed");

    assert_eq!(z.len(), SCENARIO_Y.len());
    assert!(roughness(&z, 2) < roughness(&SCENARIO_Y, 2));
}

// ============================================================================
// Irregular Spacing Tests
// ============================================================================

/// Test the resampling policy on non-uniform timestamps.
///
/// The window is linearly interpolated onto a uniform grid before the
/// penalty is applied; the reference value was computed the same way with a
/// dense solver.
#[test]
fn test_whittaker_nonuniform_resamples() {
    let t = [0.0, 0.9, 2.1, 3.0, 4.0];
    let we = WhittakerEilers::new(2, 50_000.0);
    let out = we
        .compute(&rel(&t), &SCENARIO_Y)
        .expect("compute should succeed");
    assert_relative_eq!(out, 21.404_965_080_974_43, max_relative = 1e-9);
}

/// Test that jitter below the uniformity tolerance is treated as uniform.
#[test]
fn test_whittaker_near_uniform_not_resampled() {
    let t = [0.0, 1.0, 2.0 + 1e-9, 3.0, 4.0];
    let we = WhittakerEilers::new(2, 20_000.0);
    let out = we
        .compute(&rel(&t), &SCENARIO_Y)
        .expect("compute should succeed");
    assert_relative_eq!(out, 21.479_908_205_698_088, max_relative = 1e-6);
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Test that repeated computes on an unchanged window are bit-identical.
#[test]
fn test_whittaker_idempotent() {
    let we = WhittakerEilers::new(2, 20_000.0);
    let x = rel(&SCENARIO_T);

    let a = we.compute(&x, &SCENARIO_Y).expect("compute should succeed");
    let b = we.compute(&x, &SCENARIO_Y).expect("compute should succeed");
    assert_eq!(a.to_bits(), b.to_bits(), "Compute must be deterministic");
}
