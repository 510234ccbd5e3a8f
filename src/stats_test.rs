use super::{mean_ms, speedups};

#[test]
fn mean_in_milliseconds() {
  assert_eq!(mean_ms(&[2000.0, 2200.0]), 2.1);
  assert_eq!(mean_ms(&[500.0]), 0.5);
}

#[test]
fn mean_ignores_sample_order() {
  let samples = [13.0, 1700.0, 250.5, 9.25, 88_000.0];
  let mut reversed = samples;
  reversed.reverse();

  assert!((mean_ms(&samples) - mean_ms(&reversed)).abs() < 1e-12);
}

#[test]
fn mean_of_no_samples_is_nan() {
  assert!(mean_ms(&[]).is_nan());
}

#[test]
fn speedup_is_baseline_over_runtime() {
  assert_eq!(speedups(&[2.1, 8.0], &[0.5, 16.0]), vec![4.2, 0.5]);
}

#[test]
fn zero_runtime_propagates() {
  let ratios = speedups(&[1.0, 0.0], &[0.0, 0.0]);

  assert_eq!(ratios[0], f64::INFINITY);
  assert!(ratios[1].is_nan());
}
