use crate::ext::SamplesExt;

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;

/// Raw samples are recorded in microseconds.
const MICROS_PER_MILLI: f64 = 1000.0;

/// Mean runtime of a sample set, in milliseconds.
pub fn mean_ms(samples: &[f64]) -> f64 {
  samples.mean() / MICROS_PER_MILLI
}

/// Element-wise `baseline / runtime`. A speedup above 1 means `runtimes` is
/// faster than the baseline.
///
/// Zero runtimes are not special-cased, they produce infinity or NaN.
pub fn speedups(baseline: &[f64], runtimes: &[f64]) -> Vec<f64> {
  baseline.iter().zip(runtimes).map(|(base, time)| base / time).collect()
}
