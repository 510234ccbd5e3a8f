use indexmap::IndexMap;
use serde::Serialize;

use crate::key::Scalar;

/// The aligned measurements of one benchmark. Every array is parallel to
/// `values`, which is sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedResult {
  /// Full `<program>:<benchmark>` identifier.
  pub benchmark: String,
  pub param_index: usize,
  pub param_name: String,
  /// Dataset key each row was taken from.
  pub dataset_keys: Vec<String>,
  /// Value of the varying parameter per row.
  pub values: Vec<Scalar>,
  /// Mean runtime in milliseconds, per backend suffix.
  #[serde(rename = "runtimes_ms")]
  pub runtimes: IndexMap<String, Vec<f64>>,
  /// Baseline runtime over backend runtime, per non-baseline backend suffix.
  /// Empty when the baseline backend is unavailable.
  pub speedups: IndexMap<String, Vec<f64>>,
}

impl AlignedResult {
  pub fn runtimes(&self, backend: &str) -> Option<&[f64]> {
    self.runtimes.get(backend).map(Vec::as_slice)
  }

  pub fn speedups(&self, backend: &str) -> Option<&[f64]> {
    self.speedups.get(backend).map(Vec::as_slice)
  }
}

/// Aligned results keyed by benchmark name, in the reference backend's order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
  results: IndexMap<String, AlignedResult>,
}

impl ResultSet {
  /// Replaces an entry of the same name in place, returning it.
  pub(crate) fn insert(&mut self, name: &str, result: AlignedResult) -> Option<AlignedResult> {
    self.results.insert(name.to_string(), result)
  }

  pub fn get(&self, name: &str) -> Option<&AlignedResult> {
    self.results.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.results.contains_key(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &AlignedResult)> {
    self.results.iter().map(|(name, result)| (name.as_str(), result))
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.results.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.results.len()
  }

  pub fn is_empty(&self) -> bool {
    self.results.is_empty()
  }
}
