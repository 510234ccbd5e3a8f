use std::{
  collections::HashSet,
  path::{Path, PathBuf},
  str::FromStr,
};

use anyhow::Result;

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

/// Backend used as the speedup baseline when none is given.
pub const DEFAULT_BASELINE: &str = "c";

/// An execution backend whose results can be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
  /// Identifies the backend in file names and result sets (`opencl`).
  pub suffix: String,
  /// Human-readable name (`OpenCL`).
  pub name: String,
}

impl Backend {
  pub fn new(suffix: &str, name: &str) -> Self {
    Self {
      suffix: suffix.to_string(),
      name: name.to_string(),
    }
  }

  /// `<dir>/<progname>-<suffix>.json`
  pub fn result_path<P: AsRef<Path>>(&self, dir: P, progname: &str) -> PathBuf {
    dir.as_ref().join(format!("{progname}-{}.json", self.suffix))
  }
}

/// Parses `SUFFIX` or `SUFFIX=NAME`.
impl FromStr for Backend {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (suffix, name) = s.split_once('=').unwrap_or((s, s));
    let (suffix, name) = (suffix.trim(), name.trim());

    anyhow::ensure!(!suffix.is_empty(), "empty backend suffix in {s:?}");
    anyhow::ensure!(
      suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
      "invalid backend suffix {suffix:?}"
    );

    Ok(Self::new(suffix, if name.is_empty() { suffix } else { name }))
  }
}

/// The backends to look for, in load order, and the speedup baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRegistry {
  backends: Vec<Backend>,
  baseline: String,
}

impl BackendRegistry {
  pub fn new(backends: Vec<Backend>, baseline: &str) -> Result<Self> {
    anyhow::ensure!(!backends.is_empty(), "no backends configured");

    let mut seen = HashSet::new();
    for backend in &backends {
      if !seen.insert(backend.suffix.as_str()) {
        anyhow::bail!("backend {:?} configured twice", backend.suffix);
      }
    }

    Ok(Self {
      backends,
      baseline: baseline.to_string(),
    })
  }

  /// The backends the benchmark suite is usually run with.
  pub fn default_backends() -> Vec<Backend> {
    vec![
      Backend::new("opencl", "OpenCL"),
      Backend::new("c", "Sequential C"),
      Backend::new("multicore", "Multicore"),
      Backend::new("cuda", "CUDA"),
      Backend::new("ispc", "ISPC"),
    ]
  }

  pub fn backends(&self) -> &[Backend] {
    &self.backends
  }

  pub fn baseline(&self) -> &str {
    &self.baseline
  }

  pub fn get(&self, suffix: &str) -> Option<&Backend> {
    self.backends.iter().find(|backend| backend.suffix == suffix)
  }
}

impl Default for BackendRegistry {
  fn default() -> Self {
    Self {
      backends: Self::default_backends(),
      baseline: DEFAULT_BASELINE.to_string(),
    }
  }
}
