use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, info_span, warn};

use crate::{backend::BackendRegistry, ext::PathExt};

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;

/// The datasets of one benchmark, keyed by dataset key. Each entry holds the
/// non-empty timing samples in microseconds.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BenchmarkRecord {
  pub datasets: IndexMap<String, Vec<f64>>,
}

/// One backend's results, keyed by `<program>:<benchmark>` identifier, in
/// document order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawDocument {
  pub benchmarks: IndexMap<String, BenchmarkRecord>,
}

impl RawDocument {
  pub fn samples(&self, benchmark: &str, dataset: &str) -> Option<&[f64]> {
    self
      .benchmarks
      .get(benchmark)?
      .datasets
      .get(dataset)
      .map(Vec::as_slice)
  }
}

#[derive(Deserialize)]
struct BenchmarkEntry {
  datasets: IndexMap<String, Value>,
}

#[derive(Deserialize)]
struct DatasetEntry {
  runtimes: Vec<f64>,
}

/// Decodes a result document.
///
/// The top level must be an object, and unless it is empty at least one of
/// its entries must carry a `datasets` object. Entries and datasets that do
/// not have the expected shape are skipped with a warning.
pub fn load_document(text: &str) -> Result<RawDocument> {
  let entries: IndexMap<String, Value> = serde_json::from_str(text).context("decode top-level object")?;
  let total = entries.len();

  let mut document = RawDocument::default();
  for (id, entry) in entries {
    let entry = match serde_json::from_value::<BenchmarkEntry>(entry) {
      Ok(entry) => entry,
      Err(err) => {
        warn!("skipping benchmark {id:?}: {err}");
        continue;
      }
    };

    let mut record = BenchmarkRecord::default();
    for (key, dataset) in entry.datasets {
      match serde_json::from_value::<DatasetEntry>(dataset) {
        Ok(DatasetEntry { runtimes }) if !runtimes.is_empty() => {
          record.datasets.insert(key, runtimes);
        }
        Ok(_) => warn!("skipping dataset {key:?} of {id:?}: no runtime samples"),
        Err(err) => warn!("skipping dataset {key:?} of {id:?}: {err}"),
      }
    }

    document.benchmarks.insert(id, record);
  }

  if total > 0 && document.benchmarks.is_empty() {
    anyhow::bail!("none of the {total} top-level entries has a `datasets` object");
  }

  Ok(document)
}

/// Loads one backend's result file. A file that does not exist is `Ok(None)`.
pub fn load_backend_file<P: AsRef<Path>>(path: P) -> Result<Option<RawDocument>> {
  let path = path.as_ref();

  let Some(text) = path.read_if_exists().with_context(|| format!("read {path:?}"))? else {
    return Ok(None);
  };

  let document = load_document(&text).with_context(|| format!("malformed result file {path:?}"))?;

  Ok(Some(document))
}

/// Documents of the backends that loaded, in registry order.
#[derive(Debug, Default, Clone)]
pub struct LoadedDocuments {
  documents: IndexMap<String, RawDocument>,
}

impl LoadedDocuments {
  pub fn insert(&mut self, suffix: &str, document: RawDocument) {
    self.documents.insert(suffix.to_string(), document);
  }

  pub fn get(&self, suffix: &str) -> Option<&RawDocument> {
    self.documents.get(suffix)
  }

  pub fn contains(&self, suffix: &str) -> bool {
    self.documents.contains_key(suffix)
  }

  /// Suffixes of the backends that loaded.
  pub fn available(&self) -> impl Iterator<Item = &str> {
    self.documents.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &RawDocument)> {
    self.documents.iter().map(|(suffix, document)| (suffix.as_str(), document))
  }

  /// The first loaded backend, which decides which benchmarks and datasets
  /// are considered.
  pub fn reference(&self) -> Option<(&str, &RawDocument)> {
    self.iter().next()
  }

  pub fn len(&self) -> usize {
    self.documents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.documents.is_empty()
  }
}

/// Loads `<dir>/<progname>-<suffix>.json` for every registered backend.
/// Missing files are skipped; a malformed file aborts the whole load.
///
/// Diagnostics about skipped entries carry the backend suffix as a `backend`
/// span field.
pub fn load_backends<P: AsRef<Path>>(dir: P, progname: &str, registry: &BackendRegistry) -> Result<LoadedDocuments> {
  let mut loaded = LoadedDocuments::default();

  for backend in registry.backends() {
    let path = backend.result_path(&dir, progname);
    let _span = info_span!("load", backend = %backend.suffix).entered();

    match load_backend_file(&path).with_context(|| format!("load {}", backend.name))? {
      Some(document) => {
        info!("loaded {} results from {path:?}", backend.name);
        loaded.insert(&backend.suffix, document);
      }
      None => info!("no {} results at {path:?}, skipping backend", backend.name),
    }
  }

  if loaded.is_empty() {
    anyhow::bail!("no result files found for {progname:?}");
  }

  let baseline = registry.baseline();
  if !loaded.contains(baseline) {
    let name = registry.get(baseline).map_or(baseline, |backend| backend.name.as_str());
    warn!("baseline backend {name} ({baseline}) not found, speedups will be omitted");
  }

  Ok(loaded)
}
