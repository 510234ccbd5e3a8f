use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::{
  key::{Configuration, Scalar},
  load::{BenchmarkRecord, LoadedDocuments},
  result::{AlignedResult, ResultSet},
  stats,
  variation::{self, AxisNames, VaryingParameter},
};

#[cfg(test)]
#[path = "align_test.rs"]
mod tests;

/// A configuration present in every backend, before sorting.
struct Row {
  key: String,
  value: Scalar,
  /// Mean runtime per loaded backend, in load order.
  means: Vec<f64>,
}

/// `prog.fut:add` -> `add`
pub fn benchmark_name(id: &str) -> &str {
  id.rsplit_once(':').map_or(id, |(_, name)| name)
}

/// Aligns every benchmark of the reference (first loaded) backend across all
/// loaded backends.
///
/// Benchmarks whose varying parameter cannot be identified, or that have no
/// configuration shared by every backend, are left out. When two identifiers
/// share a benchmark name the later one wins. Speedups are only computed when
/// `baseline` is among the loaded backends.
pub fn aggregate(documents: &LoadedDocuments, baseline: &str, names: &AxisNames) -> ResultSet {
  let mut results = ResultSet::default();

  let Some((reference, document)) = documents.reference() else {
    return results;
  };
  debug!("using {reference:?} as the reference backend");

  for (id, record) in &document.benchmarks {
    let Some(result) = align_benchmark(id, record, documents, baseline, names) else {
      continue;
    };

    let name = benchmark_name(id);
    if let Some(replaced) = results.insert(name, result) {
      warn!("{id:?} replaces {:?} as benchmark {name:?}", replaced.benchmark);
    }
  }

  results
}

/// Keys using the quoted encoding go through variation detection, keys using
/// the bracketed encoding are always sized.
fn resolve_axis(record: &BenchmarkRecord, names: &AxisNames) -> Option<VaryingParameter> {
  let mut params = Vec::new();
  let mut legacy = false;

  for key in record.datasets.keys() {
    match Configuration::detect(key) {
      Some(Configuration::ParameterList(values)) => params.push(values),
      Some(Configuration::LegacySize(_)) => legacy = true,
      None => {}
    }
  }

  if !params.is_empty() {
    variation::detect(&params, names)
  } else if legacy {
    Some(VaryingParameter::legacy_size())
  } else {
    None
  }
}

fn align_benchmark(
  id: &str,
  record: &BenchmarkRecord,
  documents: &LoadedDocuments,
  baseline: &str,
  names: &AxisNames,
) -> Option<AlignedResult> {
  let Some(axis) = resolve_axis(record, names) else {
    warn!("could not identify the varying parameter of {id:?}, skipping");
    return None;
  };
  info!("processing {id:?}, varying parameter {} (index {})", axis.name, axis.index);

  let mut rows = Vec::new();
  for key in record.datasets.keys() {
    let Some(value) = Configuration::detect(key).and_then(|config| config.value_at(axis.index)) else {
      warn!("could not read {} from dataset {key:?} of {id:?}, skipping", axis.name);
      continue;
    };

    let mut means = Vec::with_capacity(documents.len());
    let mut missing = Vec::new();
    for (suffix, document) in documents.iter() {
      match document.samples(id, key) {
        Some(samples) => means.push(stats::mean_ms(samples)),
        None => missing.push(suffix),
      }
    }

    if !missing.is_empty() {
      warn!("dataset {key:?} of {id:?} missing in {}, skipping", missing.join(", "));
      continue;
    }

    rows.push(Row {
      key: key.clone(),
      value,
      means,
    });
  }

  if rows.is_empty() {
    warn!("no dataset of {id:?} is present in every backend, skipping");
    return None;
  }

  // Stable, so equal values keep document order.
  rows.sort_by(|a, b| a.value.cmp(&b.value));

  let runtimes = documents
    .available()
    .enumerate()
    .map(|(column, suffix)| (suffix.to_string(), rows.iter().map(|row| row.means[column]).collect()))
    .collect::<IndexMap<String, Vec<f64>>>();

  let speedups: IndexMap<String, Vec<f64>> = match runtimes.get(baseline) {
    Some(base) => runtimes
      .iter()
      .filter(|(suffix, _)| suffix.as_str() != baseline)
      .map(|(suffix, times)| {
        let ratios = stats::speedups(base, times);
        if ratios.iter().any(|ratio| !ratio.is_finite()) {
          warn!("non-finite speedup of {suffix:?} over {baseline:?} in {id:?}");
        }

        (suffix.clone(), ratios)
      })
      .collect(),
    None => IndexMap::new(),
  };

  let (dataset_keys, values) = rows.into_iter().map(|row| (row.key, row.value)).unzip();

  Some(AlignedResult {
    benchmark: id.to_string(),
    param_index: axis.index,
    param_name: axis.name,
    dataset_keys,
    values,
    runtimes,
    speedups,
  })
}
