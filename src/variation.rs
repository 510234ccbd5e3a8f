use std::{
  collections::{BTreeMap, BTreeSet},
  str::FromStr,
};

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use crate::key::Scalar;

#[cfg(test)]
#[path = "variation_test.rs"]
mod tests;

const LEGACY_SIZE_NAME: &str = "size";

/// The configuration dimension used as the independent variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaryingParameter {
  pub index: usize,
  pub name: String,
}

impl VaryingParameter {
  /// Axis of benchmarks whose keys use the bracketed size encoding.
  pub fn legacy_size() -> Self {
    Self {
      index: 0,
      name: LEGACY_SIZE_NAME.to_string(),
    }
  }
}

/// Display names for tuple positions. Positions without an entry are named
/// `param<index>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisNames {
  names: BTreeMap<usize, String>,
}

impl AxisNames {
  /// A table with no named positions.
  pub fn empty() -> Self {
    Self { names: BTreeMap::new() }
  }

  pub fn insert(&mut self, label: AxisLabel) {
    self.names.insert(label.index, label.name);
  }

  pub fn name(&self, index: usize) -> String {
    self
      .names
      .get(&index)
      .cloned()
      .unwrap_or_else(|| format!("param{index}"))
  }
}

/// Height, width and iteration count of the stencil benchmarks.
impl Default for AxisNames {
  fn default() -> Self {
    Self {
      names: BTreeMap::from([(2, "h".to_string()), (3, "w".to_string()), (4, "n".to_string())]),
    }
  }
}

/// One `INDEX=NAME` override of the axis name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel {
  pub index: usize,
  pub name: String,
}

impl FromStr for AxisLabel {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (index, name) = s.split_once('=').context("expected INDEX=NAME")?;
    let index = index.trim().parse::<usize>().with_context(|| format!("invalid index {index:?}"))?;

    let name = name.trim();
    anyhow::ensure!(!name.is_empty(), "empty axis name");

    Ok(Self {
      index,
      name: name.to_string(),
    })
  }
}

/// Finds the tuple position that takes more than one value across `configs`.
///
/// Only positions present in every tuple are considered. When several
/// positions vary the highest one wins. Returns `None` with fewer than two
/// tuples or when nothing varies.
pub fn detect(configs: &[Vec<Scalar>], names: &AxisNames) -> Option<VaryingParameter> {
  if configs.len() < 2 {
    return None;
  }

  let width = configs.iter().map(Vec::len).min()?;
  let varying = (0..width)
    .filter(|&i| configs.iter().map(|config| &config[i]).collect::<BTreeSet<_>>().len() > 1)
    .collect::<Vec<_>>();

  let &index = varying.last()?;
  if varying.len() > 1 {
    debug!("positions {varying:?} all vary, using {index}");
  }

  Some(VaryingParameter {
    index,
    name: names.name(index),
  })
}
