use std::{fs, io, path::Path};

use anyhow::{Context, Result};

#[extend::ext(name = PathExt)]
pub impl Path {
  /// Reads the whole file into a string. A missing file is `Ok(None)`, any
  /// other I/O failure is an error.
  fn read_if_exists(&self) -> Result<Option<String>> {
    match fs::read_to_string(self) {
      Ok(text) => Ok(Some(text)),
      Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(err).context("read_to_string"),
    }
  }
}

#[extend::ext(name = SamplesExt)]
pub impl [f64] {
  /// Arithmetic mean. NaN for an empty slice.
  fn mean(&self) -> f64 {
    self.iter().sum::<f64>() / self.len() as f64
  }
}
