use std::fmt::Write;

use anyhow::Result;

use crate::result::{AlignedResult, ResultSet};

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;

const COLUMN_WIDTH: usize = 14;
const COLUMN_PADDING: &str = "  ";

fn format_header<'a, I: IntoIterator<Item = &'a str>>(columns: I) -> String {
  let header = columns
    .into_iter()
    .map(|col| format!("{col:<COLUMN_WIDTH$}"))
    .collect::<Vec<_>>()
    .join(COLUMN_PADDING);

  format!("{header}\n{}", "=".repeat(header.len()))
}

/// The axis column is left-aligned, measurements are right-aligned.
fn format_row<I: IntoIterator<Item = String>>(columns: I) -> String {
  columns
    .into_iter()
    .enumerate()
    .map(|(i, col)| {
      if i == 0 {
        format!("{col:<COLUMN_WIDTH$}")
      } else {
        format!("{col:>COLUMN_WIDTH$}")
      }
    })
    .collect::<Vec<_>>()
    .join(COLUMN_PADDING)
}

fn format_result(result: &AlignedResult) -> Result<String> {
  let columns = std::iter::once(result.param_name.clone())
    .chain(result.runtimes.keys().map(|backend| format!("{backend} (ms)")))
    .chain(result.speedups.keys().map(|backend| format!("{backend} speedup")))
    .collect::<Vec<_>>();

  let mut rows = String::new();
  writeln!(rows, "{}", format_header(columns.iter().map(String::as_str)))?;

  for (i, value) in result.values.iter().enumerate() {
    let row = format_row(
      std::iter::once(value.to_string())
        .chain(result.runtimes.values().map(|times| format!("{:.3}", times[i])))
        .chain(result.speedups.values().map(|ratios| format!("{:.2}x", ratios[i]))),
    );

    writeln!(rows, "{row}")?;
  }

  Ok(rows)
}

/// Renders one table per benchmark, separated by a rule.
pub fn format(results: &ResultSet) -> Result<String> {
  let mut table = String::new();

  for (name, result) in results.iter() {
    writeln!(table, "{name} ({})", result.benchmark)?;
    writeln!(table)?;

    let rows = format_result(result)?;
    let width = rows.lines().map(str::len).max().unwrap_or(0);

    write!(table, "{rows}")?;
    writeln!(table, "{}", "-".repeat(width))?;
  }

  Ok(table)
}
