use std::{cmp::Ordering, fmt};

use serde::Serialize;

#[cfg(test)]
#[path = "key_test.rs"]
mod tests;

/// A single typed value decoded from a dataset key token.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Scalar {
  Int(i64),
  Float(f64),
  Str(String),
}

impl Scalar {
  /// Converts one token, after stripping its type suffix (`256i32` -> `256`).
  ///
  /// Tokens containing a `.` are read as floats, everything else as an
  /// integer. When the numeric parse fails the stripped token is kept as a
  /// string.
  pub fn parse(token: &str) -> Self {
    let value = strip_type_suffix(token);

    let parsed = if value.contains('.') {
      value.parse::<f64>().ok().map(Scalar::Float)
    } else {
      value.parse::<i64>().ok().map(Scalar::Int)
    };

    parsed.unwrap_or_else(|| Scalar::Str(value.to_string()))
  }
}

/// Numbers compare numerically regardless of representation and sort before
/// strings.
impl Ord for Scalar {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self, other) {
      (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
      (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)),
      (Scalar::Int(a), Scalar::Float(b)) => cmp_int_float(*a, *b),
      (Scalar::Float(a), Scalar::Int(b)) => cmp_int_float(*b, *a).reverse(),
      (Scalar::Str(a), Scalar::Str(b)) => a.cmp(b),
      (Scalar::Str(_), _) => Ordering::Greater,
      (_, Scalar::Str(_)) => Ordering::Less,
    }
  }
}

/// Compares without rounding `int` through `f64`, which would merge distinct
/// integers above 2^53. NaN sorts by sign, as in `f64::total_cmp`.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
  const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

  if float.is_nan() {
    return if float.is_sign_negative() { Ordering::Greater } else { Ordering::Less };
  }
  if float >= TWO_POW_63 {
    return Ordering::Less;
  }
  if float < -TWO_POW_63 {
    return Ordering::Greater;
  }

  let whole = float.trunc();
  int.cmp(&(whole as i64)).then_with(|| {
    if float > whole {
      Ordering::Less
    } else if float < whole {
      Ordering::Greater
    } else {
      Ordering::Equal
    }
  })
}

impl PartialOrd for Scalar {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for Scalar {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Scalar {}

impl fmt::Display for Scalar {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Scalar::Int(value) => write!(f, "{value}"),
      Scalar::Float(value) => write!(f, "{value}"),
      Scalar::Str(value) => write!(f, "{value}"),
    }
  }
}

/// The decoded input configuration of one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Configuration {
  /// `[1024]i32 [1024]i32`: only the leading size is recoverable.
  LegacySize(i64),
  /// `#0 ("256i32 256i32 0.5f32")`: every quoted token is a parameter.
  ParameterList(Vec<Scalar>),
}

impl Configuration {
  /// Picks the decoder by looking for a quoted parameter list, falling back
  /// to the bracketed size encoding. Returns `None` if the chosen decoder
  /// cannot make sense of the key.
  pub fn detect(key: &str) -> Option<Self> {
    if key.contains('"') {
      parse_parameter_list(key).map(Configuration::ParameterList)
    } else {
      parse_legacy_size(key).map(Configuration::LegacySize)
    }
  }

  /// The value at tuple position `index`. A legacy size only has position 0.
  pub fn value_at(&self, index: usize) -> Option<Scalar> {
    match self {
      Configuration::LegacySize(size) => (index == 0).then_some(Scalar::Int(*size)),
      Configuration::ParameterList(values) => values.get(index).cloned(),
    }
  }
}

/// Extracts `N` from a key of the form `[N]...`.
pub fn parse_legacy_size(key: &str) -> Option<i64> {
  let (_, rest) = key.split_once('[')?;
  let (size, _) = rest.split_once(']')?;

  size.trim().parse().ok()
}

/// Decodes the whitespace-separated tokens between the first pair of double
/// quotes.
pub fn parse_parameter_list(key: &str) -> Option<Vec<Scalar>> {
  let (_, rest) = key.split_once('"')?;
  let (params, _) = rest.split_once('"')?;

  let values = params.split_whitespace().map(Scalar::parse).collect::<Vec<_>>();

  (!values.is_empty()).then_some(values)
}

/// Removes a trailing `<lowercase letter><digits>` marker, e.g. `i32` or `f64`.
fn strip_type_suffix(token: &str) -> &str {
  let digits = token.bytes().rev().take_while(u8::is_ascii_digit).count();
  if digits == 0 {
    return token;
  }

  let head = &token[..token.len() - digits];
  match head.as_bytes().last() {
    Some(marker) if marker.is_ascii_lowercase() => &head[..head.len() - 1],
    _ => token,
  }
}
