use super::{format, format_header, format_row};
use crate::{
  align::aggregate,
  load::{load_document, LoadedDocuments},
  result::ResultSet,
  variation::AxisNames,
};

#[test]
fn header_is_underlined() {
  let header = format_header(["size", "c (ms)"]);
  let (names, rule) = header.split_once('\n').unwrap();

  assert!(names.starts_with("size"));
  assert_eq!(rule.len(), names.len());
  assert!(rule.chars().all(|c| c == '='));
}

#[test]
fn measurements_are_right_aligned() {
  let row = format_row(["1024".to_string(), "2.100".to_string()]);

  assert_eq!(row, format!("{:<14}  {:>14}", "1024", "2.100"));
}

#[test]
fn renders_runtimes_and_speedups() {
  let mut documents = LoadedDocuments::default();
  documents.insert(
    "c",
    load_document(r#"{"prog.fut:add": {"datasets": {"[1024]i32": {"runtimes": [2000, 2200]}, "[16]i32": {"runtimes": [30]}}}}"#)
      .unwrap(),
  );
  documents.insert(
    "opencl",
    load_document(r#"{"prog.fut:add": {"datasets": {"[1024]i32": {"runtimes": [500, 500]}, "[16]i32": {"runtimes": [60]}}}}"#)
      .unwrap(),
  );

  let table = format(&aggregate(&documents, "c", &AxisNames::default())).unwrap();
  let lines = table.lines().collect::<Vec<_>>();

  assert_eq!(lines[0], "add (prog.fut:add)");
  assert!(lines[2].starts_with("size"));
  assert!(lines[2].contains("c (ms)"));
  assert!(lines[2].contains("opencl (ms)"));
  assert!(lines[2].contains("opencl speedup"));
  assert!(lines[4].starts_with("16 "));
  assert!(lines[4].ends_with("0.50x"));
  assert!(lines[5].starts_with("1024 "));
  assert!(lines[5].contains("2.100"));
  assert!(lines[5].contains("0.500"));
  assert!(lines[5].ends_with("4.20x"));
  assert!(lines[6].chars().all(|c| c == '-'));
}

#[test]
fn empty_result_set_renders_nothing() {
  assert_eq!(format(&ResultSet::default()).unwrap(), "");
}
