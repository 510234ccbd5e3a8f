use test_case::test_case;

use super::{detect, AxisLabel, AxisNames, VaryingParameter};
use crate::key::{parse_parameter_list, Scalar};

fn configs(keys: &[&str]) -> Vec<Vec<Scalar>> {
  keys.iter().map(|key| parse_parameter_list(key).unwrap()).collect()
}

#[test]
fn single_varying_position() {
  let configs = configs(&[
    "#0 (\"1i32 1i32 64i32 64i32 10i32\")",
    "#1 (\"1i32 1i32 128i32 64i32 10i32\")",
    "#2 (\"1i32 1i32 256i32 64i32 10i32\")",
  ]);

  assert_eq!(
    detect(&configs, &AxisNames::default()),
    Some(VaryingParameter {
      index: 2,
      name: "h".to_string()
    })
  );
}

#[test]
fn highest_varying_position_wins() {
  let configs = configs(&["#0 (\"1i32 10i32 5i32\")", "#1 (\"2i32 20i32 5i32\")"]);

  let varying = detect(&configs, &AxisNames::default()).unwrap();
  assert_eq!(varying.index, 1);
  assert_eq!(varying.name, "param1");
}

#[test]
fn numeric_representation_does_not_vary() {
  let configs = configs(&["#0 (\"2i32 1.0f32\")", "#1 (\"2i32 1f32\")", "#2 (\"3i32 1f32\")"]);

  assert_eq!(detect(&configs, &AxisNames::default()).unwrap().index, 0);
}

#[test]
fn only_shared_positions_are_considered() {
  let configs = configs(&["#0 (\"4i32 8i32\")", "#1 (\"4i32\")", "#2 (\"4i32 9i32 1i32\")"]);

  assert_eq!(detect(&configs, &AxisNames::default()), None);
}

#[test_case(&[]; "no configurations")]
#[test_case(&["#0 (\"1i32 2i32\")"]; "single configuration")]
#[test_case(&["#0 (\"1i32 2i32\")", "#1 (\"1i32 2i32\")"]; "duplicate configurations")]
fn undetermined(keys: &[&str]) {
  assert_eq!(detect(&configs(keys), &AxisNames::default()), None);
}

#[test]
fn axis_name_overrides() {
  let mut names = AxisNames::default();
  names.insert("0=threads".parse().unwrap());
  names.insert("2=rows".parse().unwrap());

  assert_eq!(names.name(0), "threads");
  assert_eq!(names.name(2), "rows");
  assert_eq!(names.name(3), "w");
  assert_eq!(names.name(7), "param7");
  assert_eq!(AxisNames::empty().name(2), "param2");
}

#[test_case("3"; "missing separator")]
#[test_case("x=w"; "non numeric index")]
#[test_case("3= "; "empty name")]
fn invalid_axis_label(s: &str) {
  assert!(s.parse::<AxisLabel>().is_err());
}

#[test]
fn legacy_size_axis() {
  assert_eq!(
    VaryingParameter::legacy_size(),
    VaryingParameter {
      index: 0,
      name: "size".to_string()
    }
  );
}
