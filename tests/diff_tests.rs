//! tests/diff_tests.rs
//! Array difference semantics

mod common;

use request_helper::{diff, ArrayKey, Diff};
use serde_json::json;

#[test]
fn overlapping_numbers() {
    common::setup();
    assert_eq!(diff(&[1, 2, 3], &[2, 3, 4]), (vec![1], vec![4]));
}

#[test]
fn common_elements_excluded_from_both_sides() {
    let a = ["admin", "editor", "viewer", "guest"];
    let b = ["viewer", "owner", "admin"];
    let (only_a, only_b) = diff(&a, &b);

    assert_eq!(only_a, vec!["editor", "guest"]);
    assert_eq!(only_b, vec!["owner"]);
    assert!(only_a.iter().all(|x| !b.contains(x)));
    assert!(only_b.iter().all(|x| !a.contains(x)));
}

#[test]
fn duplicates_collapse_and_order_is_first_occurrence() {
    let (only_a, only_b) = diff(&[5, 1, 5, 3, 1, 2], &[2, 9, 9, 7]);
    assert_eq!(only_a, vec![5, 1, 3]);
    assert_eq!(only_b, vec![9, 7]);
}

#[test]
fn identical_and_empty_inputs() {
    assert_eq!(diff(&[1, 2, 2], &[2, 1]), (vec![], vec![]));
    assert_eq!(diff::<i32>(&[], &[]), (vec![], vec![]));
    assert_eq!(diff(&[1, 2], &[]), (vec![1, 2], vec![]));
    assert_eq!(diff::<&str>(&[], &["x"]), (vec![], vec!["x"]));
}

#[test]
fn mixed_keys_from_json() {
    let a: Vec<ArrayKey> = serde_json::from_value(json!([1, "two", 3])).unwrap();
    let b: Vec<ArrayKey> = serde_json::from_value(json!(["two", 3, "four"])).unwrap();

    let result = Diff::between(&a, &b);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"increase": [1], "decrease": ["four"]})
    );
    assert!(!result.is_empty());

    let (increase, decrease) = result.into_parts();
    assert_eq!(increase, vec![ArrayKey::Number(1)]);
    assert_eq!(decrease, vec![ArrayKey::from("four")]);
}

#[test]
fn diff_between_equal_sets_is_empty() {
    assert!(Diff::between(&["a", "b"], &["b", "a", "a"]).is_empty());
}

#[test]
fn fractional_and_integral_float_keys() {
    let a: Vec<ArrayKey> = serde_json::from_value(json!([1.5, 2])).unwrap();
    let b: Vec<ArrayKey> = serde_json::from_value(json!([2.0, 3])).unwrap();

    let result = Diff::between(&a, &b);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"increase": [1.5], "decrease": [3]})
    );
}

#[test]
fn u64_range_keys_deserialize_and_compare() {
    let a: Vec<ArrayKey> =
        serde_json::from_value(json!([18446744073709551615_u64, 9223372036854775807_i64, 1]))
            .unwrap();
    let b: Vec<ArrayKey> =
        serde_json::from_value(json!([18446744073709551615_u64, 9223372036854775807_i64])).unwrap();

    assert_eq!(a[0], ArrayKey::Float(18446744073709551615_u64 as f64));
    assert_eq!(a[1], ArrayKey::Number(i64::MAX));
    assert_eq!(diff(&a, &b), (vec![ArrayKey::Number(1)], vec![]));
}

#[test]
fn non_primitive_json_is_rejected() {
    assert!(serde_json::from_value::<Vec<ArrayKey>>(json!([[1]])).is_err());
    assert!(serde_json::from_value::<Vec<ArrayKey>>(json!([null])).is_err());
}
