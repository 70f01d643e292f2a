use std::borrow::Cow;
use std::collections::BTreeMap;

use rail_track::guard::Guard;

use super::descriptions;

#[test]
fn is_null_passes_present_values_through() {
    assert_eq!(Guard.is_null(Some(7), "n").into_value(), Some(7));
    assert_eq!(Guard.is_null(Some(""), "name").into_value(), Some(""));
}

#[test]
fn is_null_rejects_absence() {
    let rail = Guard.is_null(None::<u8>, "id");
    assert_eq!(descriptions(rail), vec!["Required input id was null."]);
}

#[test]
fn is_null_or_empty_rejects_absent_before_empty() {
    assert_eq!(
        descriptions(Guard.is_null_or_empty(None::<&str>, "name")),
        vec!["Required input name was null."]
    );
    assert_eq!(
        descriptions(Guard.is_null_or_empty(Some(""), "name")),
        vec!["Required input name was empty."]
    );
}

#[test]
fn is_null_or_empty_accepts_white_space() {
    assert!(Guard.is_null_or_empty(Some("   "), "name").is_success());
}

#[test]
fn is_null_or_empty_covers_collections() {
    assert!(Guard.is_null_or_empty(Some(Vec::<u8>::new()), "bytes").is_failure());
    assert!(Guard.is_null_or_empty(Some(vec![1]), "bytes").is_success());
    assert!(Guard.is_null_or_empty(Some([0_u8; 0]), "arr").is_failure());
    assert!(Guard.is_null_or_empty(Some(&[1, 2][..]), "slice").is_success());
    assert!(Guard.is_null_or_empty(Some(BTreeMap::<u8, u8>::new()), "map").is_failure());
    assert!(Guard.is_null_or_empty(Some(Cow::Borrowed("")), "cow").is_failure());
    assert!(Guard.is_null_or_empty(Some(String::from("x")), "s").is_success());
}

#[cfg(feature = "std")]
#[test]
fn is_null_or_empty_covers_hashed_collections() {
    use std::collections::{HashMap, HashSet};

    assert!(Guard.is_null_or_empty(Some(HashMap::<u8, u8>::new()), "map").is_failure());
    assert!(Guard.is_null_or_empty(Some(HashSet::from([1])), "set").is_success());
}

#[test]
fn is_null_or_white_space_checks_in_order() {
    assert_eq!(
        descriptions(Guard.is_null_or_white_space(None::<String>, "email")),
        vec!["Required input email was null."]
    );
    assert_eq!(
        descriptions(Guard.is_null_or_white_space(Some(""), "email")),
        vec!["Required input email was empty."]
    );
    assert_eq!(
        descriptions(Guard.is_null_or_white_space(Some(" \t\r\n"), "email")),
        vec!["Required input email was white space."]
    );
}

#[test]
fn is_null_or_white_space_keeps_padded_value() {
    let rail = Guard.is_null_or_white_space(Some(String::from("  john  ")), "name");
    assert_eq!(rail.into_value().as_deref(), Some("  john  "));
}

#[test]
fn guard_failures_carry_unprocessable_code() {
    let rail = Guard.is_null(None::<u8>, "id");
    let error = rail.into_messages().unwrap().first().clone();
    assert_eq!(error.code(), 422);
    assert_eq!(error.message(), "");
}
