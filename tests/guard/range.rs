use rail_track::guard::Guard;

use super::descriptions;

const MALFORMED: &str = "range_from should be less than or equal to range_to";

#[test]
fn bounds_are_inclusive() {
    assert_eq!(Guard.is_out_of_range(1, "n", 1, 3).into_value(), Some(1));
    assert_eq!(Guard.is_out_of_range(3, "n", 1, 3).into_value(), Some(3));
    assert!(Guard.is_out_of_range(2, "n", 2, 2).is_success());
}

#[test]
fn values_outside_the_range_fail() {
    assert_eq!(
        descriptions(Guard.is_out_of_range(0, "n", 1, 3)),
        vec!["Input n was out of range."]
    );
    assert!(Guard.is_out_of_range(4, "n", 1, 3).is_failure());
}

#[test]
fn malformed_range_fails_even_for_inside_values() {
    assert_eq!(descriptions(Guard.is_out_of_range(2, "n", 3, 1)), vec![MALFORMED]);
}

#[test]
fn malformed_range_short_circuits_bounds_check() {
    assert_eq!(descriptions(Guard.is_out_of_range(9, "n", 3, 1)), vec![MALFORMED]);
}

#[test]
fn accumulating_variant_reports_both_problems() {
    assert_eq!(
        descriptions(Guard.is_out_of_range_acc(9, "n", 3, 1)),
        vec![MALFORMED, "Input n was out of range."]
    );
    assert_eq!(descriptions(Guard.is_out_of_range_acc(2, "n", 1, 3)), Vec::<String>::new());
    assert_eq!(descriptions(Guard.is_out_of_range_acc(0, "n", 1, 3)), vec!["Input n was out of range."]);
}

#[test]
fn works_for_any_ordered_type() {
    assert!(Guard.is_out_of_range('m', "letter", 'a', 'z').is_success());
    assert!(Guard.is_out_of_range("delta", "word", "alpha", "charlie").is_failure());
    assert!(Guard.is_out_of_range(0.5_f64, "ratio", 0.0, 1.0).is_success());
    assert!(Guard.is_out_of_range(1.5_f32, "ratio", 0.0, 1.0).is_failure());
}

#[test]
fn nan_never_lies_within_a_range() {
    assert!(Guard.is_out_of_range(f64::NAN, "x", f64::MIN, f64::MAX).is_failure());
    assert_eq!(descriptions(Guard.is_out_of_range(0.0, "x", 0.0, f64::NAN)), vec![MALFORMED]);
}
