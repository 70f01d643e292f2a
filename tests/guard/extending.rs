use rail_track::guard::Guard;
use rail_track::{Error, Rail};

use super::descriptions;

trait PostcodeGuard {
    fn is_not_postcode(&self, input: &str, parameter: &str) -> Rail<String, Error>;
}

impl PostcodeGuard for Guard {
    fn is_not_postcode(&self, input: &str, parameter: &str) -> Rail<String, Error> {
        self.is_null_or_white_space(Some(input), parameter).bind(|code| {
            if code.len() == 5 && code.chars().all(|c| c.is_ascii_digit()) {
                Rail::success(code.to_string())
            } else {
                Rail::failure(Error::unprocessable(format!("Input {parameter} is not a postcode.")))
            }
        })
    }
}

#[test]
fn custom_guards_compose_with_builtin_ones() {
    assert_eq!(Guard.is_not_postcode("75001", "zip").into_value().as_deref(), Some("75001"));
    assert_eq!(descriptions(Guard.is_not_postcode("7500", "zip")), vec!["Input zip is not a postcode."]);
    assert_eq!(descriptions(Guard.is_not_postcode("  ", "zip")), vec!["Required input zip was white space."]);
}

#[test]
fn custom_guards_accumulate() {
    let zip = "abc";
    let quantity = 0;
    let rail = Guard
        .is_not_postcode(zip, "zip")
        .acc(|_| Guard.is_zero(quantity, "quantity").map(|q| q.to_string()));

    assert_eq!(
        descriptions(rail),
        vec!["Input zip is not a postcode.", "Required input quantity cannot be zero."]
    );
}
