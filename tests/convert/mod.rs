use rail_track::convert::{option_to_rail, rail_to_first_error, rail_to_result, result_to_rail};
use rail_track::{Messages, Rail};

#[test]
fn result_round_trips_through_rail() {
    assert_eq!(result_to_rail(Ok::<u8, &str>(1)), Rail::success(1));
    assert_eq!(result_to_rail(Err::<u8, &str>("e")), Rail::failure("e"));

    let rail: Rail<u8, &str> = Ok(2).into();
    assert_eq!(rail_to_result(rail), Ok(2));
}

#[test]
fn rail_to_result_keeps_every_message() {
    let rail = Rail::<u8, &str>::try_failure_many(["a", "b"]).unwrap();
    let err = rail_to_result(rail).unwrap_err();
    assert_eq!(err, Messages::try_from_iter(["a", "b"]).unwrap());
}

#[test]
fn rail_to_first_error_keeps_earliest_message() {
    let rail = Rail::<u8, &str>::failure("first").acc(|_| Rail::failure("second"));
    assert_eq!(rail_to_first_error(rail), Err("first"));
    assert_eq!(rail_to_first_error(Rail::<u8, &str>::success(3)), Ok(3));
}

#[test]
fn option_lifts_with_message() {
    assert_eq!(option_to_rail(Some(1), "missing"), Rail::success(1));
    assert_eq!(option_to_rail(None::<u8>, "missing"), Rail::failure("missing"));
}

#[test]
fn result_from_rail_via_into() {
    let result: Result<u8, Messages<&str>> = Rail::<u8, &str>::failure("nope").into();
    assert_eq!(result.unwrap_err().as_slice(), &["nope"]);
}

#[test]
fn question_mark_bridges_into_result_functions() {
    fn parse_pair(a: &str, b: &str) -> Result<(i32, i32), Messages<String>> {
        let left = Rail::from_result(a.parse::<i32>().map_err(|e| e.to_string())).into_result()?;
        let right = Rail::from_result(b.parse::<i32>().map_err(|e| e.to_string())).into_result()?;
        Ok((left, right))
    }

    assert_eq!(parse_pair("1", "2"), Ok((1, 2)));
    assert_eq!(parse_pair("1", "x").unwrap_err().len(), 1);
}
