use rail_track::{Error, Rail};

#[test]
fn factories_assign_status_codes() {
    assert_eq!(Error::validation("v").code(), 400);
    assert_eq!(Error::bad_request("b").code(), 400);
    assert_eq!(Error::unauthorized("u").code(), 401);
    assert_eq!(Error::forbidden("f").code(), 403);
    assert_eq!(Error::not_found("n").code(), 404);
    assert_eq!(Error::conflict("c").code(), 409);
    assert_eq!(Error::unprocessable("p").code(), 422);
    assert_eq!(Error::internal("i").code(), 500);
}

#[test]
fn message_defaults_to_empty() {
    let err = Error::new(418, "teapot");
    assert_eq!(err.description(), "teapot");
    assert_eq!(err.message(), "");
    assert_eq!(err.to_string(), "[418] teapot");
}

#[test]
fn with_message_keeps_code_and_description() {
    let base = Error::conflict("duplicate key");
    let detailed = base.clone().with_message("email already registered");

    assert_eq!(detailed.code(), 409);
    assert_eq!(detailed.description(), "duplicate key");
    assert_eq!(detailed.message(), "email already registered");
    assert_ne!(base, detailed);
    assert_eq!(detailed.to_string(), "[409] duplicate key: email already registered");
}

#[test]
fn equality_is_structural() {
    assert_eq!(Error::not_found("user"), Error::new(404, "user"));
    assert_ne!(Error::not_found("user"), Error::not_found("order"));
}

#[test]
fn errors_travel_on_the_failure_track() {
    let rail: Rail<u32, Error> = Rail::failure(Error::not_found("user 42"));
    let codes: Vec<i32> = rail.iter_messages().map(Error::code).collect();
    assert_eq!(codes, vec![404]);
}

#[cfg(feature = "std")]
#[test]
fn error_is_a_std_error() {
    fn boxed(err: Error) -> Box<dyn std::error::Error> {
        Box::new(err)
    }

    assert_eq!(boxed(Error::internal("db down")).to_string(), "[500] db down");
}
