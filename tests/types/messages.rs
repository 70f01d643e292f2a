use rail_track::{InvalidArgument, Messages};

#[test]
fn slice_api_is_available_through_deref() {
    let messages = Messages::try_from_iter(["a", "b", "c"]).unwrap();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1], "b");
    assert!(messages.contains(&"c"));
    assert_eq!(messages.iter().rev().copied().collect::<Vec<_>>(), vec!["c", "b", "a"]);
}

#[test]
fn concat_is_associative() {
    let a = || Messages::one(1);
    let b = || Messages::try_from_iter([2, 3]).unwrap();
    let c = || Messages::one(4);

    assert_eq!(a().concat(b()).concat(c()), a().concat(b().concat(c())));
    assert_eq!(a().concat(b()).concat(c()).as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn vec_conversions() {
    let messages = Messages::try_from(vec!["x", "y"]).unwrap();
    let back: Vec<&str> = messages.into();
    assert_eq!(back, vec!["x", "y"]);

    assert_eq!(Messages::<&str>::try_from(Vec::new()).unwrap_err(), InvalidArgument::EmptyMessages);
}

#[test]
fn map_transforms_each_message() {
    let lengths = Messages::try_from_iter(["ab", "c"]).unwrap().map(str::len);
    assert_eq!(lengths.into_vec(), vec![2, 1]);
}

#[test]
fn owned_iteration_preserves_order() {
    let messages = Messages::try_from_iter(vec![String::from("one"), String::from("two")]).unwrap();
    let joined: Vec<String> = messages.into_iter().collect();
    assert_eq!(joined, vec!["one", "two"]);
}

#[test]
fn invalid_argument_messages() {
    assert_eq!(InvalidArgument::MissingValue.to_string(), "you must provide an input value");
    assert_eq!(
        InvalidArgument::EmptyMessages.to_string(),
        "you must provide an input for the messages"
    );
    assert_eq!(
        InvalidArgument::EmptyFieldDetails.to_string(),
        "every field error needs at least one detail"
    );
}

#[test]
fn into_first_keeps_earliest_after_concat() {
    let rest = Messages::try_from_iter(["email blank", "too young"]).unwrap();
    let merged = Messages::one("name blank").concat(rest);
    assert_eq!(merged.into_first(), "name blank");
}
