use rail_track::{accumulate, rail, Rail};

#[test]
fn rail_macro_lifts_results() {
    assert_eq!(rail!("42".parse::<u8>()), Rail::success(42));
    assert!(rail!("x".parse::<u8>()).is_failure());
}

#[test]
fn rail_macro_accepts_blocks() {
    let rail = rail!({
        let raw = " 12 ".trim();
        raw.parse::<i32>().map(|n| n * 2)
    });
    assert_eq!(rail.into_value(), Some(24));
}

#[test]
fn accumulate_macro_keeps_every_failure() {
    let (name, email) = ("", "");
    let rail: Rail<(), &str> = accumulate!(Rail::success(());
        |_| if name.is_empty() { Rail::failure("name") } else { Rail::success(()) },
        |_| if email.is_empty() { Rail::failure("email") } else { Rail::success(()) },
    );

    assert_eq!(rail.into_messages().unwrap().as_slice(), &["name", "email"]);
}

#[test]
fn accumulate_macro_with_single_step() {
    let rail: Rail<u8, &str> = accumulate!(Rail::success(1); |_| Rail::success(2));
    assert_eq!(rail, Rail::success(2));
}
