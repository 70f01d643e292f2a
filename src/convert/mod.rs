//! Conversion helpers between `Result`, `Option` and [`Rail`].
//!
//! These adapters make it straightforward to feed existing fallible code into
//! a rail pipeline, or to hand a rail's outcome back to `?`-based code.
//!
//! # Examples
//!
//! ```
//! use rail_track::convert::*;
//! use rail_track::Rail;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let rail = result_to_rail(result);
//! assert!(rail.is_success());
//!
//! let back = rail_to_first_error(Rail::<i32, &str>::try_failure_many(["a", "b"]).unwrap());
//! assert_eq!(back, Err("a"));
//! ```

use crate::rail::Rail;
use crate::types::Messages;

/// Converts a `Result` to a `Rail`.
///
/// # Examples
///
/// ```
/// use rail_track::convert::result_to_rail;
///
/// let rail = result_to_rail(Err::<i32, &str>("failed"));
/// assert!(rail.is_failure());
/// ```
#[inline]
pub fn result_to_rail<S, M>(result: Result<S, M>) -> Rail<S, M> {
    Rail::from_result(result)
}

/// Converts a `Rail` to a `Result`, keeping every message.
#[inline]
pub fn rail_to_result<S, M>(rail: Rail<S, M>) -> Result<S, Messages<M>> {
    rail.into_result()
}

/// Converts a `Rail` to a `Result`, keeping only the first message.
///
/// The first message is the one recorded by the earliest failing step.
#[inline]
pub fn rail_to_first_error<S, M>(rail: Rail<S, M>) -> Result<S, M> {
    match rail {
        Rail::Success(value) => Ok(value),
        Rail::Failure(messages) => Err(messages.into_first()),
    }
}

/// Converts an `Option` to a `Rail`, using `message` when absent.
///
/// # Examples
///
/// ```
/// use rail_track::convert::option_to_rail;
///
/// assert!(option_to_rail(Some(3), "missing").is_success());
/// assert!(option_to_rail(None::<i32>, "missing").is_failure());
/// ```
#[inline]
pub fn option_to_rail<S, M>(option: Option<S>, message: M) -> Rail<S, M> {
    match option {
        Some(value) => Rail::Success(value),
        None => Rail::failure(message),
    }
}

impl<S, M> From<Result<S, M>> for Rail<S, M> {
    #[inline]
    fn from(result: Result<S, M>) -> Self {
        Rail::from_result(result)
    }
}

impl<S, M> From<Rail<S, M>> for Result<S, Messages<M>> {
    #[inline]
    fn from(rail: Rail<S, M>) -> Self {
        rail.into_result()
    }
}
