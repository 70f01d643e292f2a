//! Input guards that turn primitive checks into [`Rail`](crate::Rail)s.
//!
//! Every guard is a method on the [`Guard`] marker and takes a `parameter`
//! label that ends up in the failure message. Failures are
//! [`Error`](crate::Error)s with code 422. The decision boundaries are exact;
//! the message wording is presentational.
//!
//! Guards compose either fail-fast through [`Rail::bind`](crate::Rail::bind)
//! or collect-all through [`Rail::acc`](crate::Rail::acc):
//!
//! ```
//! use rail_track::guard::Guard;
//! use rail_track::Rail;
//!
//! let name = "";
//! let age = -4;
//!
//! let fail_fast = Guard
//!     .is_null_or_white_space(Some(name), "name")
//!     .bind(|_| Guard.is_negative(age, "age").map(|_| name));
//! assert_eq!(fail_fast.into_messages().unwrap().len(), 1);
//!
//! let collected = Guard
//!     .is_null_or_white_space(Some(name), "name")
//!     .acc(|_| Guard.is_negative(age, "age").map(|_| name));
//! assert_eq!(collected.into_messages().unwrap().len(), 2);
//! ```
//!
//! # Extending
//!
//! Custom guards hang off the same marker through an extension trait:
//!
//! ```
//! use rail_track::guard::Guard;
//! use rail_track::{Error, Rail};
//!
//! trait FubarGuard {
//!     fn is_fubar(&self, input: &str, parameter: &str) -> Rail<String, Error>;
//! }
//!
//! impl FubarGuard for Guard {
//!     fn is_fubar(&self, input: &str, parameter: &str) -> Rail<String, Error> {
//!         if input.eq_ignore_ascii_case("fubar") {
//!             Rail::failure(Error::unprocessable(format!("{parameter} is beyond repair")))
//!         } else {
//!             Rail::success(input.to_string())
//!         }
//!     }
//! }
//!
//! assert!(Guard.is_fubar("FUBAR", "state").is_failure());
//! ```

pub mod capability;
mod checks;

pub use capability::{Emptiness, Numeric};

/// Marker that scopes the guard functions.
///
/// Carries no state. Use the unit value directly: `Guard.is_zero(n, "n")`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Guard;
