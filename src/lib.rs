//! Railway-oriented results for pipelines of fallible steps.
//!
//! A [`Rail<S, M>`](Rail) is either a success value or a non-empty, ordered
//! list of failure messages. Steps are composed with one of two policies:
//!
//! - **short-circuit** ([`Rail::bind`]): the first failure travels to the end
//!   and later steps are skipped;
//! - **accumulate** ([`Rail::acc`]): every step runs and all failure messages
//!   are merged in order.
//!
//! The [`guard`] module turns primitive checks (absence, emptiness, ranges,
//! signs, defaults, enum membership) into rails so that input validation plugs
//! into either policy unchanged.
//!
//! # Examples
//!
//! ## Fail fast
//!
//! ```
//! use rail_track::Rail;
//!
//! let rail = Rail::<i32, &str>::success(4)
//!     .map(|x| x * 2)
//!     .bind(|x| if x > 10 { Rail::success(x) } else { Rail::failure("too small") })
//!     .bind(|x| if x % 2 == 0 { Rail::success(x) } else { Rail::failure("odd") });
//!
//! assert_eq!(rail.into_messages().unwrap().as_slice(), &["too small"]);
//! ```
//!
//! ## Collect every failure
//!
//! ```
//! use rail_track::Rail;
//!
//! let (name, email, age) = ("", "", 12);
//! let rail = Rail::<(), &str>::success(())
//!     .acc(|_| if name.is_empty() { Rail::failure("Name should not be blank.") } else { Rail::success(()) })
//!     .acc(|_| if email.is_empty() { Rail::failure("Email should not be blank.") } else { Rail::success(()) })
//!     .acc(|_| if age < 18 { Rail::failure("The age should be not inferior than 18.") } else { Rail::success(()) });
//!
//! assert_eq!(rail.into_messages().unwrap().len(), 3);
//! ```
//!
//! ## Guards
//!
//! ```
//! use rail_track::guard::Guard;
//!
//! let rail = Guard.is_out_of_range(5, "quantity", 1, 10)
//!     .bind(|q| Guard.is_zero(q, "quantity"));
//! assert_eq!(rail.into_value(), Some(5));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result`, `Option` and `Rail`
pub mod convert;
/// Value guards producing rails
pub mod guard;
/// Pipeline shorthand macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `Rail` type and its combinators
pub mod rail;
/// Extension traits lifting foreign types onto the rail
pub mod traits;
/// Messages, error values and formatting
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use rail::{failure_result, failure_result_many, success_result, Rail};
pub use traits::*;
pub use types::{
    Error, ErrorVec, InvalidArgument, MessageFormatConfig, MessageFormatter, Messages,
    ValidationError,
};
