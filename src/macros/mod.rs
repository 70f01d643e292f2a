//! Shorthand macros for building pipelines.
//!
//! - [`macro@crate::rail`] - Lifts a `Result`-producing expression or block onto the rail.
//! - [`macro@crate::accumulate`] - Chains steps with [`Rail::acc`](crate::Rail::acc) so that
//!   every step runs and all failure messages are kept.
//!
//! # Examples
//!
//! ```
//! use rail_track::{accumulate, rail, Rail};
//!
//! let parsed = rail!("12".parse::<u8>());
//! assert!(parsed.is_success());
//!
//! let checked: Rail<u8, &str> = accumulate!(Rail::success(12);
//!     |_| Rail::failure("too small"),
//!     |_| Rail::failure("not prime"),
//! );
//! assert_eq!(checked.into_messages().unwrap().len(), 2);
//! ```

/// Lifts a `Result`-producing expression or block into a [`Rail`](crate::Rail).
///
/// # Examples
///
/// ```rust
/// use rail_track::rail;
///
/// let rail = rail!(Err::<(), &str>("failed"));
/// assert!(rail.is_failure());
///
/// let rail = rail!({
///     let raw = "7";
///     raw.parse::<i32>()
/// });
/// assert_eq!(rail.into_value(), Some(7));
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr $(,)?) => {
        $crate::Rail::from_result($expr)
    };
}

/// Threads a starting rail through accumulating steps.
///
/// `accumulate!(start; f, g, h)` expands to `start.acc(f).acc(g).acc(h)`.
/// Each step has the shape `FnOnce(&Rail<S, M>) -> Rail<S, M>`.
///
/// # Examples
///
/// ```rust
/// use rail_track::{accumulate, Rail};
///
/// let age = 15;
/// let rail: Rail<i32, &str> = accumulate!(Rail::success(age);
///     |_| if age < 18 { Rail::failure("too young") } else { Rail::success(age) },
///     |_| if age % 2 == 1 { Rail::failure("odd") } else { Rail::success(age) },
/// );
/// assert_eq!(rail.into_messages().unwrap().as_slice(), &["too young", "odd"]);
/// ```
#[macro_export]
macro_rules! accumulate {
    ($start:expr; $($step:expr),+ $(,)?) => {
        $start$(.acc($step))+
    };
}
