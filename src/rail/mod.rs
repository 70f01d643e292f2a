//! The two-track [`Rail`] type and its combinators.
//!
//! - [`core`] - construction, `map`, `bind`, `tap`, `switch`, `fold`
//! - [`accumulate`] - `acc`, `validate_all`, `zip`, accumulating `collect`
//! - [`iter`] - iterator adapters over the success value and the messages
//!
//! # Examples
//!
//! ```
//! use rail_track::Rail;
//!
//! let rail = Rail::<i32, &str>::success(20)
//!     .map(|x| x + 1)
//!     .bind(|x| if x > 18 { Rail::success(x) } else { Rail::failure("too young") });
//!
//! assert_eq!(rail.fold(|v| v, |_| 0), 21);
//! ```
pub mod accumulate;
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
