//! Extension traits that bring foreign types onto the rail.
//!
//! - [`IntoRail`]: lifts a `Result` (or a rail) into a [`Rail`](crate::Rail)
//! - [`OptionRailExt`]: lifts an `Option`, naming the message used when absent
//!
//! # Examples
//!
//! ```
//! use rail_track::traits::IntoRail;
//!
//! let rail = "42".parse::<i32>().into_rail();
//! assert_eq!(rail.into_value(), Some(42));
//! ```

pub mod into_rail;

pub use into_rail::{IntoRail, OptionRailExt};
