//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rail_track::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`accumulate!`], [`rail!`]
//! - **Types**: [`Rail`], [`Messages`], [`Error`], [`ValidationError`], [`InvalidArgument`], [`Guard`]
//! - **Factories**: [`success_result`], [`failure_result`], [`failure_result_many`]
//! - **Traits**: [`IntoRail`], [`OptionRailExt`]
//!
//! # Examples
//!
//! ```
//! use rail_track::prelude::*;
//!
//! fn parse_age(raw: Option<&str>) -> Rail<u8, Error> {
//!     Guard
//!         .is_null_or_white_space(raw, "age")
//!         .bind(|raw| {
//!             raw.trim()
//!                 .parse::<u8>()
//!                 .map_err(|_| Error::bad_request("age is not a number"))
//!                 .into_rail()
//!         })
//!         .bind(|age| Guard.is_out_of_range(age, "age", 18, 130))
//! }
//!
//! assert_eq!(parse_age(Some(" 42 ")).into_value(), Some(42));
//! assert!(parse_age(Some("7")).is_failure());
//! assert!(parse_age(None).is_failure());
//! ```

// Macros
pub use crate::{accumulate, rail};

// Core types
pub use crate::guard::Guard;
pub use crate::rail::{failure_result, failure_result_many, success_result, Rail};
pub use crate::types::{Error, InvalidArgument, Messages, ValidationError};

// Traits
pub use crate::traits::{IntoRail, OptionRailExt};
