//! Value types carried by a [`Rail`](crate::Rail).
//!
//! - [`Messages`] - the ordered, non-empty message list of a failure
//! - [`Error`] / [`ValidationError`] - the stock message types
//! - [`InvalidArgument`] - construction-time contract violations
//! - [`MessageFormatConfig`] - rendering of message lists
//!
//! # Examples
//!
//! ```
//! use rail_track::{Error, Messages};
//!
//! let messages = Messages::one(Error::conflict("email already registered"));
//! assert_eq!(messages.first().code(), 409);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;
pub mod error_formatter;
pub mod invalid_argument;
pub mod messages;
pub mod validation_error;

pub use error::*;
pub use error_formatter::*;
pub use invalid_argument::*;
pub use messages::*;
pub use validation_error::*;

/// SmallVec-backed storage used for failure messages.
///
/// Uses inline storage for one element: most failures carry a single message.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
