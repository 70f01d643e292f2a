use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raised when a [`Rail`](crate::Rail) or [`Messages`](crate::Messages) is
/// built from input that violates its construction contract.
///
/// This is never carried on the failure track itself: the `try_*`
/// constructors hand it straight back to the caller.
///
/// # Examples
///
/// ```
/// use rail_track::{InvalidArgument, Rail};
///
/// let empty: Vec<&str> = Vec::new();
/// let err = Rail::<i32, &str>::try_failure_many(empty).unwrap_err();
/// assert_eq!(err, InvalidArgument::EmptyMessages);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidArgument {
    /// A success was requested without a value.
    MissingValue,
    /// A failure was requested without a message.
    MissingMessage,
    /// A failure was requested with an empty message list.
    EmptyMessages,
    /// A field error was given without any detail.
    EmptyFieldDetails,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => f.write_str("you must provide an input value"),
            Self::MissingMessage => f.write_str("you must provide an input for the message"),
            Self::EmptyMessages => f.write_str("you must provide an input for the messages"),
            Self::EmptyFieldDetails => f.write_str("every field error needs at least one detail"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}
