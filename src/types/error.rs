use crate::types::alloc_type::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable description of a failure: numeric code, description and an
/// optional free-form message.
///
/// Equality is structural. Most guard pipelines use `Error` as the message
/// type of a [`Rail`](crate::Rail).
///
/// # Examples
///
/// ```
/// use rail_track::Error;
///
/// let err = Error::not_found("user 42").with_message("no such row");
/// assert_eq!(err.code(), 404);
/// assert_eq!(err.description(), "user 42");
/// assert_eq!(err.message(), "no such row");
/// assert_eq!(err.to_string(), "[404] user 42: no such row");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    code: i32,
    description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    message: String,
}

impl Error {
    /// Creates an error with an empty message.
    #[inline]
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            message: String::new(),
        }
    }

    /// Returns a copy of this error carrying `message`.
    #[must_use]
    #[inline]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    /// Validation error (400).
    #[inline]
    pub fn validation(description: impl Into<String>) -> Self {
        Self::new(400, description)
    }

    /// Not found (404).
    #[inline]
    pub fn not_found(description: impl Into<String>) -> Self {
        Self::new(404, description)
    }

    /// Conflict (409).
    #[inline]
    pub fn conflict(description: impl Into<String>) -> Self {
        Self::new(409, description)
    }

    /// Unauthorized (401).
    #[inline]
    pub fn unauthorized(description: impl Into<String>) -> Self {
        Self::new(401, description)
    }

    /// Forbidden (403).
    #[inline]
    pub fn forbidden(description: impl Into<String>) -> Self {
        Self::new(403, description)
    }

    /// Internal error (500).
    #[inline]
    pub fn internal(description: impl Into<String>) -> Self {
        Self::new(500, description)
    }

    /// Bad request (400).
    #[inline]
    pub fn bad_request(description: impl Into<String>) -> Self {
        Self::new(400, description)
    }

    /// Unprocessable input (422). Every guard failure uses this code.
    #[inline]
    pub fn unprocessable(description: impl Into<String>) -> Self {
        Self::new(422, description)
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
