use crate::types::alloc_type::{BTreeMap, String, Vec};
use crate::types::Error;
use core::fmt;

#[cfg(feature = "serde")]
use crate::types::InvalidArgument;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An [`Error`] that also records per-field details.
///
/// Field names are unique keys; every stored entry holds at least one detail
/// string. Entries supplied without details are dropped on construction.
///
/// # Examples
///
/// ```
/// use rail_track::ValidationError;
///
/// let err = ValidationError::for_field("email", ["is required", "invalid format"]);
/// assert_eq!(err.code(), 400);
/// assert!(err.has_field_errors());
/// assert_eq!(err.field_errors()["email"].len(), 2);
/// ```
///
/// # Serde Support
///
/// Deserializing a field entry with no details is rejected with
/// [`InvalidArgument::EmptyFieldDetails`](crate::InvalidArgument::EmptyFieldDetails).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawValidationError")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValidationError {
    error: Error,
    #[cfg_attr(feature = "serde", serde(default))]
    field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// A 400 validation error without field details.
    #[inline]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            error: Error::validation(description),
            field_errors: BTreeMap::new(),
        }
    }

    /// A validation error with an explicit code.
    #[inline]
    pub fn with_code(code: i32, description: impl Into<String>) -> Self {
        Self {
            error: Error::new(code, description),
            field_errors: BTreeMap::new(),
        }
    }

    /// A 400 validation error carrying a message and field details.
    pub fn with_fields<I, K, D, S>(
        description: impl Into<String>,
        message: impl Into<String>,
        fields: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            error: Error::validation(description).with_message(message),
            field_errors: collect_fields(fields),
        }
    }

    /// A validation error for a single field.
    pub fn for_field<D, S>(field: impl Into<String>, details: D) -> Self
    where
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::for_fields([(field, details)], "Validation failed")
    }

    /// A validation error spanning several fields.
    pub fn for_fields<I, K, D, S>(fields: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_fields(description, String::new(), fields)
    }

    #[inline]
    pub fn error(&self) -> &Error {
        &self.error
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.error.code()
    }

    #[inline]
    pub fn description(&self) -> &str {
        self.error.description()
    }

    #[inline]
    pub fn message(&self) -> &str {
        self.error.message()
    }

    #[inline]
    pub fn field_errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.field_errors
    }

    #[inline]
    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }
}

fn collect_fields<I, K, D, S>(fields: I) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = (K, D)>,
    K: Into<String>,
    D: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (field, details) in fields {
        let details: Vec<String> = details.into_iter().map(Into::into).collect();
        if details.is_empty() {
            continue;
        }
        map.entry(field.into()).or_default().extend(details);
    }
    map
}

/// Wire shape of [`ValidationError`], checked before it is accepted.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawValidationError {
    error: Error,
    #[serde(default)]
    field_errors: BTreeMap<String, Vec<String>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawValidationError> for ValidationError {
    type Error = InvalidArgument;

    fn try_from(raw: RawValidationError) -> Result<Self, Self::Error> {
        if raw.field_errors.values().any(Vec::is_empty) {
            return Err(InvalidArgument::EmptyFieldDetails);
        }
        Ok(Self {
            error: raw.error,
            field_errors: raw.field_errors,
        })
    }
}

impl AsRef<Error> for ValidationError {
    fn as_ref(&self) -> &Error {
        &self.error
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        err.error
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        for (field, details) in &self.field_errors {
            write!(f, "\n  {}: {}", field, details.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}
