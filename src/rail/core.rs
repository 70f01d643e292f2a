use crate::types::{InvalidArgument, Messages};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A two-track result: either a success value or a non-empty, ordered list of
/// failure messages.
///
/// `Rail<S, M>` is the container every pipeline step consumes and produces.
/// The variant itself is the discriminant, so a rail is always exactly one of
/// the two; the payload is read through [`Rail::fold`], [`Rail::switch`] or a
/// `match` on the variants.
///
/// Two composition policies are available:
///
/// * [`Rail::bind`] short-circuits: once a step fails, later steps are skipped
///   and the first failure's messages travel to the end.
/// * [`Rail::acc`] accumulates: every step runs, and failure messages from all
///   failing steps are merged in order.
///
/// # Serde Support
///
/// `Rail` implements `Serialize` and `Deserialize` when `S` and `M` do.
/// Deserializing a failure with an empty message list is rejected.
///
/// # Type Parameters
///
/// * `S` - The success value type
/// * `M` - The failure message type
///
/// # Examples
///
/// ```
/// use rail_track::Rail;
///
/// let ok = Rail::<i32, &str>::success(42);
/// assert!(ok.is_success());
///
/// let failed = Rail::<i32, &str>::failure("boom");
/// assert!(failed.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Rail<S, M> {
    Success(S),
    Failure(Messages<M>),
}

impl<S, M> Rail<S, M> {
    /// Creates a rail on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let rail = Rail::<&str, String>::success("value");
    /// assert_eq!(rail.into_value(), Some("value"));
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a rail on the failure track with a single message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let rail = Rail::<(), &str>::failure("missing field");
    /// assert_eq!(rail.into_messages().unwrap().as_slice(), &["missing field"]);
    /// ```
    #[inline]
    pub fn failure(message: M) -> Self {
        Self::Failure(Messages::one(message))
    }

    /// Creates a rail on the failure track from an existing message list.
    #[inline]
    pub fn failure_many(messages: Messages<M>) -> Self {
        Self::Failure(messages)
    }

    /// Creates a success from a possibly absent value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingValue`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::{InvalidArgument, Rail};
    ///
    /// assert!(Rail::<i32, &str>::try_success(Some(1)).is_ok());
    /// assert_eq!(
    ///     Rail::<i32, &str>::try_success(None),
    ///     Err(InvalidArgument::MissingValue)
    /// );
    /// ```
    #[inline]
    pub fn try_success(value: Option<S>) -> Result<Self, InvalidArgument> {
        value.map(Self::Success).ok_or(InvalidArgument::MissingValue)
    }

    /// Creates a failure from a possibly absent message.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingMessage`] when `message` is `None`.
    #[inline]
    pub fn try_failure(message: Option<M>) -> Result<Self, InvalidArgument> {
        message.map(Self::failure).ok_or(InvalidArgument::MissingMessage)
    }

    /// Creates a failure from a list of messages.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyMessages`] when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let rail = Rail::<(), &str>::try_failure_many(["a", "b"]).unwrap();
    /// assert_eq!(rail.into_messages().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn try_failure_many<I>(messages: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = M>,
    {
        Messages::try_from_iter(messages).map(Self::Failure)
    }

    /// Returns `true` on the success track.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` on the failure track.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn success_value(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure messages, if any.
    #[must_use]
    #[inline]
    pub fn failure_messages(&self) -> Option<&Messages<M>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(messages) => Some(messages),
        }
    }

    /// Extracts the value, if on the success track.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the message list, if on the failure track.
    #[must_use]
    #[inline]
    pub fn into_messages(self) -> Option<Messages<M>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(messages) => Some(messages),
        }
    }

    /// Converts from `&Rail<S, M>` to `Rail<&S, M>`, cloning the messages.
    #[inline]
    pub fn as_ref(&self) -> Rail<&S, M>
    where
        M: Clone,
    {
        match self {
            Self::Success(value) => Rail::Success(value),
            Self::Failure(messages) => Rail::Failure(messages.clone()),
        }
    }

    /// Transforms the success value.
    ///
    /// `f` runs exactly once on the success track and never on the failure
    /// track, where the messages are carried over unchanged. A step that can
    /// fail belongs in [`Rail::bind`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let doubled = Rail::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Rail::success(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, f: F) -> Rail<T, M>
    where
        F: FnOnce(S) -> T,
    {
        match self {
            Self::Success(value) => Rail::Success(f(value)),
            Self::Failure(messages) => Rail::Failure(messages),
        }
    }

    /// Chains a fallible step, short-circuiting on failure.
    ///
    /// On the success track the step's rail is returned verbatim; on the
    /// failure track `f` is never invoked and the messages are forwarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// fn parse_even(input: i32) -> Rail<i32, &'static str> {
    ///     if input % 2 == 0 {
    ///         Rail::success(input)
    ///     } else {
    ///         Rail::failure("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Rail::success(4).bind(parse_even), Rail::success(4));
    /// assert!(Rail::success(3).bind(parse_even).is_failure());
    /// ```
    #[inline]
    pub fn bind<T, F>(self, f: F) -> Rail<T, M>
    where
        F: FnOnce(S) -> Rail<T, M>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(messages) => Rail::Failure(messages),
        }
    }

    /// Alias of [`Rail::bind`] matching `Result::and_then`.
    #[inline]
    pub fn and_then<T, F>(self, f: F) -> Rail<T, M>
    where
        F: FnOnce(S) -> Rail<T, M>,
    {
        self.bind(f)
    }

    /// Observes the success value without changing the rail.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let mut seen = None;
    /// let rail = Rail::<i32, &str>::success(7).tap(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(7));
    /// assert_eq!(rail, Rail::success(7));
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Observes the failure messages without changing the rail.
    #[inline]
    pub fn tap_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Messages<M>),
    {
        if let Self::Failure(messages) = &self {
            f(messages);
        }
        self
    }

    /// Dispatches to exactly one of two side-effecting branches.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let mut seen = None;
    /// let mut failed = 0;
    /// Rail::<i32, &str>::failure("bad").switch(|v| seen = Some(v), |m| failed += m.len());
    /// assert_eq!(seen, None);
    /// assert_eq!(failed, 1);
    /// ```
    #[inline]
    pub fn switch<F, G>(self, on_success: F, on_failure: G)
    where
        F: FnOnce(S),
        G: FnOnce(Messages<M>),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(messages) => on_failure(messages),
        }
    }

    /// Collapses both tracks into a single value.
    ///
    /// This is the expression-valued dispatch: both branches must be supplied
    /// and must agree on the output type.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let text = Rail::<i32, &str>::success(3).fold(
    ///     |v| format!("value {v}"),
    ///     |m| format!("{} errors", m.len()),
    /// );
    /// assert_eq!(text, "value 3");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_success: F, on_failure: G) -> T
    where
        F: FnOnce(S) -> T,
        G: FnOnce(Messages<M>) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(messages) => on_failure(messages),
        }
    }

    /// Maps each message while preserving the success branch and the order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let rail = Rail::<i32, &str>::failure("bad").map_messages(|m| m.len());
    /// assert_eq!(rail.into_messages().unwrap().as_slice(), &[3]);
    /// ```
    #[inline]
    pub fn map_messages<N, F>(self, f: F) -> Rail<S, N>
    where
        F: FnMut(M) -> N,
    {
        match self {
            Self::Success(value) => Rail::Success(value),
            Self::Failure(messages) => Rail::Failure(messages.map(f)),
        }
    }

    /// Calls `op` on the failure track, otherwise keeps the success.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(Messages<M>) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(messages) => op(messages),
        }
    }

    /// Converts into a `Result`, keeping every message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// assert_eq!(Rail::<i32, &str>::success(1).into_result(), Ok(1));
    /// assert!(Rail::<i32, &str>::failure("e").into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, Messages<M>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(messages) => Err(messages),
        }
    }

    /// Wraps a `Result`, turning the error into a single message.
    #[inline]
    pub fn from_result(result: Result<S, M>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(message) => Self::failure(message),
        }
    }
}

/// Builds a success. Preferred entry point for starting a pipeline.
///
/// # Examples
///
/// ```
/// use rail_track::{failure_result, success_result, Rail};
///
/// let ok: Rail<i32, &str> = success_result(1);
/// let failed: Rail<i32, &str> = failure_result("nope");
/// assert!(ok.is_success() && failed.is_failure());
/// ```
#[inline]
pub fn success_result<S, M>(value: S) -> Rail<S, M> {
    Rail::success(value)
}

/// Builds a failure holding one message.
#[inline]
pub fn failure_result<S, M>(message: M) -> Rail<S, M> {
    Rail::failure(message)
}

/// Builds a failure holding every message of `messages`.
///
/// # Errors
///
/// Returns [`InvalidArgument::EmptyMessages`] for an empty list.
#[inline]
pub fn failure_result_many<S, M, I>(messages: I) -> Result<Rail<S, M>, InvalidArgument>
where
    I: IntoIterator<Item = M>,
{
    Rail::try_failure_many(messages)
}
