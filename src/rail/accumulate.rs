//! Accumulating composition.
//!
//! Where [`Rail::bind`] stops at the first failure, the operations here keep
//! evaluating and merge every failure's messages, in evaluation order.

use crate::rail::core::Rail;
use crate::types::alloc_type::Vec;
use crate::types::Messages;

impl<S, M> Rail<S, M> {
    /// Runs `f` regardless of the current track and merges failures.
    ///
    /// * On the success track, the step's rail is returned as-is.
    /// * On the failure track, the step still runs; if it fails too, its
    ///   messages are appended after the existing ones. A success reported by
    ///   the step is discarded, since the rail has already failed.
    ///
    /// The step receives the current rail by reference. Steps that validate a
    /// value independent of the track usually capture it from the
    /// environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let rail = Rail::<u32, &str>::failure("A").acc(|_| Rail::failure("B"));
    /// assert_eq!(rail, Rail::try_failure_many(["A", "B"]).unwrap());
    ///
    /// let rail = Rail::<u32, &str>::success(1).acc(|_| Rail::failure("X"));
    /// assert_eq!(rail, Rail::failure("X"));
    /// ```
    pub fn acc<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        let step = f(&self);
        match self {
            Self::Success(_) => step,
            Self::Failure(messages) => match step {
                Self::Success(_) => Self::Failure(messages),
                Self::Failure(more) => Self::Failure(messages.concat(more)),
            },
        }
    }

    /// Runs every check against `value` and collects all failures.
    ///
    /// Returns the value untouched when no check fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// fn positive(n: &i32) -> Rail<(), &'static str> {
    ///     if *n > 0 { Rail::success(()) } else { Rail::failure("must be positive") }
    /// }
    /// fn even(n: &i32) -> Rail<(), &'static str> {
    ///     if n % 2 == 0 { Rail::success(()) } else { Rail::failure("must be even") }
    /// }
    ///
    /// let checks: [fn(&i32) -> Rail<(), &'static str>; 2] = [positive, even];
    /// let rail = Rail::validate_all(-3, checks);
    /// assert_eq!(rail.into_messages().unwrap().as_slice(), &["must be positive", "must be even"]);
    /// ```
    pub fn validate_all<T, I, F>(value: S, checks: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&S) -> Rail<T, M>,
    {
        let mut failures: Option<Messages<M>> = None;
        for check in checks {
            if let Rail::Failure(messages) = check(&value) {
                failures = Some(match failures {
                    Some(existing) => existing.concat(messages),
                    None => messages,
                });
            }
        }
        match failures {
            Some(messages) => Self::Failure(messages),
            None => Self::Success(value),
        }
    }

    /// Combines two rails into a tuple, accumulating the messages of both.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Rail;
    ///
    /// let both = Rail::<i32, &str>::success(1).zip(Rail::success("a"));
    /// assert_eq!(both, Rail::success((1, "a")));
    ///
    /// let neither = Rail::<i32, &str>::failure("e1").zip(Rail::<(), &str>::failure("e2"));
    /// assert_eq!(neither.into_messages().unwrap().len(), 2);
    /// ```
    pub fn zip<T>(self, other: Rail<T, M>) -> Rail<(S, T), M> {
        match (self, other) {
            (Rail::Success(a), Rail::Success(b)) => Rail::Success((a, b)),
            (Rail::Failure(e), Rail::Success(_)) => Rail::Failure(e),
            (Rail::Success(_), Rail::Failure(e)) => Rail::Failure(e),
            (Rail::Failure(e1), Rail::Failure(e2)) => Rail::Failure(e1.concat(e2)),
        }
    }
}

/// Collects rails into one, evaluating every item and merging all failures.
///
/// Success values are only gathered while no failure has been seen.
///
/// # Examples
///
/// ```
/// use rail_track::Rail;
///
/// let all: Rail<Vec<i32>, &str> = vec![Rail::success(1), Rail::success(2)].into_iter().collect();
/// assert_eq!(all, Rail::success(vec![1, 2]));
///
/// let mixed: Rail<Vec<i32>, &str> =
///     vec![Rail::success(1), Rail::failure("a"), Rail::failure("b")].into_iter().collect();
/// assert_eq!(mixed.into_messages().unwrap().as_slice(), &["a", "b"]);
/// ```
impl<S, M, C> FromIterator<Rail<S, M>> for Rail<C, M>
where
    C: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = Rail<S, M>>>(iter: I) -> Self {
        let mut values: Vec<S> = Vec::new();
        let mut failures: Option<Messages<M>> = None;

        for rail in iter {
            match rail {
                Rail::Success(value) => {
                    if failures.is_none() {
                        values.push(value);
                    }
                },
                Rail::Failure(messages) => {
                    failures = Some(match failures {
                        Some(existing) => existing.concat(messages),
                        None => messages,
                    });
                },
            }
        }

        match failures {
            Some(messages) => Rail::Failure(messages),
            None => Rail::Success(values.into_iter().collect()),
        }
    }
}

/// Collects `Result`s, accumulating every error as a message.
impl<S, M, C> FromIterator<Result<S, M>> for Rail<C, M>
where
    C: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = Result<S, M>>>(iter: I) -> Self {
        iter.into_iter().map(Rail::from_result).collect()
    }
}
