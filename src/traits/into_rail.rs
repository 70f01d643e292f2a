use crate::rail::Rail;

/// Converts a value into a [`Rail`].
///
/// # Examples
///
/// ```
/// use rail_track::traits::IntoRail;
///
/// let rail = Err::<i32, &str>("bad input").into_rail();
/// assert_eq!(rail.into_messages().unwrap().as_slice(), &["bad input"]);
/// ```
pub trait IntoRail<S, M> {
    fn into_rail(self) -> Rail<S, M>;
}

impl<S, M> IntoRail<S, M> for Result<S, M> {
    #[inline]
    fn into_rail(self) -> Rail<S, M> {
        Rail::from_result(self)
    }
}

impl<S, M> IntoRail<S, M> for Rail<S, M> {
    #[inline]
    fn into_rail(self) -> Rail<S, M> {
        self
    }
}

/// Lifts an `Option` onto the rail, naming the message used when absent.
pub trait OptionRailExt<S> {
    /// Returns a failure holding `message` when `None`.
    fn or_fail<M>(self, message: M) -> Rail<S, M>;

    /// Like [`OptionRailExt::or_fail`], building the message lazily.
    fn or_fail_with<M, F>(self, f: F) -> Rail<S, M>
    where
        F: FnOnce() -> M;
}

impl<S> OptionRailExt<S> for Option<S> {
    #[inline]
    fn or_fail<M>(self, message: M) -> Rail<S, M> {
        crate::convert::option_to_rail(self, message)
    }

    #[inline]
    fn or_fail_with<M, F>(self, f: F) -> Rail<S, M>
    where
        F: FnOnce() -> M,
    {
        match self {
            Some(value) => Rail::Success(value),
            None => Rail::failure(f()),
        }
    }
}
