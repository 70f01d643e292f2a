//! Asynchronous `map` / `bind` for rails and for futures of rails.
//!
//! Chains built from these combinators run strictly in sequence: a step's
//! future is created only after the previous step has resolved, and never for
//! a failed rail.

use core::future::{ready, Future, Ready};

use super::rail_future::{BindAsync, MapAsync};
use crate::rail::Rail;

impl<S, M> Rail<S, M> {
    /// Transforms the success value with an asynchronous step.
    ///
    /// On the failure track the step is never invoked and the messages are
    /// carried over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_track::Rail;
    ///
    /// async fn example() {
    ///     let rail = Rail::<&str, &str>::success("john")
    ///         .map_async(|name| async move { name.to_uppercase() })
    ///         .await;
    ///     assert_eq!(rail.into_value().as_deref(), Some("JOHN"));
    /// }
    /// ```
    #[inline]
    pub fn map_async<T, F, Fut>(self, f: F) -> MapAsync<Ready<Self>, F, Fut>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = T>,
    {
        MapAsync::new(ready(self), f)
    }

    /// Chains an asynchronous fallible step, short-circuiting on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_track::Rail;
    ///
    /// async fn example() {
    ///     let rail = Rail::<u32, &str>::success(15)
    ///         .bind_async(|age| async move {
    ///             if age >= 18 { Rail::success(age) } else { Rail::failure("must be 18 or older") }
    ///         })
    ///         .await;
    ///     assert!(rail.is_failure());
    /// }
    /// ```
    #[inline]
    pub fn bind_async<T, F, Fut>(self, f: F) -> BindAsync<Ready<Self>, F, Fut>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Rail<T, M>>,
    {
        BindAsync::new(ready(self), f)
    }
}

/// Extension trait continuing a rail pipeline from a future of a rail.
///
/// This mirrors [`Rail::map_async`] and [`Rail::bind_async`], so async
/// chains read the same as their synchronous counterparts.
///
/// # Examples
///
/// ```rust
/// use rail_track::prelude_async::*;
///
/// async fn example() {
///     let rail = Rail::<i32, &str>::success(1)
///         .map_async(|x| async move { x + 1 })
///         .bind_async(|x| async move { Rail::success(x * 10) })
///         .map_async(|x| async move { x.to_string() })
///         .await;
///     assert_eq!(rail.into_value().as_deref(), Some("20"));
/// }
/// ```
pub trait FutureRailExt<S, M>: Future<Output = Rail<S, M>> + Sized {
    /// Transforms the eventual success value with an asynchronous step.
    fn map_async<T, F, Fut>(self, f: F) -> MapAsync<Self, F, Fut>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = T>,
    {
        MapAsync::new(self, f)
    }

    /// Chains an asynchronous fallible step onto the eventual rail.
    fn bind_async<T, F, Fut>(self, f: F) -> BindAsync<Self, F, Fut>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Rail<T, M>>,
    {
        BindAsync::new(self, f)
    }
}

impl<Fut, S, M> FutureRailExt<S, M> for Fut where Fut: Future<Output = Rail<S, M>> {}
