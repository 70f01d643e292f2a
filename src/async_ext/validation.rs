//! Sequential async helpers over many rails.
//!
//! Both helpers await one future at a time. Running independent checks in
//! parallel is left to the caller (e.g. `futures::join_all` or `tokio::join!`).

use core::future::Future;

use crate::rail::Rail;
use crate::types::alloc_type::Vec;
use crate::types::Messages;

/// Awaits every future in order and accumulates all failures.
///
/// Unlike a fail-fast chain, every future is awaited even after a failure.
/// The result holds all success values when nothing failed.
///
/// # Example
///
/// ```rust
/// use rail_track::prelude_async::*;
///
/// async fn check(n: i32) -> Rail<i32, String> {
///     if n > 0 { Rail::success(n) } else { Rail::failure(format!("{n} is not positive")) }
/// }
///
/// async fn example() {
///     let rail = collect_async([check(1), check(-2), check(-3)]).await;
///     assert_eq!(rail.into_messages().unwrap().len(), 2);
/// }
/// ```
pub async fn collect_async<S, M, Fut, I>(rails: I) -> Rail<Vec<S>, M>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Rail<S, M>>,
{
    let iter = rails.into_iter();
    let (lower, upper) = iter.size_hint();

    let mut values = Vec::with_capacity(upper.unwrap_or(lower));
    let mut failures: Option<Messages<M>> = None;

    for fut in iter {
        match fut.await {
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
        None => Rail::Success(values),
    }
}

/// Threads a value through async steps, each depending on the previous one.
///
/// Stops at the first failure and returns it.
///
/// # Example
///
/// ```rust
/// use rail_track::prelude_async::*;
///
/// async fn example() {
///     let steps: Vec<fn(i32) -> std::future::Ready<Rail<i32, &'static str>>> = vec![
///         |n| std::future::ready(Rail::success(n + 1)),
///         |n| std::future::ready(if n > 5 { Rail::success(n) } else { Rail::failure("too small") }),
///     ];
///     let rail = bind_seq_async(1, steps).await;
///     assert!(rail.is_failure());
/// }
/// ```
pub async fn bind_seq_async<S, M, F, Fut>(initial: S, steps: impl IntoIterator<Item = F>) -> Rail<S, M>
where
    F: FnOnce(S) -> Fut,
    Fut: Future<Output = Rail<S, M>>,
{
    let mut current = initial;

    for step in steps {
        match step(current).await {
            Rail::Success(value) => current = value,
            failed => return failed,
        }
    }

    Rail::Success(current)
}
