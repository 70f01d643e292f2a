//! Tracing integration.
//!
//! Records the outcome of a pipeline step as `tracing` events without
//! changing the rail. Nothing in the core logs on its own; these adapters are
//! opt-in at the call site.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! rail-track = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::rail::Rail;

/// Extension trait that logs a rail's track.
///
/// # Example
///
/// ```rust
/// use rail_track::tracing_ext::RailTraceExt;
/// use rail_track::Rail;
///
/// let rail = Rail::<i32, &str>::failure("boom").trace_outcome("load_user");
/// assert!(rail.is_failure());
/// ```
pub trait RailTraceExt: Sized {
    /// Emits `debug` on success and `warn` with the messages on failure.
    fn trace_outcome(self, operation: &'static str) -> Self;
}

impl<S, M: Debug> RailTraceExt for Rail<S, M> {
    fn trace_outcome(self, operation: &'static str) -> Self {
        match &self {
            Rail::Success(_) => tracing::debug!(operation, "rail step succeeded"),
            Rail::Failure(messages) => tracing::warn!(
                operation,
                count = messages.len(),
                messages = ?messages.as_slice(),
                "rail step failed"
            ),
        }
        self
    }
}

/// Extension trait for futures of rails that polls them inside a span.
///
/// # Example
///
/// ```rust
/// use rail_track::tracing_ext::FutureRailSpanExt;
/// use rail_track::Rail;
/// use tracing::info_span;
///
/// async fn example() {
///     let rail = async { Rail::<i32, &str>::success(1) }
///         .in_span(info_span!("fetch_user", user_id = 7))
///         .await;
///     assert!(rail.is_success());
/// }
/// ```
pub trait FutureRailSpanExt<S, M>: Future<Output = Rail<S, M>> + Sized {
    /// Polls inside `span` and records a warning there when the rail fails.
    fn in_span(self, span: Span) -> SpanRailFuture<Self> {
        SpanRailFuture { inner: self, span }
    }

    /// Like [`FutureRailSpanExt::in_span`] with the current span.
    fn in_current_span(self) -> SpanRailFuture<Self> {
        self.in_span(Span::current())
    }
}

impl<F, S, M> FutureRailSpanExt<S, M> for F where F: Future<Output = Rail<S, M>> {}

pin_project! {
    /// Future wrapper created by [`FutureRailSpanExt::in_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanRailFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, S, M> Future for SpanRailFuture<F>
where
    F: Future<Output = Rail<S, M>>,
    M: Debug,
{
    type Output = Rail<S, M>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        match this.inner.poll(cx) {
            Poll::Ready(rail) => {
                if let Rail::Failure(messages) = &rail {
                    tracing::warn!(
                        count = messages.len(),
                        messages = ?messages.as_slice(),
                        "rail future failed"
                    );
                }
                Poll::Ready(rail)
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
