//! Futures that move a rail through one asynchronous step.
//!
//! [`MapAsync`] and [`BindAsync`] first resolve an input future producing a
//! [`Rail`], then, only on the success track, start the step's future and
//! resolve it. The step is never constructed for a failed input.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::rail::Rail;

pin_project! {
    /// Future returned by `map_async`.
    ///
    /// Resolves the input rail, then awaits `f(value)` and wraps the output
    /// on the success track.
    ///
    /// # Cancel Safety
    ///
    /// Dropping the future before completion drops whichever inner future is
    /// in flight; the step is not started again.
    #[project = MapAsyncProj]
    #[project_replace = MapAsyncReplace]
    #[must_use = "futures do nothing unless polled"]
    pub enum MapAsync<Input, F, Step> {
        Pending {
            #[pin]
            input: Input,
            f: F,
        },
        Running {
            #[pin]
            step: Step,
        },
        Complete,
    }
}

impl<Input, F, Step> MapAsync<Input, F, Step> {
    #[inline]
    pub(crate) fn new(input: Input, f: F) -> Self {
        Self::Pending { input, f }
    }
}

impl<Input, F, Step, S, T, M> Future for MapAsync<Input, F, Step>
where
    Input: Future<Output = Rail<S, M>>,
    F: FnOnce(S) -> Step,
    Step: Future<Output = T>,
{
    type Output = Rail<T, M>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            match self.as_mut().project() {
                MapAsyncProj::Pending { input, .. } => {
                    let rail = ready!(input.poll(cx));
                    let f = match self.as_mut().project_replace(Self::Complete) {
                        MapAsyncReplace::Pending { f, .. } => f,
                        _ => unreachable!("MapAsync left the pending state early"),
                    };
                    match rail {
                        Rail::Success(value) => self.set(Self::Running { step: f(value) }),
                        Rail::Failure(messages) => return Poll::Ready(Rail::Failure(messages)),
                    }
                },
                MapAsyncProj::Running { step } => {
                    let value = ready!(step.poll(cx));
                    self.set(Self::Complete);
                    return Poll::Ready(Rail::Success(value));
                },
                MapAsyncProj::Complete => panic!("MapAsync polled after completion"),
            }
        }
    }
}

impl<Input, F, Step, S, T, M> FusedFuture for MapAsync<Input, F, Step>
where
    Input: Future<Output = Rail<S, M>>,
    F: FnOnce(S) -> Step,
    Step: Future<Output = T>,
{
    fn is_terminated(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

pin_project! {
    /// Future returned by `bind_async`.
    ///
    /// Resolves the input rail, then awaits `f(value)` and returns its rail
    /// verbatim.
    #[project = BindAsyncProj]
    #[project_replace = BindAsyncReplace]
    #[must_use = "futures do nothing unless polled"]
    pub enum BindAsync<Input, F, Step> {
        Pending {
            #[pin]
            input: Input,
            f: F,
        },
        Running {
            #[pin]
            step: Step,
        },
        Complete,
    }
}

impl<Input, F, Step> BindAsync<Input, F, Step> {
    #[inline]
    pub(crate) fn new(input: Input, f: F) -> Self {
        Self::Pending { input, f }
    }
}

impl<Input, F, Step, S, T, M> Future for BindAsync<Input, F, Step>
where
    Input: Future<Output = Rail<S, M>>,
    F: FnOnce(S) -> Step,
    Step: Future<Output = Rail<T, M>>,
{
    type Output = Rail<T, M>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            match self.as_mut().project() {
                BindAsyncProj::Pending { input, .. } => {
                    let rail = ready!(input.poll(cx));
                    let f = match self.as_mut().project_replace(Self::Complete) {
                        BindAsyncReplace::Pending { f, .. } => f,
                        _ => unreachable!("BindAsync left the pending state early"),
                    };
                    match rail {
                        Rail::Success(value) => self.set(Self::Running { step: f(value) }),
                        Rail::Failure(messages) => return Poll::Ready(Rail::Failure(messages)),
                    }
                },
                BindAsyncProj::Running { step } => {
                    let rail = ready!(step.poll(cx));
                    self.set(Self::Complete);
                    return Poll::Ready(rail);
                },
                BindAsyncProj::Complete => panic!("BindAsync polled after completion"),
            }
        }
    }
}

impl<Input, F, Step, S, T, M> FusedFuture for BindAsync<Input, F, Step>
where
    Input: Future<Output = Rail<S, M>>,
    F: FnOnce(S) -> Step,
    Step: Future<Output = Rail<T, M>>,
{
    fn is_terminated(&self) -> bool {
        matches!(self, Self::Complete)
    }
}
