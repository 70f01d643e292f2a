use std::future::{ready, Future, Ready};
use std::pin::Pin;
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

use futures_core::future::FusedFuture;
use rail_track::async_ext::{BindAsync, MapAsync};
use rail_track::prelude_async::*;

fn noop_waker() -> Waker {
    fn noop(_: *const ()) {}
    fn clone(p: *const ()) -> RawWaker {
        RawWaker::new(p, &VTABLE)
    }
    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
    unsafe { Waker::from_raw(RawWaker::new(core::ptr::null(), &VTABLE)) }
}

struct PendingRail;

impl Future for PendingRail {
    type Output = Rail<u32, &'static str>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Pending
    }
}

#[test]
fn futures_are_send_when_parts_are() {
    fn assert_send<T: Send>() {}

    assert_send::<MapAsync<Ready<Rail<u32, String>>, fn(u32) -> Ready<u32>, Ready<u32>>>();
    assert_send::<
        BindAsync<
            Ready<Rail<u32, String>>,
            fn(u32) -> Ready<Rail<u32, String>>,
            Ready<Rail<u32, String>>,
        >,
    >();
}

#[test]
fn pending_input_keeps_future_pending() {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    let mut fut = PendingRail.map_async(|n| ready(n + 1));
    let mut fut = Pin::new(&mut fut);

    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Pending);
    assert!(!fut.is_terminated());
}

#[test]
fn terminates_after_ready() {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    let mut fut = Rail::<u32, &str>::success(1).bind_async(|n| ready(Rail::success(n + 1)));
    let mut fut = Pin::new(&mut fut);

    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(Rail::success(2)));
    assert!(fut.is_terminated());
}

#[test]
fn failed_input_terminates_without_running_step() {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    let mut fut = Rail::<u32, &str>::failure("no").map_async(|_| -> Ready<u32> {
        panic!("step must not run on failure")
    });
    let mut fut = Pin::new(&mut fut);

    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(Rail::failure("no")));
    assert!(fut.is_terminated());
}
