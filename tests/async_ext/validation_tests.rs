use rail_track::prelude_async::*;
use std::future::{ready, Ready};
use std::sync::atomic::{AtomicUsize, Ordering};

async fn positive(n: i32) -> Rail<i32, String> {
    if n > 0 {
        Rail::success(n)
    } else {
        Rail::failure(format!("{n} is not positive"))
    }
}

#[tokio::test]
async fn collect_async_gathers_successes() {
    let rail = collect_async([positive(1), positive(2), positive(3)]).await;
    assert_eq!(rail, Rail::success(vec![1, 2, 3]));
}

#[tokio::test]
async fn collect_async_accumulates_every_failure() {
    let rail = collect_async([positive(-1), positive(2), positive(-3)]).await;
    assert_eq!(
        rail.into_messages().unwrap().as_slice(),
        &["-1 is not positive", "-3 is not positive"]
    );
}

#[tokio::test]
async fn collect_async_awaits_everything_after_a_failure() {
    let awaited = AtomicUsize::new(0);
    let awaited = &awaited;
    let futures = (0..4).map(|n| async move {
        awaited.fetch_add(1, Ordering::SeqCst);
        positive(n).await
    });

    let rail = collect_async(futures).await;
    assert!(rail.is_failure());
    assert_eq!(awaited.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn collect_async_of_nothing_is_empty_success() {
    let rail = collect_async(Vec::<Ready<Rail<i32, String>>>::new()).await;
    assert_eq!(rail, Rail::success(Vec::new()));
}

#[tokio::test]
async fn bind_seq_async_threads_value() {
    let steps: Vec<fn(i32) -> Ready<Rail<i32, String>>> = vec![
        |n| ready(Rail::success(n + 1)),
        |n| ready(Rail::success(n * 10)),
        |n| ready(if n > 15 { Rail::success(n) } else { Rail::failure(format!("{n} is too small")) }),
    ];

    assert_eq!(bind_seq_async(1, steps).await, Rail::success(20));
}

#[tokio::test]
async fn bind_seq_async_stops_at_first_failure() {
    let later = AtomicUsize::new(0);
    let later = &later;
    let steps = (0..3).map(|i| {
        move |n: i32| async move {
            if i == 0 {
                Rail::failure(format!("step {i} failed on {n}"))
            } else {
                later.fetch_add(1, Ordering::SeqCst);
                Rail::success(n)
            }
        }
    });

    let rail = bind_seq_async(5, steps).await;
    assert_eq!(rail, Rail::failure("step 0 failed on 5".to_string()));
    assert_eq!(later.load(Ordering::SeqCst), 0);
}
