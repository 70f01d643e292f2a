//! Async extensions for rail-track.
//!
//! Asynchronous counterparts of `map` and `bind` that keep the synchronous
//! short-circuit semantics: a failed rail never starts the next step, and a
//! chain runs one step at a time. No cancellation or timeout is added; a step
//! surfaces whatever its own future produces.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! rail-track = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use rail_track::prelude_async::*;
//!
//! async fn register(form: Form) -> Rail<UserId, Error> {
//!     validate(form)
//!         .bind_async(|form| async move { repository.insert(form).await })
//!         .map_async(|user| async move { user.id })
//!         .await
//! }
//! ```

mod future_ext;
mod rail_future;
mod validation;

pub use future_ext::FutureRailExt;
pub use rail_future::{BindAsync, MapAsync};
pub use validation::{bind_seq_async, collect_async};
