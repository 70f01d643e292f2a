//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async combinators.
//!
//! # What's Included
//!
//! - Everything in [`prelude`](crate::prelude)
//! - **Traits**: [`FutureRailExt`](crate::async_ext::FutureRailExt) - `.map_async()` and `.bind_async()` on futures of rails
//! - **Types**: [`MapAsync`](crate::async_ext::MapAsync), [`BindAsync`](crate::async_ext::BindAsync)
//! - **Functions**: [`collect_async`](crate::async_ext::collect_async), [`bind_seq_async`](crate::async_ext::bind_seq_async)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{bind_seq_async, collect_async, BindAsync, FutureRailExt, MapAsync};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{FutureRailSpanExt, RailTraceExt};
