pub mod convert;
pub mod macros;
pub mod types;

#[cfg(feature = "async")]
pub mod async_ext;
