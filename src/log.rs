//! Logging for connector drawing.
//!
//! With the `tracing` feature, `debug!` reports each connector's kind and
//! exit point and `trace!` reports `Outline` pen moves. Without it, both
//! macros expand to nothing and accept any arguments.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
