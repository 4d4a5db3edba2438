//! Conditional logging macros.
//!
//! With the `tracing` feature enabled these re-export the `tracing` macros.
//! Without it they expand to no-ops, so render and validation hot paths pay
//! nothing for instrumentation.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
