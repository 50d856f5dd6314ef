//! Conditional logging macros.
//!
//! With the `tracing` feature, layout and content loading report skipped
//! entities and progress through `tracing`. Without it the macros expand to
//! nothing, so the geometry core stays dependency-light.

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
