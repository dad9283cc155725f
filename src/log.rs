//! Logging macros.
//!
//! These expand to the `log` crate macros when the `log` feature is enabled,
//! and to nothing otherwise.

/// Emits a `debug` level record.
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "ws_url", $($tt)*);
    };
}

/// Emits a `trace` level record.
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "ws_url", $($tt)*);
    };
}

pub(crate) use {debug, trace};
