//! WebSocket URL parse error.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

/// Kind of a [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The URL does not start with `ws://` or `wss://`, or is too short to.
    UnrecognizedScheme,
    /// The host is empty.
    InvalidHost,
    /// The port is empty, is not a decimal number, or does not fit in `u16`.
    InvalidPort,
    /// The path delimiter is present but the path is empty.
    InvalidPath,
    /// The query delimiter is present but the query is empty.
    InvalidQuery,
    /// A component appeared after a component that must follow it, or twice.
    OutOfOrder,
}

impl ErrorKind {
    /// Returns a short description of the error kind.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::UnrecognizedScheme => "unrecognized scheme",
            Self::InvalidHost => "invalid host",
            Self::InvalidPort => "invalid port",
            Self::InvalidPath => "invalid path",
            Self::InvalidQuery => "invalid query",
            Self::OutOfOrder => "component out of order",
        }
    }
}

impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// WebSocket URL parse error.
// Note that this type should implement `Copy` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Error kind.
    kind: ErrorKind,
    /// Byte offset of the offending component in the input.
    position: usize,
}

impl Error {
    /// Creates a new `Error`.
    ///
    /// For internal use.
    #[inline]
    #[must_use]
    pub(crate) fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the byte offset in the input where the offending component starts.
    ///
    /// For [`ErrorKind::UnrecognizedScheme`] this is always 0.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid WebSocket URL: {} at byte {}",
            self.kind, self.position
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
