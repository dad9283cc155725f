//! Components of WebSocket URLs.

use crate::token::Token;

/// Byte range of a component in the URL string.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Span {
    /// Start position.
    start: usize,
    /// Length in bytes.
    len: usize,
}

impl Span {
    /// Creates a span covering the given token.
    ///
    /// `base` is the position of the token source in the URL string.
    #[inline]
    #[must_use]
    pub(crate) fn of_token(token: &Token<'_, '_>, base: usize) -> Self {
        Self {
            start: base + token.offset(),
            len: token.len(),
        }
    }

    /// Returns the component slice of the given URL string.
    ///
    /// # Precondition
    ///
    /// `url` must be the string the span was created from.
    #[inline]
    #[must_use]
    pub(crate) fn slice(self, url: &str) -> &str {
        &url[self.start..(self.start + self.len)]
    }
}

/// Positions of components in a WebSocket URL string.
///
/// The default value describes the empty URL, which has no components.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Components {
    /// Whether the scheme is `wss`.
    pub(crate) is_secure: bool,
    /// Host.
    pub(crate) host: Span,
    /// Port.
    pub(crate) port: Option<u16>,
    /// Path, without the leading slash.
    pub(crate) path: Option<Span>,
    /// Query, without the leading question mark.
    pub(crate) query: Option<Span>,
}
