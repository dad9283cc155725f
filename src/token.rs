//! Delimiter-aware string tokenizer.
//!
//! A [`Token`] is a borrowed slice of a source string, terminated by the earliest occurrence
//! of any delimiter from a caller-supplied set, or by the end of the source.
//! Each token remembers which delimiter ended it, and the following token is produced by
//! resuming the scan right after that delimiter, possibly with a different delimiter set.
//!
//! ```
//! use ws_url::token::Token;
//!
//! let first = Token::first("host:443/path", &[":", "/"]).expect("source is not empty");
//! assert_eq!(first.as_str(), "host");
//! assert_eq!(first.delimiter(), Some(":"));
//!
//! let second = first.next(&[":", "/"]).expect("`host` was followed by a delimiter");
//! assert_eq!(second.as_str(), "443");
//! assert_eq!(second.delimiter(), Some("/"));
//!
//! // The delimiter set can change between calls.
//! let third = second.next(&["?"]).expect("`443` was followed by a delimiter");
//! assert_eq!(third.as_str(), "path");
//! assert_eq!(third.delimiter(), None);
//! assert!(third.next(&["?"]).is_none());
//! ```

use core::iter::FusedIterator;

use crate::parser::str::{find_earliest, has_delimiters};

/// A slice of a source string and the delimiter which terminated it.
///
/// `'a` is the lifetime of the source string, and `'d` is the lifetime of the delimiter
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a, 'd> {
    /// Whole source string.
    source: &'a str,
    /// Start position of the token in `source`.
    start: usize,
    /// End position (exclusive) of the token in `source`.
    end: usize,
    /// Delimiter which terminated the token, if any.
    delimiter: Option<&'d str>,
}

impl<'a, 'd> Token<'a, 'd> {
    /// Returns the first token of the source.
    ///
    /// The token spans from the start of `source` up to (not including) the earliest
    /// occurrence of any of `delimiters`, or up to the end of `source` if none occurs.
    /// Delimiters matching at the same position are prioritized in the given order.
    ///
    /// Returns `None` if `source` is empty or `delimiters` has no non-empty delimiter.
    #[must_use]
    pub fn first(source: &'a str, delimiters: &[&'d str]) -> Option<Self> {
        if source.is_empty() || !has_delimiters(delimiters) {
            return None;
        }
        Some(Self::scan(source, 0, delimiters))
    }

    /// Returns the token following this one.
    ///
    /// The scan starts right after the delimiter which terminated `self`, and uses
    /// `delimiters` which may differ from the set used for `self`.
    /// If `self` was terminated by a delimiter at the very end of the source, the next token
    /// is empty.
    ///
    /// Returns `None` if `self` runs to the end of the source, or `delimiters` has no
    /// non-empty delimiter.
    #[must_use]
    pub fn next<'e>(&self, delimiters: &[&'e str]) -> Option<Token<'a, 'e>> {
        let delimiter = self.delimiter?;
        if !has_delimiters(delimiters) {
            return None;
        }
        Some(Token::scan(self.source, self.end + delimiter.len(), delimiters))
    }

    /// Scans a token starting at `start`.
    fn scan(source: &'a str, start: usize, delimiters: &[&'d str]) -> Self {
        match find_earliest(&source[start..], delimiters) {
            Some((pos, index)) => Self {
                source,
                start,
                end: start + pos,
                delimiter: Some(delimiters[index]),
            },
            None => Self {
                source,
                start,
                end: source.len(),
                delimiter: None,
            },
        }
    }

    /// Returns the token as a string slice of the source.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// Returns the length of the token in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the token is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the byte offset of the token in the source.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Returns the delimiter which terminated the token.
    ///
    /// Returns `None` if the token runs to the end of the source.
    #[inline]
    #[must_use]
    pub fn delimiter(&self) -> Option<&'d str> {
        self.delimiter
    }

    /// Returns the whole source string the token was taken from.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }
}

/// Iterator over the tokens of a string with a fixed delimiter set.
///
/// Created by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a, 'd> {
    /// Token to be yielded next.
    pending: Option<Token<'a, 'd>>,
    /// Delimiters.
    delimiters: &'d [&'d str],
}

impl<'a, 'd> Iterator for Tokens<'a, 'd> {
    type Item = Token<'a, 'd>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        self.pending = current.next(self.delimiters);
        Some(current)
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Returns an iterator over the tokens of `source` delimited by any of `delimiters`.
///
/// ```
/// use ws_url::token::tokens;
///
/// let parts: Vec<_> = tokens("a,b;;c", &[",", ";"]).map(|t| t.as_str()).collect();
/// assert_eq!(parts, ["a", "b", "", "c"]);
/// ```
#[must_use]
pub fn tokens<'a, 'd>(source: &'a str, delimiters: &'d [&'d str]) -> Tokens<'a, 'd> {
    Tokens {
        pending: Token::first(source, delimiters),
        delimiters,
    }
}
