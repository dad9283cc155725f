//! WebSocket URL parser.
//!
//! The string after the scheme prefix is walked token by token. Each token is classified by
//! the delimiter which preceded it, and a small state machine enforces the component order
//! `host [ ":" port ] [ "/" path ] [ "?" query ]`.

use core::mem;

use crate::components::{Components, Span};
use crate::error::{Error, ErrorKind};
use crate::log::{debug, trace};
use crate::token::Token;

/// Scheme prefix of plain WebSocket URLs.
const WS_PREFIX: &str = "ws://";
/// Scheme prefix of secure WebSocket URLs.
const WSS_PREFIX: &str = "wss://";
/// Inputs shorter than this are rejected before looking at the scheme.
const MIN_URL_LEN: usize = 7;

/// Delimiter before the port.
const PORT_DELIMITER: &str = ":";
/// Delimiter before the path.
const PATH_DELIMITER: &str = "/";
/// Delimiter before the query.
const QUERY_DELIMITER: &str = "?";

/// Delimiters used until the path delimiter is seen.
const AUTHORITY_DELIMITERS: &[&str] = &[PORT_DELIMITER, PATH_DELIMITER, QUERY_DELIMITER];
/// Delimiters used after the path delimiter is seen.
///
/// `:` and `/` are literal characters inside paths and queries.
const PATH_DELIMITERS: &[&str] = &[QUERY_DELIMITER];

/// Component expected next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// Host. Only the very first token can be a host.
    Host,
    /// Port, path, or query.
    PortPathOrQuery,
    /// Path or query.
    PathOrQuery,
    /// Query.
    Query,
    /// No more components.
    Nothing,
}

/// A token and the delimiter which preceded it.
#[derive(Debug, Clone, Copy)]
struct Step<'a> {
    /// Delimiter which terminated the previous token, `None` for the first token.
    preceded_by: Option<&'static str>,
    /// Token.
    token: Token<'a, 'static>,
}

/// Iterator over the tokens following the scheme prefix.
#[derive(Debug, Clone)]
struct Steps<'a> {
    /// Token to be yielded next.
    pending: Option<Token<'a, 'static>>,
    /// Active delimiter set.
    delimiters: &'static [&'static str],
    /// Delimiter which terminated the last yielded token.
    preceded_by: Option<&'static str>,
}

impl<'a> Steps<'a> {
    /// Creates a new iterator over the given string following the scheme prefix.
    fn new(rest: &'a str) -> Self {
        Self {
            pending: Token::first(rest, AUTHORITY_DELIMITERS),
            delimiters: AUTHORITY_DELIMITERS,
            preceded_by: None,
        }
    }
}

impl<'a> Iterator for Steps<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.pending.take()?;
        let preceded_by = mem::replace(&mut self.preceded_by, token.delimiter());
        // Narrows the delimiter set once and for all: after this, the active set no longer
        // contains the path delimiter.
        if token.delimiter() == Some(PATH_DELIMITER) {
            self.delimiters = PATH_DELIMITERS;
        }
        self.pending = token.next(self.delimiters);
        Some(Step { preceded_by, token })
    }
}

/// Parses the given WebSocket URL into component positions.
///
/// The empty string is accepted and results in empty components.
pub(crate) fn parse(url: &str) -> Result<Components, Error> {
    if url.is_empty() {
        return Ok(Components::default());
    }

    let (is_secure, host_start) =
        split_scheme(url).ok_or_else(|| fail(ErrorKind::UnrecognizedScheme, 0))?;
    let mut components = Components {
        is_secure,
        ..Components::default()
    };

    let mut expect = Expect::Host;
    for step in Steps::new(&url[host_start..]) {
        expect = accept(expect, &step, host_start, &mut components)?;
    }
    if expect == Expect::Host {
        // Nothing follows the scheme prefix.
        return Err(fail(ErrorKind::InvalidHost, host_start));
    }

    trace!("parsed WebSocket URL components: {:?}", components);
    Ok(components)
}

/// Recognizes the scheme prefix.
///
/// Returns `(is_secure, prefix_len)`.
fn split_scheme(url: &str) -> Option<(bool, usize)> {
    if url.len() < MIN_URL_LEN {
        return None;
    }
    if url.starts_with(WS_PREFIX) {
        Some((false, WS_PREFIX.len()))
    } else if url.starts_with(WSS_PREFIX) {
        Some((true, WSS_PREFIX.len()))
    } else {
        None
    }
}

/// Accepts a step in the given state, and returns the next state.
///
/// `base` is the position of the token source in the URL.
fn accept(
    expect: Expect,
    step: &Step<'_>,
    base: usize,
    components: &mut Components,
) -> Result<Expect, Error> {
    let token = &step.token;
    let position = base + token.offset();
    match (expect, step.preceded_by) {
        (Expect::Host, None) => {
            if token.is_empty() {
                return Err(fail(ErrorKind::InvalidHost, position));
            }
            components.host = Span::of_token(token, base);
            Ok(Expect::PortPathOrQuery)
        }
        (Expect::PortPathOrQuery, Some(PORT_DELIMITER)) => {
            let port =
                parse_port(token.as_str()).ok_or_else(|| fail(ErrorKind::InvalidPort, position))?;
            components.port = Some(port);
            Ok(Expect::PathOrQuery)
        }
        (Expect::PortPathOrQuery | Expect::PathOrQuery, Some(PATH_DELIMITER)) => {
            if token.is_empty() {
                return Err(fail(ErrorKind::InvalidPath, position));
            }
            components.path = Some(Span::of_token(token, base));
            Ok(Expect::Query)
        }
        // The query must be the last token.
        (
            Expect::PortPathOrQuery | Expect::PathOrQuery | Expect::Query,
            Some(QUERY_DELIMITER),
        ) if token.delimiter().is_none() => {
            if token.is_empty() {
                return Err(fail(ErrorKind::InvalidQuery, position));
            }
            components.query = Some(Span::of_token(token, base));
            Ok(Expect::Nothing)
        }
        (_, preceded_by) => {
            // Points to the delimiter which introduced the misplaced component.
            let delimiter_len = preceded_by.map_or(0, str::len);
            Err(fail(ErrorKind::OutOfOrder, position - delimiter_len))
        }
    }
}

/// Parses a port number.
///
/// Only ASCII digits are allowed, and the value must fit in `u16`.
fn parse_port(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Creates an error and logs it.
fn fail(kind: ErrorKind, position: usize) -> Error {
    let error = Error::new(kind, position);
    debug!("rejected WebSocket URL: {}", error);
    error
}
