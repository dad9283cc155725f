//! WebSocket URL types.
//!
//! ```text
//! ws-url    = ( "ws://" / "wss://" ) host [ ":" port ] [ "/" path ] [ "?" query ]
//! ```
//!
//! * [`WsUrl`] borrows the source string, and all of its components are slices of it.
//! * [`WsUrlString`] owns the source string (enabled by `alloc` feature).
//!
//! Neither type decodes percent-encoding nor validates the characters of components.

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::components::Components;
use crate::error::Error;
use crate::parser;

/// Default port of `ws` URLs.
const WS_DEFAULT_PORT: u16 = 80;
/// Default port of `wss` URLs.
const WSS_DEFAULT_PORT: u16 = 443;

/// Parsed WebSocket URL borrowing the source string.
///
/// The default value is the empty URL: it has an empty host and no other components.
///
/// # Examples
///
/// ```
/// use ws_url::WsUrl;
///
/// let url = WsUrl::parse("wss://some.url.com:443/path/abc?prop1=value1")?;
/// assert!(url.is_secure());
/// assert_eq!(url.host(), "some.url.com");
/// assert_eq!(url.port(), Some(443));
/// assert_eq!(url.path(), Some("path/abc"));
/// assert_eq!(url.query(), Some("prop1=value1"));
/// # Ok::<_, ws_url::Error>(())
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WsUrl<'a> {
    /// Source string.
    source: &'a str,
    /// Component positions.
    components: Components,
}

impl<'a> WsUrl<'a> {
    /// Parses the given WebSocket URL.
    ///
    /// The empty string is accepted and results in the empty URL (same as
    /// [`WsUrl::default()`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not start with `ws://` or `wss://`, or if the
    /// components after the scheme are empty, malformed, or out of order.
    pub fn parse(s: &'a str) -> Result<Self, Error> {
        let components = parser::parse(s)?;
        Ok(Self {
            source: s,
            components,
        })
    }

    /// Parses the given WebSocket URL if available.
    ///
    /// `None` results in the empty URL.
    ///
    /// # Errors
    ///
    /// Same as [`WsUrl::parse`].
    #[inline]
    pub fn parse_opt(s: Option<&'a str>) -> Result<Self, Error> {
        s.map_or_else(|| Ok(Self::default()), Self::parse)
    }

    /// Returns the source string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Returns `true` if this is the empty URL.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Returns `true` if the scheme is `wss`.
    #[inline]
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.components.is_secure
    }

    /// Returns the scheme, `"ws"` or `"wss"`.
    ///
    /// Returns `None` for the empty URL.
    #[must_use]
    pub fn scheme(&self) -> Option<&'static str> {
        if self.is_empty() {
            None
        } else if self.is_secure() {
            Some("wss")
        } else {
            Some("ws")
        }
    }

    /// Returns the host.
    ///
    /// This is never empty unless the URL is the empty URL.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &'a str {
        self.components.host.slice(self.source)
    }

    /// Returns the explicit port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.components.port
    }

    /// Returns the explicit port, or the default port of the scheme.
    ///
    /// The default port is 443 for `wss` and 80 for `ws`.
    #[must_use]
    pub fn port_or_default(&self) -> u16 {
        self.port().unwrap_or(if self.is_secure() {
            WSS_DEFAULT_PORT
        } else {
            WS_DEFAULT_PORT
        })
    }

    /// Returns the path, without the leading slash.
    ///
    /// ```
    /// use ws_url::WsUrl;
    ///
    /// let url = WsUrl::parse("ws://localhost:8080/a:b/c")?;
    /// assert_eq!(url.path(), Some("a:b/c"));
    /// # Ok::<_, ws_url::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&'a str> {
        self.components.path.map(|span| span.slice(self.source))
    }

    /// Returns the query, without the leading question mark.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&'a str> {
        self.components.query.map(|span| span.slice(self.source))
    }

    /// Copies the URL into an owned [`WsUrlString`].
    #[cfg(feature = "alloc")]
    #[must_use]
    pub fn to_owned_url(&self) -> WsUrlString {
        WsUrlString {
            source: self.source.into(),
            components: self.components,
        }
    }
}

impl fmt::Debug for WsUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WsUrl")
            .field("is_secure", &self.is_secure())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .finish()
    }
}

impl fmt::Display for WsUrl<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

impl<'a> TryFrom<&'a str> for WsUrl<'a> {
    type Error = Error;

    #[inline]
    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for WsUrl<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.source
    }
}

/// Parsed WebSocket URL owning the source string.
///
/// Enabled by `alloc` or `std` feature.
///
/// ```
/// use ws_url::WsUrlString;
///
/// let url: WsUrlString = "ws://localhost:9001/chat".parse()?;
/// assert_eq!(url.as_ws_url().host(), "localhost");
/// assert_eq!(url.as_ws_url().port_or_default(), 9001);
/// # Ok::<_, ws_url::Error>(())
/// ```
#[cfg(feature = "alloc")]
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct WsUrlString {
    /// Source string.
    source: String,
    /// Component positions.
    components: Components,
}

#[cfg(feature = "alloc")]
impl WsUrlString {
    /// Returns the borrowed URL.
    #[inline]
    #[must_use]
    pub fn as_ws_url(&self) -> WsUrl<'_> {
        WsUrl {
            source: &self.source,
            components: self.components,
        }
    }

    /// Returns the source string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the source string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.source
    }
}

#[cfg(feature = "alloc")]
impl fmt::Debug for WsUrlString {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_ws_url(), f)
    }
}

#[cfg(feature = "alloc")]
impl fmt::Display for WsUrlString {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<String> for WsUrlString {
    type Error = Error;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        let components = parser::parse(&source)?;
        Ok(Self { source, components })
    }
}

#[cfg(feature = "alloc")]
impl core::str::FromStr for WsUrlString {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WsUrl::parse(s).map(|url| url.to_owned_url())
    }
}

#[cfg(feature = "alloc")]
impl From<WsUrl<'_>> for WsUrlString {
    #[inline]
    fn from(url: WsUrl<'_>) -> Self {
        url.to_owned_url()
    }
}

#[cfg(feature = "alloc")]
impl From<WsUrlString> for String {
    #[inline]
    fn from(url: WsUrlString) -> Self {
        url.source
    }
}

#[cfg(feature = "alloc")]
impl AsRef<str> for WsUrlString {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.source
    }
}

/// Serde support.
#[cfg(feature = "serde")]
mod __serde {
    use super::WsUrl;
    #[cfg(feature = "alloc")]
    use super::WsUrlString;

    use core::fmt;

    #[cfg(feature = "alloc")]
    use alloc::string::String;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Expected value description.
    const EXPECTING: &str = "WebSocket URL string";

    impl Serialize for WsUrl<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    #[cfg(feature = "alloc")]
    impl Serialize for WsUrlString {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    /// Borrowed URL visitor.
    #[derive(Debug, Clone, Copy)]
    struct WsUrlVisitor;

    impl<'de> Visitor<'de> for WsUrlVisitor {
        type Value = WsUrl<'de>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(EXPECTING)
        }

        fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            WsUrl::parse(v).map_err(E::custom)
        }
    }

    impl<'de: 'a, 'a> Deserialize<'de> for WsUrl<'a> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(WsUrlVisitor)
        }
    }

    /// Owned URL visitor.
    #[cfg(feature = "alloc")]
    #[derive(Debug, Clone, Copy)]
    struct WsUrlStringVisitor;

    #[cfg(feature = "alloc")]
    impl<'de> Visitor<'de> for WsUrlStringVisitor {
        type Value = WsUrlString;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(EXPECTING)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse().map_err(E::custom)
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            WsUrlString::try_from(v).map_err(E::custom)
        }
    }

    #[cfg(feature = "alloc")]
    impl<'de> Deserialize<'de> for WsUrlString {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_string(WsUrlStringVisitor)
        }
    }
}
