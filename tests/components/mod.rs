//! Components.
#![allow(dead_code)]

use ws_url::ErrorKind;

/// Test case for a valid URL.
#[derive(Debug, Clone, Copy)]
pub struct TestCase<'a> {
    /// Test case name.
    pub name: &'a str,
    /// Composed string.
    pub composed: &'a str,
    /// Components.
    pub components: Components<'a>,
}

/// Components.
#[derive(Default, Debug, Clone, Copy)]
pub struct Components<'a> {
    /// Whether the scheme is `wss`.
    pub secure: bool,
    /// `host`.
    pub host: &'a str,
    /// `port`.
    pub port: Option<u16>,
    /// `path`.
    pub path: Option<&'a str>,
    /// `query`.
    pub query: Option<&'a str>,
}

/// Test case for an invalid URL.
#[derive(Debug, Clone, Copy)]
pub struct NegativeCase<'a> {
    /// Input string.
    pub input: &'a str,
    /// Expected error kind.
    pub kind: ErrorKind,
}

pub static TEST_CASES: &[TestCase<'static>] = &[
    TestCase {
        name: "host only",
        composed: "ws://example.com",
        components: Components {
            secure: false,
            host: "example.com",
            port: None,
            path: None,
            query: None,
        },
    },
    TestCase {
        name: "secure host only",
        composed: "wss://example.com",
        components: Components {
            secure: true,
            host: "example.com",
            port: None,
            path: None,
            query: None,
        },
    },
    TestCase {
        name: "all components",
        composed: "wss://some.url.com:443/path/abc?prop1=value1",
        components: Components {
            secure: true,
            host: "some.url.com",
            port: Some(443),
            path: Some("path/abc"),
            query: Some("prop1=value1"),
        },
    },
    TestCase {
        name: "host and port",
        composed: "ws://localhost:9001",
        components: Components {
            secure: false,
            host: "localhost",
            port: Some(9001),
            path: None,
            query: None,
        },
    },
    TestCase {
        name: "host and path",
        composed: "ws://10.0.0.1/socket",
        components: Components {
            secure: false,
            host: "10.0.0.1",
            port: None,
            path: Some("socket"),
            query: None,
        },
    },
    TestCase {
        name: "host and query",
        composed: "wss://host?a=b&c=d",
        components: Components {
            secure: true,
            host: "host",
            port: None,
            path: None,
            query: Some("a=b&c=d"),
        },
    },
    TestCase {
        name: "port and query",
        composed: "wss://host:8443?token=xyz",
        components: Components {
            secure: true,
            host: "host",
            port: Some(8443),
            path: None,
            query: Some("token=xyz"),
        },
    },
    TestCase {
        name: "colons and slashes inside path and query",
        composed: "wss://host/a:b//c?redirect=wss://other:1/x",
        components: Components {
            secure: true,
            host: "host",
            port: None,
            path: Some("a:b//c"),
            query: Some("redirect=wss://other:1/x"),
        },
    },
    TestCase {
        name: "port zero",
        composed: "ws://host:0",
        components: Components {
            secure: false,
            host: "host",
            port: Some(0),
            path: None,
            query: None,
        },
    },
    TestCase {
        name: "maximum port",
        composed: "ws://host:65535/p",
        components: Components {
            secure: false,
            host: "host",
            port: Some(65535),
            path: Some("p"),
            query: None,
        },
    },
    TestCase {
        name: "non-ASCII host and query",
        composed: "wss://\u{4f8b}\u{3048}.jp/\u{30d1}\u{30b9}?q=\u{5024}",
        components: Components {
            secure: true,
            host: "\u{4f8b}\u{3048}.jp",
            port: None,
            path: Some("\u{30d1}\u{30b9}"),
            query: Some("q=\u{5024}"),
        },
    },
    TestCase {
        name: "shortest accepted",
        composed: "ws://ab",
        components: Components {
            secure: false,
            host: "ab",
            port: None,
            path: None,
            query: None,
        },
    },
];

pub static NEGATIVE_CASES: &[NegativeCase<'static>] = &[
    NegativeCase {
        input: "http://host",
        kind: ErrorKind::UnrecognizedScheme,
    },
    NegativeCase {
        input: "https://host.example.com",
        kind: ErrorKind::UnrecognizedScheme,
    },
    NegativeCase {
        input: "WS://host",
        kind: ErrorKind::UnrecognizedScheme,
    },
    NegativeCase {
        input: "ws:/host",
        kind: ErrorKind::UnrecognizedScheme,
    },
    NegativeCase {
        input: "ws",
        kind: ErrorKind::UnrecognizedScheme,
    },
    NegativeCase {
        input: "ws://",
        kind: ErrorKind::UnrecognizedScheme,
    },
    NegativeCase {
        input: "wss://",
        kind: ErrorKind::UnrecognizedScheme,
    },
    NegativeCase {
        input: "ws://a",
        kind: ErrorKind::UnrecognizedScheme,
    },
    NegativeCase {
        input: "wss://:443",
        kind: ErrorKind::InvalidHost,
    },
    NegativeCase {
        input: "ws:///path",
        kind: ErrorKind::InvalidHost,
    },
    NegativeCase {
        input: "wss://?query",
        kind: ErrorKind::InvalidHost,
    },
    NegativeCase {
        input: "wss://host:",
        kind: ErrorKind::InvalidPort,
    },
    NegativeCase {
        input: "wss://host:44a",
        kind: ErrorKind::InvalidPort,
    },
    NegativeCase {
        input: "wss://host:65536",
        kind: ErrorKind::InvalidPort,
    },
    NegativeCase {
        input: "wss://host:?q",
        kind: ErrorKind::InvalidPort,
    },
    NegativeCase {
        input: "wss://host/",
        kind: ErrorKind::InvalidPath,
    },
    NegativeCase {
        input: "wss://host:443/",
        kind: ErrorKind::InvalidPath,
    },
    NegativeCase {
        input: "wss://host/?q",
        kind: ErrorKind::InvalidPath,
    },
    NegativeCase {
        input: "wss://host?",
        kind: ErrorKind::InvalidQuery,
    },
    NegativeCase {
        input: "wss://host/path?",
        kind: ErrorKind::InvalidQuery,
    },
    NegativeCase {
        input: "wss://host?query/path",
        kind: ErrorKind::OutOfOrder,
    },
    NegativeCase {
        input: "wss://host?query:443",
        kind: ErrorKind::OutOfOrder,
    },
    NegativeCase {
        input: "wss://host:443:444",
        kind: ErrorKind::OutOfOrder,
    },
    NegativeCase {
        input: "wss://host/path?a?b",
        kind: ErrorKind::OutOfOrder,
    },
];
