//! Transport configuration holding WebSocket URLs.

use serde::{Deserialize, Serialize};
use ws_url::{WsUrl, WsUrlString};

/// Upstream configuration borrowing its URL from the configuration text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct Upstream<'a> {
    /// Name.
    name: &'a str,
    /// Endpoint.
    #[serde(borrow)]
    endpoint: WsUrl<'a>,
}

/// Upstream configuration owning its URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct OwnedUpstream {
    /// Name.
    name: String,
    /// Endpoint.
    endpoint: WsUrlString,
    /// Fallback endpoint.
    #[serde(default)]
    fallback: Option<WsUrlString>,
}

#[test]
fn borrowed_endpoint() {
    let text = r#"{"name":"iot-hub","endpoint":"wss://hub.example.net:443/$iothub/websocket?iothub-no-client-cert=true"}"#;
    let upstream: Upstream<'_> = serde_json::from_str(text).expect("valid config");
    assert_eq!(upstream.name, "iot-hub");
    assert!(upstream.endpoint.is_secure());
    assert_eq!(upstream.endpoint.host(), "hub.example.net");
    assert_eq!(upstream.endpoint.port_or_default(), 443);
    assert_eq!(upstream.endpoint.path(), Some("$iothub/websocket"));
    assert_eq!(
        upstream.endpoint.query(),
        Some("iothub-no-client-cert=true")
    );

    let serialized = serde_json::to_string(&upstream).expect("serializable");
    assert_eq!(serialized, text);
}

#[test]
fn owned_endpoint() {
    let text = r#"{"name":"local","endpoint":"ws://localhost:9001/chat"}"#;
    let upstream: OwnedUpstream = serde_json::from_str(text).expect("valid config");
    assert_eq!(upstream.endpoint.as_ws_url().port(), Some(9001));
    assert_eq!(upstream.fallback, None);

    // Escaped strings cannot be borrowed, but can be owned.
    let escaped = r#"{"name":"esc","endpoint":"ws:\/\/localhost\/a\/b"}"#;
    let upstream: OwnedUpstream = serde_json::from_str(escaped).expect("valid config");
    assert_eq!(upstream.endpoint.as_str(), "ws://localhost/a/b");
    assert_eq!(upstream.endpoint.as_ws_url().path(), Some("a/b"));
    assert!(serde_json::from_str::<Upstream<'_>>(escaped).is_err());
}

#[test]
fn invalid_endpoint_is_reported() {
    let text = r#"{"name":"bad","endpoint":"wss://host?query/path"}"#;
    let err = serde_json::from_str::<OwnedUpstream>(text).expect_err("out of order");
    assert!(
        err.to_string()
            .starts_with("invalid WebSocket URL: component out of order at byte 10"),
        "unexpected error: {}",
        err
    );
}
