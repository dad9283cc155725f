//! Zero-copy parser for WebSocket URLs.
//!
//! A WebSocket URL is decomposed into its scheme (only `ws` and `wss` are recognized),
//! host, port, path, and query, without copying the input.
//!
//! ```
//! use ws_url::{ErrorKind, WsUrl};
//!
//! let url = WsUrl::parse("ws://localhost:9001/chat/room?user=alice")?;
//! assert!(!url.is_secure());
//! assert_eq!(url.host(), "localhost");
//! assert_eq!(url.port(), Some(9001));
//! assert_eq!(url.path(), Some("chat/room"));
//! assert_eq!(url.query(), Some("user=alice"));
//!
//! let err = WsUrl::parse("wss://host?query/path").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfOrder);
//! # Ok::<_, ws_url::Error>(())
//! ```
//!
//! The parser is built on the delimiter-aware tokenizer in the [`token`] module, which is
//! usable on its own.
//!
//! # Syntax
//!
//! ```text
//! ws-url = ( "ws://" / "wss://" ) host [ ":" port ] [ "/" path ] [ "?" query ]
//! ```
//!
//! * `host` is everything up to the first `:`, `/`, or `?`, and must not be empty.
//! * `port` must be a decimal number which fits in `u16`.
//! * `path` starts after the first `/` following the host (or port), and may contain `:`
//!   and `/`.
//! * `query` starts after the first `?`, may contain `:` and `/` when a path precedes it,
//!   and must be the last component.
//! * Components present must be non-empty.
//!
//! This is not an RFC 3986 parser: percent-encoding is not decoded, IPv6 literals and
//! userinfo are not supported, and characters of components are not validated.
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + This feature enables the owned type [`WsUrlString`].
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + This automatically enables `alloc` feature.
//!     + The feature let the crate utilize std-specific stuff, such as `std::error::Error` trait.
//! * Without neither of them:
//!     + The crate can be used in `no_std` environment.
//!
//! # Other features
//!
//! * `memchr` feature:
//!     + Uses `memchr` crate to search single-byte delimiters.
//! * `serde` feature:
//!     + Implements `Serialize` and `Deserialize` for URL types.
//! * `log` feature:
//!     + Logs parse failures at `debug` level using `log` crate.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod components;
mod error;
mod log;
pub(crate) mod parser;
pub mod token;
pub mod types;

pub use self::error::{Error, ErrorKind};
#[cfg(feature = "alloc")]
pub use self::types::WsUrlString;
pub use self::types::WsUrl;
