//! Parsers.

pub(crate) mod str;
mod url;

pub(crate) use self::url::parse;
