//! Integration tests for `ws-url` which need extra dependencies.
