//! Benchmarks for `ws-url`.
