// file: src/logging/mod.rs
// version: 1.0.0
// guid: 5183fec4-9fd5-4495-8f87-42fab0e04df3

//! Logging setup

pub mod logger;

pub use logger::{init_logger, with_async_operation_span};
