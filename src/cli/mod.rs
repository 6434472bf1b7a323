// file: src/cli/mod.rs
// version: 1.0.0
// guid: 8c1f0e2a-4b7d-4f3e-9a6c-2d5e8b1f7a90

//! Command line interface for the AoE volume driver

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::*;
