// file: src/volume/mod.rs
// version: 1.0.0
// guid: e525a714-b5f3-4acc-8ff4-b762c3bf86ab

//! Logical volume and AoE export management

pub mod commands;
pub mod driver;

pub use commands::{size_string, CommandBuilder};
pub use driver::AoeDriver;
