// file: src/security/mod.rs
// version: 1.0.0
// guid: 38df98f2-a648-4198-8417-ed7d65281ae4

//! Guards for values that end up inside shell commands

pub mod validation;

pub use validation::ValidationUtils;
