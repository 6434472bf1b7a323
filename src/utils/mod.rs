// file: src/utils/mod.rs
// version: 1.0.0
// guid: 16ff2b48-e5ca-468e-8918-677129576136

//! Utility modules for system operations

pub mod system;

pub use system::{PrereqReport, SystemUtils};
