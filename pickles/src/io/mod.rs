//! I/O helpers: configuration and parser output.

pub mod config;
pub mod document;
