//! Deterministic, pure logic: keyword resolution, mapping, matching, and the
//! verdict lattice.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod keyword;
pub mod mapper;
pub mod matching;
pub mod model;
pub mod verdict;
