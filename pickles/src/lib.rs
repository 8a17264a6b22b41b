//! Behavior-document model mapping and test-result correlation.
//!
//! This crate turns a Gherkin parse tree into a stable domain model and
//! correlates that model with recorded test outcomes, yielding one
//! passed/failed/inconclusive verdict per feature, scenario, or outline.
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (keyword resolution, mapping,
//!   title matching, the verdict lattice). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (configuration, parser output).
//! - **[`results`]**: One adapter per report schema behind the
//!   [`results::TestResults`] query contract.
//!
//! [`verdicts`] combines a mapped feature with a results source for the CLI.

pub mod ast;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod results;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod verdicts;
