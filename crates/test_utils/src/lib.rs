//! Test Utilities Crate
//!
//! Shared test infrastructure for the back-office test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built ledgers and source events
//! - `builders`: Builder helpers for test data construction
//! - `assertions`: Custom assertion helpers for statements
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
