//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! premium quote test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data, including the reference quote scenarios
//! - `builders`: Builder patterns for vehicles and quote requests
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
