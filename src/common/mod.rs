//! Shared utilities and error handling.
//!
//! Contains the logging setup, wall-clock helpers and the generic
//! error type used by the configuration loader.

/// Helper functions (logging, time).
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Common data structures.
pub mod structs;
