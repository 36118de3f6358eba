//! Configuration management module.
//!
//! Handles loading, parsing and validating the `config.toml` file.
//! A missing or broken file can be regenerated with the `--create-config`
//! command line flag, which writes the built-in defaults to disk.

/// Configuration error enumeration.
pub mod enums;

/// Implementation blocks for configuration loading and saving.
pub mod impls;

/// Configuration data structures (TOML sections).
pub mod structs;
