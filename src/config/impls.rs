/// Loading, saving and defaults for [`crate::config::structs::configuration::Configuration`].
pub mod configuration;

/// Display implementation for configuration errors.
pub mod configuration_error;
