/// Root configuration structure.
pub mod configuration;

/// Core tracker behavior settings.
pub mod tracker_config;

/// Per-listener UDP server settings.
pub mod udp_trackers_config;
