/// Generic string error used by the configuration loader.
pub mod custom_error;

/// Signed byte counter as transmitted in announce requests.
pub mod number_of_bytes;
