/// Wire decoding and encoding of requests.
pub mod request;

/// Wire encoding of responses.
pub mod response;

/// Token derivation and verification.
pub mod connection_secret;

/// The worker loops and request handlers.
pub mod udp_server;
