//! UDP tracker protocol implementation (BEP 15).
//!
//! The protocol is connection-oriented over datagrams:
//! 1. the client sends a connect request,
//! 2. the server answers with a connection id bound to the client's
//!    source endpoint,
//! 3. the client presents that connection id on announce and scrape
//!    requests, which proves it can receive traffic at the address it
//!    claims to send from.
//!
//! Only the IPv4 wire variant is spoken. Datagrams that fail to parse
//! or carry an unverifiable connection id are counted and dropped
//! without a reply; answering spoofed traffic would turn the tracker
//! into an amplifier.

/// Enumerations for UDP protocol actions and errors.
pub mod enums;

/// Implementation blocks for UDP packet handling.
pub mod impls;

/// Data structures for UDP protocol messages.
pub mod structs;

/// Core UDP service implementation.
#[allow(clippy::module_inception)]
pub mod udp;
