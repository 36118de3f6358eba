//! Statistics tracking module.
//!
//! Atomic counters for all tracker activity: handled connects, announces
//! and scrapes, dropped datagrams, and traffic volume. Counters are
//! updated lock-free from every worker and sampled-and-reset once per
//! console interval so the periodic log line shows deltas.

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
