//! Core tracker logic module.
//!
//! Contains the swarm table (sharded by the first byte of the info hash),
//! the per-swarm peer sets with their seeder/leecher/download accounting,
//! and the announce/scrape/cleanup operations driving them.

/// Announce event enumeration.
pub mod enums;

/// Implementation blocks for tracker operations.
pub mod impls;

/// Tracker data structures.
pub mod structs;
