use std::sync::atomic::AtomicI64;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            connections_handled: AtomicI64::new(0),
            announces_handled: AtomicI64::new(0),
            scrapes_handled: AtomicI64::new(0),
            errors: AtomicI64::new(0),
            bytes_in: AtomicI64::new(0),
            bytes_out: AtomicI64::new(0),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}
