use std::sync::atomic::AtomicI64;

pub struct StatsAtomics {
    pub started: AtomicI64,
    pub connections_handled: AtomicI64,
    pub announces_handled: AtomicI64,
    pub scrapes_handled: AtomicI64,
    pub errors: AtomicI64,
    pub bytes_in: AtomicI64,
    pub bytes_out: AtomicI64,
}
