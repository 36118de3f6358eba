use serde::{Deserialize, Serialize};

/// Point-in-time copy of the tracker counters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Stats {
    pub started: i64,
    pub connections_handled: i64,
    pub announces_handled: i64,
    pub scrapes_handled: i64,
    pub errors: i64,
    pub bytes_in: i64,
    pub bytes_out: i64,
}
