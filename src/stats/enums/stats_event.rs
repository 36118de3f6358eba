use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant maps to one atomic counter. Used with
/// `TorrentTracker::update_stats()` to bump counters from the workers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    ConnectionsHandled,
    AnnouncesHandled,
    ScrapesHandled,
    Errors,
    BytesIn,
    BytesOut,
}
