/// Statistics operations on [`crate::tracker::structs::torrent_tracker::TorrentTracker`].
pub mod torrent_tracker;

/// Constructor for the atomic counter block.
pub mod stats_atomics;
