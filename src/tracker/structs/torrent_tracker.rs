use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;

/// Process-wide tracker context shared by every worker.
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents: TorrentSharding,
    pub stats: Arc<StatsAtomics>,
}
