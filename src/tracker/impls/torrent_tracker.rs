use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_result::AnnounceResult;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn new(config: Arc<Configuration>) -> TorrentTracker {
        TorrentTracker {
            config,
            torrents: TorrentSharding::new(),
            stats: Arc::new(StatsAtomics::new()),
        }
    }

    /// Upsert the announcing peer into its swarm (creating the swarm on
    /// first contact) and collect the reply counters and peer sample.
    pub fn handle_announce(&self, query: AnnounceQueryRequest, now: u64) -> AnnounceResult {
        let tracker_config = &self.config.tracker_config;
        let want = if query.numwant < 0 {
            tracker_config.peers_returned
        } else {
            query.numwant as u64
        };
        let want = want.min(tracker_config.peers_returned_max) as usize;
        let torrent = self.torrents.get_or_insert(query.info_hash);
        torrent.announce(&query, want, tracker_config.max_peers_per_torrent as usize, now)
    }

    /// The swarm's (seeders, downloads, leechers), or `None` when the
    /// info hash is unknown; scrape replies zero-fill unknown hashes.
    pub fn handle_scrape(&self, info_hash: &InfoHash) -> Option<(u64, u64, u64)> {
        self.torrents.get(info_hash).map(|torrent| torrent.scrape())
    }

    /// One bounded stale-peer sweep. Returns the number of peers removed.
    pub fn clean_peers(&self, now: u64) -> u64 {
        let tracker_config = &self.config.tracker_config;
        let cutoff = now.saturating_sub(tracker_config.peers_timeout);
        self.torrents.sweep(cutoff, tracker_config.peers_cleanup_budget as usize)
    }
}
