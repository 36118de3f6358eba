use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_result::AnnounceResult;
use crate::tracker::structs::peer_endpoint::PeerEndpoint;
use crate::tracker::structs::torrent_entry::TorrentEntry;

impl TorrentEntry {
    pub fn new() -> TorrentEntry {
        TorrentEntry::default()
    }

    /// Apply one announce to this swarm and build the reply data.
    ///
    /// A stopped event removes the entry; anything else upserts it with
    /// the role derived from `left`. The sample and the counters are
    /// taken after the update, under the same lock acquisition, so they
    /// are consistent with each other.
    pub fn announce(&self, query: &AnnounceQueryRequest, num_want: usize, max_peers: usize, now: u64) -> AnnounceResult {
        let mut peers = self.peers.lock();
        let endpoint = PeerEndpoint { ip: query.remote_ip, port: query.port };
        if query.event == AnnounceEvent::Stopped {
            peers.remove(&endpoint);
        } else {
            peers.upsert(
                query.peer_id,
                endpoint,
                query.left == 0,
                query.event == AnnounceEvent::Completed,
                now,
                max_peers,
            );
        }
        let sample = peers.sample(num_want, &endpoint);
        AnnounceResult {
            seeds: peers.seeds,
            leeches: peers.leeches,
            peers: sample,
        }
    }

    /// The cached counters: (seeders, downloads, leechers).
    pub fn scrape(&self) -> (u64, u64, u64) {
        let peers = self.peers.lock();
        (peers.seeds, peers.completed, peers.leeches)
    }

    pub fn purge_stale(&self, cutoff: u64) -> u64 {
        self.peers.lock().purge_stale(cutoff)
    }

    pub fn peer_count(&self) -> usize {
        self.peers.lock().len()
    }
}
