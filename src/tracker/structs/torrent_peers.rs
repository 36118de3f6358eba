use std::collections::{BTreeMap, HashMap};
use crate::tracker::structs::peer_endpoint::PeerEndpoint;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// Insertion-ordered peer collection of one swarm, with cached counters.
///
/// Peers are keyed twice: by a monotonically increasing insertion order
/// (which makes "oldest entry" and "next after the sample cursor" range
/// queries cheap) and by endpoint for upserts. The two maps always
/// reference the same set of peers, and `seeds + leeches` equals the
/// number of entries.
#[derive(Default, Debug)]
pub struct TorrentPeers {
    pub(crate) by_order: BTreeMap<u64, TorrentPeer>,
    pub(crate) by_endpoint: HashMap<PeerEndpoint, u64>,
    pub(crate) next_order: u64,
    /// Insertion-order position the next peer sample starts at.
    pub(crate) sample_cursor: u64,
    pub(crate) seeds: u64,
    pub(crate) leeches: u64,
    /// Times a peer of this swarm transitioned to completed.
    pub(crate) completed: u64,
}
