use crate::tracker::structs::peer_endpoint::PeerEndpoint;
use crate::tracker::structs::peer_id::PeerId;

/// State kept for one peer of a swarm.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub endpoint: PeerEndpoint,
    /// Wall-clock seconds of the last announce from this endpoint.
    pub updated: u64,
    /// Whether the peer reported `left == 0` on its last announce.
    pub seeding: bool,
    /// Whether this entry has already contributed a completed event.
    /// A fresh entry always starts false, so a peer that was evicted
    /// and announces `completed` again counts as a new download.
    pub completed: bool,
}
