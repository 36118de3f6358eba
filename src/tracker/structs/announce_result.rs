use crate::tracker::structs::peer_endpoint::PeerEndpoint;

/// Swarm counters and peer sample produced by an announce.
#[derive(Debug, Clone)]
pub struct AnnounceResult {
    pub seeds: u64,
    pub leeches: u64,
    pub peers: Vec<PeerEndpoint>,
}
