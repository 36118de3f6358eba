use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    /// Base announce interval handed to clients, in seconds.
    pub request_interval: u64,
    /// Random jitter added on top of the base interval so reannounces
    /// spread out instead of arriving in bursts.
    pub request_interval_jitter: u64,
    /// Peers that have not announced for this long are purged.
    pub peers_timeout: u64,
    /// Maximum number of swarms visited per cleanup tick.
    pub peers_cleanup_budget: u64,
    /// Number of peers returned when the client does not ask for a
    /// specific amount (numwant -1).
    pub peers_returned: u64,
    /// Hard cap on the number of peers in a single announce response.
    pub peers_returned_max: u64,
    /// Upper bound on tracked peers per swarm; the oldest entry is
    /// dropped when a full swarm receives a new peer.
    pub max_peers_per_torrent: u64,
    /// Honor a nonzero IP field in announce requests instead of the
    /// datagram source address. Off by default: it allows spoofing.
    pub use_payload_ip: bool,
}
