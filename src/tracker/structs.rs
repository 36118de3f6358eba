/// Announce parameters after wire decoding and source-IP resolution.
pub mod announce_query_request;

/// Counters and peer sample returned by an announce.
pub mod announce_result;

/// BitTorrent info hash identifier.
pub mod info_hash;

/// Client-chosen peer identifier.
pub mod peer_id;

/// IPv4 endpoint a peer can be reached on.
pub mod peer_endpoint;

/// State kept per tracked peer.
pub mod torrent_peer;

/// Insertion-ordered bounded peer collection of one swarm.
pub mod torrent_peers;

/// One swarm: a lock around its peer collection.
pub mod torrent_entry;

/// Sharded swarm table.
pub mod torrent_sharding;

/// Round-robin position of the stale-peer sweep.
pub mod purge_cursor;

/// Tracker context shared by all workers.
pub mod torrent_tracker;
