/// Hex display and parsing for info hashes.
pub mod info_hash;

/// Hex display for peer ids.
pub mod peer_id;

/// Upsert, sampling and purge logic of a peer collection.
pub mod torrent_peers;

/// Announce and scrape operations on one swarm.
pub mod torrent_entry;

/// Lookup, insertion and the bounded sweep over the shard table.
pub mod torrent_sharding;

/// Announce/scrape/cleanup entry points on the tracker context.
pub mod torrent_tracker;
