//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// Uniquely identifies a torrent across the BitTorrent network; equality
/// and ordering are byte-wise. The first byte selects the shard the
/// swarm is stored in.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
