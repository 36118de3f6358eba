use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::purge_cursor::PurgeCursor;
use crate::tracker::structs::torrent_entry::TorrentEntry;

/// The swarm table, split into 256 shards keyed by the first byte of
/// the info hash so swarm creation only contends on one stripe.
///
/// Shard locks guard table structure only; swarm contents are guarded
/// by the per-swarm mutex. Swarms are handed out as `Arc` clones and
/// never removed, so a clone obtained under the read lock stays valid
/// after the lock is released.
pub struct TorrentSharding {
    pub(crate) shards: [Arc<RwLock<BTreeMap<InfoHash, Arc<TorrentEntry>>>>; 256],
    pub(crate) purge_cursor: Mutex<PurgeCursor>,
}
