use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::purge_cursor::PurgeCursor;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_sharding::TorrentSharding;

impl Default for TorrentSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl TorrentSharding {
    pub fn new() -> TorrentSharding {
        TorrentSharding {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(BTreeMap::new()))),
            purge_cursor: Mutex::new(PurgeCursor::default()),
        }
    }

    #[inline]
    fn shard(&self, info_hash: &InfoHash) -> &RwLock<BTreeMap<InfoHash, Arc<TorrentEntry>>> {
        &self.shards[info_hash.0[0] as usize]
    }

    pub fn get(&self, info_hash: &InfoHash) -> Option<Arc<TorrentEntry>> {
        self.shard(info_hash).read().get(info_hash).cloned()
    }

    /// Look the swarm up under the read lock first and only take the
    /// write lock on a miss, so announce traffic for existing swarms
    /// never serializes on swarm creation.
    pub fn get_or_insert(&self, info_hash: InfoHash) -> Arc<TorrentEntry> {
        if let Some(entry) = self.shard(&info_hash).read().get(&info_hash) {
            return entry.clone();
        }
        self.shard(&info_hash)
            .write()
            .entry(info_hash)
            .or_default()
            .clone()
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }

    /// Purge stale peers from at most `budget` swarms, resuming where
    /// the previous sweep stopped and wrapping at the end of the table.
    /// Swarm locks are taken one at a time with no shard lock held, so
    /// a sweep never blocks announces for longer than one swarm purge.
    /// Returns the number of peers removed.
    pub fn sweep(&self, cutoff: u64, budget: usize) -> u64 {
        let mut cursor = self.purge_cursor.lock();
        let mut removed = 0;
        let mut visited = 0;
        let mut shard_hops = 0;
        while visited < budget {
            let next = {
                let guard = self.shards[cursor.shard as usize].read();
                match cursor.last {
                    Some(last) => guard
                        .range((Bound::Excluded(last), Bound::Unbounded))
                        .next()
                        .map(|(hash, entry)| (*hash, entry.clone())),
                    None => guard
                        .iter()
                        .next()
                        .map(|(hash, entry)| (*hash, entry.clone())),
                }
            };
            match next {
                Some((hash, entry)) => {
                    cursor.last = Some(hash);
                    removed += entry.purge_stale(cutoff);
                    visited += 1;
                }
                None => {
                    // One full lap over the shards ends the sweep.
                    if shard_hops == 256 {
                        break;
                    }
                    shard_hops += 1;
                    cursor.shard = cursor.shard.wrapping_add(1);
                    cursor.last = None;
                }
            }
        }
        removed
    }
}
