use crate::tracker::structs::info_hash::InfoHash;

/// Where the previous stale-peer sweep stopped. Survives across ticks
/// so a bounded sweep eventually visits every swarm.
#[derive(Default, Debug, Clone, Copy)]
pub struct PurgeCursor {
    pub(crate) shard: u8,
    pub(crate) last: Option<InfoHash>,
}
