use parking_lot::Mutex;
use crate::tracker::structs::torrent_peers::TorrentPeers;

/// One swarm. The mutex is held for the whole of an announce or scrape
/// on this swarm; workers never hold more than one swarm lock at a time.
#[derive(Default, Debug)]
pub struct TorrentEntry {
    pub(crate) peers: Mutex<TorrentPeers>,
}
