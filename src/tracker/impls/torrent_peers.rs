use crate::tracker::structs::peer_endpoint::PeerEndpoint;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_peers::TorrentPeers;

impl TorrentPeers {
    /// Insert or refresh the peer announcing from `endpoint`.
    ///
    /// Counter transitions happen here: a role flip moves the peer
    /// between the seed and leech counts, and the first completed event
    /// of an entry bumps the download count. When a full swarm receives
    /// an unknown endpoint, the oldest entry makes room first.
    pub(crate) fn upsert(&mut self, peer_id: PeerId, endpoint: PeerEndpoint, seeding: bool, completed_event: bool, now: u64, max_peers: usize) {
        if let Some(order) = self.by_endpoint.get(&endpoint).copied() {
            if let Some(peer) = self.by_order.get_mut(&order) {
                if peer.seeding != seeding {
                    if seeding {
                        self.leeches -= 1;
                        self.seeds += 1;
                    } else {
                        self.seeds -= 1;
                        self.leeches += 1;
                    }
                    peer.seeding = seeding;
                }
                if completed_event && !peer.completed {
                    peer.completed = true;
                    self.completed += 1;
                }
                peer.peer_id = peer_id;
                peer.updated = now;
            }
            return;
        }

        if self.by_order.len() >= max_peers {
            self.evict_oldest();
        }

        let order = self.next_order;
        self.next_order += 1;
        let mut peer = TorrentPeer {
            peer_id,
            endpoint,
            updated: now,
            seeding,
            completed: false,
        };
        if completed_event {
            peer.completed = true;
            self.completed += 1;
        }
        if seeding {
            self.seeds += 1;
        } else {
            self.leeches += 1;
        }
        self.by_endpoint.insert(endpoint, order);
        self.by_order.insert(order, peer);
    }

    pub(crate) fn remove(&mut self, endpoint: &PeerEndpoint) {
        if let Some(order) = self.by_endpoint.remove(endpoint) {
            if let Some(peer) = self.by_order.remove(&order) {
                if peer.seeding {
                    self.seeds -= 1;
                } else {
                    self.leeches -= 1;
                }
            }
        }
    }

    fn evict_oldest(&mut self) {
        if let Some(order) = self.by_order.keys().next().copied() {
            if let Some(peer) = self.by_order.remove(&order) {
                self.by_endpoint.remove(&peer.endpoint);
                if peer.seeding {
                    self.seeds -= 1;
                } else {
                    self.leeches -= 1;
                }
            }
        }
    }

    /// Up to `want` peer endpoints, contiguous in insertion order from
    /// the rotating cursor, skipping the announcer itself. Successive
    /// announces therefore walk through the whole collection instead of
    /// always answering with the same peers.
    pub(crate) fn sample(&mut self, want: usize, exclude: &PeerEndpoint) -> Vec<PeerEndpoint> {
        if want == 0 || self.by_order.is_empty() {
            return Vec::new();
        }
        let start = self.sample_cursor;
        let mut out = Vec::with_capacity(want.min(self.by_order.len()));
        for (&order, peer) in self.by_order.range(start..).chain(self.by_order.range(..start)) {
            if out.len() == want {
                break;
            }
            if peer.endpoint == *exclude {
                continue;
            }
            out.push(peer.endpoint);
            self.sample_cursor = order + 1;
        }
        out
    }

    /// Drop every peer whose last announce is older than `cutoff`.
    /// Returns the number of removed peers.
    pub(crate) fn purge_stale(&mut self, cutoff: u64) -> u64 {
        let stale: Vec<u64> = self.by_order.iter()
            .filter(|(_, peer)| peer.updated < cutoff)
            .map(|(&order, _)| order)
            .collect();
        let removed = stale.len() as u64;
        for order in stale {
            if let Some(peer) = self.by_order.remove(&order) {
                self.by_endpoint.remove(&peer.endpoint);
                if peer.seeding {
                    self.seeds -= 1;
                } else {
                    self.leeches -= 1;
                }
            }
        }
        removed
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.by_order.len()
    }
}
