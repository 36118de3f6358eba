use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::udp::structs::connection_secret::ConnectionSecret;

pub struct UdpServer {
    /// Receive socket shared by all workers. Each worker replies over a
    /// private socket bound to the same endpoint instead.
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) bind_address: SocketAddr,
    pub(crate) config: Arc<UdpTrackersConfig>,
    pub(crate) secret: ConnectionSecret,
    pub(crate) tracker: Arc<TorrentTracker>,
}
