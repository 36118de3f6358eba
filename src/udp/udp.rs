use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use log::{error, info};
use tokio::task::JoinHandle;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::udp::structs::udp_server::UdpServer;

/// The BEP 15 connect magic (0x41727101980).
pub const PROTOCOL_IDENTIFIER: i64 = 0x41727101980;

/// Hashes answered per scrape; more would not fit a sub-MTU datagram
/// ((MTU - 8) / 12) and would lock too many swarms for one response.
pub const MAX_SCRAPE_TORRENTS: u8 = 74;

pub const MAX_PACKET_SIZE: usize = 1496;

pub async fn udp_service(config: Arc<UdpTrackersConfig>, tracker: Arc<TorrentTracker>, rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    let address: SocketAddr = config.bind_address.parse().unwrap_or_else(|e| {
        error!("Invalid UDP bind address {}: {e}", config.bind_address);
        exit(1);
    });
    let udp_server = UdpServer::new(tracker, address, config.clone()).await.unwrap_or_else(|e| {
        error!("Could not listen to the UDP port: {e}");
        exit(1);
    });
    info!("[UDP] Starting a server listener on {address} with {} threads", config.threads);
    tokio::spawn(async move {
        udp_server.start(rx).await;
    })
}
