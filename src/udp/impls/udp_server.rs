use std::net::{SocketAddr, SocketAddrV4};
use std::sync::Arc;
use log::{debug, error, info};
use rand::Rng;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use crate::common::common::current_time;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::udp::enums::request::Request;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_secret::ConnectionSecret;
use crate::udp::structs::number_of_downloads::NumberOfDownloads;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::port::Port;
use crate::udp::structs::response_peer::ResponsePeer;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::udp::{MAX_PACKET_SIZE, MAX_SCRAPE_TORRENTS};

impl UdpServer {
    pub async fn new(tracker: Arc<TorrentTracker>, bind_address: SocketAddr, config: Arc<UdpTrackersConfig>) -> tokio::io::Result<UdpServer>
    {
        let socket = UdpServer::bind_socket(bind_address, &config)?;
        Ok(UdpServer {
            socket: Arc::new(socket),
            bind_address,
            config,
            secret: ConnectionSecret::new(),
            tracker,
        })
    }

    /// Open a UDP socket on `bind_address` with the configured buffer
    /// sizes. Address and port reuse are required because every worker
    /// binds its own send socket to the tracker endpoint: replies must
    /// originate from the port clients announce to or they are refused
    /// by NATs.
    fn bind_socket(bind_address: SocketAddr, config: &UdpTrackersConfig) -> tokio::io::Result<UdpSocket>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_recv_buffer_size(config.receive_buffer_size).map_err(tokio::io::Error::other)?;
        socket.set_send_buffer_size(config.send_buffer_size).map_err(tokio::io::Error::other)?;
        socket.set_reuse_address(config.reuse_address).map_err(tokio::io::Error::other)?;
        #[cfg(unix)]
        socket.set_reuse_port(true).map_err(tokio::io::Error::other)?;
        socket.bind(&bind_address.into()).map_err(tokio::io::Error::other)?;
        socket.set_nonblocking(true).map_err(tokio::io::Error::other)?;
        let std_socket: std::net::UdpSocket = socket.into();
        UdpSocket::from_std(std_socket)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn start(&self, rx: tokio::sync::watch::Receiver<bool>)
    {
        let mut workers = Vec::with_capacity(self.config.threads as usize);
        for index in 0..self.config.threads {
            let socket_clone = self.socket.clone();
            let tracker_clone = self.tracker.clone();
            let secret_clone = self.secret.clone();
            let config_clone = self.config.clone();
            let bind_address = self.bind_address;
            let mut rx = rx.clone();
            workers.push(tokio::spawn(async move {
                let send_socket = match UdpServer::bind_socket(bind_address, &config_clone) {
                    Ok(socket) => socket,
                    Err(error) => {
                        error!("[UDP] worker {index} could not open a send socket: {error}");
                        return;
                    }
                };
                let mut data = [0; MAX_PACKET_SIZE];
                loop {
                    tokio::select! {
                        _ = rx.changed() => {
                            info!("Stopping UDP worker {index} on {bind_address}...");
                            break;
                        }
                        result = socket_clone.recv_from(&mut data) => {
                            match result {
                                Ok((valid_bytes, remote_addr)) => {
                                    tracker_clone.update_stats(StatsEvent::BytesIn, valid_bytes as i64);
                                    let remote_v4 = match remote_addr {
                                        SocketAddr::V4(remote_v4) => remote_v4,
                                        SocketAddr::V6(remote_v6) => {
                                            // IPv4-only wire format
                                            tracker_clone.update_stats(StatsEvent::Errors, 1);
                                            debug!("[UDP] dropping IPv6 datagram from {remote_v6}");
                                            continue;
                                        }
                                    };
                                    let response = UdpServer::handle_packet(&data[..valid_bytes], remote_v4, &tracker_clone, &secret_clone);
                                    if let Some(response) = response {
                                        if !UdpServer::send_response(&tracker_clone, &send_socket, remote_v4, response).await {
                                            break;
                                        }
                                    }
                                }
                                Err(error) => {
                                    if !*rx.borrow() {
                                        error!("[UDP] recv_from failed: {error}");
                                    }
                                    break;
                                }
                            }
                        }
                    }
                }
            }));
        }
        futures::future::join_all(workers).await;
    }

    /// Classify and handle one datagram. `None` means drop: the tracker
    /// never answers malformed or unauthenticated traffic.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn handle_packet(payload: &[u8], remote_addr: SocketAddrV4, tracker: &TorrentTracker, secret: &ConnectionSecret) -> Option<Response>
    {
        match Request::from_bytes(payload, MAX_SCRAPE_TORRENTS) {
            Ok(Request::Connect(request)) => {
                Some(UdpServer::handle_udp_connect(remote_addr, &request, tracker, secret))
            }
            Ok(Request::Announce(request)) => {
                UdpServer::handle_udp_announce(remote_addr, &request, tracker, secret)
            }
            Ok(Request::Scrape(request)) => {
                UdpServer::handle_udp_scrape(remote_addr, &request, tracker, secret)
            }
            Err(error) => {
                tracker.update_stats(StatsEvent::Errors, 1);
                debug!("[UDP] dropping datagram from {remote_addr}: {error}");
                None
            }
        }
    }

    pub fn handle_udp_connect(remote_addr: SocketAddrV4, request: &ConnectRequest, tracker: &TorrentTracker, secret: &ConnectionSecret) -> Response
    {
        let connection_id = secret.issue(&remote_addr);
        tracker.update_stats(StatsEvent::ConnectionsHandled, 1);
        Response::from(ConnectResponse {
            transaction_id: request.transaction_id,
            connection_id,
        })
    }

    pub fn handle_udp_announce(remote_addr: SocketAddrV4, request: &AnnounceRequest, tracker: &TorrentTracker, secret: &ConnectionSecret) -> Option<Response>
    {
        if !secret.verify(request.connection_id, &remote_addr) {
            tracker.update_stats(StatsEvent::Errors, 1);
            debug!("[UDP] invalid connection id on announce from {remote_addr}");
            return None;
        }

        let tracker_config = &tracker.config.tracker_config;
        let remote_ip = if tracker_config.use_payload_ip {
            request.ip_address.unwrap_or(*remote_addr.ip())
        } else {
            *remote_addr.ip()
        };

        let result = tracker.handle_announce(AnnounceQueryRequest {
            info_hash: request.info_hash,
            peer_id: request.peer_id,
            remote_ip,
            port: request.port.0,
            uploaded: request.bytes_uploaded.0 as u64,
            downloaded: request.bytes_downloaded.0 as u64,
            left: request.bytes_left.0 as u64,
            event: request.event,
            numwant: request.peers_wanted.0,
        }, current_time());

        let interval = tracker_config.request_interval
            + rand::rng().random_range(0..=tracker_config.request_interval_jitter);

        tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
        Some(Response::from(AnnounceResponse {
            transaction_id: request.transaction_id,
            announce_interval: AnnounceInterval(interval as i32),
            leechers: NumberOfPeers(result.leeches as i32),
            seeders: NumberOfPeers(result.seeds as i32),
            peers: result.peers.iter()
                .map(|peer| ResponsePeer {
                    ip_address: peer.ip,
                    port: Port(peer.port),
                })
                .collect(),
        }))
    }

    pub fn handle_udp_scrape(remote_addr: SocketAddrV4, request: &ScrapeRequest, tracker: &TorrentTracker, secret: &ConnectionSecret) -> Option<Response>
    {
        if !secret.verify(request.connection_id, &remote_addr) {
            tracker.update_stats(StatsEvent::Errors, 1);
            debug!("[UDP] invalid connection id on scrape from {remote_addr}");
            return None;
        }

        let mut torrent_stats = Vec::with_capacity(request.info_hashes.len());
        for info_hash in &request.info_hashes {
            let scrape_entry = match tracker.handle_scrape(info_hash) {
                Some((seeders, completed, leechers)) => TorrentScrapeStatistics {
                    seeders: NumberOfPeers(seeders as i32),
                    completed: NumberOfDownloads(completed as i32),
                    leechers: NumberOfPeers(leechers as i32),
                },
                None => TorrentScrapeStatistics {
                    seeders: NumberOfPeers(0),
                    completed: NumberOfDownloads(0),
                    leechers: NumberOfPeers(0),
                },
            };
            torrent_stats.push(scrape_entry);
        }

        tracker.update_stats(StatsEvent::ScrapesHandled, 1);
        Some(Response::from(ScrapeResponse {
            transaction_id: request.transaction_id,
            torrent_stats,
        }))
    }

    /// Serialize and send. Returns false on a hard send error, which
    /// terminates the calling worker.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn send_response(tracker: &TorrentTracker, socket: &UdpSocket, remote_addr: SocketAddrV4, response: Response) -> bool
    {
        let mut buffer = Vec::with_capacity(response.estimated_size());
        match response.write(&mut buffer) {
            Ok(_) => UdpServer::send_packet(tracker, socket, remote_addr, &buffer).await,
            Err(error) => {
                debug!("could not write response to bytes: {error}");
                true
            }
        }
    }

    pub async fn send_packet(tracker: &TorrentTracker, socket: &UdpSocket, remote_addr: SocketAddrV4, payload: &[u8]) -> bool
    {
        match socket.send_to(payload, SocketAddr::V4(remote_addr)).await {
            Ok(sent) => {
                tracker.update_stats(StatsEvent::BytesOut, sent as i64);
                true
            }
            Err(error) => {
                error!("[UDP] send_to {remote_addr} failed: {error}");
                false
            }
        }
    }
}
