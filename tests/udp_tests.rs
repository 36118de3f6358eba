mod common;

use std::net::{Ipv4Addr, SocketAddrV4};
use byteorder::{BigEndian, WriteBytesExt};
use minitracker::stats::enums::stats_event::StatsEvent;
use minitracker::udp::enums::request::Request;
use minitracker::udp::enums::response::Response;
use minitracker::udp::structs::connection_secret::ConnectionSecret;
use minitracker::udp::structs::udp_server::UdpServer;
use minitracker::udp::udp::{MAX_SCRAPE_TORRENTS, PROTOCOL_IDENTIFIER};

fn client() -> SocketAddrV4 {
    SocketAddrV4::new(Ipv4Addr::new(198, 51, 100, 7), 6881)
}

fn connect_packet(connection_id: i64, transaction_id: u32) -> Vec<u8> {
    let mut packet = vec![];
    packet.write_i64::<BigEndian>(connection_id).unwrap();
    packet.write_u32::<BigEndian>(0).unwrap();
    packet.write_u32::<BigEndian>(transaction_id).unwrap();
    packet
}

#[allow(clippy::too_many_arguments)]
fn announce_packet(connection_id: i64, transaction_id: u32, info_hash: [u8; 20], left: u64, event: u32, ip: u32, num_want: i32, port: u16) -> Vec<u8> {
    let mut packet = vec![];
    packet.write_i64::<BigEndian>(connection_id).unwrap();
    packet.write_u32::<BigEndian>(1).unwrap();
    packet.write_u32::<BigEndian>(transaction_id).unwrap();
    packet.extend_from_slice(&info_hash);
    packet.extend_from_slice(&[0x2du8; 20]);
    packet.write_u64::<BigEndian>(0).unwrap();
    packet.write_u64::<BigEndian>(left).unwrap();
    packet.write_u64::<BigEndian>(0).unwrap();
    packet.write_u32::<BigEndian>(event).unwrap();
    packet.write_u32::<BigEndian>(ip).unwrap();
    packet.write_u32::<BigEndian>(0).unwrap();
    packet.write_i32::<BigEndian>(num_want).unwrap();
    packet.write_u16::<BigEndian>(port).unwrap();
    packet
}

fn scrape_packet(connection_id: i64, transaction_id: u32, info_hashes: &[[u8; 20]]) -> Vec<u8> {
    let mut packet = vec![];
    packet.write_i64::<BigEndian>(connection_id).unwrap();
    packet.write_u32::<BigEndian>(2).unwrap();
    packet.write_u32::<BigEndian>(transaction_id).unwrap();
    for info_hash in info_hashes {
        packet.extend_from_slice(info_hash);
    }
    packet
}

#[test]
fn test_connect_handshake_issues_verifiable_token() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    let packet = connect_packet(PROTOCOL_IDENTIFIER, 0xdeadbeef);

    match UdpServer::handle_packet(&packet, client(), &tracker, &secret) {
        Some(Response::Connect(response)) => {
            assert_eq!(response.transaction_id.0, 0xdeadbeefu32 as i32);
            assert!(secret.verify(response.connection_id, &client()));
            assert!(!secret.verify(response.connection_id, &SocketAddrV4::new(*client().ip(), 6882)));
        }
        other => panic!("expected connect response, got {other:?}"),
    }
    assert_eq!(tracker.get_stats().connections_handled, 1);
    assert_eq!(tracker.get_stats().errors, 0);
}

#[test]
fn test_connect_with_wrong_magic_is_dropped() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    let packet = connect_packet(0, 1);

    assert!(UdpServer::handle_packet(&packet, client(), &tracker, &secret).is_none());
    assert_eq!(tracker.get_stats().errors, 1);
    assert_eq!(tracker.get_stats().connections_handled, 0);
}

#[test]
fn test_announce_with_stale_token_is_dropped() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    let packet = announce_packet(0, 2, [1u8; 20], 100, 2, 0, -1, 6881);

    assert!(UdpServer::handle_packet(&packet, client(), &tracker, &secret).is_none());
    assert_eq!(tracker.get_stats().errors, 1);
    assert_eq!(tracker.get_stats().announces_handled, 0);
    // no swarm is created for unauthenticated traffic
    assert!(tracker.torrents.is_empty());
}

#[test]
fn test_scrape_with_stale_token_is_dropped() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    let packet = scrape_packet(0, 3, &[[1u8; 20]]);

    assert!(UdpServer::handle_packet(&packet, client(), &tracker, &secret).is_none());
    assert_eq!(tracker.get_stats().errors, 1);
}

#[test]
fn test_first_announce_creates_swarm() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    let token = secret.issue(&client());

    let mut info_hash = [0u8; 20];
    info_hash[19] = 1;
    let packet = announce_packet(token.0, 4, info_hash, 100, 2, 0, -1, 6881);

    match UdpServer::handle_packet(&packet, client(), &tracker, &secret) {
        Some(Response::Announce(response)) => {
            assert_eq!(response.transaction_id.0, 4);
            assert_eq!(response.seeders.0, 0);
            assert_eq!(response.leechers.0, 1);
            // the announcer never sees itself in the sample
            assert!(response.peers.is_empty());
            assert!(response.announce_interval.0 >= 1680);
            assert!(response.announce_interval.0 <= 1920);
        }
        other => panic!("expected announce response, got {other:?}"),
    }
    assert_eq!(tracker.torrents.len(), 1);
    assert_eq!(tracker.get_stats().announces_handled, 1);
}

#[test]
fn test_seed_transition_and_repeat_announce() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    let token = secret.issue(&client());

    let mut info_hash = [0u8; 20];
    info_hash[19] = 1;

    let started = announce_packet(token.0, 5, info_hash, 100, 2, 0, -1, 6881);
    UdpServer::handle_packet(&started, client(), &tracker, &secret).unwrap();

    let completed = announce_packet(token.0, 6, info_hash, 0, 1, 0, -1, 6881);
    match UdpServer::handle_packet(&completed, client(), &tracker, &secret) {
        Some(Response::Announce(response)) => {
            assert_eq!(response.seeders.0, 1);
            assert_eq!(response.leechers.0, 0);
        }
        other => panic!("expected announce response, got {other:?}"),
    }
    let info_hash_typed = minitracker::tracker::structs::info_hash::InfoHash(info_hash);
    assert_eq!(tracker.handle_scrape(&info_hash_typed), Some((1, 1, 0)));

    // repeating the completed announce must not count another download
    let repeat = announce_packet(token.0, 7, info_hash, 0, 1, 0, -1, 6881);
    UdpServer::handle_packet(&repeat, client(), &tracker, &secret).unwrap();
    assert_eq!(tracker.handle_scrape(&info_hash_typed), Some((1, 1, 0)));
}

#[test]
fn test_scrape_known_and_unknown_hashes() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    let token = secret.issue(&client());

    let mut known = [0u8; 20];
    known[19] = 1;
    let mut unknown = [0u8; 20];
    unknown[19] = 2;

    let started = announce_packet(token.0, 8, known, 100, 2, 0, -1, 6881);
    UdpServer::handle_packet(&started, client(), &tracker, &secret).unwrap();
    let completed = announce_packet(token.0, 9, known, 0, 1, 0, -1, 6881);
    UdpServer::handle_packet(&completed, client(), &tracker, &secret).unwrap();

    let packet = scrape_packet(token.0, 10, &[known, unknown]);
    match UdpServer::handle_packet(&packet, client(), &tracker, &secret) {
        Some(Response::Scrape(response)) => {
            assert_eq!(response.transaction_id.0, 10);
            assert_eq!(response.torrent_stats.len(), 2);
            assert_eq!(response.torrent_stats[0].seeders.0, 1);
            assert_eq!(response.torrent_stats[0].completed.0, 1);
            assert_eq!(response.torrent_stats[0].leechers.0, 0);
            assert_eq!(response.torrent_stats[1].seeders.0, 0);
            assert_eq!(response.torrent_stats[1].completed.0, 0);
            assert_eq!(response.torrent_stats[1].leechers.0, 0);
        }
        other => panic!("expected scrape response, got {other:?}"),
    }
    // scraping an unknown hash does not create a swarm
    assert_eq!(tracker.torrents.len(), 1);
    assert_eq!(tracker.get_stats().scrapes_handled, 1);
}

#[test]
fn test_second_peer_sees_the_first() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();

    let first = SocketAddrV4::new(Ipv4Addr::new(198, 51, 100, 7), 6881);
    let second = SocketAddrV4::new(Ipv4Addr::new(198, 51, 100, 8), 6882);
    let info_hash = [5u8; 20];

    let packet = announce_packet(secret.issue(&first).0, 11, info_hash, 100, 2, 0, -1, 6881);
    UdpServer::handle_packet(&packet, first, &tracker, &secret).unwrap();

    let packet = announce_packet(secret.issue(&second).0, 12, info_hash, 100, 2, 0, -1, 6882);
    match UdpServer::handle_packet(&packet, second, &tracker, &secret) {
        Some(Response::Announce(response)) => {
            assert_eq!(response.leechers.0, 2);
            assert_eq!(response.peers.len(), 1);
            assert_eq!(response.peers[0].ip_address, *first.ip());
            assert_eq!(response.peers[0].port.0, 6881);
        }
        other => panic!("expected announce response, got {other:?}"),
    }
}

#[test]
fn test_source_ip_overrides_payload_ip_by_default() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    assert!(!tracker.config.tracker_config.use_payload_ip);

    let info_hash = [6u8; 20];
    let spoofed = u32::from_be_bytes([10, 9, 8, 7]);
    let packet = announce_packet(secret.issue(&client()).0, 13, info_hash, 100, 2, spoofed, -1, 6881);
    UdpServer::handle_packet(&packet, client(), &tracker, &secret).unwrap();

    let second = SocketAddrV4::new(Ipv4Addr::new(198, 51, 100, 8), 6882);
    let packet = announce_packet(secret.issue(&second).0, 14, info_hash, 100, 2, 0, -1, 6882);
    match UdpServer::handle_packet(&packet, second, &tracker, &secret) {
        Some(Response::Announce(response)) => {
            // the first peer is listed under its real source address
            assert_eq!(response.peers.len(), 1);
            assert_eq!(response.peers[0].ip_address, *client().ip());
        }
        other => panic!("expected announce response, got {other:?}"),
    }
}

#[test]
fn test_stopped_event_removes_peer_from_swarm() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();
    let token = secret.issue(&client());
    let info_hash = [7u8; 20];

    let started = announce_packet(token.0, 15, info_hash, 100, 2, 0, -1, 6881);
    UdpServer::handle_packet(&started, client(), &tracker, &secret).unwrap();

    let stopped = announce_packet(token.0, 16, info_hash, 100, 3, 0, -1, 6881);
    match UdpServer::handle_packet(&stopped, client(), &tracker, &secret) {
        Some(Response::Announce(response)) => {
            assert_eq!(response.seeders.0, 0);
            assert_eq!(response.leechers.0, 0);
        }
        other => panic!("expected announce response, got {other:?}"),
    }
    let info_hash_typed = minitracker::tracker::structs::info_hash::InfoHash(info_hash);
    assert_eq!(tracker.handle_scrape(&info_hash_typed), Some((0, 0, 0)));
}

#[test]
fn test_garbage_datagram_counts_one_error() {
    let tracker = common::create_test_tracker();
    let secret = ConnectionSecret::new();

    assert!(UdpServer::handle_packet(&[0u8; 3], client(), &tracker, &secret).is_none());
    assert!(UdpServer::handle_packet(&[0xffu8; 40], client(), &tracker, &secret).is_none());
    assert_eq!(tracker.get_stats().errors, 2);
}

#[test]
fn test_request_encoder_matches_parser() {
    // the client-side encoder and the server-side parser agree
    let request = Request::from_bytes(&connect_packet(PROTOCOL_IDENTIFIER, 77), MAX_SCRAPE_TORRENTS).unwrap();
    let mut rebuilt = vec![];
    request.write(&mut rebuilt).unwrap();
    assert_eq!(rebuilt, connect_packet(PROTOCOL_IDENTIFIER, 77));
}

#[test]
fn test_bytes_counters_update() {
    let tracker = common::create_test_tracker();
    tracker.update_stats(StatsEvent::BytesIn, 98);
    tracker.update_stats(StatsEvent::BytesOut, 26);
    let stats = tracker.get_stats();
    assert_eq!(stats.bytes_in, 98);
    assert_eq!(stats.bytes_out, 26);
}
