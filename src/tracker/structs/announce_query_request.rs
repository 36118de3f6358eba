use std::net::Ipv4Addr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// An announce after wire decoding and source-IP resolution.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub remote_ip: Ipv4Addr,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub event: AnnounceEvent,
    /// Peers the client asked for; negative means "tracker chooses".
    pub numwant: i32,
}
