use std::net::Ipv4Addr;
use crate::udp::structs::port::Port;

/// One 6-byte peer entry of an announce response.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ResponsePeer {
    pub ip_address: Ipv4Addr,
    pub port: Port,
}
