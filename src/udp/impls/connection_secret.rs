use std::net::SocketAddrV4;
use rand::Rng;
use sha1::{Digest, Sha1};
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::connection_secret::ConnectionSecret;

impl ConnectionSecret {
    pub fn new() -> ConnectionSecret {
        ConnectionSecret::from_seed(rand::rng().random())
    }

    pub fn from_seed(seed: u64) -> ConnectionSecret {
        let mut context = Sha1::new();
        context.update(seed.to_be_bytes());
        ConnectionSecret { context }
    }

    fn digest(&self, remote_addr: &SocketAddrV4) -> [u8; 20] {
        let mut context = self.context.clone();
        context.update(remote_addr.ip().octets());
        context.update(remote_addr.port().to_be_bytes());
        context.finalize().into()
    }

    /// The token handed out on connect: the first 8 bytes of the digest
    /// over (secret, source IP, source port). Deterministic, so later
    /// requests are checked by recomputation instead of stored state.
    pub fn issue(&self, remote_addr: &SocketAddrV4) -> ConnectionId {
        let digest = self.digest(remote_addr);
        let mut token = [0u8; 8];
        token.copy_from_slice(&digest[..8]);
        ConnectionId(i64::from_be_bytes(token))
    }

    pub fn verify(&self, connection_id: ConnectionId, remote_addr: &SocketAddrV4) -> bool {
        connection_id == self.issue(remote_addr)
    }
}

impl Default for ConnectionSecret {
    fn default() -> Self {
        Self::new()
    }
}
