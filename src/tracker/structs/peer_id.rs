/// A 20-byte peer identifier chosen by the client.
///
/// Stored for identification and logging only; peer identity within a
/// swarm is the endpoint, not the peer id.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
