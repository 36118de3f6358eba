use sha1::Sha1;

/// Secret state the connection ids are derived from.
///
/// A SHA-1 context primed with a random 64-bit seed at startup. Issuing
/// a token clones the context and feeds it the client endpoint, so no
/// per-client state is kept and no lock is needed. The seed is never
/// rotated: clients may sit on a token for minutes between connect and
/// announce, and rotation would force them all to reconnect at once.
#[derive(Clone)]
pub struct ConnectionSecret {
    pub(crate) context: Sha1,
}
