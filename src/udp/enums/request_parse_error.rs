use thiserror::Error;

/// Why a datagram was rejected. None of these are ever reported back
/// to the sender; the packet is counted and dropped.
#[derive(Error, Debug)]
pub enum RequestParseError {
    #[error("datagram too short")]
    Malformed,

    #[error("invalid protocol identifier in connect request")]
    InvalidMagic,

    #[error("scrape request carries no info hashes")]
    EmptyScrape,

    #[error("unknown action")]
    InvalidAction,
}
