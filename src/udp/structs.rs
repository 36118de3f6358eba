/// Announce request body.
pub mod announce_request;

/// Announce response body.
pub mod announce_response;

/// Reannounce interval handed to clients.
pub mod announce_interval;

/// Connect request body.
pub mod connect_request;

/// Connect response body.
pub mod connect_response;

/// The 64-bit endpoint-bound token.
pub mod connection_id;

/// Secret state the connection ids are derived from.
pub mod connection_secret;

/// Download counter as carried in scrape responses.
pub mod number_of_downloads;

/// Peer counter as carried on the wire.
pub mod number_of_peers;

/// Client key field of announce requests.
pub mod peer_key;

/// UDP port as carried on the wire.
pub mod port;

/// One peer entry of an announce response.
pub mod response_peer;

/// Scrape request body.
pub mod scrape_request;

/// Scrape response body.
pub mod scrape_response;

/// Per-hash counters of a scrape response.
pub mod torrent_scrape_statistics;

/// Client-chosen request correlation id.
pub mod transaction_id;

/// The UDP server with its shared receive socket.
pub mod udp_server;
