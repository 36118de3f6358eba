// Common test utilities and fixtures

use std::sync::Arc;
use minitracker::config::structs::configuration::Configuration;
use minitracker::tracker::structs::info_hash::InfoHash;
use minitracker::tracker::structs::peer_id::PeerId;
use minitracker::tracker::structs::torrent_tracker::TorrentTracker;

/// Create a test configuration with the built-in defaults.
#[allow(dead_code)]
pub fn create_test_config() -> Arc<Configuration> {
    Arc::new(Configuration::init())
}

/// Create a test tracker instance.
#[allow(dead_code)]
pub fn create_test_tracker() -> Arc<TorrentTracker> {
    Arc::new(TorrentTracker::new(create_test_config()))
}

/// Generate a random InfoHash for testing.
#[allow(dead_code)]
pub fn random_info_hash() -> InfoHash {
    use rand::Rng;
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

/// Generate a random PeerId for testing.
#[allow(dead_code)]
pub fn random_peer_id() -> PeerId {
    use rand::Rng;
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}
