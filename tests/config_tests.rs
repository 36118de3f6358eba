mod common;

use minitracker::config::structs::configuration::Configuration;

#[test]
fn test_defaults_are_sane() {
    let config = Configuration::init();
    assert_eq!(config.udp_server[0].bind_address, "0.0.0.0:8080");
    assert_eq!(config.udp_server[0].threads, 4);
    assert!(config.udp_server[0].enabled);
    assert_eq!(config.tracker_config.peers_timeout, 2700);
    assert_eq!(config.tracker_config.peers_returned, 72);
    assert!(config.tracker_config.peers_returned as usize <= 246);
    assert!(!config.tracker_config.use_payload_ip);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    let mut config = Configuration::init();
    config.log_level = String::from("debug");
    config.tracker_config.peers_timeout = 1234;
    config.udp_server[0].threads = 8;

    Configuration::save_file(path, toml::to_string(&config).unwrap()).unwrap();
    let loaded = Configuration::load_file(path).unwrap();

    assert_eq!(loaded.log_level, "debug");
    assert_eq!(loaded.tracker_config.peers_timeout, 1234);
    assert_eq!(loaded.udp_server[0].threads, 8);
}

#[test]
fn test_load_file_reports_parse_errors() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "log_level = [broken").unwrap();

    let error = Configuration::load_file(path.to_str().unwrap()).unwrap_err();
    assert!(error.to_string().contains("parse error"));
}

#[test]
fn test_load_file_reports_io_errors() {
    let error = Configuration::load_file("/nonexistent/path/config.toml").unwrap_err();
    assert!(error.to_string().contains("IO error"));
}
