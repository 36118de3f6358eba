use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use minitracker::common::common::{current_time, setup_logging};
use minitracker::config::structs::configuration::Configuration;
use minitracker::structs::Cli;
use minitracker::tracker::structs::torrent_tracker::TorrentTracker;
use minitracker::udp::udp::udp_service;

#[tokio::main]
async fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if config.tracker_config.use_payload_ip {
        warn!("use_payload_ip is enabled: announces can claim any IPv4 address, which allows spoofing");
    }

    let tracker = Arc::new(TorrentTracker::new(config.clone()));

    let (udp_tx, udp_rx) = tokio::sync::watch::channel(false);
    let mut udp_futures = Vec::new();
    for udp_server_object in &config.udp_server {
        if udp_server_object.enabled {
            let tracker_clone = tracker.clone();
            udp_futures.push(udp_service(Arc::new(udp_server_object.clone()), tracker_clone, udp_rx.clone()).await);
        }
    }

    if udp_futures.is_empty() {
        error!("No UDP server enabled in the configuration, nothing to do...");
        exit(1);
    }

    // Once a minute: print the counter deltas and purge stale peers
    // from a bounded slice of the swarm table.
    let console_interval = config.log_console_interval;
    let tracker_clone = tracker.clone();
    let mut console_rx = udp_rx.clone();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = console_rx.changed() => {
                    break;
                }
                _ = tokio::time::sleep(Duration::from_secs(console_interval)) => {
                    let stats = tracker_clone.reset_stats();
                    info!(
                        "[STATS] connect: {} - announce: {} - scrape: {} - error: {} - in: {} kB - out: {} kB - torrents: {}",
                        stats.connections_handled,
                        stats.announces_handled,
                        stats.scrapes_handled,
                        stats.errors,
                        stats.bytes_in / 1000,
                        stats.bytes_out / 1000,
                        tracker_clone.torrents.len()
                    );
                    let removed = tracker_clone.clean_peers(current_time());
                    if removed > 0 {
                        info!("[PEERS] {removed} stale peers removed");
                    }
                }
            }
        }
    });

    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }

    info!("Shutdown request received, shutting down...");
    let _ = udp_tx.send(true);
    let _ = futures::future::join_all(udp_futures).await;
    info!("Server shutting down completed");
    Ok(())
}
