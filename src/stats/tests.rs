#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;

    fn tracker() -> TorrentTracker {
        TorrentTracker::new(Arc::new(Configuration::init()))
    }

    #[test]
    fn test_counters_start_at_zero() {
        let tracker = tracker();
        let stats = tracker.get_stats();
        assert_eq!(stats.connections_handled, 0);
        assert_eq!(stats.announces_handled, 0);
        assert_eq!(stats.scrapes_handled, 0);
        assert_eq!(stats.errors, 0);
        assert_eq!(stats.bytes_in, 0);
        assert_eq!(stats.bytes_out, 0);
    }

    #[test]
    fn test_update_stats_accumulates() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::ConnectionsHandled, 1);
        tracker.update_stats(StatsEvent::ConnectionsHandled, 1);
        tracker.update_stats(StatsEvent::BytesIn, 16);
        tracker.update_stats(StatsEvent::BytesOut, 98);
        let stats = tracker.get_stats();
        assert_eq!(stats.connections_handled, 2);
        assert_eq!(stats.bytes_in, 16);
        assert_eq!(stats.bytes_out, 98);
    }

    #[test]
    fn test_update_stats_negative_subtracts() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::Errors, 5);
        tracker.update_stats(StatsEvent::Errors, -2);
        assert_eq!(tracker.get_stats().errors, 3);
    }

    #[test]
    fn test_reset_stats_returns_deltas_and_zeroes() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::AnnouncesHandled, 7);
        tracker.update_stats(StatsEvent::ScrapesHandled, 3);

        let first = tracker.reset_stats();
        assert_eq!(first.announces_handled, 7);
        assert_eq!(first.scrapes_handled, 3);

        let after = tracker.get_stats();
        assert_eq!(after.announces_handled, 0);
        assert_eq!(after.scrapes_handled, 0);

        tracker.update_stats(StatsEvent::AnnouncesHandled, 2);
        let second = tracker.reset_stats();
        assert_eq!(second.announces_handled, 2);
    }

    #[test]
    fn test_reset_stats_keeps_started() {
        let tracker = tracker();
        let started = tracker.get_stats().started;
        tracker.reset_stats();
        assert_eq!(tracker.get_stats().started, started);
    }
}
