use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::Relaxed),
            connections_handled: self.stats.connections_handled.load(Ordering::Relaxed),
            announces_handled: self.stats.announces_handled.load(Ordering::Relaxed),
            scrapes_handled: self.stats.scrapes_handled.load(Ordering::Relaxed),
            errors: self.stats.errors.load(Ordering::Relaxed),
            bytes_in: self.stats.bytes_in.load(Ordering::Relaxed),
            bytes_out: self.stats.bytes_out.load(Ordering::Relaxed),
        }
    }

    #[inline]
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        match event {
            StatsEvent::ConnectionsHandled => {
                self.update_counter(&self.stats.connections_handled, value);
            }
            StatsEvent::AnnouncesHandled => {
                self.update_counter(&self.stats.announces_handled, value);
            }
            StatsEvent::ScrapesHandled => {
                self.update_counter(&self.stats.scrapes_handled, value);
            }
            StatsEvent::Errors => {
                self.update_counter(&self.stats.errors, value);
            }
            StatsEvent::BytesIn => {
                self.update_counter(&self.stats.bytes_in, value);
            }
            StatsEvent::BytesOut => {
                self.update_counter(&self.stats.bytes_out, value);
            }
        };
    }

    /// Read the counters and subtract what was read, so concurrent
    /// increments between the load and the subtraction are kept for the
    /// next sampling round. Returns the deltas since the previous call.
    pub fn reset_stats(&self) -> Stats
    {
        let snapshot = self.get_stats();
        self.stats.connections_handled.fetch_sub(snapshot.connections_handled, Ordering::AcqRel);
        self.stats.announces_handled.fetch_sub(snapshot.announces_handled, Ordering::AcqRel);
        self.stats.scrapes_handled.fetch_sub(snapshot.scrapes_handled, Ordering::AcqRel);
        self.stats.errors.fetch_sub(snapshot.errors, Ordering::AcqRel);
        self.stats.bytes_in.fetch_sub(snapshot.bytes_in, Ordering::AcqRel);
        self.stats.bytes_out.fetch_sub(snapshot.bytes_out, Ordering::AcqRel);
        snapshot
    }

    #[inline(always)]
    fn update_counter(&self, counter: &std::sync::atomic::AtomicI64, value: i64) {
        if value > 0 {
            counter.fetch_add(value, Ordering::Release);
        } else if value < 0 {
            counter.fetch_sub(-value, Ordering::Release);
        }
    }
}
