//! Per-endpoint call statistics.
//!
//! Every request made through [`TwitterClient`](crate::TwitterClient) is
//! timed and recorded here, keyed by endpoint URL template: path arguments
//! stay as placeholders (`statuses/show/{id}.json`), so the table holds at
//! most one entry per API method.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, warn};

/// Aggregated statistics for one endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EndpointStats {
    pub calls: u64,
    /// Calls that failed in transport or returned a status of 400 or above.
    /// Redirects (3xx) count as successful.
    pub errors: u64,
    pub total_elapsed: Duration,
    pub last_elapsed: Duration,
}

impl EndpointStats {
    /// Mean time per call.
    #[must_use]
    pub fn average_elapsed(&self) -> Duration {
        u32::try_from(self.calls)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_elapsed / n)
    }
}

/// Thread-safe statistics table.
#[derive(Debug, Default)]
pub struct ApiMonitor {
    stats: Mutex<HashMap<String, EndpointStats>>,
}

impl ApiMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed call.
    pub fn record(&self, url: &str, elapsed: Duration, ok: bool) {
        let key = url.split('?').next().unwrap_or(url);
        if ok {
            debug!(endpoint = key, elapsed_ms = elapsed.as_millis(), "API call");
        } else {
            warn!(endpoint = key, elapsed_ms = elapsed.as_millis(), "API call failed");
        }

        let mut stats = self.stats.lock();
        let entry = stats.entry(key.to_string()).or_default();
        entry.calls += 1;
        if !ok {
            entry.errors += 1;
        }
        entry.total_elapsed += elapsed;
        entry.last_elapsed = elapsed;
    }

    /// Statistics for one endpoint URL template.
    #[must_use]
    pub fn stats(&self, url: &str) -> Option<EndpointStats> {
        self.stats.lock().get(url).copied()
    }

    /// Copy of every endpoint's statistics, sorted by URL.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, EndpointStats)> {
        let mut entries: Vec<_> = self
            .stats
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Total calls across all endpoints.
    #[must_use]
    pub fn total_calls(&self) -> u64 {
        self.stats.lock().values().map(|s| s.calls).sum()
    }

    pub fn reset(&self) {
        self.stats.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_record_aggregates_by_url() {
        let monitor = ApiMonitor::new();
        monitor.record("https://api/1/a.json?x=1", Duration::from_millis(10), true);
        monitor.record("https://api/1/a.json?x=2", Duration::from_millis(30), false);
        monitor.record("https://api/1/b.json", Duration::from_millis(5), true);

        let a = monitor.stats("https://api/1/a.json").unwrap();
        assert_eq!(a.calls, 2);
        assert_eq!(a.errors, 1);
        assert_eq!(a.total_elapsed, Duration::from_millis(40));
        assert_eq!(a.last_elapsed, Duration::from_millis(30));
        assert_eq!(a.average_elapsed(), Duration::from_millis(20));

        assert_eq!(monitor.total_calls(), 3);
        let snapshot = monitor.snapshot();
        assert_eq!(snapshot[0].0, "https://api/1/a.json");
        assert_eq!(snapshot[1].0, "https://api/1/b.json");

        monitor.reset();
        assert_eq!(monitor.total_calls(), 0);
    }

    #[test]
    fn test_concurrent_records() {
        let monitor = Arc::new(ApiMonitor::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let monitor = Arc::clone(&monitor);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        monitor.record("u", Duration::from_millis(1), true);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(monitor.stats("u").unwrap().calls, 800);
    }
}
