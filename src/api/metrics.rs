use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{Instrument, info_span};

/// Counters used to log the volume of API requests a client performs.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    sent: AtomicU64,
    failed: AtomicU64,
    name: &'static str,
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            sent: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            name,
        })
    }

    pub fn inc_sent(&self) {
        self.sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            let span = info_span!("📊 ", client = self.name);
            async {
                interval.tick().await;
                let sent = self.sent.load(Ordering::Relaxed);
                let failed = self.failed.load(Ordering::Relaxed);
                let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;
                let avg = if elapsed_min > 0.0 {
                    sent as f64 / elapsed_min
                } else {
                    0.0
                };
                tracing::info!(
                    "{} requests executed, {} rejected by the API (avg {:.2} req/min)",
                    sent,
                    failed,
                    avg
                );
            }
            .instrument(span)
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn counters_track_sent_and_failed_independently() {
        let metrics = RequestMetrics::new("test");
        metrics.inc_sent();
        metrics.inc_sent();
        metrics.inc_failed();

        let metrics = Arc::try_unwrap(metrics).expect("arc should be unique");
        assert_eq!(metrics.sent.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.failed.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn log_loop_runs_once() {
        tokio::time::pause();

        let metrics = RequestMetrics::new("test");
        let cloned = metrics.clone();
        let handle = tokio::spawn(async move { cloned.log_loop().await });

        tokio::time::advance(Duration::from_secs(61)).await;
        handle.abort();
        let _ = handle.await;
    }
}
