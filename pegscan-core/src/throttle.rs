use std::time::{Duration, Instant};

use moka::future::Cache;
use tokio::sync::Mutex;

/// Fixed key the last-call marker is stored under.
const LAST_REQUEST_KEY: &str = "last_request_time";

/// Process-wide minimum-interval gate for outbound upstream calls.
///
/// `acquire` blocks the calling task until at least the configured interval
/// has elapsed since the start of the previous call, then stamps the marker
/// and returns. The marker is shared across all symbols and endpoints; it is
/// deliberately not per-symbol.
///
/// Construct one throttle per process (or share one `Arc` across
/// orchestrators); the interval is fixed at construction.
pub struct RequestThrottle {
    interval: Duration,
    // Held across the sleep so concurrent callers serialize through the
    // throttle instead of racing a read-then-sleep window.
    gate: Mutex<()>,
    // Last-call marker under a fixed key, expiring after one interval.
    last_call: Cache<&'static str, Instant>,
}

impl RequestThrottle {
    /// Create a throttle enforcing `interval` between upstream call starts.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        let builder = Cache::builder().max_capacity(1);
        let last_call = if interval.is_zero() {
            builder.build()
        } else {
            builder.time_to_live(interval).build()
        };
        Self {
            interval,
            gate: Mutex::new(()),
            last_call,
        }
    }

    /// Interval configured at construction.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait out the remainder of the interval since the previous call, then
    /// record now as the new last-call marker.
    ///
    /// Cannot fail; it only delays. An aborted caller may leave the marker
    /// advanced, which costs the next caller a slightly longer wait and
    /// nothing else.
    pub async fn acquire(&self) {
        let _slot = self.gate.lock().await;
        if let Some(previous) = self.last_call.get(LAST_REQUEST_KEY).await {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                let wait = self.interval - elapsed;
                tracing::debug!(wait_ms = wait.as_millis() as u64, "throttling upstream call");
                tokio::time::sleep(wait).await;
            }
        }
        self.last_call.insert(LAST_REQUEST_KEY, Instant::now()).await;
    }
}
