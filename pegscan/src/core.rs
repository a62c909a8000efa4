use std::sync::Arc;
use std::time::Duration;

use pegscan_core::{
    EarningsDataSource, PegscanError, PriceDataSource, PriceStore, RequestThrottle,
};

/// Orchestrator that keeps a local price table in sync with one upstream and
/// derives power earnings gaps from the merged history.
pub struct Pegscan {
    pub(crate) price_source: Arc<dyn PriceDataSource>,
    pub(crate) earnings_source: Arc<dyn EarningsDataSource>,
    pub(crate) store: Arc<dyn PriceStore>,
    pub(crate) throttle: Arc<RequestThrottle>,
}

/// Builder for constructing a [`Pegscan`] engine with injected collaborators.
pub struct PegscanBuilder {
    price_source: Option<Arc<dyn PriceDataSource>>,
    earnings_source: Option<Arc<dyn EarningsDataSource>>,
    store: Option<Arc<dyn PriceStore>>,
    throttle: Option<Arc<RequestThrottle>>,
    rate_limit: Duration,
}

impl Default for PegscanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PegscanBuilder {
    /// Conservative default interval between upstream call starts, sized for
    /// a free-tier API key (5 requests per minute).
    pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_secs(12);

    /// Create a new builder with no collaborators registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            price_source: None,
            earnings_source: None,
            store: None,
            throttle: None,
            rate_limit: Self::DEFAULT_RATE_LIMIT,
        }
    }

    /// Register the daily-price upstream.
    #[must_use]
    pub fn price_source(mut self, source: Arc<dyn PriceDataSource>) -> Self {
        self.price_source = Some(source);
        self
    }

    /// Register the quarterly-earnings upstream.
    #[must_use]
    pub fn earnings_source(mut self, source: Arc<dyn EarningsDataSource>) -> Self {
        self.earnings_source = Some(source);
        self
    }

    /// Register the persistent price table.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn PriceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the minimum interval between upstream call starts. Ignored when a
    /// shared throttle is injected via [`shared_throttle`](Self::shared_throttle).
    #[must_use]
    pub const fn rate_limit(mut self, interval: Duration) -> Self {
        self.rate_limit = interval;
        self
    }

    /// Share an existing throttle with other engines in the same process so
    /// all of them serialize through one gate.
    #[must_use]
    pub fn shared_throttle(mut self, throttle: Arc<RequestThrottle>) -> Self {
        self.throttle = Some(throttle);
        self
    }

    /// Build the [`Pegscan`] engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the price source, earnings source, or store
    /// is missing.
    pub fn build(self) -> Result<Pegscan, PegscanError> {
        let price_source = self
            .price_source
            .ok_or_else(|| PegscanError::invalid_arg("no price source registered"))?;
        let earnings_source = self
            .earnings_source
            .ok_or_else(|| PegscanError::invalid_arg("no earnings source registered"))?;
        let store = self
            .store
            .ok_or_else(|| PegscanError::invalid_arg("no price store registered"))?;
        let throttle = self
            .throttle
            .unwrap_or_else(|| Arc::new(RequestThrottle::new(self.rate_limit)));

        Ok(Pegscan {
            price_source,
            earnings_source,
            store,
            throttle,
        })
    }
}

impl Pegscan {
    /// Start building a new `Pegscan` engine.
    #[must_use]
    pub fn builder() -> PegscanBuilder {
        PegscanBuilder::new()
    }

    /// The throttle every upstream call of this engine goes through.
    #[must_use]
    pub fn throttle(&self) -> &Arc<RequestThrottle> {
        &self.throttle
    }
}
