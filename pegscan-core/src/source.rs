#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PegscanError;
use crate::types::{EarningsReport, PriceSeries};

/// Focused role trait for upstreams that serve a daily OHLCV series.
///
/// Implementations wrap exactly one fetch-by-symbol call and classify its
/// failures; retry policy belongs to the caller.
#[async_trait]
pub trait PriceDataSource: Send + Sync {
    /// Stable identifier used in log lines and error context.
    fn name(&self) -> &'static str;

    /// Fetch the daily series for `symbol`.
    ///
    /// # Errors
    /// - `Transport` when upstream cannot be reached or answers without a
    ///   recognizable body.
    /// - `Upstream` when upstream returns a well-formed error payload.
    /// - `MalformedResponse` when the expected series field is absent or a
    ///   value fails numeric coercion.
    async fn daily_series(&self, symbol: &str) -> Result<PriceSeries, PegscanError>;
}

/// Focused role trait for upstreams that serve quarterly earnings dates.
#[async_trait]
pub trait EarningsDataSource: Send + Sync {
    /// Stable identifier used in log lines and error context.
    fn name(&self) -> &'static str;

    /// Fetch quarterly report dates for `symbol`, ascending by date.
    ///
    /// # Errors
    /// Same taxonomy as [`PriceDataSource::daily_series`].
    async fn quarterly_earnings(&self, symbol: &str) -> Result<Vec<EarningsReport>, PegscanError>;
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn PriceDataSource {
    /// Build a `PriceDataSource` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn PriceDataSource>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<PriceSeries, PegscanError>,
    {
        struct FnSource<F>(F);
        #[async_trait]
        impl<F> PriceDataSource for FnSource<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<PriceSeries, PegscanError>,
        {
            fn name(&self) -> &'static str {
                "fn-price-source"
            }
            async fn daily_series(&self, symbol: &str) -> Result<PriceSeries, PegscanError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnSource(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn EarningsDataSource {
    /// Build an `EarningsDataSource` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn EarningsDataSource>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Vec<EarningsReport>, PegscanError>,
    {
        struct FnSource<F>(F);
        #[async_trait]
        impl<F> EarningsDataSource for FnSource<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Vec<EarningsReport>, PegscanError>,
        {
            fn name(&self) -> &'static str {
                "fn-earnings-source"
            }
            async fn quarterly_earnings(
                &self,
                symbol: &str,
            ) -> Result<Vec<EarningsReport>, PegscanError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnSource(f))
    }
}
