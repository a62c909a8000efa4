//! Mock data source and in-memory store for CI-safe tests and examples.
//!
//! [`MockFeed`] serves deterministic daily series and earnings dates from
//! static fixtures, with sentinel symbols for failure paths:
//!
//! - `"FAIL"` returns a forced transport error from every call.
//! - `"EMPTY"` returns a series with no bars and an empty earnings list.
//! - Any other unknown symbol returns an upstream error.
//!
//! [`MemoryPriceStore`] is a thread-safe in-memory price table that enforces
//! the one-row-per-symbol-and-date constraint.
#![warn(missing_docs)]

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use pegscan_core::{
    EarningsDataSource, EarningsReport, PegscanError, PriceDataSource, PricePoint, PriceSeries,
    PriceStore,
};

mod fixtures;

/// Mock upstream feed. Provides deterministic data from static fixtures.
pub struct MockFeed;

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeed {
    /// Create a new mock feed.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), PegscanError> {
        if symbol == "FAIL" {
            return Err(PegscanError::transport(format!(
                "forced failure: {capability}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PriceDataSource for MockFeed {
    fn name(&self) -> &'static str {
        "pegscan-mock"
    }

    async fn daily_series(&self, symbol: &str) -> Result<PriceSeries, PegscanError> {
        Self::maybe_fail(symbol, "daily_series")?;
        fixtures::series_by_symbol(symbol)
            .ok_or_else(|| PegscanError::upstream(format!("unknown symbol: {symbol}")))
    }
}

#[async_trait]
impl EarningsDataSource for MockFeed {
    fn name(&self) -> &'static str {
        "pegscan-mock"
    }

    async fn quarterly_earnings(&self, symbol: &str) -> Result<Vec<EarningsReport>, PegscanError> {
        Self::maybe_fail(symbol, "quarterly_earnings")?;
        fixtures::earnings_by_symbol(symbol)
            .ok_or_else(|| PegscanError::upstream(format!("unknown symbol: {symbol}")))
    }
}

/// Thread-safe in-memory price table keyed by `(symbol, date)`.
#[derive(Default)]
pub struct MemoryPriceStore {
    rows: RwLock<BTreeMap<(String, NaiveDate), PricePoint>>,
}

impl MemoryPriceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held, across all symbols.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether the store holds no rows at all.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl PriceStore for MemoryPriceStore {
    async fn all_for_symbol(&self, symbol: &str) -> Result<Vec<PricePoint>, PegscanError> {
        let rows = self.rows.read().await;
        Ok(rows
            .range((symbol.to_string(), NaiveDate::MIN)..=(symbol.to_string(), NaiveDate::MAX))
            .map(|(_, p)| p.clone())
            .collect())
    }

    async fn insert(&self, point: &PricePoint) -> Result<(), PegscanError> {
        let mut rows = self.rows.write().await;
        let key = (point.symbol.clone(), point.date);
        if rows.contains_key(&key) {
            return Err(PegscanError::DuplicateRow {
                symbol: point.symbol.clone(),
                date: point.date,
            });
        }
        rows.insert(key, point.clone());
        Ok(())
    }

    async fn point_at(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Option<PricePoint>, PegscanError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&(symbol.to_string(), date)).cloned())
    }
}
