//! Common data structures for daily price synchronization and gap analysis.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored trading day for one symbol.
///
/// Identity is `(symbol, date)`; the store never holds two rows with the same
/// key, and rows are immutable once stored. Numeric fields are non-negative;
/// connectors enforce this at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Ticker symbol the row belongs to.
    pub symbol: String,
    /// Calendar day, no time component.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Intraday high.
    pub high: f64,
    /// Intraday low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded share volume.
    pub volume: u64,
}

/// One day's OHLCV values without identity, as parsed off the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Opening price.
    pub open: f64,
    /// Intraday high.
    pub high: f64,
    /// Intraday low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded share volume.
    pub volume: u64,
}

impl DailyBar {
    /// Attach an identity to this bar, producing a storable row.
    #[must_use]
    pub fn into_point(self, symbol: &str, date: NaiveDate) -> PricePoint {
        PricePoint {
            symbol: symbol.to_string(),
            date,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
        }
    }
}

/// A daily series for one symbol as returned by an upstream source.
///
/// Bars are keyed by calendar day, so iteration is date-ascending regardless
/// of the ordering the transport happened to deliver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker symbol the series belongs to.
    pub symbol: String,
    /// Date-keyed daily bars.
    pub bars: BTreeMap<NaiveDate, DailyBar>,
}

impl PriceSeries {
    /// Create an empty series for `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: BTreeMap::new(),
        }
    }

    /// Whether the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Number of trading days in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Insert (or replace) the bar for `date`.
    pub fn insert(&mut self, date: NaiveDate, bar: DailyBar) {
        self.bars.insert(date, bar);
    }

    /// The bar at `date` as an identified row, if present.
    #[must_use]
    pub fn point(&self, date: NaiveDate) -> Option<PricePoint> {
        self.bars.get(&date).map(|b| b.into_point(&self.symbol, date))
    }
}

/// A quarterly earnings release date for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsReport {
    /// Ticker symbol the report belongs to.
    pub symbol: String,
    /// Calendar day the report was released.
    pub reported: NaiveDate,
}

/// A day-over-day opening jump between two immediately adjacent stored
/// trading days. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// The earlier of the two adjacent trading days.
    pub previous: PricePoint,
    /// The trading day immediately following `previous` in date order.
    pub current: PricePoint,
}

impl Gap {
    /// Relative change from the previous close to the current open.
    ///
    /// Callers must ensure `previous.close` is non-zero; `detect_gaps`
    /// rejects such pairs before constructing a `Gap`.
    #[must_use]
    pub fn rel_change(&self) -> f64 {
        (self.current.open - self.previous.close) / self.previous.close
    }
}

/// A [`Gap`] whose `current` session falls one or two calendar days after a
/// quarterly earnings release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsGap {
    /// The underlying price gap.
    pub gap: Gap,
    /// Release date of the matched earnings report.
    pub report_date: NaiveDate,
    /// Stored row at `report_date + 2 days`; only populated when the match
    /// used the two-day lag, and only when the store holds that row.
    pub two_days_ago: Option<PricePoint>,
}

/// How much daily history a connector should request from upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputSize {
    /// The most recent ~100 trading days.
    Compact,
    /// The full available history. The default, so an initial sync actually
    /// backfills.
    #[default]
    Full,
}

impl OutputSize {
    /// Wire value for the upstream `outputsize` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}
