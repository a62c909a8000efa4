//! Pegscan keeps a local table of daily stock prices in sync with one
//! upstream market-data API and scans the merged history for power earnings
//! gaps.
//!
//! Overview
//! - `reconcile`: fetch the daily series for a symbol, diff it against the
//!   stored rows, persist only the genuinely new dates, and return the full
//!   stored history sorted ascending. Merges are additive-only; stored rows
//!   are never overwritten.
//! - `power_earnings_gaps`: reconcile, then pair immediately adjacent
//!   trading days whose open-over-close jump clears a caller-supplied
//!   threshold, and keep only the gaps that fall one or two calendar days
//!   after a quarterly earnings release.
//! - Every upstream call goes through one process-wide
//!   [`RequestThrottle`](pegscan_core::RequestThrottle) enforcing a minimum
//!   interval between call starts.
//!
//! Key behaviors and trade-offs
//! - Degraded success: when a fetch fails but the store already holds rows
//!   for the symbol, `reconcile` returns the stored history instead of the
//!   error. A symbol with no data anywhere yields an empty result from
//!   `reconcile` and a distinct `NoData` error from `power_earnings_gaps`,
//!   never a transport error.
//! - Inserts are independent: a duplicate-key rejection on one row is logged
//!   and skipped without aborting the rest of the batch.
//! - The earnings endpoint is only called when at least one gap cleared the
//!   threshold, saving a rate-limit slot on quiet histories.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use pegscan::Pegscan;
//!
//! let engine = Pegscan::builder()
//!     .price_source(client.clone())
//!     .earnings_source(client)
//!     .store(store)
//!     .rate_limit(Duration::from_secs(12))
//!     .build()?;
//!
//! let history = engine.reconcile("AAPL").await?;
//! let gaps = engine.power_earnings_gaps("AAPL", 0.05).await?;
//! ```
//!
//! See `pegscan/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod scan;
mod sync;

pub use crate::core::{Pegscan, PegscanBuilder};

// Re-export core types for convenience
pub use pegscan_core::{
    DailyBar, EarningsDataSource, EarningsGap, EarningsReport, Gap, OutputSize, PegscanError,
    PriceDataSource, PricePoint, PriceSeries, PriceStore, RequestThrottle, correlate_earnings,
    detect_gaps,
};
