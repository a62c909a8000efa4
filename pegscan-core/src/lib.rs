//! pegscan-core
//!
//! Core types, traits, and algorithms shared across the pegscan workspace.
//!
//! - `types`: the daily-price data model (`PricePoint`, `PriceSeries`,
//!   `EarningsReport`, `Gap`, `EarningsGap`).
//! - `source`: the injectable upstream seams (`PriceDataSource`,
//!   `EarningsDataSource`).
//! - `store`: the persistence seam (`PriceStore`), a table keyed by
//!   `(symbol, date)`.
//! - `throttle`: the process-wide minimum-interval gate for upstream calls.
//! - `gaps`: gap detection and earnings correlation over stored history.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime: the source
//! and store traits are `async_trait` traits, and `RequestThrottle::acquire`
//! sleeps via `tokio::time`.
#![warn(missing_docs)]

/// Unified error taxonomy for the pegscan workspace.
pub mod error;
/// Gap detection and earnings correlation over a date-sorted history.
pub mod gaps;
/// Upstream data-source capability traits.
pub mod source;
/// The persistence seam: a table keyed by `(symbol, date)`.
pub mod store;
/// Process-wide minimum-interval gate for outbound upstream calls.
pub mod throttle;
pub mod types;

pub use error::PegscanError;
pub use gaps::{correlate_earnings, detect_gaps};
pub use source::{EarningsDataSource, PriceDataSource};
pub use store::PriceStore;
pub use throttle::RequestThrottle;
pub use types::*;
