use chrono::NaiveDate;
use thiserror::Error;

/// Unified error type for the pegscan workspace.
///
/// This covers the upstream fetch taxonomy (transport, upstream-reported,
/// malformed payloads), store failures including the distinct duplicate-key
/// condition the reconciler relies on, and argument/data validation errors.
#[derive(Debug, Error)]
pub enum PegscanError {
    /// Upstream could not be reached, or answered without a recognizable body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Upstream answered with a well-formed error payload.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Upstream answered 2xx but the payload is missing expected fields or
    /// carries values that do not coerce to the expected types.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Neither the store nor upstream holds anything for the symbol.
    #[error("no data for {symbol}")]
    NoData {
        /// Ticker symbol that yielded nothing anywhere.
        symbol: String,
    },

    /// Stored or computed data violates an invariant (e.g. a zero close
    /// making a gap ratio undefined).
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The persistent store failed for a reason other than a duplicate key.
    #[error("store failure: {0}")]
    Store(String),

    /// The store rejected an insert because `(symbol, date)` already exists.
    #[error("duplicate row: {symbol} on {date}")]
    DuplicateRow {
        /// Ticker symbol of the rejected row.
        symbol: String,
        /// Calendar day of the rejected row.
        date: NaiveDate,
    },
}

impl PegscanError {
    /// Helper: build a `Transport` error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Helper: build an `Upstream` error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Helper: build a `MalformedResponse` error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Helper: build a `NoData` error for a symbol.
    pub fn no_data(symbol: impl Into<String>) -> Self {
        Self::NoData {
            symbol: symbol.into(),
        }
    }

    /// Helper: build an `InvalidData` error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Store` error.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Helper: build a `DuplicateRow` error for an existing `(symbol, date)` key.
    pub fn duplicate_row(symbol: impl Into<String>, date: NaiveDate) -> Self {
        Self::DuplicateRow {
            symbol: symbol.into(),
            date,
        }
    }
}
