//! Raw response shapes, exactly as Alpha Vantage sends them.
//!
//! All numeric values arrive as JSON strings and are coerced by the field
//! helpers here; the prefixed field names (`"1. open"`, `"6. volume"`) are
//! part of the upstream wire format.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use pegscan_core::PegscanError;

#[derive(Debug, Deserialize)]
pub(crate) struct DailyEnvelope {
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(rename = "Time Series (Daily)")]
    pub series: Option<BTreeMap<String, WireBar>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireBar {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "6. volume")]
    pub volume: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EarningsEnvelope {
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(rename = "quarterlyEarnings")]
    pub quarterly: Option<Vec<WireQuarter>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireQuarter {
    #[serde(rename = "reportedDate")]
    pub reported_date: String,
}

pub(crate) fn price_field(name: &str, raw: &str) -> Result<f64, PegscanError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        PegscanError::malformed(format!("field {name:?} is not a number: {raw:?}"))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(PegscanError::malformed(format!(
            "field {name:?} is out of range: {raw:?}"
        )));
    }
    Ok(value)
}

pub(crate) fn volume_field(raw: &str) -> Result<u64, PegscanError> {
    raw.trim().parse().map_err(|_| {
        PegscanError::malformed(format!("field \"6. volume\" is not a count: {raw:?}"))
    })
}

pub(crate) fn date_field(raw: &str) -> Result<NaiveDate, PegscanError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| PegscanError::malformed(format!("unparseable date: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_field_accepts_decimal_strings() {
        assert_eq!(price_field("1. open", "123.45").unwrap(), 123.45);
        assert_eq!(price_field("4. close", " 0.0 ").unwrap(), 0.0);
    }

    #[test]
    fn price_field_rejects_garbage_and_negatives() {
        assert!(price_field("1. open", "abc").is_err());
        assert!(price_field("1. open", "").is_err());
        assert!(price_field("1. open", "-3.5").is_err());
        assert!(price_field("1. open", "NaN").is_err());
    }

    #[test]
    fn volume_field_is_integral() {
        assert_eq!(volume_field("1000000").unwrap(), 1_000_000);
        assert!(volume_field("1000000.5").is_err());
        assert!(volume_field("-5").is_err());
    }

    #[test]
    fn date_field_wants_iso_days() {
        assert_eq!(
            date_field("2024-01-08").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
        assert!(date_field("01/08/2024").is_err());
        assert!(date_field("not-a-date").is_err());
    }
}
