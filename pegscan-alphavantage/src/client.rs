use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use pegscan_core::{
    DailyBar, EarningsDataSource, EarningsReport, OutputSize, PegscanError, PriceDataSource,
    PriceSeries,
};

use crate::wire::{DailyEnvelope, EarningsEnvelope, date_field, price_field, volume_field};

/// Production Alpha Vantage endpoint. Overridable for tests via
/// [`AvClientBuilder::base_url`].
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage HTTP client serving daily prices and quarterly earnings.
pub struct AvClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    output_size: OutputSize,
}

/// Builder for [`AvClient`].
pub struct AvClientBuilder {
    api_key: String,
    base_url: Option<Url>,
    output_size: OutputSize,
    http: Option<reqwest::Client>,
}

impl AvClient {
    /// Start building a client authenticated with `api_key`.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> AvClientBuilder {
        AvClientBuilder {
            api_key: api_key.into(),
            base_url: None,
            output_size: OutputSize::default(),
            http: None,
        }
    }

    /// Fetch `url` and decode the body as `T`.
    ///
    /// Decode failures on a 2xx status are malformed responses; on any other
    /// status the body is uninteresting and the status itself is the error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<(StatusCode, T), PegscanError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("apikey", &self.api_key);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PegscanError::transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PegscanError::transport(e.to_string()))?;

        match serde_json::from_str::<T>(&body) {
            Ok(decoded) => Ok((status, decoded)),
            Err(e) if status.is_success() => {
                Err(PegscanError::malformed(format!("undecodable body: {e}")))
            }
            Err(_) => Err(PegscanError::transport(format!("http status {status}"))),
        }
    }

    fn section_missing(status: StatusCode, section: &str) -> PegscanError {
        if status.is_success() {
            PegscanError::malformed(format!("response carried no {section}"))
        } else {
            PegscanError::transport(format!("http status {status}"))
        }
    }
}

impl AvClientBuilder {
    /// Point the client at a different endpoint, e.g. a local test server.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Choose how much daily history to request. Defaults to the full
    /// available history.
    #[must_use]
    pub const fn output_size(mut self, size: OutputSize) -> Self {
        self.output_size = size;
        self
    }

    /// Supply a preconfigured HTTP client (proxies, timeouts).
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finish building the client.
    #[must_use]
    pub fn build(self) -> AvClient {
        let base_url = self.base_url.unwrap_or_else(|| {
            // The constant is a valid absolute URL.
            Url::parse(DEFAULT_BASE_URL).expect("default endpoint parses")
        });
        AvClient {
            http: self.http.unwrap_or_default(),
            base_url,
            api_key: self.api_key,
            output_size: self.output_size,
        }
    }
}

#[async_trait]
impl PriceDataSource for AvClient {
    fn name(&self) -> &'static str {
        "alpha-vantage"
    }

    async fn daily_series(&self, symbol: &str) -> Result<PriceSeries, PegscanError> {
        let (status, envelope): (_, DailyEnvelope) = self
            .get_json(&[
                ("function", "TIME_SERIES_DAILY_ADJUSTED"),
                ("symbol", symbol),
                ("outputsize", self.output_size.as_str()),
            ])
            .await?;

        if let Some(message) = envelope.error_message {
            return Err(PegscanError::upstream(message));
        }
        let Some(wire_series) = envelope.series else {
            return Err(Self::section_missing(status, "daily time series"));
        };

        let mut series = PriceSeries::new(symbol);
        for (date_str, bar) in &wire_series {
            series.insert(
                date_field(date_str)?,
                DailyBar {
                    open: price_field("1. open", &bar.open)?,
                    high: price_field("2. high", &bar.high)?,
                    low: price_field("3. low", &bar.low)?,
                    close: price_field("4. close", &bar.close)?,
                    volume: volume_field(&bar.volume)?,
                },
            );
        }
        debug!(symbol, days = series.len(), "fetched daily series");
        Ok(series)
    }
}

#[async_trait]
impl EarningsDataSource for AvClient {
    fn name(&self) -> &'static str {
        "alpha-vantage"
    }

    async fn quarterly_earnings(&self, symbol: &str) -> Result<Vec<EarningsReport>, PegscanError> {
        let (status, envelope): (_, EarningsEnvelope) = self
            .get_json(&[("function", "EARNINGS"), ("symbol", symbol)])
            .await?;

        if let Some(message) = envelope.error_message {
            return Err(PegscanError::upstream(message));
        }
        let Some(quarters) = envelope.quarterly else {
            return Err(Self::section_missing(status, "quarterly earnings"));
        };

        let mut reports = quarters
            .iter()
            .map(|q| {
                Ok(EarningsReport {
                    symbol: symbol.to_string(),
                    reported: date_field(&q.reported_date)?,
                })
            })
            .collect::<Result<Vec<_>, PegscanError>>()?;
        reports.sort_by_key(|r| r.reported);
        debug!(symbol, reports = reports.len(), "fetched earnings dates");
        Ok(reports)
    }
}
