//! Alpha Vantage data source for pegscan.
//!
//! [`AvClient`] implements both the daily-price and quarterly-earnings source
//! traits against the Alpha Vantage HTTP API. Responses are normalized into
//! the pegscan error taxonomy:
//!
//! - connection and non-2xx failures become `Transport`,
//! - an in-band `"Error Message"` payload becomes `Upstream`,
//! - a 2xx body missing the expected section, or carrying non-numeric or
//!   negative values, becomes `MalformedResponse`.
//!
//! The client performs no throttling of its own; callers route requests
//! through the engine's shared throttle.
#![warn(missing_docs)]

mod client;
mod wire;

pub use client::{AvClient, AvClientBuilder, DEFAULT_BASE_URL};
