use tracing::debug;

use crate::Pegscan;
use pegscan_core::{EarningsGap, PegscanError, correlate_earnings, detect_gaps};

impl Pegscan {
    /// Reconcile `symbol`, detect day-over-day opening gaps at or above
    /// `threshold`, and keep only the gaps that land one or two calendar days
    /// after a quarterly earnings release.
    ///
    /// The earnings endpoint is only hit when at least one gap cleared the
    /// threshold; a quiet history costs a single rate-limit slot.
    ///
    /// # Errors
    /// - `NoData` when, after reconciling, there is no history at all for
    ///   the symbol.
    /// - `InvalidArg`/`InvalidData` from gap detection.
    /// - Fetch and store errors from the underlying calls.
    pub async fn power_earnings_gaps(
        &self,
        symbol: &str,
        threshold: f64,
    ) -> Result<Vec<EarningsGap>, PegscanError> {
        let history = self.reconcile(symbol).await?;
        if history.is_empty() {
            return Err(PegscanError::no_data(symbol));
        }

        let gaps = detect_gaps(&history, threshold)?;
        if gaps.is_empty() {
            debug!(symbol, threshold, "no gaps cleared the threshold; skipping earnings fetch");
            return Ok(Vec::new());
        }

        self.throttle.acquire().await;
        let reports = self.earnings_source.quarterly_earnings(symbol).await?;
        debug!(
            symbol,
            gaps = gaps.len(),
            reports = reports.len(),
            "correlating gaps against earnings dates"
        );

        correlate_earnings(&gaps, &reports, self.store.as_ref()).await
    }
}
