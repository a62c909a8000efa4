use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::Pegscan;
use pegscan_core::{PegscanError, PricePoint};

impl Pegscan {
    /// Bring the stored history for `symbol` up to date with upstream and
    /// return it, sorted ascending by date.
    ///
    /// One throttled upstream call is made per invocation. Only dates absent
    /// from the store are persisted; existing rows are never overwritten or
    /// deleted. When the fetch fails but the store already holds rows for
    /// the symbol, the stored history is returned as a degraded success.
    /// An empty store combined with an empty fetched series yields an empty
    /// result, not an error.
    ///
    /// # Errors
    /// - The fetch error (`Transport`/`Upstream`/`MalformedResponse`) when
    ///   the fetch fails and the store holds nothing to fall back on.
    /// - `Store` when reading or writing the table fails for a reason other
    ///   than a duplicate key; duplicate keys are logged and skipped.
    pub async fn reconcile(&self, symbol: &str) -> Result<Vec<PricePoint>, PegscanError> {
        self.throttle.acquire().await;

        let existing = self.store.all_for_symbol(symbol).await?;

        let fetched = match self.price_source.daily_series(symbol).await {
            Ok(series) => series,
            Err(err) if !existing.is_empty() => {
                warn!(
                    symbol,
                    source = self.price_source.name(),
                    error = %err,
                    "fetch failed; serving stored history unchanged"
                );
                return Ok(sorted(existing));
            }
            Err(err) => return Err(err),
        };

        let known: HashSet<NaiveDate> = existing.iter().map(|p| p.date).collect();
        let mut inserted = 0usize;
        for (date, bar) in &fetched.bars {
            if known.contains(date) {
                continue;
            }
            let point = bar.into_point(symbol, *date);
            match self.store.insert(&point).await {
                Ok(()) => inserted += 1,
                // Rows are keyed uniquely, so a duplicate here means a
                // concurrent writer won the race for this date.
                Err(PegscanError::DuplicateRow { .. }) => {
                    warn!(symbol, %date, "row appeared while backfilling; skipping");
                }
                Err(err) => return Err(err),
            }
        }
        debug!(
            symbol,
            existing = existing.len(),
            fetched = fetched.len(),
            inserted,
            "reconciled daily series"
        );

        let merged = self.store.all_for_symbol(symbol).await?;
        Ok(sorted(merged))
    }
}

fn sorted(mut points: Vec<PricePoint>) -> Vec<PricePoint> {
    points.sort_by_key(|p| p.date);
    points
}
