use crate::error::PegscanError;
use crate::store::PriceStore;
use crate::types::{EarningsGap, EarningsReport, Gap, PricePoint};

/// Scan a date-sorted history for day-over-day opening jumps at or above
/// `threshold` (a fraction, e.g. `0.05` for 5%; the boundary is inclusive).
///
/// Only immediately adjacent stored trading days are paired (index `i`,
/// `i + 1`), never calendar-adjacent days; weekends and holidays leave no
/// synthetic pairs. Output preserves the ascending date order of `current`.
///
/// # Errors
/// - `InvalidArg` for a non-finite threshold.
/// - `InvalidData` when a pair's `previous.close` is zero, which would make
///   the relative change undefined. Corrupt stored data is surfaced rather
///   than skipped.
pub fn detect_gaps(prices: &[PricePoint], threshold: f64) -> Result<Vec<Gap>, PegscanError> {
    if !threshold.is_finite() {
        return Err(PegscanError::invalid_arg("gap threshold must be finite"));
    }

    let mut out = Vec::new();
    for pair in prices.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if previous.close == 0.0 {
            return Err(PegscanError::invalid_data(format!(
                "zero close on {} for {} makes the gap ratio undefined",
                previous.date, previous.symbol
            )));
        }
        let rel_change = (current.open - previous.close) / previous.close;
        if rel_change >= threshold {
            out.push(Gap {
                previous: previous.clone(),
                current: current.clone(),
            });
        }
    }
    Ok(out)
}

/// Join detected gaps against quarterly report dates with a 1-or-2-day lag
/// window.
///
/// A report released exactly one calendar day before a gap's `current` date
/// always wins; a report two days before matches only when no 1-day report
/// exists, and additionally attaches the stored row at `reported + 2 days`
/// (which is the gap's `current` session by construction; `None` when the
/// store lacks it). Gaps with no match on either lag are dropped. Output
/// preserves the input gap order.
///
/// # Errors
/// Propagates store lookup failures untouched.
pub async fn correlate_earnings(
    gaps: &[Gap],
    reports: &[EarningsReport],
    store: &dyn PriceStore,
) -> Result<Vec<EarningsGap>, PegscanError> {
    let mut out = Vec::new();
    for gap in gaps {
        let lag_days =
            |report: &EarningsReport| (gap.current.date - report.reported).num_days();

        if let Some(report) = reports.iter().find(|r| lag_days(r) == 1) {
            out.push(EarningsGap {
                gap: gap.clone(),
                report_date: report.reported,
                two_days_ago: None,
            });
        } else if let Some(report) = reports.iter().find(|r| lag_days(r) == 2) {
            let two_days_ago = store
                .point_at(&gap.current.symbol, gap.current.date)
                .await?;
            out.push(EarningsGap {
                gap: gap.clone(),
                report_date: report.reported,
                two_days_ago,
            });
        }
    }
    Ok(out)
}
