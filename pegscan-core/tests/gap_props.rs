use chrono::{Days, NaiveDate};
use pegscan_core::{PricePoint, detect_gaps};
use proptest::prelude::*;

fn history(rows: &[(f64, f64)]) -> Vec<PricePoint> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    rows.iter()
        .enumerate()
        .map(|(i, &(open, close))| PricePoint {
            symbol: "PROP".to_string(),
            date: base.checked_add_days(Days::new(i as u64)).unwrap(),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 1,
        })
        .collect()
}

proptest! {
    #[test]
    fn every_emitted_gap_clears_the_threshold(
        rows in prop::collection::vec((1.0f64..500.0, 1.0f64..500.0), 0..40),
        threshold in 0.0f64..0.5,
    ) {
        let prices = history(&rows);
        let gaps = detect_gaps(&prices, threshold).unwrap();

        prop_assert!(gaps.len() <= prices.len().saturating_sub(1));
        for gap in &gaps {
            prop_assert!(gap.rel_change() >= threshold);
        }
    }

    #[test]
    fn emitted_gaps_are_adjacent_and_ascending(
        rows in prop::collection::vec((1.0f64..500.0, 1.0f64..500.0), 2..40),
        threshold in 0.0f64..0.5,
    ) {
        let prices = history(&rows);
        let gaps = detect_gaps(&prices, threshold).unwrap();

        for gap in &gaps {
            let lag = (gap.current.date - gap.previous.date).num_days();
            prop_assert_eq!(lag, 1);
        }
        for pair in gaps.windows(2) {
            prop_assert!(pair[0].current.date < pair[1].current.date);
        }
    }
}
