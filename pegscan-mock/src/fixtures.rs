use chrono::NaiveDate;
use pegscan_core::{DailyBar, EarningsReport, PriceSeries};

pub fn series_by_symbol(s: &str) -> Option<PriceSeries> {
    match s {
        "AAPL" => Some(build(
            "AAPL",
            vec![
                ("2024-01-02", 98.0, 99.0, 97.0, 98.5, 1_000_000),
                ("2024-01-03", 98.6, 99.5, 98.0, 99.0, 1_100_000),
                ("2024-01-04", 99.2, 100.0, 98.8, 99.5, 900_000),
                ("2024-01-05", 99.6, 100.5, 99.0, 100.0, 1_200_000),
                // Post-earnings jump: opens 8% above the prior close.
                ("2024-01-08", 108.0, 112.0, 107.0, 110.0, 3_500_000),
                ("2024-01-09", 110.5, 111.0, 109.0, 110.0, 1_800_000),
                // Second jump, roughly 9.1% above the prior close.
                ("2024-01-10", 120.0, 124.0, 119.0, 122.0, 4_000_000),
            ],
        )),
        "FLAT" => Some(build(
            "FLAT",
            vec![
                ("2024-01-02", 50.0, 50.5, 49.5, 50.0, 500_000),
                ("2024-01-03", 50.1, 50.6, 49.8, 50.2, 480_000),
                ("2024-01-04", 50.2, 50.7, 49.9, 50.3, 510_000),
            ],
        )),
        "EMPTY" => Some(PriceSeries::new("EMPTY")),
        _ => None,
    }
}

pub fn earnings_by_symbol(s: &str) -> Option<Vec<EarningsReport>> {
    match s {
        "AAPL" => Some(vec![
            report("AAPL", "2024-01-07"),
            report("AAPL", "2024-01-08"),
        ]),
        "FLAT" | "EMPTY" => Some(Vec::new()),
        _ => None,
    }
}

fn build(symbol: &str, rows: Vec<(&str, f64, f64, f64, f64, u64)>) -> PriceSeries {
    let mut series = PriceSeries::new(symbol);
    for (date, open, high, low, close, volume) in rows {
        series.insert(
            parse_date(date),
            DailyBar {
                open,
                high,
                low,
                close,
                volume,
            },
        );
    }
    series
}

fn report(symbol: &str, reported: &str) -> EarningsReport {
    EarningsReport {
        symbol: symbol.to_string(),
        reported: parse_date(reported),
    }
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
