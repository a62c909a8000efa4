//! End-to-end run against the mock feed: sync a symbol into an in-memory
//! store, then scan the merged history for power earnings gaps.
//!
//! ```sh
//! cargo run -p pegscan --example sync_and_scan
//! ```

use std::sync::Arc;
use std::time::Duration;

use pegscan::{Pegscan, PegscanError};
use pegscan_mock::{MemoryPriceStore, MockFeed};

#[tokio::main]
async fn main() -> Result<(), PegscanError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pegscan=debug".into()),
        )
        .init();

    let feed = Arc::new(MockFeed::new());
    let engine = Pegscan::builder()
        .price_source(feed.clone())
        .earnings_source(feed)
        .store(Arc::new(MemoryPriceStore::new()))
        .rate_limit(Duration::from_millis(250))
        .build()?;

    let history = engine.reconcile("AAPL").await?;
    println!("synced {} trading days for AAPL", history.len());
    for point in &history {
        println!(
            "  {}  open {:>8.2}  close {:>8.2}  vol {:>10}",
            point.date, point.open, point.close, point.volume
        );
    }

    let found = engine.power_earnings_gaps("AAPL", 0.05).await?;
    println!("\n{} power earnings gap(s) at the 5% threshold:", found.len());
    for eg in &found {
        println!(
            "  {}  {:+.1}%  (reported {}, lag {} day(s))",
            eg.gap.current.date,
            eg.gap.rel_change() * 100.0,
            eg.report_date,
            (eg.gap.current.date - eg.report_date).num_days(),
        );
        if let Some(two_days_ago) = &eg.two_days_ago {
            println!(
                "      two days out: open {:.2} close {:.2}",
                two_days_ago.open, two_days_ago.close
            );
        }
    }

    Ok(())
}
