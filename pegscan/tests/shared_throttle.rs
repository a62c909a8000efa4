use std::sync::Arc;
use std::time::{Duration, Instant};

use pegscan::{Pegscan, RequestThrottle};
use pegscan_mock::{MemoryPriceStore, MockFeed};
use tokio_test::assert_ok;

fn engine_with(throttle: Arc<RequestThrottle>) -> Pegscan {
    let feed = Arc::new(MockFeed::new());
    Pegscan::builder()
        .price_source(feed.clone())
        .earnings_source(feed)
        .store(Arc::new(MemoryPriceStore::new()))
        .shared_throttle(throttle)
        .build()
        .unwrap()
}

#[tokio::test]
async fn injected_throttle_is_shared_not_copied() {
    let interval = Duration::from_millis(60);
    let throttle = Arc::new(RequestThrottle::new(interval));

    let engine_a = engine_with(throttle.clone());
    let engine_b = engine_with(throttle.clone());

    assert_eq!(engine_a.throttle().interval(), interval);
    assert!(Arc::ptr_eq(engine_a.throttle(), &throttle));
    assert!(Arc::ptr_eq(engine_a.throttle(), engine_b.throttle()));
}

#[tokio::test]
async fn two_engines_serialize_through_one_gate() {
    let interval = Duration::from_millis(60);
    let throttle = Arc::new(RequestThrottle::new(interval));

    let engine_a = engine_with(throttle.clone());
    let engine_b = engine_with(throttle);

    let started = Instant::now();
    assert_ok!(engine_a.reconcile("AAPL").await);
    assert_ok!(engine_b.reconcile("AAPL").await);

    // The second engine's upstream call waits out the shared interval.
    assert!(
        started.elapsed() >= interval,
        "elapsed {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn builder_rate_limit_is_ignored_when_a_throttle_is_shared() {
    let throttle = Arc::new(RequestThrottle::new(Duration::from_millis(30)));
    let feed = Arc::new(MockFeed::new());

    let engine = Pegscan::builder()
        .price_source(feed.clone())
        .earnings_source(feed)
        .store(Arc::new(MemoryPriceStore::new()))
        .rate_limit(Duration::from_secs(3600))
        .shared_throttle(throttle.clone())
        .build()
        .unwrap();

    assert_eq!(engine.throttle().interval(), Duration::from_millis(30));
    assert!(Arc::ptr_eq(engine.throttle(), &throttle));
}
