use crate::support::Harness;
use algorhythm_client::application::fetcher::Refresh;
use algorhythm_client::application::pages::Dashboard;
use algorhythm_client::application::scheduler::PollingScheduler;
use algorhythm_client::application::state::AppState;
use algorhythm_client::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
struct Counter {
    started: AtomicUsize,
    finished: AtomicUsize,
    latency: Duration,
}

impl Counter {
    fn slow(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Refresh for Counter {
    fn name(&self) -> &str {
        "counter"
    }

    async fn refresh(&self) -> Result<(), AppError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_prime_fetches_once_before_any_tick() {
    let counter = Arc::new(Counter::default());
    let mut scheduler = PollingScheduler::new();
    scheduler.register(counter.clone(), Duration::from_secs(10));

    scheduler.prime().await;
    assert_eq!(counter.started(), 1);

    scheduler.start();
    tokio::time::sleep(Duration::from_secs(9)).await;
    assert_eq!(counter.started(), 1);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(counter.started(), 2);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(counter.started(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_slow_fetch_does_not_delay_next_tick() {
    let counter = Arc::new(Counter::slow(Duration::from_secs(25)));
    let mut scheduler = PollingScheduler::new();
    scheduler.register(counter.clone(), Duration::from_secs(10));
    scheduler.start();

    tokio::time::sleep(Duration::from_secs(21)).await;
    assert_eq!(counter.started(), 2);
    assert_eq!(counter.finished(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_ticks_but_not_in_flight_fetches() {
    let counter = Arc::new(Counter::slow(Duration::from_secs(5)));
    let mut scheduler = PollingScheduler::new();
    scheduler.register(counter.clone(), Duration::from_secs(10));
    scheduler.start();
    assert!(scheduler.is_running());

    tokio::time::sleep(Duration::from_secs(11)).await;
    scheduler.shutdown();
    assert!(!scheduler.is_running());

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(counter.started(), 1);
    assert_eq!(counter.finished(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_zero_period_is_primed_but_never_polled() {
    let counter = Arc::new(Counter::default());
    let mut scheduler = PollingScheduler::new();
    scheduler.register(counter.clone(), Duration::ZERO);
    scheduler.prime().await;
    scheduler.start();

    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(counter.started(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_sentiment_respects_five_minute_cadence() {
    let harness = Harness::logged_in();
    harness.stub_dashboard();
    let dashboard = Dashboard::open(&harness.ctx, AppState::default())
        .await
        .ready()
        .unwrap();

    tokio::time::sleep(Duration::from_secs(299)).await;
    assert_eq!(harness.api.count("/api/news/market"), 1);
    assert!(harness.api.count("/api/live/NIFTY") > 1);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(harness.api.count("/api/news/market"), 2);

    dashboard.close();
}
