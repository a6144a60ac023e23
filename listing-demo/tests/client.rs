mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use common::key;
use listing::{QueryKey, SortState};
use listing_demo::{
    AdapterConfig, Completion, FetchError, Fetcher, Page, QueryAdapter, QueryClient, RetryConfig,
};
use tokio_util::sync::CancellationToken;

/// Fails a set number of times, then answers with the requested page number.
struct Scripted {
    failures_left: AtomicU32,
    calls: AtomicU32,
    error: FetchError,
    latency: Duration,
}

impl Scripted {
    fn new(failures: u32, error: FetchError) -> Arc<Self> {
        Arc::new(Self {
            failures_left: AtomicU32::new(failures),
            calls: AtomicU32::new(0),
            error,
            latency: Duration::ZERO,
        })
    }

    fn slow(latency: Duration) -> Arc<Self> {
        Arc::new(Self {
            failures_left: AtomicU32::new(0),
            calls: AtomicU32::new(0),
            error: FetchError::Cancelled,
            latency,
        })
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryAdapter<usize> for Scripted {
    async fn fetch(&self, key: &QueryKey) -> Result<Page<usize>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let left = self.failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::SeqCst);
            return Err(self.error.clone());
        }
        Ok(Page {
            data: vec![key.page],
            total: 50,
        })
    }
}

fn retrying() -> AdapterConfig {
    AdapterConfig::instant().with_retry(
        RetryConfig::default()
            .max_retries(2)
            .initial_delay(Duration::from_millis(10)),
    )
}

fn client(adapter: &Arc<Scripted>, config: AdapterConfig) -> Arc<QueryClient<usize>> {
    let adapter: Arc<dyn QueryAdapter<usize>> = adapter.clone();
    Arc::new(QueryClient::new(adapter, config))
}

fn page(n: usize) -> QueryKey {
    key(n, 10, SortState::asc("name"))
}

#[test]
fn test_backoff_doubles_up_to_max() {
    let retry = RetryConfig::default()
        .initial_delay(Duration::from_millis(100))
        .max_delay(Duration::from_millis(300));
    assert_eq!(retry.delay_for(0), Duration::from_millis(100));
    assert_eq!(retry.delay_for(1), Duration::from_millis(200));
    assert_eq!(retry.delay_for(2), Duration::from_millis(300));
    assert_eq!(retry.delay_for(40), Duration::from_millis(300));
}

#[test]
fn test_failure_rate_is_clamped() {
    assert_eq!(AdapterConfig::new().with_failure_rate(3.0).failure_rate, 1.0);
    assert_eq!(AdapterConfig::new().with_failure_rate(-1.0).failure_rate, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_retries_transient_failures() {
    let adapter = Scripted::new(2, FetchError::Unavailable("flaky".into()));
    let client = client(&adapter, retrying());

    let page = client.load(&page(3), &CancellationToken::new()).await.unwrap();
    assert_eq!(page.data, vec![3]);
    assert_eq!(adapter.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_gives_up_after_max_retries() {
    let adapter = Scripted::new(3, FetchError::Timeout(Duration::from_millis(5)));
    let client = client(&adapter, retrying());

    let err = client.load(&page(1), &CancellationToken::new()).await.unwrap_err();
    assert_eq!(err, FetchError::Timeout(Duration::from_millis(5)));
    assert_eq!(adapter.calls(), 3);
}

#[tokio::test]
async fn test_permanent_errors_are_not_retried() {
    let adapter = Scripted::new(5, FetchError::UnknownColumn("salary".into()));
    let client = client(&adapter, retrying());

    let err = client.load(&page(1), &CancellationToken::new()).await.unwrap_err();
    assert_eq!(err, FetchError::UnknownColumn("salary".into()));
    assert_eq!(adapter.calls(), 1);
}

#[tokio::test]
async fn test_pages_are_cached_until_invalidated() {
    let adapter = Scripted::new(0, FetchError::Cancelled);
    let client = client(&adapter, AdapterConfig::instant());
    let token = CancellationToken::new();

    client.load(&page(1), &token).await.unwrap();
    client.load(&page(1), &token).await.unwrap();
    assert_eq!(adapter.calls(), 1);

    client.load(&page(2), &token).await.unwrap();
    assert_eq!(adapter.calls(), 2);

    assert_eq!(client.invalidate(), 2);
    client.load(&page(1), &token).await.unwrap();
    assert_eq!(adapter.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_cache_entries_expire() {
    let adapter = Scripted::new(0, FetchError::Cancelled);
    let config = AdapterConfig::instant().with_cache_ttl(Duration::from_secs(1));
    let client = client(&adapter, config);

    client.load(&page(1), &CancellationToken::new()).await.unwrap();
    assert!(client.cached(&page(1)).is_some());

    tokio::time::advance(Duration::from_secs(2)).await;
    assert!(client.cached(&page(1)).is_none());
}

#[tokio::test]
async fn test_cancelled_before_fetch() {
    let adapter = Scripted::new(0, FetchError::Cancelled);
    let client = client(&adapter, AdapterConfig::instant());
    let token = CancellationToken::new();
    token.cancel();

    let err = client.load(&page(1), &token).await.unwrap_err();
    assert_eq!(err, FetchError::Cancelled);
    assert_eq!(adapter.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_during_backoff() {
    let adapter = Scripted::new(10, FetchError::Unavailable("down".into()));
    let config = AdapterConfig::instant().with_retry(
        RetryConfig::default()
            .max_retries(5)
            .initial_delay(Duration::from_secs(10)),
    );
    let client = client(&adapter, config);
    let token = CancellationToken::new();

    let task = {
        let client = Arc::clone(&client);
        let token = token.clone();
        tokio::spawn(async move { client.load(&page(1), &token).await })
    };

    tokio::time::sleep(Duration::from_millis(1)).await;
    token.cancel();

    let result = task.await.unwrap();
    assert_eq!(result.unwrap_err(), FetchError::Cancelled);
    assert_eq!(adapter.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_new_request_supersedes_in_flight() {
    let adapter = Scripted::slow(Duration::from_millis(100));
    let (mut fetcher, mut rx) = Fetcher::new(client(&adapter, AdapterConfig::instant()));

    assert!(fetcher.request(page(1)).is_loading);
    assert!(fetcher.request(page(2)).is_loading);
    assert_eq!(fetcher.in_flight(), Some(&page(2)));

    let done = rx.recv().await.unwrap();
    assert_eq!(done.key, page(2));
    assert_eq!(done.result.as_ref().unwrap().data, vec![2]);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_same_key_is_not_fetched_twice() {
    let adapter = Scripted::slow(Duration::from_millis(100));
    let (mut fetcher, mut rx) = Fetcher::new(client(&adapter, AdapterConfig::instant()));

    fetcher.request(page(1));
    fetcher.request(page(1));
    rx.recv().await.unwrap();
    assert_eq!(adapter.calls(), 1);
}

#[tokio::test]
async fn test_cached_request_is_ready_immediately() {
    let adapter = Scripted::new(0, FetchError::Cancelled);
    let (mut fetcher, mut rx) = Fetcher::new(client(&adapter, AdapterConfig::instant()));

    assert!(fetcher.request(page(4)).is_loading);
    let done = rx.recv().await.unwrap();
    let snapshot = fetcher.accept(done, &page(4)).unwrap();
    assert_eq!(snapshot.data, vec![4]);
    assert!(fetcher.in_flight().is_none());

    let again = fetcher.request(page(4));
    assert!(again.is_settled());
    assert_eq!(again.data, vec![4]);
    assert_eq!(again.total, 50);
}

#[tokio::test]
async fn test_stale_completions_are_dropped() {
    let adapter = Scripted::new(0, FetchError::Cancelled);
    let (mut fetcher, _rx) = Fetcher::new(client(&adapter, AdapterConfig::instant()));

    let stale = Completion {
        key: page(1),
        result: Ok(Page {
            data: vec![1],
            total: 50,
        }),
    };
    assert!(fetcher.accept(stale, &page(2)).is_none());

    let failed: Completion<usize> = Completion {
        key: page(2),
        result: Err(FetchError::Unavailable("down".into())),
    };
    let snapshot = fetcher.accept(failed, &page(2)).unwrap();
    assert!(snapshot.is_error);
}
