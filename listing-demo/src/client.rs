//! Cached, retrying loads and the fetch lifecycle around them.
//!
//! [`QueryClient`] answers a [`QueryKey`] from its cache or from the adapter,
//! retrying transient failures. [`Fetcher`] runs those loads on tokio tasks,
//! one at a time: a new request cancels the one in flight, and completions
//! for keys the table has moved past are dropped.

use std::sync::Arc;

use dashmap::DashMap;
use listing::{QueryKey, QuerySnapshot};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::config::AdapterConfig;
use crate::error::FetchError;
use crate::source::{Page, QueryAdapter};

#[derive(Debug, Clone)]
struct CachedPage<T> {
    page: Page<T>,
    stored: Instant,
}

pub struct QueryClient<T> {
    adapter: Arc<dyn QueryAdapter<T>>,
    cache: DashMap<QueryKey, CachedPage<T>>,
    config: AdapterConfig,
}

impl<T: Clone + Send + Sync + 'static> QueryClient<T> {
    pub fn new(adapter: Arc<dyn QueryAdapter<T>>, config: AdapterConfig) -> Self {
        Self {
            adapter,
            cache: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// A fresh cached page, if any. Expired entries are evicted.
    pub fn cached(&self, key: &QueryKey) -> Option<Page<T>> {
        let entry = self.cache.get(key)?;
        if entry.stored.elapsed() >= self.config.cache_ttl {
            drop(entry);
            self.cache.remove(key);
            return None;
        }
        Some(entry.page.clone())
    }

    /// Drop every cached page. Returns how many there were.
    pub fn invalidate(&self) -> usize {
        let n = self.cache.len();
        self.cache.clear();
        n
    }

    /// Load a page, from the cache when possible.
    ///
    /// Retryable failures are retried with exponential backoff. Cancelling
    /// the token aborts both the fetch and the backoff wait.
    pub async fn load(
        &self,
        key: &QueryKey,
        cancel: &CancellationToken,
    ) -> Result<Page<T>, FetchError> {
        if let Some(page) = self.cached(key) {
            log::debug!("cache hit for {}", key);
            return Ok(page);
        }

        let retry = &self.config.retry;
        let mut attempt = 0;
        loop {
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(FetchError::Cancelled),
                result = self.adapter.fetch(key) => result,
            };

            match result {
                Ok(page) => {
                    self.cache.insert(
                        key.clone(),
                        CachedPage {
                            page: page.clone(),
                            stored: Instant::now(),
                        },
                    );
                    return Ok(page);
                }
                Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                    let delay = retry.delay_for(attempt);
                    attempt += 1;
                    log::warn!(
                        "fetch for {} failed ({}), retry {}/{} in {:?}",
                        key,
                        e,
                        attempt,
                        retry.max_retries,
                        delay
                    );
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return Err(FetchError::Cancelled),
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
                Err(e) => {
                    log::error!("fetch for {} failed: {}", key, e);
                    return Err(e);
                }
            }
        }
    }
}

/// The outcome of one background load.
#[derive(Debug)]
pub struct Completion<T> {
    pub key: QueryKey,
    pub result: Result<Page<T>, FetchError>,
}

impl<T> Completion<T> {
    pub fn into_snapshot(self) -> QuerySnapshot<T> {
        match self.result {
            Ok(page) => QuerySnapshot::ready(page.data, page.total),
            Err(_) => QuerySnapshot::failed(),
        }
    }
}

/// Runs loads in the background and reports them over a channel.
pub struct Fetcher<T> {
    client: Arc<QueryClient<T>>,
    tx: mpsc::UnboundedSender<Completion<T>>,
    in_flight: Option<(QueryKey, CancellationToken)>,
}

impl<T: Clone + Send + Sync + 'static> Fetcher<T> {
    pub fn new(client: Arc<QueryClient<T>>) -> (Self, mpsc::UnboundedReceiver<Completion<T>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let fetcher = Self {
            client,
            tx,
            in_flight: None,
        };
        (fetcher, rx)
    }

    pub fn client(&self) -> &Arc<QueryClient<T>> {
        &self.client
    }

    /// Key of the load in flight.
    pub fn in_flight(&self) -> Option<&QueryKey> {
        self.in_flight.as_ref().map(|(key, _)| key)
    }

    /// Start loading `key` and return the snapshot to show until it lands.
    ///
    /// A cached page is returned as a ready snapshot straight away. Any other
    /// load in flight is cancelled.
    pub fn request(&mut self, key: QueryKey) -> QuerySnapshot<T> {
        if let Some(page) = self.client.cached(&key) {
            self.cancel();
            return QuerySnapshot::ready(page.data, page.total);
        }
        if self.in_flight() == Some(&key) {
            return QuerySnapshot::loading();
        }

        self.cancel();
        let token = CancellationToken::new();
        self.in_flight = Some((key.clone(), token.clone()));

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.load(&key, &token).await;
            if matches!(result, Err(FetchError::Cancelled)) {
                log::debug!("fetch for {} superseded", key);
                return;
            }
            // The receiver is gone once the app has quit.
            let _ = tx.send(Completion { key, result });
        });

        QuerySnapshot::loading()
    }

    /// Forget the cache and load `key` again.
    pub fn reload(&mut self, key: QueryKey) -> QuerySnapshot<T> {
        self.cancel();
        let dropped = self.client.invalidate();
        log::info!("reloading {}, dropped {} cached pages", key, dropped);
        self.request(key)
    }

    pub fn cancel(&mut self) {
        if let Some((key, token)) = self.in_flight.take() {
            log::debug!("cancelling fetch for {}", key);
            token.cancel();
        }
    }

    /// Turn a completion into a snapshot if it answers `current`.
    pub fn accept(
        &mut self,
        completion: Completion<T>,
        current: &QueryKey,
    ) -> Option<QuerySnapshot<T>> {
        if completion.key != *current {
            log::debug!("dropping stale result for {}", completion.key);
            return None;
        }
        if self.in_flight() == Some(&completion.key) {
            self.in_flight = None;
        }
        Some(completion.into_snapshot())
    }
}
