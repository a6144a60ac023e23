//! Data sources.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use listing::{QueryKey, Row, SortOrder};

use crate::config::AdapterConfig;
use crate::error::FetchError;
use crate::users::{User, mock_users};

/// One page of rows and the size of the whole result.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
}

/// Loads the rows a [`QueryKey`] asks for.
#[async_trait]
pub trait QueryAdapter<T>: Send + Sync {
    async fn fetch(&self, key: &QueryKey) -> Result<Page<T>, FetchError>;
}

/// In-memory users behind a simulated network.
///
/// Every fetch sorts the full dataset by the requested column, slices out the
/// requested page and answers after the configured latency. An outage switch
/// makes every fetch fail until it is turned off again.
#[derive(Debug)]
pub struct MockUserSource {
    users: Vec<User>,
    latency: Duration,
    failure_rate: f64,
    outage: AtomicBool,
    requests: AtomicUsize,
}

impl MockUserSource {
    pub fn new(config: &AdapterConfig) -> Self {
        Self::with_users(mock_users(Utc::now()), config)
    }

    pub fn with_users(users: Vec<User>, config: &AdapterConfig) -> Self {
        Self {
            users,
            latency: config.latency,
            failure_rate: config.failure_rate,
            outage: AtomicBool::new(false),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn set_outage(&self, down: bool) {
        self.outage.store(down, Ordering::Relaxed);
    }

    /// Flip the outage switch. Returns whether the source is now down.
    pub fn toggle_outage(&self) -> bool {
        !self.outage.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn is_down(&self) -> bool {
        self.outage.load(Ordering::Relaxed)
    }

    /// Fetches started so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    /// Sort and slice without the simulated network.
    pub fn query(&self, key: &QueryKey) -> Result<Page<User>, FetchError> {
        let mut sorted: Vec<&User> = self.users.iter().collect();

        if let Some(column) = key.sort.column.as_deref() {
            if let Some(first) = self.users.first()
                && first.field(column).is_empty()
            {
                return Err(FetchError::UnknownColumn(column.to_string()));
            }
            sorted.sort_by(|a, b| {
                let ordering = a.field(column).compare(&b.field(column));
                match key.sort.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let data = sorted
            .into_iter()
            .skip(key.offset())
            .take(key.page_size)
            .cloned()
            .collect();

        Ok(Page {
            data,
            total: self.users.len(),
        })
    }
}

#[async_trait]
impl QueryAdapter<User> for MockUserSource {
    async fn fetch(&self, key: &QueryKey) -> Result<Page<User>, FetchError> {
        let n = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("mock fetch #{} for {}", n, key);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.is_down() {
            return Err(FetchError::Unavailable("simulated outage".to_string()));
        }
        if self.failure_rate > 0.0 && rand::random::<f64>() < self.failure_rate {
            return Err(FetchError::Timeout(self.latency));
        }

        self.query(key)
    }
}
