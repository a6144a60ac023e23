//! The data-source boundary.
//!
//! A data source is keyed by [`QueryKey`] and reports a [`QuerySnapshot`].
//! The table derives the key from its own state, so any change of page, page
//! size or sort necessarily asks for a new result. Superseding stale requests
//! is the data source's job: a snapshot must belong to the current key.

use std::fmt;

use crate::sort::SortState;
use crate::view::RenderState;

/// Everything a data source needs to produce one page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub sort: SortState,
}

impl QueryKey {
    /// Zero-based offset of the first requested row.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page={} size={} sort={}",
            self.page, self.page_size, self.sort
        )
    }
}

/// What a data source currently reports for the table's key.
#[derive(Debug, Clone)]
pub struct QuerySnapshot<T> {
    pub is_loading: bool,
    pub is_error: bool,
    /// Rows of the current page, already sorted.
    pub data: Vec<T>,
    /// Total number of rows across all pages.
    pub total: usize,
}

impl<T> Default for QuerySnapshot<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T> QuerySnapshot<T> {
    /// A fetch is in flight.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            is_error: false,
            data: Vec::new(),
            total: 0,
        }
    }

    /// The fetch failed.
    pub fn failed() -> Self {
        Self {
            is_loading: false,
            is_error: true,
            data: Vec::new(),
            total: 0,
        }
    }

    /// The fetch resolved.
    pub fn ready(data: Vec<T>, total: usize) -> Self {
        Self {
            is_loading: false,
            is_error: false,
            data,
            total,
        }
    }

    /// Whether the snapshot holds a resolved result.
    pub fn is_settled(&self) -> bool {
        !self.is_loading && !self.is_error
    }

    /// Which view the snapshot calls for.
    pub fn render_state(&self) -> RenderState {
        RenderState::of(self)
    }
}
