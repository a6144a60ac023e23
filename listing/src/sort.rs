//! Sort state and the header toggle cycle.
//!
//! Only one column sorts at a time. The controller never reorders rows: it
//! keeps the display copy of the sort state and reports changes, and the data
//! source is expected to return rows already ordered.

use std::fmt;

use crate::column::{ColumnId, Columns};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active sort: at most one column and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    /// Sorted column, `None` when unsorted.
    pub column: Option<ColumnId>,
    /// Direction. Meaningless while `column` is `None`.
    pub order: SortOrder,
}

impl SortState {
    /// No active sort.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Ascending on a column.
    pub fn asc(column: impl Into<ColumnId>) -> Self {
        Self {
            column: Some(column.into()),
            order: SortOrder::Asc,
        }
    }

    /// Descending on a column.
    pub fn desc(column: impl Into<ColumnId>) -> Self {
        Self {
            column: Some(column.into()),
            order: SortOrder::Desc,
        }
    }

    /// Check if this state sorts by the given column.
    pub fn is_sorted_by(&self, column: &str) -> bool {
        self.column.as_deref() == Some(column)
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.column {
            Some(column) => write!(f, "{}:{}", column, self.order),
            None => f.write_str("unsorted"),
        }
    }
}

/// Header sort affordance for a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// Holds the display copy of the sort state.
#[derive(Debug, Clone, Default)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    /// Create a controller with an initial state.
    ///
    /// The state is taken as-is; use [`set`](Self::set) to validate it
    /// against a column list.
    pub fn new(state: SortState) -> Self {
        Self { state }
    }

    /// Current sort state.
    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Toggle sort for a column.
    ///
    /// If the column is already sorted, flips the direction. If sorting a
    /// different column, sorts ascending and forgets the previous column.
    /// Returns the new state, or `None` if the column is unknown or not
    /// sortable.
    pub fn toggle<T>(&mut self, columns: &Columns<T>, column: &str) -> Option<SortState> {
        if !columns.is_sortable(column) {
            log::debug!("ignoring sort toggle on non-sortable column '{}'", column);
            return None;
        }

        self.state = if self.state.is_sorted_by(column) {
            SortState {
                column: Some(column.to_string()),
                order: self.state.order.flip(),
            }
        } else {
            SortState::asc(column)
        };

        Some(self.state.clone())
    }

    /// Replace the sort state.
    ///
    /// Returns `false` (and keeps the current state) if the state names a
    /// column that is unknown or not sortable.
    pub fn set<T>(&mut self, columns: &Columns<T>, state: SortState) -> bool {
        if let Some(column) = &state.column
            && !columns.is_sortable(column)
        {
            return false;
        }
        self.state = state;
        true
    }

    /// Clear the sort. Returns the new state if anything changed.
    pub fn clear(&mut self) -> Option<SortState> {
        if self.state.column.is_none() {
            return None;
        }
        self.state = SortState::unsorted();
        Some(self.state.clone())
    }

    /// Header indicator for a column.
    pub fn indicator(&self, column: &str) -> SortIndicator {
        if !self.state.is_sorted_by(column) {
            return SortIndicator::Unsorted;
        }
        match self.state.order {
            SortOrder::Asc => SortIndicator::Ascending,
            SortOrder::Desc => SortIndicator::Descending,
        }
    }
}
