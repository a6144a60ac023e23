//! The table instance.
//!
//! [`DataTable`] owns the sort, pagination and selection state for its
//! lifetime. Every action is a synchronous transition that returns the events
//! it produced and passes each of them to the registered callback. The caller
//! persists nothing itself: it keys its data source by [`DataTable::query_key`]
//! and re-reads the key after each event.

use std::fmt;

use crate::column::{Column, Columns, SELECT_COLUMN_ID};
use crate::config::TableConfig;
use crate::error::ColumnsError;
use crate::pagination::{PageChange, Pagination};
use crate::query::{QueryKey, QuerySnapshot};
use crate::row::{Row, RowId};
use crate::selection::Selection;
use crate::sort::{SortController, SortState};
use crate::view::{Composer, GridView};

/// A state change reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    SortChanged(SortState),
    PageChanged(usize),
    PageSizeChanged(usize),
    /// `selected` counts rows on every page.
    SelectionChanged { selected: usize },
}

impl From<PageChange> for TableEvent {
    fn from(change: PageChange) -> Self {
        match change {
            PageChange::Page(page) => Self::PageChanged(page),
            PageChange::PageSize(size) => Self::PageSizeChanged(size),
        }
    }
}

type EventCallback = Box<dyn FnMut(&TableEvent) + Send>;

/// A sortable, paginated, optionally selectable table.
///
/// # Example
///
/// ```ignore
/// let mut table = DataTable::new(columns, TableConfig::default().selectable(true))?;
///
/// table.toggle_sort("age");                   // Some(SortChanged(age:asc))
/// table.toggle_sort("age");                   // Some(SortChanged(age:desc))
/// let key = table.query_key();                // page=1 size=10 sort=age:desc
///
/// table.observe(&snapshot);                   // learns the total, may coerce page size
/// let view = table.view(&snapshot);
/// ```
pub struct DataTable<T> {
    columns: Columns<T>,
    config: TableConfig,
    sort: SortController,
    pagination: Pagination,
    selection: Selection,
    on_event: Option<EventCallback>,
}

impl<T: Row> DataTable<T> {
    /// Build a table.
    ///
    /// Fails if the column list is empty, has duplicate ids, or (for a
    /// selectable table) uses the reserved selection column id. An initial
    /// sort on a column that is not sortable is dropped.
    pub fn new(columns: Vec<Column<T>>, config: TableConfig) -> Result<Self, ColumnsError> {
        let columns = Columns::new(columns)?;
        if config.selectable && columns.contains(SELECT_COLUMN_ID) {
            return Err(ColumnsError::Reserved(SELECT_COLUMN_ID.to_string()));
        }

        let mut sort = SortController::default();
        if !sort.set(&columns, config.sort.clone()) {
            log::warn!(
                "initial sort '{}' does not name a sortable column, starting unsorted",
                config.sort
            );
        }

        Ok(Self {
            pagination: Pagination::new(config.page_size),
            columns,
            config,
            sort,
            selection: Selection::new(),
            on_event: None,
        })
    }

    /// Register the callback that receives every event.
    pub fn on_event(mut self, f: impl FnMut(&TableEvent) + Send + 'static) -> Self {
        self.on_event = Some(Box::new(f));
        self
    }

    /// Replace the event callback.
    pub fn set_on_event(&mut self, f: impl FnMut(&TableEvent) + Send + 'static) {
        self.on_event = Some(Box::new(f));
    }

    pub fn columns(&self) -> &Columns<T> {
        &self.columns
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn sort_state(&self) -> &SortState {
        self.sort.state()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Key for the data source. Changes whenever page, page size or sort do.
    pub fn query_key(&self) -> QueryKey {
        QueryKey {
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
            sort: self.sort.state().clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Header click on a column.
    ///
    /// Same column flips the direction, a new column sorts ascending. Unknown
    /// and non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, column: &str) -> Option<TableEvent> {
        let state = self.sort.toggle(&self.columns, column)?;
        log::debug!("sort changed to {}", state);
        self.emit(TableEvent::SortChanged(state))
    }

    /// Drop the active sort.
    pub fn clear_sort(&mut self) -> Option<TableEvent> {
        let state = self.sort.clear()?;
        self.emit(TableEvent::SortChanged(state))
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Go to a page, clamped into range.
    pub fn set_page(&mut self, page: usize) -> Option<TableEvent> {
        let change = self.pagination.set_page(page)?;
        self.emit(change.into())
    }

    pub fn next_page(&mut self) -> Option<TableEvent> {
        let change = self.pagination.next_page()?;
        self.emit(change.into())
    }

    pub fn prev_page(&mut self) -> Option<TableEvent> {
        let change = self.pagination.prev_page()?;
        self.emit(change.into())
    }

    pub fn first_page(&mut self) -> Option<TableEvent> {
        let change = self.pagination.first_page()?;
        self.emit(change.into())
    }

    pub fn last_page(&mut self) -> Option<TableEvent> {
        let change = self.pagination.last_page()?;
        self.emit(change.into())
    }

    /// Change the page size. May also move the page back into range.
    pub fn set_page_size(&mut self, page_size: usize) -> Vec<TableEvent> {
        let changes = self.pagination.set_page_size(page_size);
        self.emit_all(changes)
    }

    /// Step to the next (or previous) entry of the page-size selector.
    pub fn cycle_page_size(&mut self, forward: bool) -> Vec<TableEvent> {
        let options = self
            .pagination
            .page_size_options(&self.config.page_size_options);
        let current = self.pagination.page_size();
        let Some(pos) = options.iter().position(|o| o.size == current) else {
            return Vec::new();
        };

        let target = if forward {
            options.get(pos + 1)
        } else {
            pos.checked_sub(1).and_then(|p| options.get(p))
        };

        match target {
            Some(option) => self.set_page_size(option.size),
            None => Vec::new(),
        }
    }

    /// Take the total from a settled snapshot.
    ///
    /// Loading and failed snapshots carry no total and are ignored, so the
    /// pager keeps the last known page count while a fetch is in flight.
    pub fn observe(&mut self, snapshot: &QuerySnapshot<T>) -> Vec<TableEvent> {
        if !snapshot.is_settled() || snapshot.total == self.pagination.total() {
            return Vec::new();
        }
        log::debug!("total rows changed to {}", snapshot.total);
        let changes = self.pagination.set_total(snapshot.total);
        self.emit_all(changes)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Flip one row's checkbox. Ignored when the table is not selectable.
    pub fn toggle_row(&mut self, id: &str) -> Option<TableEvent> {
        if !self.config.selectable {
            return None;
        }
        self.selection.toggle(id);
        self.selection_changed()
    }

    /// Select-all toggle over an explicit set of ids.
    pub fn toggle_all(&mut self, ids: &[RowId]) -> Option<TableEvent> {
        if !self.config.selectable || ids.is_empty() {
            return None;
        }
        self.selection.toggle_all(ids);
        self.selection_changed()
    }

    /// Select-all toggle over the rows the snapshot currently shows.
    pub fn toggle_all_visible(&mut self, snapshot: &QuerySnapshot<T>) -> Option<TableEvent> {
        if !snapshot.is_settled() {
            return None;
        }
        let ids: Vec<RowId> = snapshot.data.iter().map(Row::id).collect();
        self.toggle_all(&ids)
    }

    /// Forget the selection on every page.
    pub fn clear_selection(&mut self) -> Option<TableEvent> {
        if self.selection.clear() == 0 {
            return None;
        }
        self.selection_changed()
    }

    fn selection_changed(&mut self) -> Option<TableEvent> {
        let selected = self.selection.count();
        self.emit(TableEvent::SelectionChanged { selected })
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Compose the view for a snapshot. Pure: no state changes, no events.
    pub fn view(&self, snapshot: &QuerySnapshot<T>) -> GridView {
        Composer {
            columns: &self.columns,
            config: &self.config,
            sort: &self.sort,
            pagination: &self.pagination,
            selection: &self.selection,
        }
        .compose(snapshot)
    }

    fn emit(&mut self, event: TableEvent) -> Option<TableEvent> {
        if let Some(callback) = self.on_event.as_mut() {
            callback(&event);
        }
        Some(event)
    }

    fn emit_all(&mut self, changes: Vec<PageChange>) -> Vec<TableEvent> {
        changes
            .into_iter()
            .filter_map(|change| self.emit(change.into()))
            .collect()
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("config", &self.config)
            .field("sort", &self.sort)
            .field("pagination", &self.pagination)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
