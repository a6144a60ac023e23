//! Presentation state for a data listing table.
//!
//! `listing` coordinates the state behind a sortable, paginated, optionally
//! multi-selectable grid whose rows come from an asynchronous query:
//!
//! - [`column`] - declarative column descriptors
//! - [`sort`] - single-column sort state and the toggle cycle
//! - [`pagination`] - page / page-size / total with clamping and coercion
//! - [`selection`] - per-row selection that survives paging and sorting
//! - [`style`] - declarative `(kind, value) -> tone` lookup for cell badges
//! - [`view`] - the renderable grid description handed to a renderer
//! - [`table`] - [`DataTable`], the façade that owns all of the above
//!
//! The crate never fetches anything. The caller keys its data source by
//! [`DataTable::query_key`] and passes each [`QuerySnapshot`] back in.
//!
//! # Example
//!
//! ```ignore
//! use listing::prelude::*;
//!
//! let columns = vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("status", "Status").kind(CellKind::Status).align(Align::Right),
//! ];
//! let mut table = DataTable::new(columns, TableConfig::default().selectable(true))?
//!     .on_event(|event| log::info!("table event: {:?}", event));
//!
//! let key = table.query_key();
//! let snapshot: QuerySnapshot<User> = fetch(&key).await;
//! table.observe(&snapshot);
//! let view = table.view(&snapshot);
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod pagination;
pub mod query;
pub mod row;
pub mod selection;
pub mod sort;
pub mod style;
pub mod table;
pub mod view;

pub use column::{Accessor, Align, CellKind, Column, ColumnId, Columns, SELECT_COLUMN_ID};
pub use config::{Decoration, TableConfig};
pub use error::ColumnsError;
pub use pagination::{PageChange, PageSizeOption, Pagination, DEFAULT_PAGE_SIZE_OPTIONS};
pub use query::{QueryKey, QuerySnapshot};
pub use row::{CellValue, Row, RowId};
pub use selection::Selection;
pub use sort::{SortController, SortIndicator, SortOrder, SortState};
pub use style::{StyleTable, Tone};
pub use table::{DataTable, TableEvent};
pub use view::{
    Body, BodyCell, BodyRow, Checkbox, Footer, Grid, GridView, HeaderCell, MessageView,
    PageSizeSelector, Pager, RenderState, SELECT_ALL_LABEL, SkeletonView,
};

pub mod prelude {
    pub use crate::column::{Accessor, Align, CellKind, Column, Columns};
    pub use crate::config::{Decoration, TableConfig};
    pub use crate::query::{QueryKey, QuerySnapshot};
    pub use crate::row::{CellValue, Row, RowId};
    pub use crate::sort::{SortOrder, SortState};
    pub use crate::style::{StyleTable, Tone};
    pub use crate::table::{DataTable, TableEvent};
    pub use crate::view::{GridView, RenderState};
}
