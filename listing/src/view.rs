//! The renderable grid description.
//!
//! [`GridView`] is everything a renderer needs and nothing it has to work out
//! itself: which of the loading / error / empty / ready states applies, the
//! header cells and their sort affordances, each body cell's text and tone,
//! and the footer's page-size selector, selection count and pager.

use crate::column::{Align, ColumnId, Columns};
use crate::config::{Decoration, TableConfig};
use crate::pagination::{PageSizeOption, Pagination};
use crate::query::QuerySnapshot;
use crate::row::{Row, RowId};
use crate::selection::Selection;
use crate::sort::{SortController, SortIndicator};
use crate::style::Tone;

/// Label of the select-all checkbox.
pub const SELECT_ALL_LABEL: &str = "Select all rows";

/// Which view a snapshot calls for.
///
/// Driven only by the snapshot flags: loading wins over error, and a settled
/// snapshot with no rows is `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Error,
    Ready,
    Empty,
}

impl RenderState {
    pub fn of<T>(snapshot: &QuerySnapshot<T>) -> Self {
        if snapshot.is_loading {
            Self::Loading
        } else if snapshot.is_error {
            Self::Error
        } else if snapshot.data.is_empty() {
            Self::Empty
        } else {
            Self::Ready
        }
    }
}

/// What to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    /// Placeholder grid while a fetch is in flight.
    Loading(SkeletonView),
    /// The fetch failed. Nothing else is shown.
    Error(MessageView),
    /// Header, body (rows or empty-state) and footer.
    Grid(Grid),
}

impl GridView {
    pub fn render_state(&self) -> RenderState {
        match self {
            Self::Loading(_) => RenderState::Loading,
            Self::Error(_) => RenderState::Error,
            Self::Grid(grid) => match grid.body {
                Body::Rows(_) => RenderState::Ready,
                Body::Empty { .. } => RenderState::Empty,
            },
        }
    }

    /// The grid, if this view has one.
    pub fn as_grid(&self) -> Option<&Grid> {
        match self {
            Self::Grid(grid) => Some(grid),
            _ => None,
        }
    }
}

/// Fixed-shape loading placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonView {
    pub header: Option<Decoration>,
    /// Configured columns, plus one when the table is selectable.
    pub columns: usize,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub message: String,
}

/// A checkbox in the selection column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub column_id: ColumnId,
    pub label: String,
    pub align: Align,
    pub width: Option<u16>,
    /// `Some` for sortable columns.
    pub sort: Option<SortIndicator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub column_id: ColumnId,
    pub text: String,
    pub align: Align,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub id: RowId,
    /// Position on the current page.
    pub index: usize,
    pub selected: bool,
    /// Alternating background for odd rows.
    pub striped: bool,
    /// `Some` when the table is selectable.
    pub checkbox: Option<Checkbox>,
    pub cells: Vec<BodyCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Rows(Vec<BodyRow>),
    /// Explicit empty-state affordance spanning every column.
    Empty { message: String, span: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeSelector {
    pub current: usize,
    pub options: Vec<PageSizeOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// 1-based inclusive rows on this page, `None` when there are none.
    pub range: Option<(usize, usize)>,
    pub total: usize,
}

impl Pager {
    /// `"page / total_pages"`.
    pub fn label(&self) -> String {
        format!("{} / {}", self.page, self.total_pages)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub page_size: PageSizeSelector,
    /// Selected rows across all pages, `Some` when the table is selectable.
    pub selected: Option<usize>,
    pub pager: Pager,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub header: Option<Decoration>,
    pub select_all: Option<Checkbox>,
    pub columns: Vec<HeaderCell>,
    pub body: Body,
    pub footer: Footer,
    pub decoration_footer: Option<Decoration>,
}

impl Grid {
    /// Number of rendered columns, including the selection column.
    pub fn column_count(&self) -> usize {
        self.columns.len() + usize::from(self.select_all.is_some())
    }

    /// Body rows, empty for the empty state.
    pub fn rows(&self) -> &[BodyRow] {
        match &self.body {
            Body::Rows(rows) => rows,
            Body::Empty { .. } => &[],
        }
    }
}

/// Borrowed table state for one composition pass.
pub(crate) struct Composer<'a, T> {
    pub columns: &'a Columns<T>,
    pub config: &'a TableConfig,
    pub sort: &'a SortController,
    pub pagination: &'a Pagination,
    pub selection: &'a Selection,
}

impl<T: Row> Composer<'_, T> {
    pub fn compose(&self, snapshot: &QuerySnapshot<T>) -> GridView {
        match RenderState::of(snapshot) {
            RenderState::Loading => GridView::Loading(SkeletonView {
                header: self.config.header.clone(),
                columns: self.column_count(),
                rows: self.config.skeleton_rows,
            }),
            RenderState::Error => GridView::Error(MessageView {
                message: self.config.error_message.clone(),
            }),
            RenderState::Empty | RenderState::Ready => GridView::Grid(self.grid(&snapshot.data)),
        }
    }

    fn column_count(&self) -> usize {
        self.columns.len() + usize::from(self.config.selectable)
    }

    fn grid(&self, rows: &[T]) -> Grid {
        let ids: Vec<RowId> = rows.iter().map(Row::id).collect();

        let select_all = self.config.selectable.then(|| Checkbox {
            checked: self.selection.all_selected(&ids),
            label: SELECT_ALL_LABEL.to_string(),
        });

        let body = if rows.is_empty() {
            Body::Empty {
                message: self.config.empty_message.clone(),
                span: self.column_count(),
            }
        } else {
            Body::Rows(
                rows.iter()
                    .zip(ids)
                    .enumerate()
                    .map(|(index, (row, id))| self.body_row(index, id, row))
                    .collect(),
            )
        };

        Grid {
            header: self.config.header.clone(),
            select_all,
            columns: self.header_cells(),
            body,
            footer: self.footer(),
            decoration_footer: self.config.footer.clone(),
        }
    }

    fn header_cells(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| HeaderCell {
                column_id: column.id.clone(),
                label: column.header.clone(),
                align: column.align,
                width: column.width,
                sort: column.sortable.then(|| self.sort.indicator(&column.id)),
            })
            .collect()
    }

    fn body_row(&self, index: usize, id: RowId, row: &T) -> BodyRow {
        let selected = self.selection.is_selected(&id);
        let cells = self
            .columns
            .iter()
            .map(|column| {
                let value = column.value(row);
                BodyCell {
                    column_id: column.id.clone(),
                    tone: self.config.styles.tone(&column.kind, &value),
                    text: value.to_string(),
                    align: column.align,
                }
            })
            .collect();

        BodyRow {
            id,
            index,
            selected,
            striped: index % 2 == 1,
            checkbox: self.config.selectable.then(|| Checkbox {
                checked: selected,
                label: self.config.selection_label.clone(),
            }),
            cells,
        }
    }

    fn footer(&self) -> Footer {
        let p = self.pagination;
        Footer {
            page_size: PageSizeSelector {
                current: p.page_size(),
                options: p.page_size_options(&self.config.page_size_options),
            },
            selected: self.config.selectable.then(|| self.selection.count()),
            pager: Pager {
                page: p.page(),
                total_pages: p.total_pages(),
                has_prev: p.has_prev(),
                has_next: p.has_next(),
                range: p.range(),
                total: p.total(),
            },
        }
    }
}
