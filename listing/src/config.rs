//! Table configuration.

use crate::pagination::DEFAULT_PAGE_SIZE_OPTIONS;
use crate::sort::SortState;
use crate::style::StyleTable;

/// A title block shown above or below the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub title: String,
    pub subtitle: Option<String>,
    /// Short label shown at the right edge, e.g. "Premium".
    pub badge: Option<String>,
}

impl Decoration {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            badge: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Configuration supplied when a table is built.
///
/// # Example
///
/// ```ignore
/// let config = TableConfig::default()
///     .selectable(true)
///     .page_size(20)
///     .sort(SortState::asc("name"))
///     .header(Decoration::new("Premium Users").badge("Premium"));
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Whether rows get a checkbox column.
    ///
    /// Default: false
    pub selectable: bool,
    /// Label of each row checkbox.
    ///
    /// Default: "Select row"
    pub selection_label: String,
    /// Message shown when a query resolves with no rows.
    ///
    /// Default: "No data available."
    pub empty_message: String,
    /// Message shown when a query fails.
    ///
    /// Default: "Error loading data."
    pub error_message: String,
    /// Initial page size.
    ///
    /// Default: 10
    pub page_size: usize,
    /// Sizes offered by the page-size selector.
    ///
    /// Default: 5, 10, 20, 50, 100, 150, 200, 300
    pub page_size_options: Vec<usize>,
    /// Number of placeholder rows in the loading skeleton.
    ///
    /// Default: 16
    pub skeleton_rows: usize,
    /// Initial sort.
    ///
    /// Default: unsorted
    pub sort: SortState,
    /// Decoration above the grid.
    pub header: Option<Decoration>,
    /// Decoration below the footer.
    pub footer: Option<Decoration>,
    /// Cell style hints.
    pub styles: StyleTable,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            selectable: false,
            selection_label: "Select row".to_string(),
            empty_message: "No data available.".to_string(),
            error_message: "Error loading data.".to_string(),
            page_size: 10,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            skeleton_rows: 16,
            sort: SortState::unsorted(),
            header: None,
            footer: None,
            styles: StyleTable::default(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn selection_label(mut self, label: impl Into<String>) -> Self {
        self.selection_label = label.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    pub fn skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = rows;
        self
    }

    pub fn sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    pub fn header(mut self, decoration: Decoration) -> Self {
        self.header = Some(decoration);
        self
    }

    pub fn footer(mut self, decoration: Decoration) -> Self {
        self.footer = Some(decoration);
        self
    }

    pub fn styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }
}
