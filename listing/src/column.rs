//! Column model.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::ColumnsError;
use crate::row::{CellValue, Row};

/// Identifier of a column, unique within a table.
pub type ColumnId = String;

/// Id of the synthetic checkbox column added to selectable tables.
pub const SELECT_COLUMN_ID: &str = "select";

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Semantic type of a column, used to pick a style hint for its cells.
///
/// See [`StyleTable`](crate::StyleTable) for how kinds map to tones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    None,
    Status,
    Role,
    Department,
    /// An application-defined kind. Give it rules in the style table.
    Custom(String),
}

impl CellKind {
    /// Create a custom kind.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }
}

/// How a column reads its value from a row.
pub enum Accessor<T> {
    /// Read a named field through [`Row::field`].
    Field(String),
    /// Compute the value from the whole row.
    Computed(Arc<dyn Fn(&T) -> CellValue + Send + Sync>),
}

impl<T: Row> Accessor<T> {
    /// Read this accessor's value from a row.
    pub fn get(&self, row: &T) -> CellValue {
        match self {
            Self::Field(name) => row.field(name),
            Self::Computed(f) => f(row),
        }
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(name) => Self::Field(name.clone()),
            Self::Computed(f) => Self::Computed(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Column configuration.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("email", "Email"),
///     Column::new("status", "Status").sortable().kind(CellKind::Status).align(Align::Right),
///     Column::computed("initial", "", |u: &User| u.name[..1].into()).width(3),
/// ];
/// ```
pub struct Column<T> {
    /// Unique identifier, also the sort key reported to the data source.
    pub id: ColumnId,
    /// Header text.
    pub header: String,
    /// Where cell values come from.
    pub accessor: Accessor<T>,
    /// Whether clicking the header toggles sorting.
    pub sortable: bool,
    /// Semantic type for style hints.
    pub kind: CellKind,
    /// Horizontal alignment of header and cells.
    pub align: Align,
    /// Preferred width in terminal columns. `None` sizes to content.
    pub width: Option<u16>,
}

impl<T> Column<T> {
    /// Create a column that reads the field with the same name as its id.
    pub fn new(id: impl Into<ColumnId>, header: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            accessor: Accessor::Field(id.clone()),
            id,
            header: header.into(),
            sortable: false,
            kind: CellKind::None,
            align: Align::Left,
            width: None,
        }
    }

    /// Create a column whose value is computed from the row.
    pub fn computed(
        id: impl Into<ColumnId>,
        header: impl Into<String>,
        f: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        let mut column = Self::new(id, header);
        column.accessor = Accessor::Computed(Arc::new(f));
        column
    }

    /// Read a different field than the column id.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.accessor = Accessor::Field(name.into());
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the semantic kind.
    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set a preferred width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }
}

impl<T: Row> Column<T> {
    /// Read this column's value from a row.
    pub fn value(&self, row: &T) -> CellValue {
        self.accessor.get(row)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
            kind: self.kind.clone(),
            align: self.align,
            width: self.width,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .field("kind", &self.kind)
            .field("align", &self.align)
            .field("width", &self.width)
            .finish()
    }
}

/// A validated, ordered list of columns with unique ids.
pub struct Columns<T> {
    columns: Vec<Column<T>>,
}

impl<T> Columns<T> {
    /// Validate a column list.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, ColumnsError> {
        if columns.is_empty() {
            return Err(ColumnsError::Empty);
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(ColumnsError::Duplicate(column.id.clone()));
            }
        }

        Ok(Self { columns })
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Position of a column by id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Check whether a column exists and is sortable.
    pub fn is_sortable(&self, id: &str) -> bool {
        self.get(id).is_some_and(|c| c.sortable)
    }

    /// Check whether a column id is in use.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column<T>> {
        self.columns.iter()
    }

    pub fn as_slice(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Number of data columns (the selection column is not counted).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Never true for a validated list.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<T> Clone for Columns<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T> fmt::Debug for Columns<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Columns<T> {
    type Item = &'a Column<T>;
    type IntoIter = std::slice::Iter<'a, Column<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
