//! Click targets recorded while painting.

use listing::{ColumnId, RowId};

use crate::rect::Rect;

/// What a click at some position means for the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// Header of a sortable column.
    Sort(ColumnId),
    SelectAll,
    /// Checkbox of a row.
    ToggleRow(RowId),
    /// Anywhere else on a row, by position on the page.
    Row(usize),
    PrevPage,
    NextPage,
    /// The page-size selector. Clicking cycles forward.
    PageSize,
}

/// Regions in paint order; later regions sit on top.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, hit: Hit) {
        if !rect.is_empty() {
            self.regions.push((rect, hit));
        }
    }

    /// Topmost target under a point.
    pub fn at(&self, x: u16, y: u16) -> Option<&Hit> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, hit)| hit)
    }

    /// Region of the first target equal to `hit`.
    pub fn rect_of(&self, hit: &Hit) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, h)| h == hit)
            .map(|(rect, _)| *rect)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
