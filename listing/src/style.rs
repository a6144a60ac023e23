//! Semantic style hints for cells.
//!
//! A [`StyleTable`] maps a column's [`CellKind`] and a cell's displayed value
//! to a [`Tone`]. Lookup order: exact `(kind, value)` rule, then the kind's
//! fallback, then the table default. Renderers decide what a tone looks like.
//!
//! ```ignore
//! let styles = StyleTable::default()
//!     .rule(CellKind::custom("priority"), "High", Tone::Negative)
//!     .rule(CellKind::custom("priority"), "Low", Tone::Muted)
//!     .fallback(CellKind::custom("priority"), Tone::Plain);
//! ```

use std::collections::HashMap;

use crate::column::CellKind;
use crate::row::CellValue;

/// Visual category of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// No badge; the cell renders as plain text.
    #[default]
    Plain,
    Positive,
    Negative,
    Caution,
    Info,
    Accent,
    Muted,
    Subtle,
}

impl Tone {
    /// Whether cells with this tone render as a badge.
    pub fn is_badge(&self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Declarative `(kind, value) -> tone` lookup.
#[derive(Debug, Clone)]
pub struct StyleTable {
    rules: HashMap<CellKind, HashMap<String, Tone>>,
    fallbacks: HashMap<CellKind, Tone>,
    default: Tone,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::empty()
            .rule(CellKind::Status, "Active", Tone::Positive)
            .rule(CellKind::Status, "Inactive", Tone::Negative)
            .rule(CellKind::Status, "Pending", Tone::Caution)
            .fallback(CellKind::Status, Tone::Muted)
            .rule(CellKind::Role, "Admin", Tone::Info)
            .rule(CellKind::Role, "Editor", Tone::Accent)
            .rule(CellKind::Role, "Viewer", Tone::Muted)
            .fallback(CellKind::Department, Tone::Subtle)
    }
}

impl StyleTable {
    /// A table with no rules; every cell is [`Tone::Plain`].
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            fallbacks: HashMap::new(),
            default: Tone::Plain,
        }
    }

    /// Add or replace the tone for an exact value of a kind.
    pub fn rule(mut self, kind: CellKind, value: impl Into<String>, tone: Tone) -> Self {
        self.rules.entry(kind).or_default().insert(value.into(), tone);
        self
    }

    /// Set the tone for values of a kind that match no rule.
    pub fn fallback(mut self, kind: CellKind, tone: Tone) -> Self {
        self.fallbacks.insert(kind, tone);
        self
    }

    /// Set the tone for kinds with neither a rule nor a fallback.
    pub fn default_tone(mut self, tone: Tone) -> Self {
        self.default = tone;
        self
    }

    /// Resolve the tone of a cell.
    pub fn tone(&self, kind: &CellKind, value: &CellValue) -> Tone {
        let exact = match value {
            CellValue::Text(text) => self.lookup(kind, text),
            CellValue::Empty => None,
            other => self.lookup(kind, &other.to_string()),
        };

        exact
            .or_else(|| self.fallbacks.get(kind).copied())
            .unwrap_or(self.default)
    }

    fn lookup(&self, kind: &CellKind, value: &str) -> Option<Tone> {
        self.rules.get(kind)?.get(value).copied()
    }
}
