//! Drawing a [`GridView`] onto a [`Canvas`].
//!
//! Layout, top to bottom: optional header decoration, the column header row
//! and a rule, the body, then the footer (rule, page-size selector, selection
//! count, row range and pager, optional footer decoration). Everything
//! clickable is recorded in the returned [`HitMap`].

use listing::{
    Align, Body, BodyRow, Decoration, Footer, Grid, GridView, HeaderCell, MessageView,
    SkeletonView, SortIndicator,
};

use crate::canvas::{Attrs, Canvas, Pen, Rgb};
use crate::hit::{Hit, HitMap};
use crate::rect::Rect;
use crate::text::{center_offset, display_width, fit, truncate_to_width};
use crate::theme::Theme;

/// Columns between adjacent table columns.
const GAP: u16 = 2;
/// Width of the checkbox column.
const SELECT_WIDTH: u16 = 3;
/// Narrowest a data column is squeezed to.
const MIN_COLUMN: u16 = 3;

const CHECKED: &str = "■";
const UNCHECKED: &str = "□";

/// Paint a view with no row cursor.
pub fn paint(view: &GridView, area: Rect, canvas: &mut Canvas, theme: &Theme) -> HitMap {
    Painter::new(theme).paint(view, area, canvas)
}

pub struct Painter<'a> {
    theme: &'a Theme,
    cursor: Option<usize>,
}

impl<'a> Painter<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            cursor: None,
        }
    }

    /// Highlight the body row at this position on the page.
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn paint(&self, view: &GridView, area: Rect, canvas: &mut Canvas) -> HitMap {
        let mut hits = HitMap::new();
        canvas.fill(area, self.theme.background);
        let area = area.inset(1, 0);
        if area.is_empty() {
            return hits;
        }

        match view {
            GridView::Loading(skeleton) => self.skeleton(skeleton, area, canvas),
            GridView::Error(message) => self.error(message, area, canvas),
            GridView::Grid(grid) => self.grid(grid, area, canvas, &mut hits),
        }
        hits
    }

    fn pen(&self, fg: Rgb) -> Pen {
        Pen::new(fg, self.theme.background)
    }

    // -------------------------------------------------------------------------
    // States
    // -------------------------------------------------------------------------

    fn skeleton(&self, skeleton: &SkeletonView, area: Rect, canvas: &mut Canvas) {
        let rest = self.header_decoration(skeleton.header.as_ref(), area, canvas);
        if skeleton.columns == 0 || rest.is_empty() {
            return;
        }

        let n = skeleton.columns as u16;
        let width = rest.width.saturating_sub(GAP * (n - 1)) / n;
        let pen = self.pen(self.theme.skeleton);

        let blocks = |canvas: &mut Canvas, y: u16, symbol: char| {
            for i in 0..n {
                canvas.hline(rest.x + i * (width + GAP), y, width, symbol, pen);
            }
        };

        blocks(canvas, rest.y, '▒');
        self.rule(rest.row(1), canvas);
        let visible = (skeleton.rows as u16).min(rest.height.saturating_sub(2));
        for dy in 0..visible {
            blocks(canvas, rest.y + 2 + dy, '░');
        }
    }

    fn error(&self, message: &MessageView, area: Rect, canvas: &mut Canvas) {
        let text = format!("⚠ {}", message.message);
        self.centered(&text, area.row(area.height / 2), self.pen(self.theme.error), canvas);
    }

    fn grid(&self, grid: &Grid, area: Rect, canvas: &mut Canvas, hits: &mut HitMap) {
        let rest = self.header_decoration(grid.header.as_ref(), area, canvas);
        let footer_height = 2 + u16::from(grid.decoration_footer.is_some());
        let (rest, footer) = rest.split_bottom(footer_height);
        let (head, body) = rest.split_top(2);

        let widths = column_widths(grid, area.width);
        self.header_row(grid, &widths, head.row(0), canvas, hits);
        self.rule(head.row(1), canvas);

        match &grid.body {
            Body::Rows(rows) => {
                for (dy, row) in (0..body.height).zip(rows) {
                    self.body_row(row, &widths, body.row(dy), canvas, hits);
                }
                if rows.len() > body.height as usize {
                    log::trace!("{} rows clipped", rows.len() - body.height as usize);
                }
            }
            Body::Empty { message, .. } => {
                let y = body.height / 2;
                self.centered(message, body.row(y), self.pen(self.theme.muted), canvas);
            }
        }

        self.footer(&grid.footer, footer, canvas, hits);
        if let Some(decoration) = &grid.decoration_footer {
            self.footer_decoration(decoration, footer.row(2), canvas);
        }
    }

    // -------------------------------------------------------------------------
    // Pieces
    // -------------------------------------------------------------------------

    /// Title (with badge) and subtitle, then a blank line. Returns what is left.
    fn header_decoration(
        &self,
        decoration: Option<&Decoration>,
        area: Rect,
        canvas: &mut Canvas,
    ) -> Rect {
        let Some(decoration) = decoration else {
            return area;
        };

        let title_row = area.row(0);
        let badge_width = decoration
            .badge
            .as_deref()
            .map(|badge| self.badge(badge, title_row, canvas))
            .unwrap_or(0);
        let title_pen = self.pen(self.theme.text).attrs(Attrs::bold());
        canvas.put_str(
            title_row.x,
            title_row.y,
            &decoration.title,
            title_row.width.saturating_sub(badge_width + 1),
            title_pen,
        );

        let mut used = 1;
        if let Some(subtitle) = &decoration.subtitle {
            let row = area.row(1);
            canvas.put_str(row.x, row.y, subtitle, row.width, self.pen(self.theme.muted));
            used += 1;
        }
        area.split_top(used + 1).1
    }

    /// Right-aligned badge. Returns its width.
    fn badge(&self, text: &str, row: Rect, canvas: &mut Canvas) -> u16 {
        if row.is_empty() {
            return 0;
        }
        let label = format!(" {} ", text);
        let width = (display_width(&label) as u16).min(row.width);
        let pen = Pen::new(self.theme.badge.fg, self.theme.badge.bg).attrs(Attrs::bold());
        canvas.put_str(row.right() - width, row.y, &label, width, pen);
        width
    }

    fn footer_decoration(&self, decoration: &Decoration, row: Rect, canvas: &mut Canvas) {
        let badge_width = decoration
            .badge
            .as_deref()
            .map(|badge| self.badge(badge, row, canvas))
            .unwrap_or(0);
        let text = match &decoration.subtitle {
            Some(subtitle) => format!("{} · {}", decoration.title, subtitle),
            None => decoration.title.clone(),
        };
        let pen = self.pen(self.theme.muted).attrs(Attrs::dim());
        canvas.put_str(row.x, row.y, &text, row.width.saturating_sub(badge_width + 1), pen);
    }

    fn rule(&self, row: Rect, canvas: &mut Canvas) {
        if !row.is_empty() {
            canvas.hline(row.x, row.y, row.width, '─', self.pen(self.theme.rule));
        }
    }

    fn centered(&self, text: &str, row: Rect, pen: Pen, canvas: &mut Canvas) {
        if row.is_empty() {
            return;
        }
        let text = truncate_to_width(text, row.width as usize);
        let dx = center_offset(display_width(&text), row.width as usize) as u16;
        canvas.put_str(row.x + dx, row.y, &text, row.width - dx, pen);
    }

    fn header_row(
        &self,
        grid: &Grid,
        widths: &[u16],
        row: Rect,
        canvas: &mut Canvas,
        hits: &mut HitMap,
    ) {
        if row.is_empty() {
            return;
        }
        let mut x = row.x;

        if let Some(checkbox) = &grid.select_all {
            let glyph = if checkbox.checked { CHECKED } else { UNCHECKED };
            canvas.put_str(x, row.y, glyph, SELECT_WIDTH, self.pen(self.theme.primary));
            hits.push(Rect::new(x, row.y, SELECT_WIDTH, 1), Hit::SelectAll);
            x += SELECT_WIDTH + GAP;
        }

        for (cell, &width) in grid.columns.iter().zip(widths) {
            let width = width.min(row.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            let active = matches!(
                cell.sort,
                Some(SortIndicator::Ascending | SortIndicator::Descending)
            );
            let fg = if active {
                self.theme.primary
            } else {
                self.theme.text
            };
            let text = fit(&header_text(cell), width as usize, cell.align);
            canvas.put_str(x, row.y, &text, width, self.pen(fg).attrs(Attrs::bold()));
            if cell.sort.is_some() {
                hits.push(
                    Rect::new(x, row.y, width, 1),
                    Hit::Sort(cell.column_id.clone()),
                );
            }
            x = x.saturating_add(width + GAP);
        }
    }

    fn body_row(
        &self,
        body_row: &BodyRow,
        widths: &[u16],
        row: Rect,
        canvas: &mut Canvas,
        hits: &mut HitMap,
    ) {
        if row.is_empty() {
            return;
        }
        let bg = if self.cursor == Some(body_row.index) {
            self.theme.cursor
        } else if body_row.selected {
            self.theme.selected
        } else if body_row.striped {
            self.theme.stripe
        } else {
            self.theme.background
        };
        canvas.fill(row, bg);
        hits.push(row, Hit::Row(body_row.index));

        let mut x = row.x;
        if let Some(checkbox) = &body_row.checkbox {
            let glyph = if checkbox.checked { CHECKED } else { UNCHECKED };
            canvas.put_str(x, row.y, glyph, SELECT_WIDTH, Pen::new(self.theme.primary, bg));
            hits.push(
                Rect::new(x, row.y, SELECT_WIDTH, 1),
                Hit::ToggleRow(body_row.id.clone()),
            );
            x += SELECT_WIDTH + GAP;
        }

        for (cell, &width) in body_row.cells.iter().zip(widths) {
            let width = width.min(row.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            match self.theme.tone(cell.tone) {
                Some(style) => {
                    let label = truncate_to_width(&format!(" {} ", cell.text), width as usize);
                    let label_width = display_width(&label) as u16;
                    let dx = match cell.align {
                        Align::Left => 0,
                        Align::Right => width - label_width,
                    };
                    canvas.put_str(x + dx, row.y, &label, label_width, Pen::new(style.fg, style.bg));
                }
                None => {
                    let text = fit(&cell.text, width as usize, cell.align);
                    canvas.put_str(x, row.y, &text, width, Pen::new(self.theme.text, bg));
                }
            }
            x = x.saturating_add(width + GAP);
        }
    }

    fn footer(&self, footer: &Footer, area: Rect, canvas: &mut Canvas, hits: &mut HitMap) {
        self.rule(area.row(0), canvas);
        let row = area.row(1);
        if row.is_empty() {
            return;
        }

        // Left: page-size selector and selection count.
        let current = footer
            .page_size
            .options
            .iter()
            .find(|option| option.size == footer.page_size.current)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| footer.page_size.current.to_string());
        let selector = format!("[{} ▾]", current);
        let selector_width = canvas.put_str(
            row.x,
            row.y,
            &selector,
            row.width,
            self.pen(self.theme.primary),
        );
        hits.push(Rect::new(row.x, row.y, selector_width, 1), Hit::PageSize);
        let mut left = selector_width;

        if let Some(selected) = footer.selected {
            let fg = if selected == 0 {
                self.theme.muted
            } else {
                self.theme.text
            };
            let text = format!("  {} selected", selected);
            left += canvas.put_str(
                row.x + left,
                row.y,
                &text,
                row.width.saturating_sub(left),
                self.pen(fg),
            );
        }

        // Right: row range and pager.
        let pager = &footer.pager;
        let range = match pager.range {
            Some((start, end)) => format!("{}-{} of {}", start, end, pager.total),
            None => format!("0 of {}", pager.total),
        };
        let label = format!(" {} ", pager.label());
        let width = (display_width(&range) + 2 + 1 + display_width(&label) + 1) as u16;
        if left + 2 + width > row.width {
            return;
        }

        let mut x = row.right() - width;
        x += canvas.put_str(x, row.y, &range, width, self.pen(self.theme.muted)) + 2;

        let arrow = |enabled: bool| {
            if enabled {
                self.pen(self.theme.primary).attrs(Attrs::bold())
            } else {
                self.pen(self.theme.muted).attrs(Attrs::dim())
            }
        };

        canvas.put_str(x, row.y, "‹", 1, arrow(pager.has_prev));
        if pager.has_prev {
            hits.push(Rect::new(x, row.y, 1, 1), Hit::PrevPage);
        }
        x += 1;
        x += canvas.put_str(x, row.y, &label, width, self.pen(self.theme.text));
        canvas.put_str(x, row.y, "›", 1, arrow(pager.has_next));
        if pager.has_next {
            hits.push(Rect::new(x, row.y, 1, 1), Hit::NextPage);
        }
    }
}

fn header_text(cell: &HeaderCell) -> String {
    match cell.sort {
        None => cell.label.clone(),
        Some(SortIndicator::Unsorted) => format!("{} ↕", cell.label),
        Some(SortIndicator::Ascending) => format!("{} ↑", cell.label),
        Some(SortIndicator::Descending) => format!("{} ↓", cell.label),
    }
}

/// Width of each data column.
///
/// Columns take their fixed width, or fit their widest header or cell. When
/// the total overflows `available`, the widest column is narrowed one step at
/// a time until it fits or every column is at the minimum.
pub fn column_widths(grid: &Grid, available: u16) -> Vec<u16> {
    let rows = grid.rows();
    let mut widths: Vec<u16> = grid
        .columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            if let Some(width) = header.width {
                return width.max(MIN_COLUMN);
            }
            let header_width = display_width(&header_text(header));
            let cell_width = rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| {
                    let pad = if cell.tone.is_badge() { 2 } else { 0 };
                    display_width(&cell.text) + pad
                })
                .max()
                .unwrap_or(0);
            (header_width.max(cell_width) as u16).max(MIN_COLUMN)
        })
        .collect();

    let n = widths.len() as u16;
    let fixed = n.saturating_sub(1) * GAP
        + if grid.select_all.is_some() {
            SELECT_WIDTH + GAP
        } else {
            0
        };
    let budget = available.saturating_sub(fixed);

    while widths.iter().map(|w| *w as usize).sum::<usize>() > budget as usize {
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN)
            .max_by_key(|w| **w)
        else {
            break;
        };
        *widest -= 1;
    }
    widths
}
