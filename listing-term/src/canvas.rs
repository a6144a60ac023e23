//! Cell grid the painter draws into.

use crate::rect::Rect;
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Text attributes of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Attrs {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
        }
    }

    pub const fn bold() -> Self {
        let mut attrs = Self::new();
        attrs.bold = true;
        attrs
    }

    pub const fn dim() -> Self {
        let mut attrs = Self::new();
        attrs.dim = true;
        attrs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub attrs: Attrs,
    /// Second column of a double-width character. Never written to the terminal.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            attrs: Attrs::new(),
            wide_continuation: false,
        }
    }
}

/// Pen used for text: colors plus attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub fg: Rgb,
    pub bg: Rgb,
    pub attrs: Attrs,
}

impl Pen {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            attrs: Attrs::new(),
        }
    }

    pub const fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    /// Paint the background of a rect, blanking its symbols.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = Cell {
                        bg,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    /// Repeat a symbol across a row segment.
    pub fn hline(&mut self, x: u16, y: u16, width: u16, symbol: char, pen: Pen) {
        for dx in 0..width {
            self.put_char(x.saturating_add(dx), y, symbol, pen);
        }
    }

    fn put_char(&mut self, x: u16, y: u16, symbol: char, pen: Pen) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = Cell {
                symbol,
                fg: pen.fg,
                bg: pen.bg,
                attrs: pen.attrs,
                wide_continuation: false,
            };
        }
    }

    /// Write text starting at `(x, y)`, stopping after `max_width` columns.
    ///
    /// A double-width character that would straddle the limit is dropped.
    /// Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, pen: Pen) -> u16 {
        let mut written: u16 = 0;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if written + w > max_width {
                break;
            }
            let cx = x.saturating_add(written);
            self.put_char(cx, y, ch, pen);
            if w == 2
                && let Some(cell) = self.get_mut(cx.saturating_add(1), y)
            {
                *cell = Cell {
                    symbol: ' ',
                    fg: pen.fg,
                    bg: pen.bg,
                    attrs: pen.attrs,
                    wide_continuation: true,
                };
            }
            written += w;
        }
        written
    }

    /// Text of one row, continuation cells skipped. Handy in tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.symbol)
            .collect()
    }

    /// Every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
    }

    /// Cells that differ from `previous`, with their coordinates.
    pub fn diff<'a>(&'a self, previous: &'a Canvas) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width as usize;
        self.cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self, bg: Rgb) {
        for cell in &mut self.cells {
            *cell = Cell {
                bg,
                ..Cell::default()
            };
        }
    }
}
