use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::canvas::{Attrs, Canvas, Cell, Rgb};
use crate::text::char_width;

/// Raw-mode, alternate-screen terminal with mouse capture.
///
/// Frames are drawn into a [`Canvas`]; only cells that differ from the
/// previous frame are written out. The terminal is restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current: Canvas,
    previous: Canvas,
    /// Forces a full repaint on the next frame.
    dirty: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {}x{}", width, height);

        Ok(Self {
            stdout,
            current: Canvas::new(width, height),
            previous: Canvas::new(width, height),
            dirty: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Resize the frame buffers; the next frame repaints everything.
    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("terminal resized to {}x{}", width, height);
        self.current = Canvas::new(width, height);
        self.previous = Canvas::new(width, height);
        self.dirty = true;
    }

    /// Draw one frame.
    ///
    /// The closure receives a cleared canvas of the terminal's size. Its
    /// return value (usually the frame's hit map) is passed back.
    pub fn draw<R>(&mut self, background: Rgb, f: impl FnOnce(&mut Canvas) -> R) -> io::Result<R> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            self.resize(width, height);
        }

        self.current.clear(background);
        let result = f(&mut self.current);

        let full = std::mem::take(&mut self.dirty);
        if full {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.flush(full)?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(result)
    }

    fn flush(&mut self, full: bool) -> io::Result<()> {
        let mut pen: Option<(Rgb, Rgb, Attrs)> = None;
        let mut next_x: Option<(u16, u16)> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        let changed: Vec<(u16, u16, &Cell)> = if full {
            self.current.cells().collect()
        } else {
            self.current.diff(&self.previous).collect()
        };

        for (x, y, cell) in changed {
            if cell.wide_continuation {
                continue;
            }

            if next_x != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if pen != Some((cell.fg, cell.bg, cell.attrs)) {
                apply_pen(&mut self.stdout, cell)?;
                pen = Some((cell.fg, cell.bg, cell.attrs));
            }

            write!(self.stdout, "{}", cell.symbol)?;
            next_x = Some((x + char_width(cell.symbol).max(1) as u16, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

/// Reset, then set colors and every active attribute of a cell.
fn apply_pen(out: &mut io::Stdout, cell: &Cell) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(rgb(cell.fg)),
        SetBackgroundColor(rgb(cell.bg))
    )?;
    let attrs = cell.attrs;
    if attrs.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if attrs.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if attrs.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if attrs.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

fn rgb(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
