use listing::Align;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut a string to `max_width` columns, ending with `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Truncate, then pad to exactly `width` columns.
pub fn fit(s: &str, width: usize, align: Align) -> String {
    let text = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&text));
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(pad)),
        Align::Right => format!("{}{}", " ".repeat(pad), text),
    }
}

/// Column offset that centers `text_width` inside `width`.
pub fn center_offset(text_width: usize, width: usize) -> usize {
    width.saturating_sub(text_width) / 2
}
