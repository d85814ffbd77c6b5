use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Widest line of a possibly multi-line string.
pub fn max_line_width(s: &str) -> usize {
    s.lines().map(display_width).max().unwrap_or(0)
}
