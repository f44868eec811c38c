pub mod editor_handlers;
pub mod editor_ui;

use unicode_width::UnicodeWidthChar;

/// Scroll position of the buffer viewport, in lines and display columns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EditorView {
    pub scroll_row: usize,
    pub scroll_col: usize,
}

impl EditorView {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scrolls just enough that the cursor cell lies inside a `width` x
    /// `height` viewport.
    pub fn ensure_cursor_visible(
        &mut self,
        lines: &[String],
        cursor: (usize, usize),
        width: usize,
        height: usize,
    ) {
        let (row, col) = cursor;
        if height > 0 {
            if row < self.scroll_row {
                self.scroll_row = row;
            } else if row >= self.scroll_row + height {
                self.scroll_row = row + 1 - height;
            }
        }

        let line = lines.get(row).map(String::as_str).unwrap_or("");
        let x = display_width_until(line, col);
        if width > 0 {
            if x < self.scroll_col {
                self.scroll_col = x;
            } else if x >= self.scroll_col + width {
                self.scroll_col = x + 1 - width;
            }
        }
    }
}

const CONTROL_PLACEHOLDER: char = '\u{fffd}';

/// What a buffer character looks like on screen. Control characters must
/// never reach a terminal cell: `\r` from CRLF files is hidden, tabs become a
/// space and anything else shows as a placeholder.
pub fn display_char(c: char) -> Option<char> {
    match c {
        '\r' => None,
        '\t' => Some(' '),
        c if c.is_control() => Some(CONTROL_PLACEHOLDER),
        c => Some(c),
    }
}

pub fn char_width(c: char) -> usize {
    display_char(c).map_or(0, |shown| UnicodeWidthChar::width(shown).unwrap_or(0))
}

pub fn display_width_until(line: &str, chars: usize) -> usize {
    line.chars().take(chars).map(char_width).sum()
}

pub fn line_number_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len().max(3)
}
