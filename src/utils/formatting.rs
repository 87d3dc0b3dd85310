//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pads `s` to `width` display columns, wide (CJK) characters counted as
/// two. Strings already at or past the width are returned unchanged.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - w))
}
