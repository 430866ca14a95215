//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Character used to mask secret input.
pub const MASK_CHAR: char = '•';

/// Truncates a string with ellipsis if it exceeds `max_width` (unicode-aware).
///
/// Uses display width, so wide characters (CJK, emoji) count as two columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > max_width {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Replaces every character with [`MASK_CHAR`], keeping the char count so
/// cursor positions stay valid.
pub fn mask(text: &str) -> String {
    text.chars().map(|_| MASK_CHAR).collect()
}

/// Returns the `[start, end)` char range of `chars` to show in `width`
/// columns so that `cursor` (a char index, possibly `chars.len()`) stays
/// visible with one column left for the cursor block.
pub fn visible_window(chars: &[char], cursor: usize, width: usize) -> (usize, usize) {
    if width == 0 {
        return (cursor, cursor);
    }
    let cursor = cursor.min(chars.len());
    let col = |c: &char| c.width().unwrap_or(0);

    // Slide the start forward until the text before the cursor plus the
    // cursor block fits.
    let mut start = 0;
    let mut before: usize = chars[..cursor].iter().map(col).sum();
    while start < cursor && before + 1 > width {
        before -= col(&chars[start]);
        start += 1;
    }

    // Extend past the cursor with whatever still fits.
    let mut used = before;
    let mut end = cursor;
    while end < chars.len() {
        let w = col(&chars[end]);
        if used + w > width {
            break;
        }
        used += w;
        end += 1;
    }
    (start, end)
}
