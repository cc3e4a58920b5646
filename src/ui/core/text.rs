//! Cell-width helpers for labels and wrapped text.
//!
//! All widths are terminal cells. Byte offsets returned here always land on
//! UTF-8 character boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of `s` in cells, as used for widget sizing.
pub fn width(s: &str) -> i32 {
    i32::try_from(UnicodeWidthStr::width(s)).unwrap_or(i32::MAX)
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    end
}

/// Greedy word wrap. Explicit newlines always break; words longer than
/// `max_width` are split.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0usize;
        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_w = UnicodeWidthStr::width(word);

            let sep = usize::from(!line.is_empty());
            if line_w + sep + word_w <= max_width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_w += sep + word_w;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }

            while word_w > max_width {
                let end = truncate_to_width(word, max_width).max(
                    word.chars().next().map(char::len_utf8).unwrap_or(0),
                );
                lines.push(word[..end].to_string());
                word = &word[end..];
                word_w = UnicodeWidthStr::width(word);
            }
            line.push_str(word);
            line_w = word_w;
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
