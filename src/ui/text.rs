//! Text wrapping helpers
//!
//! Panels pre-wrap their text so they know their own height and so wrapped
//! continuation lines keep their indent.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` to `max_width` columns. Words longer than a line are
/// split. Explicit newlines are kept; blank input yields one empty line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(1);
                    if current_width + w > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += w;
                }
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wrap `text` and prepend `prefix` to the first line, indenting the rest to
/// the same width.
pub fn wrap_with_prefix(
    text: &str,
    prefix: &str,
    prefix_style: Style,
    text_style: Style,
    max_width: usize,
) -> Vec<Line<'static>> {
    let prefix_width = prefix.width();
    let indent = " ".repeat(prefix_width);
    wrap_text(text, max_width.saturating_sub(prefix_width))
        .into_iter()
        .enumerate()
        .map(|(idx, chunk)| {
            let lead = if idx == 0 {
                Span::styled(prefix.to_string(), prefix_style)
            } else {
                Span::raw(indent.clone())
            };
            Line::from(vec![lead, Span::styled(chunk, text_style)])
        })
        .collect()
}

/// Truncate to `max_width` columns, ending with `…` when shortened.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(1);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
