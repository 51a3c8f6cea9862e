//! Input Field Component
//!
//! A bordered single-line text field with a title, placeholder and block
//! cursor when focused. Long values scroll so the cursor stays visible.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_INPUT_BG};

/// Rows taken by an input field (border + content + border)
pub const INPUT_FIELD_HEIGHT: u16 = 3;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Title drawn in the top border
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Shown dimmed when the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Tail of `value` that fits in `width` columns with room for the cursor.
fn visible_tail(value: &str, width: usize) -> &str {
    let budget = width.saturating_sub(1);
    if value.width() <= budget {
        return value;
    }
    let mut used = 0;
    for (idx, ch) in value.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > budget {
            return &value[idx + ch.len_utf8()..];
        }
    }
    value
}

/// Render an input field into `area`, using its first three rows.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let field_area = Rect {
        height: area.height.min(INPUT_FIELD_HEIGHT),
        ..area
    };

    let border_color = if config.focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.label),
            Style::default().fg(border_color),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let inner_width = field_area.width.saturating_sub(2) as usize;
    let mut spans = Vec::with_capacity(2);
    match config.placeholder {
        Some(placeholder) if config.value.is_empty() && !config.focused => {
            spans.push(Span::styled(
                placeholder.to_string(),
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            ));
        }
        _ => {
            let style = if config.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(
                visible_tail(config.value, inner_width).to_string(),
                style,
            ));
            if config.focused {
                spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), field_area);
}
