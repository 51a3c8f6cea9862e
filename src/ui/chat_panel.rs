//! Nutrition assistant chat for the breed on screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::ChatRole;
use crate::state::{ChatPanel, SAMPLE_QUESTIONS};

use super::components::{
    render_input_field, render_status_indicator, spinner_frame, InputFieldConfig,
    StatusIndicatorType, INPUT_FIELD_HEIGHT,
};
use super::text::wrap_with_prefix;
use super::theme::{
    COLOR_ASSISTANT_MESSAGE, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_HEADER,
    COLOR_USER_MESSAGE,
};

pub fn chat_title(breed: &str) -> String {
    format!(" Nutrition Assistant for {} ", breed)
}

/// Conversation lines wrapped to `width`, including the pending indicator.
pub fn chat_lines(chat: &ChatPanel, width: usize, tick_count: u64) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if chat.messages().is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Ask me anything about {} nutrition!", chat.breed()),
            Style::default().fg(COLOR_ASSISTANT_MESSAGE),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "Try: \"{}\" or \"{}\"",
                SAMPLE_QUESTIONS[0], SAMPLE_QUESTIONS[1]
            ),
            Style::default().fg(COLOR_DIM),
        )));
    }

    for message in chat.messages() {
        let (prefix, color) = match message.role {
            ChatRole::User => ("You: ", COLOR_USER_MESSAGE),
            ChatRole::Assistant => ("PetPal: ", COLOR_ASSISTANT_MESSAGE),
        };
        lines.extend(wrap_with_prefix(
            &message.content,
            prefix,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
            Style::default().fg(color),
            width,
        ));
    }

    if chat.is_pending() {
        lines.push(render_status_indicator(&StatusIndicatorType::spinner(
            "Thinking...",
            spinner_frame(tick_count),
        )));
    }
    lines
}

/// First line to draw so the newest message sits at the bottom, moved up by
/// `scroll` lines.
pub fn scroll_offset(total: usize, visible: usize, scroll: u16) -> usize {
    let max_offset = total.saturating_sub(visible);
    max_offset.saturating_sub(scroll as usize)
}

pub fn render_chat_panel(frame: &mut Frame, area: Rect, app: &App, chat: &ChatPanel) {
    let focused = app.focus == Focus::Chat;
    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .title(Span::styled(
            chat_title(chat.breed()),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    let history_height = inner.height.saturating_sub(INPUT_FIELD_HEIGHT);
    let history = Rect {
        height: history_height,
        ..inner
    };

    let lines = chat_lines(chat, history.width as usize, app.tick_count);
    let offset = scroll_offset(lines.len(), history.height as usize, app.chat_scroll);
    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(offset)
        .take(history.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible), history);

    if inner.height >= INPUT_FIELD_HEIGHT {
        let field = Rect {
            y: inner.y + history_height,
            height: INPUT_FIELD_HEIGHT,
            ..inner
        };
        let config = InputFieldConfig::new("Question", &app.chat_input)
            .placeholder("Ask a question...")
            .focused(focused && app.notification.is_none());
        render_input_field(frame, field, &config);
    }
}
