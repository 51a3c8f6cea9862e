//! Blocking error dialog.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Notification;

use super::components::{dialog_inner_width, render_dialog_frame, DialogFrameConfig};
use super::layout::LayoutContext;
use super::text::wrap_text;
use super::theme::{COLOR_ACCENT, COLOR_DIM};

/// Dialog body: message, optional recovery hint, dismiss hint.
pub fn notification_lines(notification: &Notification, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = wrap_text(&notification.message, width)
        .into_iter()
        .map(|chunk| Line::from(Span::styled(chunk, Style::default().fg(Color::White))))
        .collect();

    if let Some(hint) = &notification.hint {
        lines.push(Line::default());
        lines.extend(
            wrap_text(hint, width)
                .into_iter()
                .map(|chunk| Line::from(Span::styled(chunk, Style::default().fg(COLOR_DIM)))),
        );
    }

    lines.push(Line::default());
    lines.push(
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(COLOR_ACCENT)),
            Span::styled(" OK", Style::default().fg(COLOR_DIM)),
        ])
        .right_aligned(),
    );
    lines
}

pub fn render_notification(
    frame: &mut Frame,
    area: Rect,
    notification: &Notification,
    ctx: &LayoutContext,
) {
    let probe = DialogFrameConfig::new(&notification.title, 0);
    let width = dialog_inner_width(area, ctx, &probe) as usize;
    let lines = notification_lines(notification, width);

    let config = DialogFrameConfig::new(&notification.title, lines.len() as u16);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    frame.render_widget(Paragraph::new(lines), inner);
}
