//! Status Indicator Component
//!
//! Spinner and connection-state indicators used by the header, the input
//! panel and the chat.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::startup::ConnectionStatus;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_WARNING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame (the loop ticks every 16ms)
const TICKS_PER_FRAME: u64 = 8;

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Connection to the inference service
    Connection(ConnectionStatus),
    /// Dim informational line
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Spinner character for a frame index.
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Spinner frame for an app tick count.
pub fn spinner_frame(tick_count: u64) -> usize {
    ((tick_count / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize
}

/// Render a status indicator as a single line.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_WARNING),
            ),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_WARNING)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Connection(status) => {
            let (glyph, color) = match status {
                ConnectionStatus::Connecting => ("○", COLOR_DIM),
                ConnectionStatus::Connected => ("●", COLOR_ACTIVE),
                ConnectionStatus::Degraded => ("●", COLOR_WARNING),
                ConnectionStatus::Failed => ("✗", COLOR_ERROR),
            };
            Line::from(vec![
                Span::styled(format!("{} ", glyph), Style::default().fg(color)),
                Span::styled(status.label(), Style::default().fg(color)),
            ])
        }
        StatusIndicatorType::Info { message } => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(COLOR_DIM),
        )),
    }
}
