//! Tab Selector Component
//!
//! Horizontal selector for the input mode. The selected tab carries a `▶`
//! marker; compact terminals get the short labels.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
    /// Key hint shown after the label, e.g. "F1"
    pub key: Option<&'a str>,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
            key: None,
        }
    }

    pub fn with_short_label(mut self, short_label: &'a str) -> Self {
        self.short_label = short_label;
        self
    }

    pub fn with_key(mut self, key: &'a str) -> Self {
        self.key = Some(key);
        self
    }
}

/// Render a horizontal tab selector.
///
/// `selected` is the index of the active tab. Key hints are dropped on
/// extra small terminals.
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)));
        }

        if let Some(key) = item.key.filter(|_| !ctx.is_extra_small()) {
            spans.push(Span::styled(format!(" [{}]", key), Style::default().fg(COLOR_DIM)));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
