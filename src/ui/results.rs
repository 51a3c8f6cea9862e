//! Results column: breed summary, recipe list and chat, or the empty state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::state::RequestKind;

use super::breed_summary::{breed_summary_lines, BREED_SUMMARY_HEIGHT};
use super::chat_panel::render_chat_panel;
use super::components::{render_status_indicator, spinner_frame, StatusIndicatorType};
use super::layout::LayoutContext;
use super::recipe_card::recipe_card_lines;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_HEADER,
};

pub const EMPTY_STATE_TITLE: &str = "Ready to discover your dog's perfect meal?";
pub const EMPTY_STATE_HINT: &str = "Upload a photo or search for a breed to get started";
pub const NO_RECIPES_MESSAGE: &str = "No recipes generated yet.";

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let color = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Render the results column.
pub fn render_results(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let Some(result) = app.selection.breed_result() else {
        render_empty_state(frame, area, app);
        return;
    };

    let chat_visible = app.selection.chat_visible() && app.chat.is_some();
    let summary_height = BREED_SUMMARY_HEIGHT + 2;
    let remaining = area.height.saturating_sub(summary_height);
    let chat_height = if chat_visible {
        ctx.chat_height(remaining.saturating_sub(4))
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary_height),
            Constraint::Min(4),
            Constraint::Length(chat_height),
        ])
        .split(area);

    let summary = Paragraph::new(breed_summary_lines(result))
        .block(panel_block(" Breed ".to_string(), false));
    frame.render_widget(summary, chunks[0]);

    render_recipes(frame, chunks[1], app);

    if chat_visible {
        if let Some(chat) = app.chat.as_ref() {
            render_chat_panel(frame, chunks[2], app, chat);
        }
    }
}

fn render_empty_state(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(" Results ".to_string(), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match app.selection.loading_kind() {
        Some(kind) => vec![render_status_indicator(&StatusIndicatorType::spinner(
            kind.label(),
            spinner_frame(app.tick_count),
        ))
        .centered()],
        None => vec![
            Line::from(Span::styled(
                EMPTY_STATE_TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled(EMPTY_STATE_HINT, Style::default().fg(COLOR_DIM))).centered(),
        ],
    };

    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let content = Rect {
        y: inner.y + top,
        height: inner.height.saturating_sub(top),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), content);
}

/// Header line of the recipes panel.
pub fn recipes_title(count: usize) -> String {
    format!(" Personalized Recipes ({}) ", count)
}

/// Lines for the recipe panel body, starting at the first visible card.
pub fn recipe_body_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let recipes = app.selection.recipes();
    let generating = app.selection.loading_kind() == Some(RequestKind::GenerateMore);
    let mut lines = Vec::new();

    if generating {
        lines.push(render_status_indicator(&StatusIndicatorType::spinner(
            RequestKind::GenerateMore.label(),
            spinner_frame(app.tick_count),
        )));
        lines.push(Line::default());
    }

    if recipes.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_RECIPES_MESSAGE,
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::default());
        lines.push(action_hint("[Ctrl+G]", " Generate Recipes"));
        return lines;
    }

    let start = app.recipe_scroll.min(recipes.len() - 1);
    for (offset, card) in recipes[start..].iter().enumerate() {
        if offset > 0 {
            lines.push(Line::from(Span::styled(
                "─".repeat(width),
                Style::default().fg(COLOR_BORDER),
            )));
        }
        lines.extend(recipe_card_lines(card, width));
    }
    lines
}

fn action_hint(key: &'static str, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            key,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(label),
    ])
}

fn render_recipes(frame: &mut Frame, area: Rect, app: &App) {
    let recipes = app.selection.recipes();
    let focused = app.focus == Focus::Recipes;

    let mut block = panel_block(recipes_title(recipes.len()), focused);
    if !recipes.is_empty() {
        let position = format!(
            " {}/{}  [g] Generate More ",
            app.recipe_scroll.min(recipes.len() - 1) + 1,
            recipes.len()
        );
        block = block.title_bottom(Line::from(Span::styled(
            position,
            Style::default().fg(COLOR_DIM),
        )).right_aligned());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    let lines = recipe_body_lines(app, content.width as usize);
    frame.render_widget(Paragraph::new(lines), content);
}
