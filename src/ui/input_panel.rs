//! Input panel: dietary chips, the image path or breed field, and the
//! popular breed quick-pick list.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::state::InputMode;

use super::components::{
    render_input_field, render_status_indicator, spinner_frame, InputFieldConfig,
    StatusIndicatorType, INPUT_FIELD_HEIGHT,
};
use super::layout::LayoutContext;
use super::text::truncate;
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_HEADER,
};

pub const DIETARY_LABEL: &str = "Dietary Preferences (Optional):";
pub const POPULAR_LABEL: &str = "Popular Breeds:";

/// Render the whole input column.
pub fn render_input_panel(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let focused = matches!(app.focus, Focus::Dietary | Focus::Input | Focus::PopularBreeds);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.selection.mode().title()),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            COLOR_BORDER_FOCUSED
        } else {
            COLOR_BORDER
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    let mut y = inner.y;
    let bottom = inner.y + inner.height;

    // Dietary chips
    if !app.dietary_options.is_empty() {
        let lines = dietary_lines(app, inner.width as usize);
        y = render_lines(frame, inner, y, bottom, lines);
        y = (y + 1).min(bottom);
    }

    // Text field
    if y + INPUT_FIELD_HEIGHT <= bottom {
        let field_area = Rect {
            y,
            height: INPUT_FIELD_HEIGHT,
            ..inner
        };
        let config = match app.selection.mode() {
            InputMode::Image => InputFieldConfig::new("Image path", &app.image_path_input)
                .placeholder("Type a path to a dog photo"),
            InputMode::Text => InputFieldConfig::new("Breed name", &app.breed_input)
                .placeholder("e.g. Golden Retriever"),
        }
        .focused(app.focus == Focus::Input && app.notification.is_none());
        render_input_field(frame, field_area, &config);
        y += INPUT_FIELD_HEIGHT;
    }

    let lines = match app.selection.mode() {
        InputMode::Image => image_lines(app, ctx),
        InputMode::Text => breed_lines(app, inner.width as usize),
    };
    render_lines(frame, inner, y, bottom, lines);
}

/// Draw `lines` from row `y`, clipped at `bottom`. Returns the next free row.
fn render_lines(
    frame: &mut Frame,
    inner: Rect,
    y: u16,
    bottom: u16,
    lines: Vec<Line<'static>>,
) -> u16 {
    let height = (lines.len() as u16).min(bottom.saturating_sub(y));
    if height == 0 {
        return y;
    }
    let area = Rect { y, height, ..inner };
    frame.render_widget(Paragraph::new(lines), area);
    y + height
}

/// Chip rows wrapped to `width`, plus the selection summary.
pub fn dietary_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let focused = app.focus == Focus::Dietary;
    let selection = app.selection.dietary();

    let mut lines = vec![Line::from(Span::styled(
        DIETARY_LABEL,
        Style::default().fg(Color::White),
    ))];

    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;
    for (idx, option) in app.dietary_options.iter().enumerate() {
        let selected = selection.contains(option);
        let chip = format!("[{}] {}", if selected { "x" } else { " " }, option);
        let chip_width = chip.width();

        if row_width > 0 && row_width + 2 + chip_width > width {
            lines.push(Line::from(std::mem::take(&mut row)));
            row_width = 0;
        }
        if row_width > 0 {
            row.push(Span::raw("  "));
            row_width += 2;
        }

        let mut style = if selected {
            Style::default().fg(COLOR_ACTIVE)
        } else {
            Style::default().fg(Color::Gray)
        };
        if focused && idx == app.dietary_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        row.push(Span::styled(chip, style));
        row_width += chip_width;
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }

    if !selection.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(COLOR_DIM)),
            Span::styled(selection.summary(), Style::default().fg(COLOR_ACTIVE)),
        ]));
    }
    lines
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

/// Status lines below the image path field.
pub fn image_lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let frame = spinner_frame(app.tick_count);
    let mut lines = Vec::new();

    if app.image_loading {
        lines.push(render_status_indicator(&StatusIndicatorType::spinner(
            "Reading image...",
            frame,
        )));
    } else if let Some(image) = app.selection.image() {
        lines.push(Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(COLOR_DIM)),
            Span::styled(image.file_name.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!(" ({})", format_size(image.size())),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    } else {
        lines.push(render_status_indicator(&StatusIndicatorType::info(
            "No image selected",
        )));
    }

    if let Some(kind) = app.selection.loading_kind() {
        lines.push(Line::default());
        lines.push(render_status_indicator(&StatusIndicatorType::spinner(
            kind.label(),
            frame,
        )));
    } else if app.selection.analyze_offered() {
        lines.push(Line::default());
        let hint = if ctx.is_compact() {
            " Analyze"
        } else {
            " Analyze Image & Generate Recipes"
        };
        lines.push(Line::from(vec![
            Span::styled(
                "[Ctrl+A]",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(hint),
        ]));
    }
    lines
}

/// Loading indicator and popular breed list below the breed field.
pub fn breed_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(kind) = app.selection.loading_kind() {
        lines.push(render_status_indicator(&StatusIndicatorType::spinner(
            kind.label(),
            spinner_frame(app.tick_count),
        )));
        lines.push(Line::default());
    }

    if app.popular_breeds.is_empty() {
        return lines;
    }

    let focused = app.focus == Focus::PopularBreeds;
    lines.push(Line::from(Span::styled(
        POPULAR_LABEL,
        Style::default().fg(Color::White),
    )));
    for (idx, breed) in app.popular_breeds.iter().enumerate() {
        let current = focused && idx == app.popular_cursor;
        let marker = if current { "▶ " } else { "  " };
        let name_style = if current {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let name_width = breed.name.width() + 2;
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(breed.name.clone(), name_style),
        ];
        let room = width.saturating_sub(name_width + 2);
        if !breed.description.is_empty() && room > 8 {
            spans.push(Span::styled(
                format!("  {}", truncate(&breed.description, room)),
                Style::default().fg(COLOR_DIM),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}
