//! Header (app name, mode tabs, connection status) and the keybind footer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::state::InputMode;

use super::components::{
    render_status_indicator, render_tab_selector, StatusIndicatorType, TabItem,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

pub const APP_TITLE: &str = "PetPal";
pub const APP_SUBTITLE: &str = "Dog Breed Analyzer & Nutrition Recipe Generator";

/// Minimum width that fits the subtitle next to the tabs and status
const SUBTITLE_MIN_WIDTH: u16 = 150;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let tabs = [
        TabItem::new(InputMode::Image.title())
            .with_short_label("Image")
            .with_key("F1"),
        TabItem::new(InputMode::Text.title())
            .with_short_label("Breed")
            .with_key("F2"),
    ];
    let selected = match app.selection.mode() {
        InputMode::Image => 0,
        InputMode::Text => 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", APP_TITLE),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if ctx.width >= SUBTITLE_MIN_WIDTH {
        spans.push(Span::styled(
            format!("{}   ", APP_SUBTITLE),
            Style::default().fg(COLOR_DIM),
        ));
    } else {
        spans.push(Span::raw("  "));
    }
    spans.extend(render_tab_selector(&tabs, selected, ctx).spans);

    let status = render_status_indicator(&StatusIndicatorType::Connection(
        app.startup.connection,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    frame.render_widget(Paragraph::new(status.right_aligned()), area);
}

fn hint(spans: &mut Vec<Span<'static>>, key: &'static str, label: &'static str) {
    if spans.len() > 1 {
        spans.push(Span::styled(" | ", Style::default().fg(COLOR_DIM)));
    }
    spans.push(Span::styled(key, Style::default().fg(COLOR_ACCENT)));
    spans.push(Span::styled(label, Style::default().fg(COLOR_DIM)));
}

/// Keybind hints for the current focus. Narrow terminals drop the
/// descriptions of global keys.
pub fn build_keybinds(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];

    if app.notification.is_some() {
        hint(&mut spans, "[Enter/Esc]", " dismiss");
        return Line::from(spans);
    }

    match app.focus {
        Focus::Dietary => {
            hint(&mut spans, "[←/→]", " move");
            hint(&mut spans, "[Space]", " toggle");
        }
        Focus::Input => match app.selection.mode() {
            InputMode::Image => {
                hint(&mut spans, "[Enter]", " load path");
                if app.selection.analyze_offered() {
                    hint(&mut spans, "[Ctrl+A]", " analyze");
                }
            }
            InputMode::Text => hint(&mut spans, "[Enter]", " search"),
        },
        Focus::PopularBreeds => {
            hint(&mut spans, "[↑/↓]", " move");
            hint(&mut spans, "[Enter]", " search");
        }
        Focus::Recipes => {
            hint(&mut spans, "[↑/↓]", " browse");
            hint(&mut spans, "[g]", " generate more");
        }
        Focus::Chat => {
            hint(&mut spans, "[Enter]", " send");
            hint(&mut spans, "[↑/↓]", " scroll");
        }
    }

    if ctx.is_extra_small() {
        return Line::from(spans);
    }

    hint(&mut spans, "[Tab]", if ctx.is_narrow() { "" } else { " next panel" });
    hint(&mut spans, "[F1/F2]", if ctx.is_narrow() { "" } else { " mode" });
    hint(&mut spans, "[Ctrl+Q]", " quit");
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    frame.render_widget(Paragraph::new(build_keybinds(app, ctx)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::app::Notification;
    use crate::error::{ErrorCategory, PetPalError, ValidationError};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_keybinds_for_text_input() {
        let mut app = test_app();
        app.selection.switch_mode(InputMode::Text);
        let line = text(&build_keybinds(&app, &LayoutContext::new(120, 40)));
        assert_eq!(
            line,
            " [Enter] search | [Tab] next panel | [F1/F2] mode | [Ctrl+Q] quit"
        );
    }

    #[test]
    fn test_keybinds_with_notification() {
        let mut app = test_app();
        let err: PetPalError = ValidationError::NoImageSelected.into();
        app.notification = Some(Notification::from_error(&err));
        assert_eq!(
            app.notification.as_ref().map(|n| n.category),
            Some(ErrorCategory::Validation)
        );
        let line = text(&build_keybinds(&app, &LayoutContext::new(120, 40)));
        assert_eq!(line, " [Enter/Esc] dismiss");
    }

    #[test]
    fn test_keybinds_extra_small_drop_globals() {
        let mut app = test_app();
        app.focus = Focus::Recipes;
        let line = text(&build_keybinds(&app, &LayoutContext::new(50, 20)));
        assert_eq!(line, " [↑/↓] browse | [g] generate more");
    }
}
