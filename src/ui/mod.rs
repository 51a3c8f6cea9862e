//! UI rendering for PetPal
//!
//! Screen layout:
//! - Header: app name, input mode tabs and connection status
//! - Input column: dietary chips, image path or breed field, popular breeds
//! - Results column: breed summary, recipe cards and the nutrition chat
//! - Footer: keybind hints for the focused panel
//!
//! Below 80 columns the two columns stack. Every render function receives a
//! `LayoutContext` so sizing decisions stay responsive.

mod breed_summary;
mod chat_panel;
mod components;
mod input_panel;
mod layout;
mod notification;
mod recipe_card;
mod results;
mod status_bar;
mod text;
mod theme;

pub use layout::LayoutContext;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use input_panel::render_input_panel;
use notification::render_notification;
use results::render_results;
use status_bar::{render_footer, render_header};

/// Rows the input column takes when stacked above the results.
fn stacked_input_height(app: &App, ctx: &LayoutContext) -> u16 {
    let dietary = if app.dietary_options.is_empty() { 0 } else { 5 };
    let extra = match app.selection.mode() {
        crate::state::InputMode::Image => 4,
        crate::state::InputMode::Text => (app.popular_breeds.len() as u16 + 1).min(6),
    };
    (2 + dietary + 3 + extra).min(ctx.height / 2)
}

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, rows[0], app, &ctx);
    render_body(frame, rows[1], app, &ctx);
    render_footer(frame, rows[2], app, &ctx);

    if let Some(notification) = &app.notification {
        render_notification(frame, area, notification, &ctx);
    }
}

fn render_body(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let (input_area, results_area) = if ctx.should_stack_panels() {
        let input_height = stacked_input_height(app, ctx);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(input_height), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    } else {
        let (left, _) = ctx.two_column_widths();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(left), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    };

    render_input_panel(frame, input_area, app, ctx);
    render_results(frame, results_area, app, ctx);
}
