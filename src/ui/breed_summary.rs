//! Breed summary shown above the recipes.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::models::BreedResult;

use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER};

/// Rows used by the summary body.
pub const BREED_SUMMARY_HEIGHT: u16 = 3;

pub fn breed_summary_lines(result: &BreedResult) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            result.breed.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Confidence: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                result.confidence_label(),
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if !result.species.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Species: ", Style::default().fg(COLOR_DIM)),
            Span::styled(result.species.clone(), Style::default().fg(Color::White)),
        ]));
    }
    lines
}
