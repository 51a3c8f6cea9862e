//! Recipe card rendering.
//!
//! A card is pre-wrapped into lines so the recipes panel can stack several
//! cards and scroll by whole cards.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::models::{NutritionInfo, RecipeCard};

use super::text::{wrap_text, wrap_with_prefix};
use super::theme::{COLOR_DIM, COLOR_HEADER, COLOR_NUTRIENT, COLOR_TAG};

fn section_heading(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn body_lines(text: &str, width: usize) -> impl Iterator<Item = Line<'static>> {
    wrap_text(text.trim(), width.saturating_sub(2))
        .into_iter()
        .map(|chunk| {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(chunk, Style::default().fg(Color::Gray)),
            ])
        })
}

/// Unit suffix for a macro figure. Calories have none.
fn unit(label: &str) -> &'static str {
    match label {
        "Calories" => "",
        _ => "g",
    }
}

/// Nutrition block. Absent figures are left out, never shown as zero.
pub fn nutrition_lines(nutrition: &NutritionInfo, width: usize) -> Vec<Line<'static>> {
    if nutrition.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![section_heading("Nutritional Information")];

    let figures = nutrition.figures();
    if !figures.is_empty() {
        let mut spans = vec![Span::raw("  ")];
        for (idx, figure) in figures.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(COLOR_DIM)));
            }
            spans.push(Span::styled(
                format!("{}{}", figure.value, unit(figure.label)),
                Style::default()
                    .fg(COLOR_NUTRIENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", figure.label),
                Style::default().fg(COLOR_DIM),
            ));
        }
        lines.push(Line::from(spans));
    }

    if let Some(micro) = nutrition.micronutrients() {
        lines.extend(wrap_with_prefix(
            micro,
            "  Micronutrients: ",
            Style::default().fg(COLOR_DIM),
            Style::default().fg(Color::Gray),
            width,
        ));
    }
    lines
}

/// Full card: title, tags, ingredients, instructions, nutrition.
pub fn recipe_card_lines(card: &RecipeCard, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        card.title.clone(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))];

    if !card.tags.is_empty() {
        let mut spans = Vec::with_capacity(card.tags.len() * 2);
        for (idx, tag) in card.tags.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!("#{}", tag), Style::default().fg(COLOR_TAG)));
        }
        lines.push(Line::from(spans));
    }

    if !card.ingredients.trim().is_empty() {
        lines.push(section_heading("Ingredients"));
        lines.extend(body_lines(&card.ingredients, width));
    }

    if !card.instructions.trim().is_empty() {
        lines.push(section_heading("Instructions"));
        lines.extend(body_lines(&card.instructions, width));
    }

    lines.extend(nutrition_lines(&card.nutrition, width));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn card(nutrition: NutritionInfo) -> RecipeCard {
        RecipeCard {
            title: "Chicken & Rice Bowl".into(),
            tags: vec!["Low-Fat".into(), "Grain-Free".into()],
            ingredients: "200g chicken\n100g rice".into(),
            instructions: "Boil and serve.".into(),
            nutrition,
        }
    }

    #[test]
    fn test_card_sections_in_order() {
        let nutrition = NutritionInfo {
            calories: Some(350.0),
            protein: Some(25.0),
            ..Default::default()
        };
        let lines = text(&recipe_card_lines(&card(nutrition), 60));
        assert_eq!(
            lines,
            vec![
                "Chicken & Rice Bowl",
                "#Low-Fat #Grain-Free",
                "Ingredients",
                "  200g chicken",
                "  100g rice",
                "Instructions",
                "  Boil and serve.",
                "Nutritional Information",
                "  350 Calories  │  25g Protein",
            ]
        );
    }

    #[test]
    fn test_missing_nutrition_is_omitted() {
        let lines = text(&recipe_card_lines(&card(NutritionInfo::default()), 60));
        assert!(!lines.iter().any(|l| l.contains("Nutritional")));
        assert!(!lines.iter().any(|l| l.contains('0') && l.contains("Calories")));
    }

    #[test]
    fn test_micronutrients_only() {
        let nutrition = NutritionInfo {
            micronutrients: Some("Vitamin E, Zinc".into()),
            ..Default::default()
        };
        let lines = text(&nutrition_lines(&nutrition, 60));
        assert_eq!(
            lines,
            vec!["Nutritional Information", "  Micronutrients: Vitamin E, Zinc"]
        );
    }
}
