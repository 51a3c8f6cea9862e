use serde::{Deserialize, Deserializer, Serialize};

/// Macro and micronutrient metadata attached to a recipe.
///
/// Every field may be missing. A missing field means "omit this block",
/// never zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionInfo {
    #[serde(default, deserialize_with = "deserialize_magnitude")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_magnitude")]
    pub protein: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_magnitude")]
    pub fat: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_magnitude")]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub micronutrients: Option<String>,
}

/// One macro-nutrient block ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientFigure {
    pub label: &'static str,
    pub value: String,
}

impl NutritionInfo {
    /// Macro figures that are present, in display order.
    pub fn figures(&self) -> Vec<NutrientFigure> {
        [
            ("Calories", self.calories),
            ("Protein", self.protein),
            ("Fat", self.fat),
            ("Carbs", self.carbs),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value.map(|v| NutrientFigure {
                label,
                value: format_magnitude(v),
            })
        })
        .collect()
    }

    /// Micronutrient notes, treating a blank string as absent.
    pub fn micronutrients(&self) -> Option<&str> {
        self.micronutrients
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// True when there is nothing to show at all.
    pub fn is_empty(&self) -> bool {
        self.figures().is_empty() && self.micronutrients().is_none()
    }
}

/// A generated recipe tailored to a breed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeCard {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub nutrition: NutritionInfo,
}

/// Format a nutrient magnitude without a trailing `.0` for whole numbers.
pub fn format_magnitude(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Accept a JSON number, a numeric string (optionally followed by a unit such
/// as `"25g"`), or null.
fn deserialize_magnitude<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct MagnitudeVisitor;

    impl<'de> Visitor<'de> for MagnitudeVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, a numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(parse_leading_number(value))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(MagnitudeVisitor)
        }
    }

    deserializer.deserialize_option(MagnitudeVisitor)
}

fn parse_leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '-'))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
