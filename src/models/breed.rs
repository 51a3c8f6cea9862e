use serde::{Deserialize, Deserializer, Serialize};

use super::recipe::RecipeCard;

/// Breed classification returned by the inference service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreedResult {
    pub breed: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub recipes: Vec<RecipeCard>,
}

impl BreedResult {
    /// Confidence as a percentage with one decimal place, e.g. `92.0%`.
    ///
    /// No clamping is applied; the raw value from the service is shown.
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// A popular breed entry with its short description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularBreed {
    pub name: String,
    pub description: String,
}

/// Breed name to description mapping, kept in the order the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopularBreeds {
    entries: Vec<PopularBreed>,
}

impl PopularBreeds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<String>) {
        let name = name.into();
        let description = description.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.description = description,
            None => self.entries.push(PopularBreed { name, description }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.description.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PopularBreed> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn nth(&self, index: usize) -> Option<&PopularBreed> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for PopularBreeds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};
        use std::fmt;

        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = PopularBreeds;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping breed names to descriptions")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut breeds = PopularBreeds::new();
                while let Some((name, description)) = map.next_entry::<String, String>()? {
                    breeds.insert(name, description);
                }
                Ok(breeds)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_label() {
        let result = BreedResult {
            breed: "Labrador Retriever".to_string(),
            species: "dog".to_string(),
            confidence: 0.92,
            recipes: vec![],
        };
        assert_eq!(result.confidence_label(), "92.0%");
    }

    #[test]
    fn test_confidence_label_low_value_not_clamped() {
        let result = BreedResult {
            breed: "Mixed".to_string(),
            species: "dog".to_string(),
            confidence: 0.0042,
            recipes: vec![],
        };
        assert_eq!(result.confidence_label(), "0.4%");
    }

    #[test]
    fn test_breed_result_deserialize() {
        let json = r#"{"breed": "Beagle", "species": "dog", "confidence": 0.81,
            "recipes": [{"title": "Turkey Rice", "tags": [], "ingredients": "",
            "instructions": "", "nutrition": {}}]}"#;
        let result: BreedResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.breed, "Beagle");
        assert_eq!(result.recipes.len(), 1);
        assert_eq!(result.recipes[0].title, "Turkey Rice");
    }

    #[test]
    fn test_popular_breeds_preserve_server_order() {
        let json = r#"{"Poodle": "Smart", "Beagle": "Curious", "Akita": "Loyal"}"#;
        let breeds: PopularBreeds = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = breeds.names().collect();
        assert_eq!(names, vec!["Poodle", "Beagle", "Akita"]);
        assert_eq!(breeds.get("Beagle"), Some("Curious"));
        assert_eq!(breeds.nth(2).map(|b| b.name.as_str()), Some("Akita"));
    }

    #[test]
    fn test_popular_breeds_insert_replaces_in_place() {
        let mut breeds = PopularBreeds::new();
        breeds.insert("Poodle", "a");
        breeds.insert("Beagle", "b");
        breeds.insert("Poodle", "c");
        assert_eq!(breeds.len(), 2);
        assert_eq!(breeds.nth(0).unwrap().description, "c");
    }

    #[test]
    fn test_popular_breeds_rejects_array() {
        let result: Result<PopularBreeds, _> = serde_json::from_str(r#"["Poodle"]"#);
        assert!(result.is_err());
    }
}
