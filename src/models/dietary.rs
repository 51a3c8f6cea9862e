/// Dietary filters the user picked, in the order they were picked.
///
/// The set never holds duplicates. An empty selection means "no filter" and
/// must be omitted from outgoing requests rather than sent as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DietarySelection {
    selected: Vec<String>,
}

impl DietarySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from options in pick order. Duplicates are dropped.
    pub fn from_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for option in options {
            let option = option.into();
            if !selection.contains(&option) {
                selection.selected.push(option);
            }
        }
        selection
    }

    /// Toggle an option: remove it if selected, otherwise append it.
    ///
    /// Returns true if the option is selected afterwards.
    pub fn toggle(&mut self, option: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|o| o == option) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(option.to_string());
            true
        }
    }

    pub fn contains(&self, option: &str) -> bool {
        self.selected.iter().any(|o| o == option)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Value for the `dietary_options` request field.
    ///
    /// `None` when nothing is selected, so the field is left out entirely.
    pub fn as_param(&self) -> Option<String> {
        if self.selected.is_empty() {
            None
        } else {
            Some(self.selected.join(","))
        }
    }

    /// Human readable summary, e.g. `Low-Fat, Grain-Free`.
    pub fn summary(&self) -> String {
        self.selected.join(", ")
    }
}
