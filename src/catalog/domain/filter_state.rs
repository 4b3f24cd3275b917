use super::dimension::Dimension;
use crate::shared::error::ErrorKind;
use serde::Serialize;

/// Selected value per dimension; `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelections {
    pub java: Option<String>,
    pub kotlin: Option<String>,
    pub gradle: Option<String>,
    pub spring_boot: Option<String>,
}

impl FilterSelections {
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        self.slot(dimension).as_deref()
    }

    pub fn set(&mut self, dimension: Dimension, value: Option<String>) {
        *self.slot_mut(dimension) = value;
    }

    /// Builder-style variant of [`FilterSelections::set`].
    pub fn with(mut self, dimension: Dimension, value: &str) -> Self {
        self.set(dimension, Some(value.to_string()));
        self
    }

    /// Iterates the non-null selections in dimension order.
    pub fn active(&self) -> impl Iterator<Item = (Dimension, &str)> + '_ {
        Dimension::ALL
            .into_iter()
            .filter_map(move |dimension| self.get(dimension).map(|value| (dimension, value)))
    }

    pub fn has_active(&self) -> bool {
        self.active().next().is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Human-readable labels such as `"Java: 17"`, one per active selection.
    pub fn labels(&self) -> Vec<String> {
        self.active()
            .map(|(dimension, value)| format!("{}: {}", dimension.display_name(), value))
            .collect()
    }

    fn slot(&self, dimension: Dimension) -> &Option<String> {
        match dimension {
            Dimension::Java => &self.java,
            Dimension::Kotlin => &self.kotlin,
            Dimension::Gradle => &self.gradle,
            Dimension::SpringBoot => &self.spring_boot,
        }
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<String> {
        match dimension {
            Dimension::Java => &mut self.java,
            Dimension::Kotlin => &mut self.kotlin,
            Dimension::Gradle => &mut self.gradle,
            Dimension::SpringBoot => &mut self.spring_boot,
        }
    }
}

/// Session filter state: the four selections plus the search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selections: FilterSelections,
    search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selections(&self) -> &FilterSelections {
        &self.selections
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Sets one dimension by storage key or display alias (`spring`).
    ///
    /// Unknown keys are rejected with a validation warning and leave the
    /// state untouched. An empty value clears the dimension.
    pub fn update_filter(&mut self, key: &str, value: Option<&str>) -> bool {
        let dimension = match key.parse::<Dimension>() {
            Ok(dimension) => dimension,
            Err(e) => {
                tracing::warn!(kind = %ErrorKind::Validation, key, "{}", e);
                return false;
            }
        };
        let value = value.filter(|v| !v.is_empty()).map(str::to_string);
        self.selections.set(dimension, value);
        true
    }

    pub(crate) fn set_selection(&mut self, dimension: Dimension, value: Option<String>) {
        self.selections.set(dimension, value);
    }

    /// Clears all four dimensions. The search term is left alone.
    pub fn reset_filters(&mut self) {
        self.selections.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        self.selections.has_active()
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }
}
