use crate::catalog::domain::Dimension;

/// Request to load a catalogue document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// File path or `http(s)://` URL of the document
    pub location: String,
}

impl LoadRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Filters and search term to apply to a loaded catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    /// Requested selections, in the order the user gave them
    pub filters: Vec<(Dimension, String)>,
    pub search_term: Option<String>,
}

impl QueryRequest {
    pub fn new(filters: Vec<(Dimension, String)>, search_term: Option<String>) -> Self {
        Self {
            filters,
            search_term,
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}
