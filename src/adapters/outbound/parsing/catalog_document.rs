use crate::shared::error::CatalogError;
use crate::shared::Result;
use serde_json::Value;

/// Parses a catalogue document into one JSON value per project record
///
/// Lines whose first non-blank characters are `//` are removed before
/// parsing. A top-level array is returned as is; a single object carrying a
/// `dependencies` field is wrapped into a one-element list. An object with
/// `"error": true` is the extractor reporting a failure and becomes
/// [`CatalogError::SourceError`].
///
/// # Errors
/// - [`CatalogError::DocumentParseError`] for invalid JSON
/// - [`CatalogError::SourceError`] for an error object
/// - [`CatalogError::DataLoadError`] for any other top-level shape
pub fn parse_catalog_document(text: &str, source: &str) -> Result<Vec<Value>> {
    let without_comments = strip_comment_lines(text);

    let document: Value =
        serde_json::from_str(&without_comments).map_err(|e| CatalogError::DocumentParseError {
            source_path: source.to_string(),
            details: e.to_string(),
        })?;

    match document {
        Value::Array(records) => {
            tracing::debug!(source, records = records.len(), "Parsed catalogue array");
            Ok(records)
        }
        Value::Object(map) if map.get("error").and_then(Value::as_bool) == Some(true) => {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Error while processing dependencies")
                .to_string();
            Err(CatalogError::SourceError { message }.into())
        }
        Value::Object(map) if map.get("dependencies").is_some_and(|d| !d.is_null()) => {
            tracing::debug!(source, "Parsed single-project catalogue object");
            Ok(vec![Value::Object(map)])
        }
        _ => Err(CatalogError::DataLoadError {
            source_path: source.to_string(),
            details: "Invalid data format: expected an array of projects".to_string(),
            suggestion: "The document must be a JSON array of projects or a single project object with dependencies".to_string(),
        }
        .into()),
    }
}

fn strip_comment_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}
