//! Conversion pipeline: load → classify.
//!
//! Single entry point for hosts holding an exported page as JSON text.

use crate::config::ConvertConfig;
use crate::generate::{NodeClasses, generate_classes};
use crate::loader::{LoadError, load_document};

/// Load a JSON page and produce classes for every node in it.
///
/// # Errors
/// Returns `LoadError` if the page cannot be loaded. Individual nodes
/// never fail; invalid ones get an empty class string.
pub fn convert_document(
    json: &str,
    config: &ConvertConfig,
) -> Result<Vec<NodeClasses>, LoadError> {
    let doc = load_document(json)?;
    Ok(generate_classes(&doc, config))
}

/// Like `convert_document`, but serializes the records as a JSON array of
/// `{ "id": ..., "classes": ... }` objects.
///
/// # Errors
/// Returns `LoadError` if the page cannot be loaded.
pub fn convert_document_json(json: &str, config: &ConvertConfig) -> Result<String, LoadError> {
    let records = convert_document(json, config)?;
    Ok(serde_json::to_string(&records)?)
}
