use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ScanError;

/// Mapping from relative file path to the string literals found in that
/// file, in source order.
///
/// Keys keep insertion order (serde_json's `preserve_order` feature), so
/// the JSON output lists files in walk order and is byte-identical across
/// runs over an unchanged tree.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    files: Map<String, Value>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the literals extracted from one file.
    pub fn insert(&mut self, relative_path: String, literals: Vec<String>) {
        self.files
            .insert(relative_path, Value::from(literals));
    }

    /// Number of files recorded.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_pretty_json(&self) -> Result<String, ScanError> {
        Ok(serde_json::to_string_pretty(&self.files)?)
    }
}
