//! Raw format: the editor's JSON document.
//!
//! Parsing is permissive (see [`RawDocument::from_value`]); serialization writes the
//! normalized document back in the same shape, which is handy for inspecting what the
//! converters actually see.

use crate::error::FormatError;
use crate::format::Format;
use crate::raw::RawDocument;

pub struct RawFormat;

impl Format for RawFormat {
    fn name(&self) -> &str {
        "raw"
    }

    fn description(&self) -> &str {
        "Raw rich-text editor document (JSON)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<RawDocument, FormatError> {
        RawDocument::from_json_str(source)
    }

    fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
    }
}
