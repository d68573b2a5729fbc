//! API data format
//!
//! A structured, non-HTML serialization of the document for downstream API consumers. Each
//! block becomes an [`ApiDataRecord`], except that a run of list items of one type becomes a
//! single record whose content holds one markup string per item.
//!
//! | Block                 | Record                                                       |
//! |-----------------------|--------------------------------------------------------------|
//! | text block            | `{id, type, content: [markup]}`                              |
//! | quote family          | `{id, type: "blockquote", content: [markup], styles: [class]}` |
//! | run of list items     | `{id: first item's key, type: list type, content: [markup…]}` |
//! | atomic / media        | whatever the [`AtomicBlockConverter`] returns                |

mod atomic;
mod builder;
mod record;

pub use atomic::{AtomicBlockConverter, DefaultAtomicConverter};
pub use builder::{convert_to_api_data, ApiDataBuilder};
pub use record::{Alignment, ApiContent, ApiDataRecord};

use crate::error::FormatError;
use crate::format::Format;
use crate::raw::RawDocument;
use std::collections::HashMap;

/// Format implementation for API data (JSON)
pub struct ApiFormat {
    builder: ApiDataBuilder,
    pretty: bool,
}

impl Default for ApiFormat {
    fn default() -> Self {
        Self::new(ApiDataBuilder::default())
    }
}

impl ApiFormat {
    pub fn new(builder: ApiDataBuilder) -> Self {
        Self {
            builder,
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_json(&self, doc: &RawDocument, pretty: bool) -> Result<String, FormatError> {
        let records = self.builder.build(doc);
        let json = if pretty {
            serde_json::to_string_pretty(&records)
        } else {
            serde_json::to_string(&records)
        };
        json.map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
    }
}

impl Format for ApiFormat {
    fn name(&self) -> &str {
        "api"
    }

    fn description(&self) -> &str {
        "Structured API data records (JSON)"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
        self.to_json(doc, self.pretty)
    }

    fn serialize_with_options(
        &self,
        doc: &RawDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut pretty = self.pretty;
        for (key, value) in options {
            match key.as_str() {
                "pretty" => pretty = parse_bool(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'api' does not support parameter '{other}'"
                    )))
                }
            }
        }
        self.to_json(doc, pretty)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean value '{other}' for '{key}'"
        ))),
    }
}
