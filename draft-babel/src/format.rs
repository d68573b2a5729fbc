//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading raw documents and writing them out.

use crate::error::FormatError;
use crate::raw::RawDocument;
use std::collections::HashMap;

/// Trait for document formats
///
/// Implementors read a [`RawDocument`] from text, write one to text, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
///         Ok(format!("{} blocks", doc.blocks.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "raw", "html", "api")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["json"], ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → RawDocument)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (RawDocument → output)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a RawDocument
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<RawDocument, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a RawDocument into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &RawDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a RawDocument, optionally using extra parameters.
    ///
    /// The default implementation delegates to [`Format::serialize`] and rejects any
    /// parameters. Formats with knobs override this.
    fn serialize_with_options(
        &self,
        doc: &RawDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
