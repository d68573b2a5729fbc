//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// Conversion itself never fails: malformed documents degrade to empty content.
/// These errors only surface at the boundaries (reading JSON text, looking up a
/// format, accepting caller-supplied templates).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A caller-supplied template cannot be used
    #[error("Invalid template for '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },
}
