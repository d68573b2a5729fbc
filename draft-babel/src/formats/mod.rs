//! Format implementations
//!
//! - `raw`: the editor's JSON document, both directions
//! - `html`: HTML fragment output
//! - `api`: structured API data records as JSON

pub mod api;
pub mod html;
pub mod raw;

pub use api::ApiFormat;
pub use html::{HtmlFormat, HtmlOptions};
pub use raw::RawFormat;
