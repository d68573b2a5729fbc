//! HTML format implementation
//!
//! Converts a raw document into an HTML fragment by walking its blocks in order.
//!
//! # Element Mapping Table
//!
//! | Raw element              | HTML                                         | Notes                                  |
//! |--------------------------|----------------------------------------------|----------------------------------------|
//! | Block                    | [`BlockTagMap`] template                     | `%content%` receives the inline markup |
//! | Run of list items        | `<ul>`…`</ul>` / `<ol>`…`</ol>`              | One level only, see below              |
//! | Inline style range       | [`InlineTagMap`] pair                        | Unknown styles → `<span>`              |
//! | Entity range             | [`EntityTagMap`] renderer                    | Unknown types → text only              |
//!
//! # Lists
//!
//! Consecutive list items of the same type share one list element. The list closes at the
//! first block of another type, so an unordered list directly followed by an ordered one
//! renders as two sibling lists. Nested lists are not represented: item depth is ignored.
//!
//! # Output
//!
//! The output is a fragment, one block per line, meant to be stored and embedded by the
//! host page. The format takes no extra parameters.

mod serializer;

pub use serializer::{convert_to_html, serialize_to_html};

use crate::entities::EntityTagMap;
use crate::error::FormatError;
use crate::format::Format;
use crate::raw::RawDocument;
use crate::tags::{BlockTagMap, InlineTagMap};

/// Tag maps used for HTML output
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    pub block_tags: BlockTagMap,
    pub inline_tags: InlineTagMap,
    pub entity_tags: EntityTagMap,
}

impl HtmlOptions {
    pub fn with_block_tags(mut self, block_tags: BlockTagMap) -> Self {
        self.block_tags = block_tags;
        self
    }

    pub fn with_entity_tags(mut self, entity_tags: EntityTagMap) -> Self {
        self.entity_tags = entity_tags;
        self
    }
}

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, &self.options))
    }
}
