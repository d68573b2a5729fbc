//! Tag maps: markup templates keyed by block type and inline style name.
//!
//! Block templates carry a `%content%` placeholder that receives the resolved inline markup
//! of the block. Inline styles map to an open/close pair. Both maps fall back to their
//! `default` entry for names they do not know.
//!
//! | Block type                  | Template                                   |
//! |-----------------------------|--------------------------------------------|
//! | `unstyled`, `default`       | `<p>%content%</p>`                         |
//! | `header-one`..`header-six`  | `<h1>%content%</h1>`..`<h6>%content%</h6>` |
//! | quote family                | `<blockquote class="…">%content%</blockquote>` |
//! | `code-block`                | `<code>%content%</code>`                   |
//! | list items                  | `<li>%content%</li>`                       |
//! | `atomic`                    | `<div>%content%</div>`                     |
//!
//! List items are additionally wrapped in `<ul>`/`<ol>` by the block walker, see
//! [`nested_tags`].

use crate::error::FormatError;
use std::collections::{BTreeMap, HashMap};

/// Placeholder replaced by a block's inline markup.
pub const CONTENT_PLACEHOLDER: &str = "%content%";

/// Fallback entry key in every tag map.
pub const DEFAULT_KEY: &str = "default";

const FALLBACK_BLOCK_TEMPLATE: &str = "<p>%content%</p>\n";

pub const UNORDERED_LIST_ITEM: &str = "unordered-list-item";
pub const ORDERED_LIST_ITEM: &str = "ordered-list-item";

/// A quote sub-type and the CSS class its blocks are rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteType {
    pub block_type: &'static str,
    pub style: &'static str,
}

/// Registry of quote block types.
pub const QUOTE_TYPES: &[QuoteType] = &[
    QuoteType {
        block_type: "blockquote",
        style: "quote-blockquote",
    },
    QuoteType {
        block_type: "introquote",
        style: "quote-introquote",
    },
    QuoteType {
        block_type: "pumpingquote",
        style: "quote-pumpingquote",
    },
    QuoteType {
        block_type: "forwardquote",
        style: "quote-forwardquote",
    },
];

/// Canonical type name given to every quote record in API data.
pub const CANONICAL_QUOTE_TYPE: &str = "blockquote";

/// Style class of a quote block type, `None` for non-quote types.
pub fn quote_style(block_type: &str) -> Option<&'static str> {
    QUOTE_TYPES
        .iter()
        .find(|quote| quote.block_type == block_type)
        .map(|quote| quote.style)
}

/// Open/close markup of the list wrapping a list-item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTags {
    pub open: &'static str,
    pub close: &'static str,
}

pub fn nested_tags(block_type: &str) -> Option<ListTags> {
    match block_type {
        ORDERED_LIST_ITEM => Some(ListTags {
            open: "<ol>",
            close: "</ol>",
        }),
        UNORDERED_LIST_ITEM => Some(ListTags {
            open: "<ul>",
            close: "</ul>",
        }),
        _ => None,
    }
}

pub fn is_list_item(block_type: &str) -> bool {
    nested_tags(block_type).is_some()
}

/// Atomic blocks hold embedded media rather than text.
pub fn is_atomic(block_type: &str) -> bool {
    block_type.starts_with("atomic") || block_type.starts_with("media")
}

/// Block type → template with a `%content%` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockTagMap {
    templates: HashMap<String, String>,
}

impl BlockTagMap {
    /// A map with no entries. Every lookup falls through to the built-in paragraph template
    /// until a `default` entry is inserted.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Insert or replace the template for a block type.
    pub fn insert(
        &mut self,
        block_type: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<(), FormatError> {
        let block_type = block_type.into();
        let template = template.into();
        if !template.contains(CONTENT_PLACEHOLDER) {
            return Err(FormatError::InvalidTemplate {
                name: block_type,
                reason: format!("template must contain {CONTENT_PLACEHOLDER}"),
            });
        }
        self.templates.insert(block_type, template);
        Ok(())
    }

    /// Builder-style [`BlockTagMap::insert`].
    pub fn with(
        mut self,
        block_type: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<Self, FormatError> {
        self.insert(block_type, template)?;
        Ok(self)
    }

    pub fn contains(&self, block_type: &str) -> bool {
        self.templates.contains_key(block_type)
    }

    /// Template for a block type, falling back to `default`.
    pub fn template_for(&self, block_type: &str) -> &str {
        if let Some(template) = self.templates.get(block_type) {
            return template;
        }
        log::debug!("no block template for '{block_type}', using default");
        self.templates
            .get(DEFAULT_KEY)
            .map(String::as_str)
            .unwrap_or(FALLBACK_BLOCK_TEMPLATE)
    }

    /// Substitute `content` into the template for `block_type`.
    pub fn render(&self, block_type: &str, content: &str) -> String {
        self.template_for(block_type)
            .replacen(CONTENT_PLACEHOLDER, content, 1)
    }

    /// Entries sorted by block type.
    pub fn entries(&self) -> BTreeMap<&str, &str> {
        self.templates
            .iter()
            .map(|(block_type, template)| (block_type.as_str(), template.as_str()))
            .collect()
    }
}

impl Default for BlockTagMap {
    fn default() -> Self {
        let mut templates = HashMap::new();
        let mut add = |block_type: &str, template: String| {
            templates.insert(block_type.to_string(), template);
        };

        add(DEFAULT_KEY, FALLBACK_BLOCK_TEMPLATE.to_string());
        add("unstyled", FALLBACK_BLOCK_TEMPLATE.to_string());
        for (level, name) in ["one", "two", "three", "four", "five", "six"]
            .iter()
            .enumerate()
        {
            let level = level + 1;
            add(
                &format!("header-{name}"),
                format!("<h{level}>%content%</h{level}>\n"),
            );
        }
        for quote in QUOTE_TYPES {
            add(
                quote.block_type,
                format!(
                    "<blockquote class=\"{}\">%content%</blockquote>\n",
                    quote.style
                ),
            );
        }
        add("code-block", "<code>%content%</code>\n".to_string());
        add(ORDERED_LIST_ITEM, "<li>%content%</li>\n".to_string());
        add(UNORDERED_LIST_ITEM, "<li>%content%</li>\n".to_string());
        add("atomic", "<div>%content%</div>\n".to_string());

        Self { templates }
    }
}

/// An open/close markup pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    pub open: String,
    pub close: String,
}

impl TagPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Inline style name → tag pair.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineTagMap {
    tags: HashMap<String, TagPair>,
}

impl InlineTagMap {
    pub fn empty() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    pub fn insert(&mut self, style: impl Into<String>, tags: TagPair) {
        self.tags.insert(style.into(), tags);
    }

    pub fn contains(&self, style: &str) -> bool {
        self.tags.contains_key(style)
    }

    /// Tags for a style, falling back to `default` and finally to `<span>`.
    pub fn tags_for(&self, style: &str) -> (&str, &str) {
        let pair = self.tags.get(style).or_else(|| {
            log::debug!("unknown inline style '{style}', using default");
            self.tags.get(DEFAULT_KEY)
        });
        match pair {
            Some(pair) => (pair.open.as_str(), pair.close.as_str()),
            None => ("<span>", "</span>"),
        }
    }
}

impl Default for InlineTagMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.insert("BOLD", TagPair::new("<strong>", "</strong>"));
        map.insert("CODE", TagPair::new("<code>", "</code>"));
        map.insert("ITALIC", TagPair::new("<em>", "</em>"));
        map.insert("UNDERLINE", TagPair::new("<u>", "</u>"));
        map.insert(DEFAULT_KEY, TagPair::new("<span>", "</span>"));
        map
    }
}
