//! Caller-supplied entity templates.

use super::kind::raw_field;
use super::{EntityMarkup, EntityRenderer};
use crate::raw::DataBag;
use html_escape::encode_double_quoted_attribute;

/// Renders an entity type from an open/close template pair.
///
/// `{{field}}` placeholders are replaced by the matching data field, attribute-escaped so
/// they are safe both in text and inside double-quoted attributes. Missing fields render
/// as the empty string. An unterminated `{{` is emitted literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRenderer {
    entity_type: String,
    open: String,
    close: String,
}

impl TemplateRenderer {
    pub fn new(
        entity_type: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            open: open.into(),
            close: close.into(),
        }
    }
}

impl EntityRenderer for TemplateRenderer {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn render(&self, data: &DataBag) -> EntityMarkup {
        EntityMarkup::new(fill(&self.open, data), fill(&self.close, data))
    }
}

fn fill(template: &str, data: &DataBag) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        output.push_str(&rest[..start]);
        let field = rest[start + 2..start + 2 + len].trim();
        output.push_str(&encode_double_quoted_attribute(&raw_field(data, field)));
        rest = &rest[start + 2 + len + 2..];
    }

    output.push_str(rest);
    output
}
