//! Built-in entity kinds and their markup.

use super::{EntityMarkup, EntityRenderer};
use crate::raw::DataBag;
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Deserialize;
use serde_json::Value;

/// The entity types the editor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Annotation,
    Audio,
    EmbeddedCode,
    InfoBox,
    Link,
    Image,
    Slideshow,
    ImageDiff,
}

/// One image of a slideshow or image diff.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub url: String,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Annotation,
        EntityKind::Audio,
        EntityKind::EmbeddedCode,
        EntityKind::InfoBox,
        EntityKind::Link,
        EntityKind::Image,
        EntityKind::Slideshow,
        EntityKind::ImageDiff,
    ];

    pub fn type_name(self) -> &'static str {
        match self {
            EntityKind::Annotation => "annotation",
            EntityKind::Audio => "audio",
            EntityKind::EmbeddedCode => "embeddedCode",
            EntityKind::InfoBox => "infobox",
            EntityKind::Link => "link",
            EntityKind::Image => "image",
            EntityKind::Slideshow => "slideshow",
            EntityKind::ImageDiff => "imageDiff",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// Slideshows and image diffs carry an `images` list instead of a single asset.
    pub fn is_image_collection(self) -> bool {
        matches!(self, EntityKind::Slideshow | EntityKind::ImageDiff)
    }

    /// Maximum number of images rendered from the `images` list.
    pub fn image_limit(self) -> Option<usize> {
        match self {
            EntityKind::ImageDiff => Some(2),
            _ => None,
        }
    }

    pub fn markup(self, data: &DataBag) -> EntityMarkup {
        match self {
            EntityKind::Annotation => EntityMarkup::new(
                format!("<div><span>{}</span>", markup_field(data, "annotation")),
                "</div>",
            ),
            EntityKind::Audio => EntityMarkup::new(
                format!(
                    "<div><h4>{}</h4><span>{}</span><audio src=\"{}\" />",
                    text_field(data, "title"),
                    text_field(data, "description"),
                    attr_field(data, "url"),
                ),
                "</div>",
            ),
            EntityKind::EmbeddedCode => EntityMarkup::new(
                format!("<div>{}", markup_field(data, "embeddedCode")),
                "</div>",
            ),
            EntityKind::InfoBox => EntityMarkup::new(
                format!(
                    "<div><div><span>{}</span></div><div><span>{}</span></div>",
                    text_field(data, "title"),
                    markup_field(data, "body"),
                ),
                "</div>",
            ),
            EntityKind::Link => {
                EntityMarkup::new(format!("<a href=\"{}\">", attr_field(data, "url")), "</a>")
            }
            EntityKind::Image => {
                EntityMarkup::new(format!("<img src=\"{}\">", attr_field(data, "url")), "</img>")
            }
            EntityKind::Slideshow | EntityKind::ImageDiff => {
                let mut open = format!("<!-- {} component --> <ol> ", self.type_name());
                for image in images(data, self.image_limit()) {
                    open.push_str(&format!(
                        "<li><img src=\"{}\" /></li>",
                        encode_double_quoted_attribute(&image.url)
                    ));
                }
                EntityMarkup::new(open, "</ol>")
            }
        }
    }
}

impl EntityRenderer for EntityKind {
    fn entity_type(&self) -> &str {
        self.type_name()
    }

    fn render(&self, data: &DataBag) -> EntityMarkup {
        self.markup(data)
    }
}

/// The `images` list of a data bag, truncated to `limit` entries. Entries that are not
/// image objects are skipped.
pub(crate) fn images(data: &DataBag, limit: Option<usize>) -> Vec<ImageRef> {
    let Some(Value::Array(entries)) = data.get("images") else {
        return Vec::new();
    };
    entries
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .filter_map(|entry| serde_json::from_value::<ImageRef>(entry.clone()).ok())
        .collect()
}

/// A data field as a string. Numbers and booleans are stringified, anything else is empty.
pub(crate) fn raw_field(data: &DataBag, field: &str) -> String {
    match data.get(field) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Number(value)) => value.to_string(),
        Some(Value::Bool(value)) => value.to_string(),
        _ => String::new(),
    }
}

fn text_field(data: &DataBag, field: &str) -> String {
    encode_text(&raw_field(data, field)).into_owned()
}

fn attr_field(data: &DataBag, field: &str) -> String {
    encode_double_quoted_attribute(&raw_field(data, field)).into_owned()
}

/// Fields that already hold editor-produced markup are passed through.
fn markup_field(data: &DataBag, field: &str) -> String {
    raw_field(data, field)
}
