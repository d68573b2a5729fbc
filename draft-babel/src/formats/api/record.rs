use serde::Serialize;
use serde_json::Value;

/// Placement of an atomic block within the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Parse an alignment name; anything unrecognized is centered.
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            _ => Alignment::Center,
        }
    }
}

/// One item of a record's content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiContent {
    /// Resolved inline markup of a block or list item
    Markup(String),
    /// Structured entity data (images, embeds, ...)
    Data(Value),
}

impl From<String> for ApiContent {
    fn from(markup: String) -> Self {
        ApiContent::Markup(markup)
    }
}

/// The structured serialization of one block, or of a run of list items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiDataRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    pub content: Vec<ApiContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
}

impl ApiDataRecord {
    pub fn new(
        id: impl Into<String>,
        record_type: impl Into<String>,
        content: Vec<ApiContent>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            record_type: record_type.into(),
            alignment: None,
            content,
            styles: Vec::new(),
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_styles(mut self, styles: Vec<String>) -> Self {
        self.styles = styles;
        self
    }

    /// Markup items of the content, skipping structured data.
    pub fn markup(&self) -> Vec<&str> {
        self.content
            .iter()
            .filter_map(|item| match item {
                ApiContent::Markup(markup) => Some(markup.as_str()),
                ApiContent::Data(_) => None,
            })
            .collect()
    }
}
