//! Core data structures of the raw document.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Free-form key/value data attached to entities and blocks.
pub type DataBag = Map<String, Value>;

/// Entities by key. Ordered so that re-serialized documents are stable.
pub type EntityMap = BTreeMap<String, Entity>;

/// The root of a raw document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub blocks: Vec<RawBlock>,
    pub entity_map: EntityMap,
}

impl RawDocument {
    pub fn new(blocks: Vec<RawBlock>) -> Self {
        Self {
            blocks,
            entity_map: EntityMap::new(),
        }
    }

    pub fn with_entity(mut self, key: impl Into<String>, entity: Entity) -> Self {
        self.entity_map.insert(key.into(), entity);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One structural unit of the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    pub key: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: String,
    pub depth: usize,
    pub inline_style_ranges: Vec<InlineStyleRange>,
    pub entity_ranges: Vec<EntityRange>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub data: DataBag,
}

impl RawBlock {
    pub fn new(
        key: impl Into<String>,
        block_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            block_type: block_type.into(),
            text: text.into(),
            depth: 0,
            inline_style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
            data: DataBag::new(),
        }
    }

    pub fn with_style(mut self, offset: usize, length: usize, style: impl Into<String>) -> Self {
        self.inline_style_ranges.push(InlineStyleRange {
            offset,
            length,
            style: style.into(),
        });
        self
    }

    pub fn with_entity(mut self, offset: usize, length: usize, key: impl Into<String>) -> Self {
        self.entity_ranges.push(EntityRange {
            offset,
            length,
            key: key.into(),
        });
        self
    }
}

/// A character-level style applied to a span of a block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: String,
}

impl InlineStyleRange {
    pub fn start(&self) -> usize {
        self.offset
    }

    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

/// A span of a block's text annotated with an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: String,
}

impl EntityRange {
    pub fn start(&self) -> usize {
        self.offset
    }

    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

/// A typed, data-bearing annotation (link, image, embed, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub mutability: String,
    pub data: DataBag,
}

impl Entity {
    pub fn new(entity_type: impl Into<String>, data: DataBag) -> Self {
        Self {
            entity_type: entity_type.into(),
            mutability: "MUTABLE".to_string(),
            data,
        }
    }

    /// Build an entity from a JSON object literal. Non-object values give an empty data bag.
    pub fn from_json(entity_type: impl Into<String>, data: Value) -> Self {
        let data = match data {
            Value::Object(map) => map,
            _ => DataBag::new(),
        };
        Self::new(entity_type, data)
    }

    pub fn data_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }
}
