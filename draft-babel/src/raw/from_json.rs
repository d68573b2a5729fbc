//! Permissive construction of a [`RawDocument`] from JSON.
//!
//! Anything that does not have the expected shape is dropped instead of reported: a wrong
//! `blocks` value yields no blocks, a wrong `entityMap` yields no entities, and a block with
//! a malformed range keeps its other ranges.

use super::nodes::{DataBag, Entity, EntityMap, EntityRange, InlineStyleRange, RawBlock, RawDocument};
use crate::error::FormatError;
use serde_json::Value;

const DEFAULT_BLOCK_TYPE: &str = "unstyled";

impl RawDocument {
    /// Build a document from any JSON value. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let blocks = value
            .get("blocks")
            .and_then(Value::as_array)
            .map(|blocks| blocks.iter().filter_map(block_from_value).collect())
            .unwrap_or_default();

        let entity_map = value
            .get("entityMap")
            .and_then(Value::as_object)
            .map(|entities| {
                entities
                    .iter()
                    .filter_map(|(key, entity)| {
                        entity_from_value(entity).map(|entity| (key.clone(), entity))
                    })
                    .collect()
            })
            .unwrap_or_else(EntityMap::new);

        RawDocument { blocks, entity_map }
    }

    /// Parse JSON text. Only text that is not JSON at all is an error.
    pub fn from_json_str(source: &str) -> Result<Self, FormatError> {
        let value: Value = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("invalid JSON: {e}")))?;
        Ok(Self::from_value(&value))
    }
}

fn block_from_value(value: &Value) -> Option<RawBlock> {
    let object = value.as_object()?;

    let inline_style_ranges = object
        .get("inlineStyleRanges")
        .and_then(Value::as_array)
        .map(|ranges| ranges.iter().filter_map(style_range_from_value).collect())
        .unwrap_or_default();

    let entity_ranges = object
        .get("entityRanges")
        .and_then(Value::as_array)
        .map(|ranges| ranges.iter().filter_map(entity_range_from_value).collect())
        .unwrap_or_default();

    Some(RawBlock {
        key: object.get("key").and_then(key_from_value).unwrap_or_default(),
        block_type: object
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_BLOCK_TYPE)
            .to_string(),
        text: object
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        depth: object.get("depth").and_then(usize_from_value).unwrap_or(0),
        inline_style_ranges,
        entity_ranges,
        data: object
            .get("data")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
    })
}

fn style_range_from_value(value: &Value) -> Option<InlineStyleRange> {
    Some(InlineStyleRange {
        offset: value.get("offset").and_then(usize_from_value)?,
        length: value.get("length").and_then(usize_from_value)?,
        style: value.get("style").and_then(Value::as_str)?.to_string(),
    })
}

fn entity_range_from_value(value: &Value) -> Option<EntityRange> {
    Some(EntityRange {
        offset: value.get("offset").and_then(usize_from_value)?,
        length: value.get("length").and_then(usize_from_value)?,
        key: value.get("key").and_then(key_from_value)?,
    })
}

fn entity_from_value(value: &Value) -> Option<Entity> {
    let object = value.as_object()?;
    Some(Entity {
        entity_type: object
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        mutability: object
            .get("mutability")
            .and_then(Value::as_str)
            .unwrap_or("MUTABLE")
            .to_string(),
        data: object
            .get("data")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_else(DataBag::new),
    })
}

/// Entity keys are strings in the entity map but often numbers in entity ranges.
fn key_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(key) => Some(key.clone()),
        Value::Number(key) => Some(key.to_string()),
        _ => None,
    }
}

fn usize_from_value(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|n| usize::try_from(n).ok())
}
