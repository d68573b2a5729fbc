//! Serialization of atomic (media) blocks.

use super::record::{Alignment, ApiContent, ApiDataRecord};
use crate::entities::EntityKind;
use crate::raw::{EntityMap, RawBlock};
use serde_json::Value;

/// Turns an atomic block into an API record.
pub trait AtomicBlockConverter: Send + Sync {
    fn convert_block(&self, entity_map: &EntityMap, block: &RawBlock) -> ApiDataRecord;
}

/// Serializes the entity attached to the block.
///
/// The record takes the entity's type and its `alignment` (centered unless the data says
/// otherwise). Image collections contribute their images as content, an image diff only its
/// first two; every other entity contributes its whole data object. A block whose entity
/// cannot be found keeps its own type and has no content.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAtomicConverter;

impl AtomicBlockConverter for DefaultAtomicConverter {
    fn convert_block(&self, entity_map: &EntityMap, block: &RawBlock) -> ApiDataRecord {
        let entity = block
            .entity_ranges
            .first()
            .and_then(|range| entity_map.get(&range.key));
        let Some(entity) = entity else {
            log::debug!("atomic block '{}' has no entity", block.key);
            return ApiDataRecord::new(block.key.clone(), block.block_type.clone(), Vec::new());
        };

        let alignment = entity
            .data_str("alignment")
            .map(Alignment::from_name)
            .unwrap_or_default();

        let content = match EntityKind::from_type_name(&entity.entity_type) {
            Some(kind) if kind.is_image_collection() => match entity.data.get("images") {
                Some(Value::Array(images)) => images
                    .iter()
                    .take(kind.image_limit().unwrap_or(usize::MAX))
                    .cloned()
                    .map(ApiContent::Data)
                    .collect(),
                _ => Vec::new(),
            },
            _ => vec![ApiContent::Data(Value::Object(entity.data.clone()))],
        };

        ApiDataRecord::new(block.key.clone(), entity.entity_type.clone(), content)
            .with_alignment(alignment)
    }
}
