//! API data assembly.

use super::atomic::{AtomicBlockConverter, DefaultAtomicConverter};
use super::record::{ApiContent, ApiDataRecord};
use crate::common::list_nesting::ListTracker;
use crate::entities::EntityTagMap;
use crate::inline::resolve_inline;
use crate::raw::{EntityMap, RawBlock, RawDocument};
use crate::tags::{is_atomic, is_list_item, quote_style, InlineTagMap, CANONICAL_QUOTE_TYPE};

/// Convert a document to API data records with the built-in tag maps.
pub fn convert_to_api_data(doc: &RawDocument) -> Vec<ApiDataRecord> {
    ApiDataBuilder::default().build(doc)
}

/// Builds API data records from a raw document.
pub struct ApiDataBuilder {
    inline_tags: InlineTagMap,
    entity_tags: EntityTagMap,
    atomic: Box<dyn AtomicBlockConverter>,
}

impl Default for ApiDataBuilder {
    fn default() -> Self {
        Self {
            inline_tags: InlineTagMap::default(),
            entity_tags: EntityTagMap::default(),
            atomic: Box::new(DefaultAtomicConverter),
        }
    }
}

/// List items collected until their run ends.
struct ListRun<'a> {
    id: &'a str,
    list_type: &'a str,
    items: Vec<ApiContent>,
}

impl ListRun<'_> {
    fn into_record(self) -> ApiDataRecord {
        ApiDataRecord::new(self.id, self.list_type, self.items)
    }
}

impl ApiDataBuilder {
    pub fn with_atomic_converter<C: AtomicBlockConverter + 'static>(mut self, converter: C) -> Self {
        self.atomic = Box::new(converter);
        self
    }

    pub fn with_entity_tags(mut self, entity_tags: EntityTagMap) -> Self {
        self.entity_tags = entity_tags;
        self
    }

    pub fn build(&self, doc: &RawDocument) -> Vec<ApiDataRecord> {
        let mut records = Vec::new();
        let mut lists = ListTracker::new();
        let mut pending: Option<ListRun<'_>> = None;

        for block in &doc.blocks {
            let step = lists.advance(&block.block_type);
            if step.close.is_some() {
                if let Some(run) = pending.take() {
                    records.push(run.into_record());
                }
            }
            if let Some(list_type) = step.open {
                pending = Some(ListRun {
                    id: &block.key,
                    list_type,
                    items: Vec::new(),
                });
            }

            if is_list_item(&block.block_type) {
                let markup = self.resolve(block, &doc.entity_map);
                if let Some(run) = pending.as_mut() {
                    run.items.push(markup.into());
                }
                continue;
            }

            records.push(self.convert_block(block, &doc.entity_map));
        }

        if let Some(run) = pending.take() {
            records.push(run.into_record());
        }

        records
    }

    fn convert_block(&self, block: &RawBlock, entity_map: &EntityMap) -> ApiDataRecord {
        log::trace!("building record for block '{}' ({})", block.key, block.block_type);

        if is_atomic(&block.block_type) {
            return self.atomic.convert_block(entity_map, block);
        }

        let content = vec![self.resolve(block, entity_map).into()];
        match quote_style(&block.block_type) {
            Some(style) => ApiDataRecord::new(block.key.clone(), CANONICAL_QUOTE_TYPE, content)
                .with_styles(vec![style.to_string()]),
            None => ApiDataRecord::new(block.key.clone(), block.block_type.clone(), content),
        }
    }

    fn resolve(&self, block: &RawBlock, entity_map: &EntityMap) -> String {
        resolve_inline(block, entity_map, &self.inline_tags, &self.entity_tags)
    }
}
