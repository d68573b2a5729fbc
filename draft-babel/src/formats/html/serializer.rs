//! HTML serialization: the block walker.

use super::HtmlOptions;
use crate::common::list_nesting::ListTracker;
use crate::entities::EntityTagMap;
use crate::inline::resolve_inline;
use crate::raw::RawDocument;
use crate::tags::{nested_tags, BlockTagMap, InlineTagMap};

/// Convert a document to an HTML fragment.
///
/// `None` tag maps fall back to the built-in ones.
pub fn convert_to_html(
    doc: &RawDocument,
    block_tags: Option<&BlockTagMap>,
    entity_tags: Option<&EntityTagMap>,
) -> String {
    let default_block_tags;
    let block_tags = match block_tags {
        Some(tags) => tags,
        None => {
            default_block_tags = BlockTagMap::default();
            &default_block_tags
        }
    };
    let default_entity_tags;
    let entity_tags = match entity_tags {
        Some(tags) => tags,
        None => {
            default_entity_tags = EntityTagMap::default();
            &default_entity_tags
        }
    };

    render_blocks(doc, block_tags, &InlineTagMap::default(), entity_tags)
}

/// Serialize a document with full options
pub fn serialize_to_html(doc: &RawDocument, options: &HtmlOptions) -> String {
    render_blocks(
        doc,
        &options.block_tags,
        &options.inline_tags,
        &options.entity_tags,
    )
}

fn render_blocks(
    doc: &RawDocument,
    block_tags: &BlockTagMap,
    inline_tags: &InlineTagMap,
    entity_tags: &EntityTagMap,
) -> String {
    let mut html = String::new();
    let mut lists = ListTracker::new();

    for block in &doc.blocks {
        let step = lists.advance(&block.block_type);
        if let Some(tags) = step.close.and_then(nested_tags) {
            html.push_str(tags.close);
        }
        if let Some(tags) = step.open.and_then(nested_tags) {
            html.push_str(tags.open);
        }

        log::trace!("rendering block '{}' ({})", block.key, block.block_type);
        let content = resolve_inline(block, &doc.entity_map, inline_tags, entity_tags);
        html.push_str(&block_tags.render(&block.block_type, &content));
    }

    if let Some(tags) = lists.finish().and_then(nested_tags) {
        html.push_str(tags.close);
    }

    html
}
