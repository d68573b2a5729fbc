//! Inline style resolution: a block's text, styles and entities rendered as markup.

use crate::common::inline_runs::split_runs;
use crate::entities::EntityTagMap;
use crate::raw::{EntityMap, RawBlock};
use crate::tags::InlineTagMap;
use html_escape::encode_text;

/// Render the inline content of a block.
///
/// Each run's text is escaped, wrapped in the markup of the entity covering it (if that
/// entity exists and its type has a renderer), then wrapped in its style tags with the first
/// style in sorted order outermost.
pub fn resolve_inline(
    block: &RawBlock,
    entity_map: &EntityMap,
    inline_tags: &InlineTagMap,
    entity_tags: &EntityTagMap,
) -> String {
    let mut output = String::with_capacity(block.text.len());

    for run in split_runs(block) {
        let mut markup = encode_text(run.text).into_owned();

        if let Some(key) = run.entity {
            match entity_map.get(key) {
                Some(entity) => {
                    if let Some(entity_markup) = entity_tags.markup_for(entity) {
                        markup = entity_markup.wrap(&markup);
                    }
                }
                None => log::debug!("block '{}' references unknown entity '{key}'", block.key),
            }
        }

        for style in run.styles.iter().rev() {
            let (open, close) = inline_tags.tags_for(style);
            markup = format!("{open}{markup}{close}");
        }

        output.push_str(&markup);
    }

    output
}
