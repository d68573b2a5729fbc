//! Property tests for the HTML block walker and inline resolver.

use draft_babel::inline::resolve_inline;
use draft_babel::{convert_to_html, EntityTagMap, InlineTagMap, RawBlock, RawDocument};
use proptest::prelude::*;

const BLOCK_TYPES: &[&str] = &[
    "unstyled",
    "header-one",
    "unordered-list-item",
    "ordered-list-item",
    "blockquote",
    "code-block",
];

const STYLES: &[&str] = &["BOLD", "ITALIC", "CODE", "UNDERLINE", "STRIKETHROUGH"];

fn strip_tags(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

fn resolve(block: &RawBlock) -> String {
    resolve_inline(
        block,
        &Default::default(),
        &InlineTagMap::default(),
        &EntityTagMap::default(),
    )
}

proptest! {
    #[test]
    fn unstyled_text_is_unchanged(text in "[a-zA-Z0-9 ,.!?]{0,40}") {
        let block = RawBlock::new("k", "unstyled", text.clone());
        prop_assert_eq!(resolve(&block), text);
    }

    #[test]
    fn styles_never_change_the_text(
        text in "[a-z ]{0,30}",
        ranges in prop::collection::vec((0usize..40, 0usize..40, 0usize..STYLES.len()), 0..6),
    ) {
        let mut block = RawBlock::new("k", "unstyled", text.clone());
        for (offset, length, style) in ranges {
            block = block.with_style(offset, length, STYLES[style]);
        }
        prop_assert_eq!(strip_tags(&resolve(&block)), text);
    }

    #[test]
    fn list_tags_are_balanced_and_flat(
        types in prop::collection::vec(0usize..BLOCK_TYPES.len(), 0..20),
    ) {
        let blocks = types
            .iter()
            .enumerate()
            .map(|(i, t)| RawBlock::new(i.to_string(), BLOCK_TYPES[*t], "x"))
            .collect();
        let html = convert_to_html(&RawDocument::new(blocks), None, None);

        let mut depth = 0i32;
        let mut rest = html.as_str();
        while let Some(pos) = rest.find('<') {
            rest = &rest[pos..];
            if rest.starts_with("<ul>") || rest.starts_with("<ol>") {
                depth += 1;
            } else if rest.starts_with("</ul>") || rest.starts_with("</ol>") {
                depth -= 1;
            }
            prop_assert!((0..=1).contains(&depth));
            rest = &rest[1..];
        }
        prop_assert_eq!(depth, 0);
    }
}
