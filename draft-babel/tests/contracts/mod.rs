//! Tag map completeness: every known block type, inline style and entity type has markup.

use draft_babel::tags::{CONTENT_PLACEHOLDER, QUOTE_TYPES};
use draft_babel::{BlockTagMap, EntityKind, EntityTagMap, InlineTagMap};

const BLOCK_TYPES: &[&str] = &[
    "unstyled",
    "header-one",
    "header-two",
    "header-three",
    "header-four",
    "header-five",
    "header-six",
    "code-block",
    "unordered-list-item",
    "ordered-list-item",
    "atomic",
];

#[test]
fn every_block_type_has_a_template() {
    let tags = BlockTagMap::default();
    let quote_types = QUOTE_TYPES.iter().map(|quote| quote.block_type);
    for block_type in BLOCK_TYPES.iter().copied().chain(quote_types) {
        assert!(tags.contains(block_type), "missing template for {block_type}");
    }
}

#[test]
fn every_template_has_a_content_placeholder() {
    for (block_type, template) in BlockTagMap::default().entries() {
        assert!(
            template.contains(CONTENT_PLACEHOLDER),
            "template for {block_type} has no placeholder"
        );
    }
}

#[test]
fn headers_use_their_level() {
    let tags = BlockTagMap::default();
    assert_eq!(tags.render("header-two", "x"), "<h2>x</h2>\n");
    assert_eq!(tags.render("header-six", "x"), "<h6>x</h6>\n");
}

#[test]
fn every_inline_style_has_tags() {
    let tags = InlineTagMap::default();
    for style in ["BOLD", "CODE", "ITALIC", "UNDERLINE"] {
        assert!(tags.contains(style), "missing tags for {style}");
    }
    assert_eq!(tags.tags_for("STRIKETHROUGH"), ("<span>", "</span>"));
}

#[test]
fn every_entity_kind_is_registered() {
    let tags = EntityTagMap::default();
    for kind in EntityKind::ALL {
        assert!(tags.has(kind.type_name()), "missing renderer for {kind:?}");
    }
    assert_eq!(tags.entity_types().len(), EntityKind::ALL.len());
}
