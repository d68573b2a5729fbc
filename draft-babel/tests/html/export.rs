//! Export tests for the HTML format (raw document → HTML)

use crate::common::KITCHENSINK;
use draft_babel::format::Format;
use draft_babel::formats::html::{HtmlFormat, HtmlOptions};
use draft_babel::{
    convert_to_html, BlockTagMap, Entity, EntityTagMap, RawBlock, RawDocument, TemplateRenderer,
};
use insta::assert_snapshot;
use serde_json::json;

fn html(blocks: Vec<RawBlock>) -> String {
    convert_to_html(&RawDocument::new(blocks), None, None)
}

// ============================================================================
// BASIC BLOCKS
// ============================================================================

#[test]
fn test_empty_document() {
    assert_eq!(html(vec![]), "");
}

#[test]
fn test_single_paragraph() {
    assert_eq!(html(vec![RawBlock::new("a", "unstyled", "Hi")]), "<p>Hi</p>\n");
}

#[test]
fn test_unknown_block_type_uses_default() {
    assert_eq!(
        html(vec![RawBlock::new("a", "section-break", "x")]),
        "<p>x</p>\n"
    );
}

#[test]
fn test_code_block_escapes_text() {
    assert_eq!(
        html(vec![RawBlock::new("a", "code-block", "if a < b && c")]),
        "<code>if a &lt; b &amp;&amp; c</code>\n"
    );
}

// ============================================================================
// LISTS
// ============================================================================

#[test]
fn test_unordered_list_items() {
    let output = html(vec![
        RawBlock::new("a", "unordered-list-item", "A"),
        RawBlock::new("b", "unordered-list-item", "B"),
    ]);
    assert_eq!(output, "<ul><li>A</li>\n<li>B</li>\n</ul>");
}

#[test]
fn test_list_close_precedes_following_block() {
    let output = html(vec![
        RawBlock::new("a", "unordered-list-item", "A"),
        RawBlock::new("b", "header-two", "H"),
    ]);
    let close = output.find("</ul>").expect("list should close");
    let header = output.find("<h2>").expect("header should render");
    assert!(close < header);
}

#[test]
fn test_list_between_paragraphs() {
    let output = html(vec![
        RawBlock::new("a", "unstyled", "before"),
        RawBlock::new("b", "ordered-list-item", "one"),
        RawBlock::new("c", "ordered-list-item", "two"),
        RawBlock::new("d", "unstyled", "after"),
    ]);
    assert_eq!(
        output,
        "<p>before</p>\n<ol><li>one</li>\n<li>two</li>\n</ol><p>after</p>\n"
    );
}

#[test]
fn test_deeper_items_stay_in_one_list() {
    let mut nested = RawBlock::new("b", "unordered-list-item", "B");
    nested.depth = 1;
    let output = html(vec![RawBlock::new("a", "unordered-list-item", "A"), nested]);
    assert_eq!(output.matches("<ul>").count(), 1);
    assert_eq!(output.matches("</ul>").count(), 1);
}

// ============================================================================
// ENTITIES
// ============================================================================

#[test]
fn test_link_in_paragraph() {
    let doc = RawDocument::new(vec![
        RawBlock::new("a", "unstyled", "please go now").with_entity(7, 2, "0")
    ])
    .with_entity(
        "0",
        Entity::from_json("link", json!({"url": "http://x", "text": "go"})),
    );
    let output = convert_to_html(&doc, None, None);
    assert_eq!(output, "<p>please <a href=\"http://x\">go</a> now</p>\n");
}

#[test]
fn test_atomic_slideshow() {
    let doc = RawDocument::new(vec![
        RawBlock::new("a", "atomic", " ").with_entity(0, 1, "0")
    ])
    .with_entity(
        "0",
        Entity::from_json("slideshow", json!({"images": [{"url": "1.jpg"}, {"url": "2.jpg"}]})),
    );
    assert_eq!(
        convert_to_html(&doc, None, None),
        "<div><!-- slideshow component --> <ol> <li><img src=\"1.jpg\" /></li><li><img src=\"2.jpg\" /></li> </ol></div>\n"
    );
}

#[test]
fn test_unknown_entity_renders_text_only() {
    let doc = RawDocument::new(vec![
        RawBlock::new("a", "unstyled", "@sam").with_entity(0, 4, "0")
    ])
    .with_entity("0", Entity::from_json("mention", json!({"id": 7})));
    assert_eq!(convert_to_html(&doc, None, None), "<p>@sam</p>\n");
}

#[test]
fn test_template_renderer_override() {
    let mut entity_tags = EntityTagMap::default();
    entity_tags.register(TemplateRenderer::new(
        "link",
        "<a href=\"{{url}}\" rel=\"nofollow\">",
        "</a>",
    ));
    let doc = RawDocument::new(vec![
        RawBlock::new("a", "unstyled", "go").with_entity(0, 2, "0")
    ])
    .with_entity("0", Entity::from_json("link", json!({"url": "http://x"})));
    assert_eq!(
        convert_to_html(&doc, None, Some(&entity_tags)),
        "<p><a href=\"http://x\" rel=\"nofollow\">go</a></p>\n"
    );
}

// ============================================================================
// OPTIONS AND FORMAT
// ============================================================================

#[test]
fn test_custom_block_tags_through_format() {
    let block_tags = BlockTagMap::default()
        .with("unstyled", "<p class=\"body\">%content%</p>\n")
        .unwrap();
    let format = HtmlFormat::new(HtmlOptions::default().with_block_tags(block_tags));
    let doc = RawDocument::new(vec![RawBlock::new("a", "unstyled", "x")]);
    assert_eq!(format.serialize(&doc).unwrap(), "<p class=\"body\">x</p>\n");
}

#[test]
fn test_kitchensink() {
    let html = convert_to_html(&KITCHENSINK, None, None);
    assert_snapshot!(html, @r#"
    <h1>Field notes</h1>
    <p><strong>Read</strong> the <a href="https://example.com/docs">docs</a> &amp; more</p>
    <ul><li>One</li>
    <li><em>Two</em></li>
    </ul><ol><li>First</li>
    </ol><blockquote class="quote-introquote">Quoted</blockquote>
    <div><img src="https://example.com/a.jpg"> </img></div>
    <code>x &lt; y</code>
    "#);
}

#[test]
fn test_malformed_document_is_empty() {
    let doc = RawDocument::from_json_str(r#"{"blocks": {"a": 1}, "entityMap": "x"}"#).unwrap();
    assert_eq!(convert_to_html(&doc, None, None), "");
}
