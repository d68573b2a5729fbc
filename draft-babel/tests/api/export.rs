//! Export tests for the API data format (raw document → records)

use crate::common::KITCHENSINK;
use draft_babel::formats::api::Alignment;
use draft_babel::{convert_to_api_data, Entity, RawBlock, RawDocument};
use serde_json::json;

#[test]
fn test_empty_document() {
    assert!(convert_to_api_data(&RawDocument::default()).is_empty());
}

#[test]
fn test_kitchensink() {
    let records = convert_to_api_data(&KITCHENSINK);
    let value = serde_json::to_value(&records).unwrap();

    assert_eq!(
        value,
        json!([
            {"id": "h1", "type": "header-one", "content": ["Field notes"]},
            {
                "id": "p1",
                "type": "unstyled",
                "content": ["<strong>Read</strong> the <a href=\"https://example.com/docs\">docs</a> &amp; more"]
            },
            {"id": "l1", "type": "unordered-list-item", "content": ["One", "<em>Two</em>"]},
            {"id": "o1", "type": "ordered-list-item", "content": ["First"]},
            {"id": "q1", "type": "blockquote", "content": ["Quoted"], "styles": ["quote-introquote"]},
            {
                "id": "a1",
                "type": "image",
                "alignment": "left",
                "content": [{"alignment": "left", "url": "https://example.com/a.jpg"}]
            },
            {"id": "c1", "type": "code-block", "content": ["x &lt; y"]}
        ])
    );
}

#[test]
fn test_adjacent_quotes_stay_separate() {
    let records = convert_to_api_data(&RawDocument::new(vec![
        RawBlock::new("a", "blockquote", "one"),
        RawBlock::new("b", "forwardquote", "two"),
    ]));
    let value = serde_json::to_value(&records).unwrap();
    assert_eq!(
        value,
        json!([
            {"id": "a", "type": "blockquote", "content": ["one"], "styles": ["quote-blockquote"]},
            {"id": "b", "type": "blockquote", "content": ["two"], "styles": ["quote-forwardquote"]}
        ])
    );
}

#[test]
fn test_slideshow_content_is_images() {
    let doc = RawDocument::new(vec![
        RawBlock::new("s", "atomic", " ").with_entity(0, 1, "7")
    ])
    .with_entity(
        "7",
        Entity::from_json(
            "slideshow",
            json!({"images": [{"url": "1.jpg"}, {"url": "2.jpg"}, {"url": "3.jpg"}]}),
        ),
    );
    let records = convert_to_api_data(&doc);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type, "slideshow");
    assert_eq!(records[0].alignment, Some(Alignment::Center));
    assert_eq!(records[0].content.len(), 3);
}

#[test]
fn test_atomic_without_entity() {
    let records = convert_to_api_data(&RawDocument::new(vec![RawBlock::new(
        "m", "atomic", " ",
    )]));
    let value = serde_json::to_value(&records).unwrap();
    assert_eq!(value, json!([{"id": "m", "type": "atomic", "content": []}]));
}

#[test]
fn test_list_between_paragraphs_flushes() {
    let records = convert_to_api_data(&RawDocument::new(vec![
        RawBlock::new("a", "ordered-list-item", "1"),
        RawBlock::new("b", "unstyled", "p"),
        RawBlock::new("c", "ordered-list-item", "2"),
    ]));
    let ids: Vec<_> = records.iter().filter_map(|r| r.id.as_deref()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(records[0].markup(), vec!["1"]);
    assert_eq!(records[2].markup(), vec!["2"]);
}
