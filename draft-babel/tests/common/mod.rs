//! Shared fixtures, plus tests for the run decomposition on real documents.

use draft_babel::common::inline_runs::split_runs;
use draft_babel::RawDocument;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> RawDocument {
    let source = fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"));
    RawDocument::from_json_str(&source).expect("fixture should be valid JSON")
}

/// The kitchen-sink fixture, parsed once and shared between tests.
pub static KITCHENSINK: Lazy<RawDocument> = Lazy::new(|| load_fixture("kitchensink.json"));

#[test]
fn test_kitchensink_loads() {
    let doc = &*KITCHENSINK;
    assert_eq!(doc.blocks.len(), 8);
    assert_eq!(doc.entity_map.len(), 2);
    assert_eq!(doc.blocks[1].entity_ranges[0].key, "0");
}

#[test]
fn test_runs_of_styled_paragraph() {
    let runs = split_runs(&KITCHENSINK.blocks[1]);
    let texts: Vec<_> = runs.iter().map(|run| run.text).collect();
    assert_eq!(texts, vec!["Read", " the ", "docs", " & more"]);
    assert_eq!(runs[0].styles, vec!["BOLD"]);
    assert_eq!(runs[2].entity, Some("0"));
}
