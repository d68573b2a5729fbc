//! CLI-specific transforms
//!
//! Inspection views of a raw document, used by `draft inspect`:
//!
//! - `blocks`: one line per block with its type, depth, and range counts
//! - `runs`: the inline run decomposition of every block, i.e. the spans of constant
//!   style and entity that the HTML and API outputs are built from
//! - `api-json`: the API data records as pretty JSON
//!
//! ## Extra Parameters
//!
//! - `block`: restrict `blocks` and `runs` to the block with this key
//!
//! Example: `draft inspect doc.json runs --extra-block 8f3ac`

use draft_babel::common::inline_runs::split_runs;
use draft_babel::{convert_to_api_data, RawBlock, RawDocument};
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["blocks", "runs", "api-json"];

/// Execute a named transform on raw document JSON.
///
/// Returns the rendered view, or an error message when the source is not JSON or the
/// transform is unknown.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let doc = RawDocument::from_json_str(source).map_err(|e| format!("Transform failed: {e}"))?;
    let selected = selected_blocks(&doc, extra_params.get("block").map(String::as_str));

    match transform_name {
        "blocks" => Ok(blocks_to_text(&selected)),
        "runs" => Ok(runs_to_text(&selected)),
        "api-json" => serde_json::to_string_pretty(&convert_to_api_data(&doc))
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn selected_blocks<'a>(doc: &'a RawDocument, key: Option<&str>) -> Vec<&'a RawBlock> {
    doc.blocks
        .iter()
        .filter(|block| key.is_none_or(|key| block.key == key))
        .collect()
}

fn blocks_to_text(blocks: &[&RawBlock]) -> String {
    let mut output = String::new();
    for block in blocks {
        output.push_str(&format!(
            "{} {} depth={} styles={} entities={} {:?}\n",
            block.key,
            block.block_type,
            block.depth,
            block.inline_style_ranges.len(),
            block.entity_ranges.len(),
            block.text,
        ));
    }
    output
}

fn runs_to_text(blocks: &[&RawBlock]) -> String {
    let mut output = String::new();
    for block in blocks {
        output.push_str(&format!("{} {}\n", block.key, block.block_type));
        for run in split_runs(block) {
            output.push_str(&format!("  {}..{} {:?}", run.start, run.end, run.text));
            if !run.styles.is_empty() {
                output.push_str(&format!(" [{}]", run.styles.join(", ")));
            }
            if let Some(entity) = run.entity {
                output.push_str(&format!(" entity={entity}"));
            }
            output.push('\n');
        }
    }
    output
}
