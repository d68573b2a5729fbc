//! Property tests for list grouping in API data.

use draft_babel::tags::is_list_item;
use draft_babel::{convert_to_api_data, RawBlock, RawDocument};
use proptest::prelude::*;

const BLOCK_TYPES: &[&str] = &[
    "unstyled",
    "header-three",
    "unordered-list-item",
    "ordered-list-item",
    "introquote",
    "code-block",
];

fn list_runs(types: &[&str]) -> usize {
    let mut runs = 0;
    let mut previous: Option<&str> = None;
    for block_type in types {
        if is_list_item(block_type) && previous != Some(*block_type) {
            runs += 1;
        }
        previous = Some(block_type);
    }
    runs
}

proptest! {
    #[test]
    fn one_record_per_block_or_list_run(
        picks in prop::collection::vec(0usize..BLOCK_TYPES.len(), 0..25),
    ) {
        let types: Vec<&str> = picks.iter().map(|i| BLOCK_TYPES[*i]).collect();
        let blocks = types
            .iter()
            .enumerate()
            .map(|(i, t)| RawBlock::new(format!("k{i}"), *t, "x"))
            .collect();
        let records = convert_to_api_data(&RawDocument::new(blocks));

        let list_blocks = types.iter().filter(|t| is_list_item(t)).count();
        prop_assert_eq!(records.len(), types.len() - list_blocks + list_runs(&types));

        let list_items: usize = records
            .iter()
            .filter(|r| is_list_item(&r.record_type))
            .map(|r| r.content.len())
            .sum();
        prop_assert_eq!(list_items, list_blocks);
    }
}
