//! Decomposition of a block's text into uniformly styled runs.
//!
//! Style ranges in the raw document may overlap freely. Splitting the text at every range
//! boundary gives segments over which the set of active styles and the active entity do not
//! change; neighbouring segments with identical attributes are merged back together.

use crate::raw::RawBlock;
use std::collections::BTreeSet;
use std::iter;

/// A maximal stretch of text with one style set and at most one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun<'a> {
    /// Start offset in characters.
    pub start: usize,
    /// End offset in characters (exclusive).
    pub end: usize,
    pub text: &'a str,
    /// Active styles, sorted and without duplicates.
    pub styles: Vec<&'a str>,
    /// Key of the entity covering the run.
    pub entity: Option<&'a str>,
}

/// Split a block's text into runs, in text order. Ranges reaching past the end of the text
/// are clipped; empty text yields no runs.
pub fn split_runs(block: &RawBlock) -> Vec<InlineRun<'_>> {
    let text = block.text.as_str();
    let byte_offsets: Vec<usize> = text
        .char_indices()
        .map(|(index, _)| index)
        .chain(iter::once(text.len()))
        .collect();
    let len = byte_offsets.len() - 1;
    if len == 0 {
        return Vec::new();
    }

    let mut boundaries = BTreeSet::from([0, len]);
    for range in &block.inline_style_ranges {
        boundaries.insert(range.start().min(len));
        boundaries.insert(range.end().min(len));
    }
    for range in &block.entity_ranges {
        boundaries.insert(range.start().min(len));
        boundaries.insert(range.end().min(len));
    }
    let boundaries: Vec<usize> = boundaries.into_iter().collect();

    let mut runs: Vec<InlineRun<'_>> = Vec::new();
    for window in boundaries.windows(2) {
        let (start, end) = (window[0], window[1]);

        let styles: Vec<&str> = block
            .inline_style_ranges
            .iter()
            .filter(|range| range.start() <= start && end <= range.end())
            .map(|range| range.style.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let entity = block
            .entity_ranges
            .iter()
            .find(|range| range.start() <= start && end <= range.end())
            .map(|range| range.key.as_str());

        match runs.last_mut() {
            Some(last) if last.styles == styles && last.entity == entity => {
                last.end = end;
                last.text = &text[byte_offsets[last.start]..byte_offsets[end]];
            }
            _ => runs.push(InlineRun {
                start,
                end,
                text: &text[byte_offsets[start]..byte_offsets[end]],
                styles,
                entity,
            }),
        }
    }

    runs
}
