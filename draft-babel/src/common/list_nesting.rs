//! Tracking of the list a run of list-item blocks belongs to.
//!
//! Both outputs walk the blocks in order and need to know when a run of list items starts
//! and ends: the HTML walker emits `<ul>`/`<ol>` and their closing tags, the API builder
//! starts and flushes one grouped record per run.
//!
//! Only one list is ever open. A block of any other type (a non-list block, or a list item
//! of the other list type) closes it. Block `depth` is not consulted, so a deeper item of the
//! same type continues the current list instead of opening a nested one.

use crate::tags::is_list_item;

/// What happens at a block boundary. When both are set, `close` comes first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStep<'a> {
    /// List type closed before the block.
    pub close: Option<&'a str>,
    /// List type opened by the block.
    pub open: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct ListTracker<'a> {
    open: Option<&'a str>,
}

impl<'a> ListTracker<'a> {
    pub fn new() -> Self {
        Self { open: None }
    }

    /// Move past a block of `block_type`.
    pub fn advance(&mut self, block_type: &'a str) -> ListStep<'a> {
        let mut step = ListStep::default();

        if let Some(open) = self.open {
            if open != block_type {
                step.close = Some(open);
                self.open = None;
            }
        }

        if self.open.is_none() && is_list_item(block_type) {
            step.open = Some(block_type);
            self.open = Some(block_type);
        }

        step
    }

    /// End of the document: the list still open, if any.
    pub fn finish(&mut self) -> Option<&'a str> {
        self.open.take()
    }
}
