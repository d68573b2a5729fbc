//! Raw document model.
//!
//!     The raw form is what the rich-text editor hands over when it saves: an ordered list of
//!     blocks plus an entity map. Every conversion in this crate reads this model and nothing
//!     else; there is no access to live editor state.
//!
//!     Input is accepted permissively (see [`RawDocument::from_value`]): a document that is the
//!     wrong shape converts to nothing rather than failing.

mod from_json;
pub mod nodes;

pub use nodes::{DataBag, Entity, EntityMap, EntityRange, InlineStyleRange, RawBlock, RawDocument};
