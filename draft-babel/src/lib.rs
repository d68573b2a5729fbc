//! Conversion of raw rich-text editor documents
//!
//!     A rich-text editor saves its content as a raw document: an ordered list of blocks
//!     (paragraphs, headers, list items, quotes, atomic media placeholders), each with its
//!     text, character-level style ranges and entity ranges, plus an entity map holding the
//!     typed data of links, images, embeds and so on. This crate turns that raw document into
//!     the two outputs a content field stores next to it:
//!
//!     - HTML, for direct rendering ([`convert_to_html`])
//!     - API data, a list of structured records for API consumers ([`convert_to_api_data`])
//!
//!     This is a pure lib: no I/O, no printing, no environment. The editor widget itself
//!     (selection, undo, toolbars) is not part of it; the raw document is the only input.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # FormatError
//!     ├── raw                     # Raw document model and permissive JSON loading
//!     ├── tags.rs                 # Block, inline and list tag maps, quote registry
//!     ├── entities                # Entity kinds, renderer trait and registry
//!     ├── common
//!     │   ├── inline_runs.rs      # Text → uniformly styled runs
//!     │   └── list_nesting.rs     # List open/close tracking shared by both outputs
//!     ├── inline.rs               # Runs → inline markup
//!     ├── format.rs               # Format trait
//!     ├── registry.rs             # FormatRegistry
//!     └── formats
//!         ├── raw                 # JSON in/out
//!         ├── html                # Block walker
//!         └── api                 # API data builder
//!
//! Core Algorithms
//!
//!     Both outputs walk the blocks once, in order. The list tracker (common/list_nesting.rs)
//!     decides where runs of list items begin and end; the HTML walker turns that into
//!     `<ul>`/`<ol>` tags and the API builder into grouped records. Per block, the inline
//!     resolver splits the text into runs over which styles and entity do not change
//!     (common/inline_runs.rs) and wraps each run in entity markup and then style tags.
//!
//! Permissive Input
//!
//!     Conversions never fail. A document of the wrong shape converts to nothing, unknown
//!     block types and styles use the `default` tag map entries, and entities of unknown type
//!     render no markup. Errors exist only at the edges: JSON text that does not parse,
//!     format lookups and caller-supplied templates.
//!
//! Thread Safety
//!
//!     Every conversion borrows its input immutably and keeps its state local, and the tag maps
//!     are `Send + Sync`, so documents can be converted from any number of threads.

pub mod common;
pub mod entities;
pub mod error;
pub mod format;
pub mod formats;
pub mod inline;
pub mod raw;
pub mod registry;
pub mod tags;

pub use entities::{EntityKind, EntityMarkup, EntityRenderer, EntityTagMap, TemplateRenderer};
pub use error::FormatError;
pub use format::Format;
pub use formats::api::{convert_to_api_data, ApiContent, ApiDataBuilder, ApiDataRecord};
pub use formats::html::convert_to_html;
pub use raw::{Entity, RawBlock, RawDocument};
pub use registry::FormatRegistry;
pub use tags::{BlockTagMap, InlineTagMap};
