//! Entity rendering.
//!
//! An entity annotates a range of text (a link) or an atomic block (an image, an embed) with
//! typed data. Rendering turns an entity into an open/close markup pair that is wrapped around
//! the text it covers.
//!
//! Renderers are looked up by entity type in an [`EntityTagMap`]. The map starts with one
//! renderer per [`EntityKind`]; callers can add renderers for their own entity types or
//! replace the built-in ones (see [`TemplateRenderer`]). An entity whose type has no
//! renderer produces no markup, and the text it covers is emitted as-is.

mod kind;
mod template;

pub use kind::{EntityKind, ImageRef};
pub use template::TemplateRenderer;

use crate::raw::{DataBag, Entity};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Markup placed around the text covered by an entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityMarkup {
    pub open: String,
    pub close: String,
}

impl EntityMarkup {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{inner}{}", self.open, self.close)
    }
}

/// Renders one entity type.
pub trait EntityRenderer: Send + Sync {
    /// Entity type this renderer handles (e.g. "link").
    fn entity_type(&self) -> &str;

    /// Build the markup for an entity's data bag.
    fn render(&self, data: &DataBag) -> EntityMarkup;
}

/// Entity type → renderer.
#[derive(Clone)]
pub struct EntityTagMap {
    renderers: HashMap<String, Arc<dyn EntityRenderer>>,
}

impl EntityTagMap {
    /// A map with no renderers: every entity is skipped.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer, replacing any existing one for the same type.
    pub fn register<R: EntityRenderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.entity_type().to_string(), Arc::new(renderer));
    }

    pub fn has(&self, entity_type: &str) -> bool {
        self.renderers.contains_key(entity_type)
    }

    /// Registered entity types (sorted).
    pub fn entity_types(&self) -> Vec<String> {
        let mut types: Vec<_> = self.renderers.keys().cloned().collect();
        types.sort();
        types
    }

    /// Markup for an entity, `None` when its type is not registered.
    pub fn markup_for(&self, entity: &Entity) -> Option<EntityMarkup> {
        match self.renderers.get(&entity.entity_type) {
            Some(renderer) => Some(renderer.render(&entity.data)),
            None => {
                log::debug!(
                    "no renderer for entity type '{}', skipping markup",
                    entity.entity_type
                );
                None
            }
        }
    }
}

impl Default for EntityTagMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for kind in EntityKind::ALL {
            map.register(kind);
        }
        map
    }
}

impl fmt::Debug for EntityTagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityTagMap")
            .field("entity_types", &self.entity_types())
            .finish()
    }
}
