//! Shared configuration loader for the draft toolchain.
//!
//! `defaults/draft.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DraftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use draft_babel::formats::{ApiFormat, HtmlFormat, HtmlOptions, RawFormat};
use draft_babel::{BlockTagMap, EntityTagMap, FormatError, FormatRegistry, TemplateRenderer};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/draft.default.toml");

/// Top-level configuration consumed by draft applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    pub convert: ConvertConfig,
}

impl DraftConfig {
    /// A format registry whose `html` and `api` formats follow this configuration.
    pub fn registry(&self) -> Result<FormatRegistry, FormatError> {
        let mut registry = FormatRegistry::new();
        registry.register(RawFormat);
        registry.register(HtmlFormat::new(self.convert.html.to_options()?));
        registry.register(ApiFormat::default().with_pretty(self.convert.api.pretty));
        Ok(registry)
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub html: HtmlConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    #[serde(default)]
    pub block_tags: BTreeMap<String, String>,
    #[serde(default)]
    pub entity_templates: Vec<EntityTemplateConfig>,
}

/// Open/close templates for one entity type.
///
/// The type is a value rather than a table key: `config` lowercases keys,
/// which would break camelCase types such as `embeddedCode`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityTemplateConfig {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub open: String,
    #[serde(default)]
    pub close: String,
}

impl HtmlConfig {
    /// Layer the configured templates over the built-in tag maps.
    pub fn to_options(&self) -> Result<HtmlOptions, FormatError> {
        let mut block_tags = BlockTagMap::default();
        for (block_type, template) in &self.block_tags {
            block_tags.insert(block_type.as_str(), template.as_str())?;
        }

        let mut entity_tags = EntityTagMap::default();
        for template in &self.entity_templates {
            entity_tags.register(TemplateRenderer::new(
                template.entity_type.as_str(),
                template.open.as_str(),
                template.close.as_str(),
            ));
        }

        Ok(HtmlOptions::default()
            .with_block_tags(block_tags)
            .with_entity_tags(entity_tags))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub pretty: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DraftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DraftConfig, ConfigError> {
    Loader::new().build()
}
