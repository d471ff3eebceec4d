//! Shared configuration loader for the biblia toolchain.
//!
//! `defaults/biblia.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BibliaConfig`].

use biblia_babel::formats::html::HtmlTheme;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/biblia.default.toml");

/// Top-level configuration consumed by biblia applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BibliaConfig {
    pub corpus: CorpusConfig,
    pub inspect: InspectConfig,
    pub convert: ConvertConfig,
}

/// Where the corpus text and its range index live.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    pub text: PathBuf,
    pub index: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub hide_verses: bool,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub theme: String,
    pub font_size: u32,
    #[serde(default)]
    pub custom_css: Option<PathBuf>,
}

impl HtmlConfig {
    /// The configured theme. Unknown names fall back to light.
    pub fn theme(&self) -> HtmlTheme {
        HtmlTheme::from_name(&self.theme)
    }
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
        tracing::debug!(path = %path.as_ref().display(), "Layering config file");
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BibliaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BibliaConfig, ConfigError> {
    Loader::new().build()
}
