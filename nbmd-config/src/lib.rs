//! Shared configuration loader for the nbmd toolchain.
//!
//! `defaults/nbmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`NbmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use nbmd_babel::host::Configuration;
use nbmd_babel::RecognizedLanguages;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/nbmd.default.toml");

/// Top-level configuration consumed by nbmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NbmdConfig {
    pub paste: PasteConfig,
    pub logging: LoggingConfig,
}

/// Settings read by the paste action.
#[derive(Debug, Clone, Deserialize)]
pub struct PasteConfig {
    pub recognized_languages: Vec<String>,
}

impl From<&PasteConfig> for RecognizedLanguages {
    fn from(config: &PasteConfig) -> Self {
        RecognizedLanguages::new(config.recognized_languages.iter().cloned())
    }
}

impl Configuration for NbmdConfig {
    fn recognized_languages(&self) -> Option<Vec<String>> {
        Some(self.paste.recognized_languages.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. `warn` or `nbmd_babel=debug`.
    pub level: String,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NbmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NbmdConfig, ConfigError> {
    Loader::new().build()
}
