//! Shared configuration loader for the issuedown toolchain.
//!
//! `defaults/issuedown.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`IssuedownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use issuedown_core::formats::{
    BulletMarker, CodeBlockStyle, CodeFence, HeadingStyle, HorizontalRule, LineBreak,
    MarkdownOptions, RenderOptions,
};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/issuedown.default.toml");

/// Top-level configuration consumed by issuedown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuedownConfig {
    pub markdown: MarkdownRulesConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs exposed by the HTML → Markdown converter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownRulesConfig {
    pub heading_style: HeadingStyle,
    pub bullet_list_marker: BulletMarker,
    pub code_block_style: CodeBlockStyle,
    pub fence: CodeFence,
    pub em_delimiter: String,
    pub strong_delimiter: String,
    pub horizontal_rule: HorizontalRule,
    pub line_break: LineBreak,
}

impl From<MarkdownRulesConfig> for MarkdownOptions {
    fn from(config: MarkdownRulesConfig) -> Self {
        MarkdownOptions {
            heading_style: config.heading_style,
            bullet_list_marker: config.bullet_list_marker,
            code_block_style: config.code_block_style,
            fence: config.fence,
            em_delimiter: config.em_delimiter,
            strong_delimiter: config.strong_delimiter,
            horizontal_rule: config.horizontal_rule,
            line_break: config.line_break,
        }
    }
}

impl From<&MarkdownRulesConfig> for MarkdownOptions {
    fn from(config: &MarkdownRulesConfig) -> Self {
        config.clone().into()
    }
}

/// Markdown → HTML renderer switches.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RenderConfig {
    pub tables: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub escape_html: bool,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            tables: config.tables,
            strikethrough: config.strikethrough,
            autolink: config.autolink,
            escape_html: config.escape_html,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
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
    pub fn build(self) -> Result<IssuedownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<IssuedownConfig, ConfigError> {
    Loader::new().build()
}
