//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name, and any two formats can
//! be bridged through their HTML representation.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{HtmlFormat, MarkdownFormat, MarkdownOptions, RenderOptions};
use std::collections::HashMap;
use tracing::debug;

/// Registry of document formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let html = registry.convert("# Title", "markdown", "html")?;
/// assert_eq!(html, "<h1>Title</h1>\n");
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Parse source text into HTML using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize HTML using the specified format
    pub fn serialize(&self, html: &str, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize(html)
    }

    /// Convert source text from one format to another through HTML
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, FormatError> {
        debug!(from, to, bytes = source.len(), "converting");
        let html = self.parse(source, from)?;
        self.serialize(&html, to)
    }

    /// Create a registry with the built-in formats using default options
    pub fn with_defaults() -> Self {
        Self::with_options(RenderOptions::default(), MarkdownOptions::default())
    }

    /// Create a registry with the built-in formats, Markdown configured by `render` and `rules`
    pub fn with_options(render: RenderOptions, rules: MarkdownOptions) -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormat);
        registry.register(MarkdownFormat::new(render, rules));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
