//! Format trait definition
//!
//! Every format converts through HTML: `parse` turns the format's own syntax
//! into an HTML fragment and `serialize` turns an HTML fragment back into the
//! format's syntax. HTML itself is a format whose two directions are identity.

use crate::error::FormatError;

/// Trait for document formats
///
/// Implementors provide conversion between their source text and the HTML hub
/// representation. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Format for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, html: &str) -> Result<String, FormatError> {
///         Ok(html.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → HTML)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (HTML → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into an HTML fragment
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize an HTML fragment into this format's source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _html: &str) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
