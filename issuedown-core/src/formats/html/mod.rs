//! HTML format implementation
//!
//! HTML is the hub every other format converts through, so both directions of
//! this format are identity. [`dom`] holds the tree helpers the Markdown
//! table handler reads element nodes with.
//!
//! # Library Choice
//!
//! `htmd` parses with the `html5ever` + `markup5ever_rcdom` pair and hands
//! its handlers rcdom nodes, so the helpers here work on the same types:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Editor output is frequently a fragment (no `<html>`/`<body>`), sometimes
//! with unbalanced tags. html5ever recovers from both exactly like a browser,
//! which is what the editor itself assumed when it produced the markup.

pub mod dom;

use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for HTML fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment as produced by the rich-text editor"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }

    fn serialize(&self, html: &str) -> Result<String, FormatError> {
        Ok(html.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions_are_identity() {
        let html = "<p>Hello <em>there</em></p>";
        assert_eq!(HtmlFormat.parse(html).unwrap(), html);
        assert_eq!(HtmlFormat.serialize(html).unwrap(), html);
    }
}
