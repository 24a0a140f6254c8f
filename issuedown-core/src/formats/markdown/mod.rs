//! Markdown format implementation
//!
//! This module implements bidirectional conversion between Markdown and HTML
//! fragments for issue and comment bodies.
//!
//! # Library Choice
//!
//! Markdown → HTML goes through `comrak` (CommonMark plus GFM tables and
//! strikethrough). HTML → Markdown is delegated to `htmd`; only the table
//! handler, the emphasis and strikethrough handlers and the normalization
//! passes are ours (see [`serializer`]).
//!
//! # Element Mapping Table
//!
//! | HTML Element                  | Markdown Output             | Notes                                   |
//! |-------------------------------|-----------------------------|-----------------------------------------|
//! | `h1`..`h6`                    | `# Title`                   | ATX by default, setext optional (h1/h2) |
//! | `p`                           | Paragraph                   | Blank line separated                    |
//! | `ul` / `ol` / `li`            | `-   item` / `1.  item`     | Marker padded to the content column     |
//! | `pre > code.language-x`       | ```` ```x ````              | Fenced by default, language preserved   |
//! | `table`                       | GFM pipe table              | Alignment from `text-align` / `align`   |
//! | `strong` / `b`                | `**bold**`                  |                                         |
//! | `em` / `i`                    | `_italic_`                  | Single canonical form                   |
//! | `del` / `s` / `strike`        | `~~struck~~`                | GFM strikethrough                       |
//! | `code`                        | `` `code` ``                | Delimiter grows past inner backticks    |
//! | `a[href]`                     | `[text](url "title")`       |                                         |
//! | `img[src]`                    | `![alt](src "title")`       |                                         |
//! | `blockquote`                  | `> quote`                   |                                         |
//! | `hr` / `br`                   | `* * *` / line break        |                                         |
//!
//! # Lossy Conversions
//!
//! - `*italic*` comes back as `_italic_`
//! - An empty fenced code block comes back as nothing at all
//! - Inline formatting inside table cells is flattened to its text
//! - Soft line breaks inside paragraphs collapse to spaces
//! - Bullet lists nested three or more levels deep come back with the
//!   innermost level indented further than it was written: `- a` / `  - b` /
//!   `    - c` returns with `- c` at eight spaces. Two levels survive as written.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use serde::Deserialize;
use serializer::MarkdownSerializer;

/// How headings are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `# Heading`
    #[default]
    Atx,
    /// Underlined with `===` / `---` for levels 1 and 2, ATX below that.
    Setext,
}

/// How `<pre><code>` blocks are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockStyle {
    /// Fenced with a language tag when one is known
    #[default]
    Fenced,
    /// Indented by four spaces, language dropped
    Indented,
}

/// Bullet written in front of unordered list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum BulletMarker {
    #[default]
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "*")]
    Asterisk,
}

impl BulletMarker {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "-" => Some(Self::Dash),
            "*" => Some(Self::Asterisk),
            _ => None,
        }
    }
}

/// Fence around code blocks when [`CodeBlockStyle::Fenced`] is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum CodeFence {
    #[default]
    #[serde(rename = "```")]
    Backticks,
    #[serde(rename = "~~~")]
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HorizontalRule {
    #[default]
    #[serde(rename = "* * *")]
    Asterisks,
    #[serde(rename = "- - -")]
    Dashes,
    #[serde(rename = "_ _ _")]
    Underscores,
}

impl HorizontalRule {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "* * *" => Some(Self::Asterisks),
            "- - -" => Some(Self::Dashes),
            "_ _ _" => Some(Self::Underscores),
            _ => None,
        }
    }
}

/// What a `<br>` turns into before its newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBreak {
    /// Two trailing spaces. The normalization passes strip them again, so
    /// the break reads as a soft one on the next render.
    #[default]
    TwoSpaces,
    /// A trailing backslash
    Backslash,
}

/// Rule configuration for HTML → Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub heading_style: HeadingStyle,
    pub bullet_list_marker: BulletMarker,
    pub code_block_style: CodeBlockStyle,
    pub fence: CodeFence,
    pub em_delimiter: String,
    pub strong_delimiter: String,
    pub horizontal_rule: HorizontalRule,
    pub line_break: LineBreak,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Atx,
            bullet_list_marker: BulletMarker::Dash,
            code_block_style: CodeBlockStyle::Fenced,
            fence: CodeFence::Backticks,
            em_delimiter: "_".to_string(),
            strong_delimiter: "**".to_string(),
            horizontal_rule: HorizontalRule::Asterisks,
            line_break: LineBreak::TwoSpaces,
        }
    }
}

/// Renderer configuration for Markdown → HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// GFM pipe tables
    pub tables: bool,
    pub strikethrough: bool,
    /// Turn bare URLs into links
    pub autolink: bool,
    /// Escape raw HTML found in the Markdown instead of passing it through
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: false,
            escape_html: true,
        }
    }
}

/// Format implementation for Markdown
///
/// The HTML → Markdown converter is built once from the rule options and
/// reused for every call.
pub struct MarkdownFormat {
    render: RenderOptions,
    serializer: MarkdownSerializer,
}

impl MarkdownFormat {
    pub fn new(render: RenderOptions, rules: MarkdownOptions) -> Self {
        Self {
            render,
            serializer: MarkdownSerializer::new(&rules),
        }
    }
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self::new(RenderOptions::default(), MarkdownOptions::default())
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with GFM tables"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<String, FormatError> {
        Ok(parser::render_html(source, &self.render))
    }

    fn serialize(&self, html: &str) -> Result<String, FormatError> {
        self.serializer.serialize(html)
    }
}
