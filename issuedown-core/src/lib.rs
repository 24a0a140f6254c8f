//! Markdown ⇄ HTML conversion for GitHub issue bodies
//!
//!     Issue and comment bodies are stored as Markdown, while the rich-text editor that edits
//!     them works on HTML. This crate owns both directions of that bridge and the rules that
//!     keep a document stable when it travels Markdown → HTML → Markdown.
//!
//!     This is a pure lib: no I/O, no global state, no shell assumptions. Every conversion is a
//!     total function over strings; malformed input degrades to best-effort output.
//!
//! Architecture
//!
//!     HTML is the hub representation. Every format knows how to parse its own syntax into an
//!     HTML fragment and how to serialize an HTML fragment back into its syntax, so converting
//!     between two formats is always `to.serialize(from.parse(source))` (see ./registry.rs).
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── search.rs               # GitHub-like issue search query parser
//!     ├── formats
//!     │   ├── html                # Hub format + DOM helpers (html5ever)
//!     │   └── markdown
//!     │       ├── parser.rs       # Markdown → HTML (comrak)
//!     │       └── serializer.rs   # HTML → Markdown (htmd + custom handlers)
//!     └── common
//!         ├── table.rs            # HTML table → GFM pipe table
//!         └── normalize.rs        # Ordered Markdown normalization passes
//!
//! Core Algorithms
//!
//!     Markdown → HTML is delegated to comrak; the only post-processing is dropping the
//!     newline comrak leaves before `</code></pre>`.
//!
//!     HTML → Markdown is delegated to htmd. Tables go through a handler of our own that
//!     builds a fresh table model per `<table>` element, and emphasis, strikethrough and blank
//!     code blocks get small handlers too. The raw output then runs through a fixed, ordered
//!     list of textual passes (./common/normalize.rs) that reconcile list indentation widths.
//!
//! Library Choices
//!
//!     - comrak: CommonMark + GFM tables, same crate for the Markdown side everywhere.
//!     - htmd: HTML → Markdown with pluggable per-element handlers.
//!     - html5ever + markup5ever_rcdom: the DOM htmd parses into; the table handler walks it.
//!     - regex: the normalization passes are line-anchored pattern rewrites.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod search;

pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::{MarkdownOptions, RenderOptions};
pub use registry::FormatRegistry;
pub use search::{parse_issue_query, IssueQuery, IssueState};

use formats::markdown::serializer::MarkdownSerializer;
use once_cell::sync::Lazy;
use tracing::warn;

static DEFAULT_SERIALIZER: Lazy<MarkdownSerializer> =
    Lazy::new(|| MarkdownSerializer::new(&MarkdownOptions::default()));

/// Renders Markdown to an HTML fragment using the default render options.
///
/// Empty input yields an empty string. Never fails: constructs the renderer
/// cannot parse are rendered as literal text.
pub fn markdown_to_html(markdown: &str) -> String {
    formats::markdown::parser::render_html(markdown, &RenderOptions::default())
}

/// Converts an HTML fragment back to Markdown using the default rules.
///
/// Headings come out ATX style, bullets use `-`, code blocks are fenced and
/// emphasis is always written as `_x_`.
pub fn html_to_markdown(html: &str) -> String {
    DEFAULT_SERIALIZER.serialize(html).unwrap_or_else(|err| {
        warn!(%err, "html to markdown conversion failed");
        String::new()
    })
}
