//! HTML → Markdown serialization
//!
//! Pipeline: HTML string → `htmd` converter → normalization passes
//!
//! `htmd` does the DOM walk and the CommonMark rules. A few handlers are
//! registered on top of its defaults:
//!
//! - `table` goes through [`TableBuilder`](crate::common::table::TableBuilder)
//!   so GFM alignment and header detection follow issue conventions
//! - `em`/`i` and `strong`/`b` use the configured delimiters
//! - `del`/`s`/`strike` become `~~struck~~`, since the renderer emits `<del>`
//! - a `<pre>` holding only whitespace is dropped
//!
//! Whitespace at the edges of an inline element moves outside of it, so
//! `<em> x </em>` becomes ` _x_ ` rather than `_ x _`.

use super::{
    BulletMarker, CodeBlockStyle, CodeFence, HeadingStyle, HorizontalRule, LineBreak,
    MarkdownOptions,
};
use crate::common::normalize::normalize;
use crate::common::table::table_to_markdown;
use crate::error::FormatError;
use crate::formats::html::dom::text_content;
use htmd::element_handler::{HandlerResult, Handlers};
use htmd::options::{
    BrStyle, BulletListMarker, CodeBlockFence, CodeBlockStyle as HtmdCodeBlockStyle,
    HeadingStyle as HtmdHeadingStyle, HrStyle, Options,
};
use htmd::{Element, HtmlToMarkdown};
use tracing::{debug, trace};

/// A configured HTML → Markdown converter.
pub struct MarkdownSerializer {
    converter: HtmlToMarkdown,
}

impl MarkdownSerializer {
    pub fn new(options: &MarkdownOptions) -> Self {
        let em = options.em_delimiter.clone();
        let strong = options.strong_delimiter.clone();
        let converter = HtmlToMarkdown::builder()
            .options(htmd_options(options))
            .add_handler(
                vec!["em", "i"],
                move |handlers: &dyn Handlers, element: Element| delimited(handlers, element, &em),
            )
            .add_handler(
                vec!["strong", "b"],
                move |handlers: &dyn Handlers, element: Element| {
                    delimited(handlers, element, &strong)
                },
            )
            .add_handler(
                vec!["del", "s", "strike"],
                |handlers: &dyn Handlers, element: Element| delimited(handlers, element, "~~"),
            )
            .add_handler(vec!["pre"], |handlers: &dyn Handlers, element: Element| {
                if text_content(element.node).trim().is_empty() {
                    trace!("dropping blank code block");
                    return None;
                }
                handlers.fallback(element)
            })
            .add_handler(vec!["table"], |_: &dyn Handlers, element: Element| {
                Some(table_to_markdown(element.node).into())
            })
            .build();
        Self { converter }
    }

    /// Convert an HTML fragment to normalized Markdown.
    pub fn serialize(&self, html: &str) -> Result<String, FormatError> {
        if html.is_empty() {
            return Ok(String::new());
        }
        let raw = self
            .converter
            .convert(html)
            .map_err(|err| FormatError::SerializationError(err.to_string()))?;
        debug!(
            html_bytes = html.len(),
            markdown_bytes = raw.len(),
            "converted html to markdown"
        );
        Ok(normalize(raw.trim()))
    }
}

fn htmd_options(options: &MarkdownOptions) -> Options {
    Options {
        heading_style: match options.heading_style {
            HeadingStyle::Atx => HtmdHeadingStyle::Atx,
            HeadingStyle::Setext => HtmdHeadingStyle::Setex,
        },
        hr_style: match options.horizontal_rule {
            HorizontalRule::Asterisks => HrStyle::Asterisks,
            HorizontalRule::Dashes => HrStyle::Dashes,
            HorizontalRule::Underscores => HrStyle::Underscores,
        },
        br_style: match options.line_break {
            LineBreak::TwoSpaces => BrStyle::TwoSpaces,
            LineBreak::Backslash => BrStyle::Backslash,
        },
        code_block_style: match options.code_block_style {
            CodeBlockStyle::Fenced => HtmdCodeBlockStyle::Fenced,
            CodeBlockStyle::Indented => HtmdCodeBlockStyle::Indented,
        },
        code_block_fence: match options.fence {
            CodeFence::Backticks => CodeBlockFence::Backticks,
            CodeFence::Tildes => CodeBlockFence::Tildes,
        },
        bullet_list_marker: match options.bullet_list_marker {
            BulletMarker::Dash => BulletListMarker::Dash,
            BulletMarker::Asterisk => BulletListMarker::Asterisk,
        },
        ..Options::default()
    }
}

/// Wrap an inline element's content in `marker`, keeping edge whitespace
/// outside the delimiters. Elements with no visible content are dropped.
fn delimited(handlers: &dyn Handlers, element: Element, marker: &str) -> Option<HandlerResult> {
    let content = handlers.walk_children(element.node).content;
    let start = content.trim_start_matches(|ch: char| ch.is_ascii_whitespace());
    let inner = start.trim_end_matches(|ch: char| ch.is_ascii_whitespace());
    if inner.is_empty() {
        return None;
    }
    let leading = &content[..content.len() - start.len()];
    let trailing = &start[inner.len()..];
    Some(format!("{leading}{marker}{inner}{marker}{trailing}").into())
}
