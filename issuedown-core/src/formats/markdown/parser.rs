//! Markdown → HTML rendering
//!
//! Pipeline: Markdown string → comrak HTML → trailing code newline removed
//!
//! comrak terminates every code block body with a newline right before
//! `</code></pre>`. The editor would show that as an extra empty line, so the
//! newline is dropped from the rendered fragment.

use super::RenderOptions;
use comrak::{markdown_to_html, ComrakOptions};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static CODE_BLOCK_TRAILING_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)(<pre><code[^>]*>.*?)\n(</code></pre>)").unwrap());

/// Render Markdown to an HTML fragment.
pub fn render_html(markdown: &str, render: &RenderOptions) -> String {
    if markdown.is_empty() {
        return String::new();
    }
    let options = comrak_options(render);
    let html = markdown_to_html(markdown, &options);
    trace!(bytes = html.len(), "rendered markdown");
    CODE_BLOCK_TRAILING_NEWLINE
        .replace_all(&html, "${1}${2}")
        .into_owned()
}

fn comrak_options(render: &RenderOptions) -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = render.tables;
    options.extension.strikethrough = render.strikethrough;
    options.extension.autolink = render.autolink;
    options.render.escape = render.escape_html;
    options
}
