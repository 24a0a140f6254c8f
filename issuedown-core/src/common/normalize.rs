//! Markdown normalization passes
//!
//! `htmd` writes list items with a marker padded to four columns
//! (`-   item`, `1.  item`) and indents nested content by the same four
//! columns. Issue bodies written by hand use one space after the marker and
//! indent nested lists to the parent's content column, two spaces under `-`
//! and three under `1.`. These passes rewrite the former into the latter.
//!
//! Every pass is line-scoped: a pattern never looks past the end of its line,
//! so running the whole pipeline twice gives the same text as running it once.
//!
//! Fenced code is not treated specially; a code line that looks like a list
//! item is rewritten like one.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// A named, ordered textual rewrite.
pub struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// All passes, in the order they run.
pub const PASSES: &[Pass] = &[
    Pass {
        name: "strip trailing whitespace",
        apply: strip_trailing_whitespace,
    },
    Pass {
        name: "bullet indent 4 → 2",
        apply: reindent_nested_bullets,
    },
    Pass {
        name: "ordered indent 4 → 3",
        apply: reindent_nested_ordered,
    },
    Pass {
        name: "single space after bullet",
        apply: tighten_bullet_markers,
    },
    Pass {
        name: "single space after number",
        apply: tighten_ordered_markers,
    },
    Pass {
        name: "bullets under ordered items",
        apply: reconcile_mixed_lists,
    },
];

static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());
static NESTED_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^ {4}(-[ \t])").unwrap());
static NESTED_ORDERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^ {4}([0-9]+\.[ \t])").unwrap());
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([ \t]*)-[ \t]+").unwrap());
static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)([0-9]+)\.[ \t]+").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[ \t]").unwrap());
static TWO_SPACE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {2}-[ \t]").unwrap());

fn strip_trailing_whitespace(markdown: &str) -> String {
    TRAILING_WHITESPACE.replace_all(markdown, "").into_owned()
}

fn reindent_nested_bullets(markdown: &str) -> String {
    NESTED_BULLET.replace_all(markdown, "  ${1}").into_owned()
}

fn reindent_nested_ordered(markdown: &str) -> String {
    NESTED_ORDERED.replace_all(markdown, "   ${1}").into_owned()
}

fn tighten_bullet_markers(markdown: &str) -> String {
    BULLET_MARKER.replace_all(markdown, "${1}- ").into_owned()
}

fn tighten_ordered_markers(markdown: &str) -> String {
    ORDERED_MARKER.replace_all(markdown, "${1}${2}. ").into_owned()
}

/// Bullets nested directly under a top-level ordered item sit at column 2
/// after the earlier passes; the item's content starts at column 3.
///
/// The ordered context starts at a `N. ` line and ends at a blank line or at
/// any line that does not start with whitespace.
fn reconcile_mixed_lists(markdown: &str) -> String {
    let mut in_ordered = false;
    markdown
        .split('\n')
        .map(|line| {
            if ORDERED_ITEM.is_match(line) {
                in_ordered = true;
            } else if line.trim().is_empty() || !line.starts_with(char::is_whitespace) {
                in_ordered = false;
            }
            if in_ordered && TWO_SPACE_BULLET.is_match(line) {
                format!(" {line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run every pass over `markdown`, in order.
pub fn normalize(markdown: &str) -> String {
    PASSES.iter().fold(markdown.to_string(), |text, pass| {
        let next = (pass.apply)(&text);
        if next != text {
            trace!(pass = pass.name, "normalization pass changed output");
        }
        next
    })
}
