//! GitHub-like issue search query parsing
//!
//! Understands the small subset of the GitHub search syntax the issue list
//! filters on:
//!
//! - `is:open`, `is:closed`, `is:all` select the state
//! - `is:issue`, `is:pr`, `is:pull-request` are accepted and ignored
//! - `author:<login>` or `author: <login>` selects the author
//!
//! Everything else is free text. Double or single quotes group words into a
//! single token and are removed.

use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
    All,
}

impl IssueState {
    fn from_qualifier(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// A parsed search box query. Unset fields mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

const IGNORED_KINDS: &[&str] = &["issue", "pr", "pull-request"];
const AUTHOR_PREFIX: &str = "author:";

/// Parse a search box query.
pub fn parse_issue_query(input: &str) -> IssueQuery {
    let tokens = tokenize(input);
    let mut query = IssueQuery::default();
    let mut text_parts = Vec::new();

    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        index += 1;
        let lower = token.to_lowercase();

        if let Some(value) = lower.strip_prefix("is:") {
            if let Some(state) = IssueState::from_qualifier(value) {
                query.state = Some(state);
                continue;
            }
            if IGNORED_KINDS.contains(&value) {
                continue;
            }
        }

        let is_author = token
            .get(..AUTHOR_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(AUTHOR_PREFIX));
        if is_author {
            let mut value = token[AUTHOR_PREFIX.len()..].to_string();
            if value.is_empty() && index < tokens.len() {
                value = tokens[index].clone();
                index += 1;
            }
            if !value.is_empty() {
                query.author = Some(strip_quotes(&value).to_string());
                continue;
            }
        }

        text_parts.push(strip_quotes(token).to_string());
    }

    let text = text_parts.join(" ").trim().to_string();
    if !text.is_empty() {
        query.text = Some(text);
    }
    trace!(?query, "parsed issue query");
    query
}

/// Split on spaces, keeping quoted phrases together.
///
/// An opening quote ends the current token; the closing quote does not, so
/// `a"b c"d` yields `a` and `b cd`.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            } else {
                current.push(ch);
            }
            continue;
        }
        match ch {
            '"' | '\'' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                quote = Some(ch);
            }
            ' ' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
