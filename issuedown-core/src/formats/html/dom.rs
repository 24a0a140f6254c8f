//! DOM helpers over the html5ever reference-counted tree
//!
//! `htmd` hands element handlers an rcdom [`Handle`]; these read-only helpers
//! are what the table handler uses to walk it. [`parse_fragment`] builds the
//! same kind of tree directly, wrapped in a [`HtmlTree`] that keeps it alive.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

/// A parsed HTML fragment.
///
/// Keeps the owning [`RcDom`] alive: rcdom tears down every descendant when
/// the document node drops, so a bare `<body>` handle must not outlive it.
pub struct HtmlTree {
    _dom: RcDom,
    root: Handle,
}

impl HtmlTree {
    /// The element conversion starts from (`<body>`, or the document if absent).
    pub fn root(&self) -> &Handle {
        &self.root
    }
}

/// Parse an HTML fragment into a tree rooted at its `<body>`.
pub fn parse_fragment(html: &str) -> HtmlTree {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let root = find_element(&dom.document, "body").unwrap_or_else(|| dom.document.clone());
    HtmlTree { _dom: dom, root }
}

/// Depth-first search for the first element with the given local name.
pub fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if tag_name(node) == Some(tag) {
        return Some(node.clone());
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

/// Lowercase local name of an element node, `None` for anything else.
pub fn tag_name(node: &Node) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// Value of an attribute on an element node.
pub fn attr(node: &Node, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attribute| &*attribute.name.local == name)
            .map(|attribute| attribute.value.to_string()),
        _ => None,
    }
}

/// Concatenated text of every descendant text node.
pub fn text_content(node: &Node) -> String {
    let mut output = String::new();
    collect_text(node, &mut output);
    output
}

fn collect_text(node: &Node, output: &mut String) {
    match &node.data {
        NodeData::Text { contents } => output.push_str(&contents.borrow()),
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, output);
            }
        }
    }
}

/// Child nodes that are elements, in document order.
pub fn element_children(node: &Node) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Element children with the given tag name.
pub fn children_named(node: &Node, tag: &str) -> Vec<Handle> {
    element_children(node)
        .into_iter()
        .filter(|child| tag_name(child) == Some(tag))
        .collect()
}
