//! List shapes beyond the basic round-trip cases.

use issuedown_core::{html_to_markdown, markdown_to_html};

#[test]
fn loose_list_keeps_blank_lines() {
    let html = markdown_to_html("- a\n\n- b");
    assert_eq!(html_to_markdown(&html), "- a\n\n- b");
}

#[test]
fn bullet_with_nested_ordered_list() {
    let html = "<ul><li>Parent<ol><li>first</li><li>second</li></ol></li></ul>";
    assert_eq!(html_to_markdown(html), "- Parent\n   1. first\n   2. second");
}

#[test]
fn ordered_start_attribute_is_respected() {
    let html = "<ol start=\"7\"><li>seven</li><li>eight</li></ol>";
    assert_eq!(html_to_markdown(html), "7. seven\n8. eight");
}

#[test]
fn invalid_start_attribute_counts_from_one() {
    let html = "<ol start=\"x\"><li>one</li></ol>";
    assert_eq!(html_to_markdown(html), "1. one");
}

#[test]
fn list_item_with_two_paragraphs() {
    let html = "<ul><li><p>first</p><p>second</p></li></ul>";
    assert_eq!(html_to_markdown(html), "- first\n\n    second");
}

#[test]
fn list_followed_by_paragraph() {
    let html = markdown_to_html("- a\n- b\n\nAfter the list");
    assert_eq!(html_to_markdown(&html), "- a\n- b\n\nAfter the list");
}

#[test]
fn third_bullet_level_keeps_walked_indent() {
    // Only the first nesting level is reindented; deeper levels keep htmd's four-space steps.
    let html = markdown_to_html("- a\n  - b\n    - c");
    assert_eq!(html_to_markdown(&html), "- a\n  - b\n        - c");
}
