//! Markdown → HTML → Markdown must give back the exact input.

use issuedown_core::{html_to_markdown, markdown_to_html};

fn assert_roundtrip(markdown: &str) {
    let html = markdown_to_html(markdown);
    assert_eq!(html_to_markdown(&html), markdown, "html was:\n{html}");
}

#[test]
fn heading_and_paragraph() {
    assert_roundtrip("# Hello World\n\nThis is a test.");
}

#[test]
fn code_block_without_language() {
    assert_roundtrip("```\nconsole.log('Hello, world!');\n```");
}

#[test]
fn code_block_with_language() {
    assert_roundtrip("```js\nconsole.log('Hello, world!');\n```");
}

#[test]
fn ordered_list() {
    assert_roundtrip("1. Item 1\n2. Item 2\n3. Item 3");
}

#[test]
fn unordered_list() {
    assert_roundtrip("- Item 1\n- Item 2\n- Item 3");
}

#[test]
fn nested_unordered_list() {
    assert_roundtrip("- Item 1\n  - Nested Item 1\n  - Nested Item 2\n- Item 2\n  - Nested Item 3");
}

#[test]
fn nested_ordered_list() {
    assert_roundtrip(
        "1. Item 1\n   1. Nested Item 1\n   2. Nested Item 2\n2. Item 2\n   1. Nested Item 3",
    );
}

#[test]
fn mixed_nested_list() {
    assert_roundtrip(
        "1. Item 1\n   - Nested Item 1\n   - Nested Item 2\n2. Item 2\n   - Nested Item 3",
    );
}

#[test]
fn simple_table() {
    assert_roundtrip("| Name | Age |\n| --- | --- |\n| John | 25 |\n| Jane | 30 |");
}

#[test]
fn table_with_alignment() {
    assert_roundtrip(
        "| Left | Center | Right |\n| :--- | :---: | ---: |\n| L1 | C1 | R1 |\n| L2 | C2 | R2 |",
    );
}

#[test]
fn inline_code() {
    assert_roundtrip("Use `console.log()` for debugging");
}

#[test]
fn link() {
    assert_roundtrip("[GitHub](https://github.com)");
}

#[test]
fn image() {
    assert_roundtrip("![screenshot](https://example.com/shot.png)");
}

#[test]
fn blockquote() {
    assert_roundtrip("> Quoted reply");
}

#[test]
fn deeper_headings() {
    assert_roundtrip("## Summary\n\n### Details\n\nBody text.");
}

#[test]
fn ordered_list_with_start() {
    assert_roundtrip("3. Third\n4. Fourth");
}

#[test]
fn table_between_paragraphs() {
    assert_roundtrip("Before\n\n| a | b |\n| --- | --- |\n| 1 | 2 |\n\nAfter");
}

#[test]
fn two_adjacent_tables_stay_separate() {
    let markdown = "| a |\n| --- |\n| 1 |\n\nText\n\n| b |\n| --- |\n| 2 |";
    assert_roundtrip(markdown);
}

#[test]
fn strikethrough() {
    assert_roundtrip("Fixed in ~~v1~~ v2");
}
