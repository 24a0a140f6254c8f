use issuedown_core::{html_to_markdown, markdown_to_html};
use regex::Regex;

fn separator_rows(markdown: &str) -> usize {
    Regex::new(r"\|\s*---\s*\|\s*---\s*\|")
        .unwrap()
        .find_iter(markdown)
        .count()
}

#[test]
fn empty_input() {
    assert_eq!(markdown_to_html(""), "");
    assert_eq!(html_to_markdown(""), "");
}

#[test]
fn bold_and_italic_text() {
    let html = markdown_to_html("**bold** and *italic* text");
    assert_eq!(html_to_markdown(&html), "**bold** and _italic_ text");
}

#[test]
fn code_block_loses_trailing_newline() {
    let html = markdown_to_html("```\ncode\n```");
    assert!(html.contains("<pre><code>code</code></pre>"));
    assert!(!html.contains("\n</code></pre>"));
}

#[test]
fn trailing_newlines_removed_from_every_code_block() {
    let html = markdown_to_html("```\none\n```\n\ntext\n\n```rust\ntwo\n```");
    assert!(html.contains("<pre><code>one</code></pre>"));
    assert!(html.contains("<pre><code class=\"language-rust\">two</code></pre>"));
}

#[test]
fn empty_code_block() {
    let html = markdown_to_html("```\n```");
    assert_eq!(html_to_markdown(&html), "");
}

#[test]
fn horizontal_rule_is_canonicalized() {
    let html = markdown_to_html("above\n\n---\n\nbelow");
    assert_eq!(html_to_markdown(&html), "above\n\n* * *\n\nbelow");
}

#[test]
fn markdown_characters_in_text_are_escaped() {
    assert_eq!(html_to_markdown("<p>2 * 3 = 6</p>"), r"2 \* 3 = 6");
    assert_eq!(html_to_markdown("<p>snake_case</p>"), r"snake\_case");
    assert_eq!(html_to_markdown("<p># not a heading</p>"), r"\# not a heading");
}

#[test]
fn raw_html_in_markdown_is_not_passed_through() {
    let html = markdown_to_html("<img src=x onerror=alert(1)>");
    assert!(!html.contains("<img"));
}

#[test]
fn multiple_tables_with_thead() {
    let html = r#"
      <table>
        <thead>
          <tr><th>Header1</th><th>Header2</th></tr>
        </thead>
        <tbody>
          <tr><td>Data1</td><td>Data2</td></tr>
        </tbody>
      </table>

      <p>Some text between tables</p>

      <table>
        <thead>
          <tr><th>Name</th><th>Age</th></tr>
        </thead>
        <tbody>
          <tr><td>Alice</td><td>25</td></tr>
        </tbody>
      </table>
    "#;

    let result = html_to_markdown(html);

    assert!(result.contains("| Header1 | Header2 |"));
    assert!(result.contains("| Data1 | Data2 |"));
    assert!(result.contains("| Name | Age |"));
    assert!(result.contains("| Alice | 25 |"));
    assert_eq!(separator_rows(&result), 2);
}

#[test]
fn multiple_tables_with_tbody_only_headers() {
    let html = r#"
      <table>
        <tbody>
          <tr><th>First</th><th>Second</th></tr>
          <tr><td>A</td><td>B</td></tr>
        </tbody>
      </table>

      <table>
        <tbody>
          <tr><th>Name</th><th>Value</th></tr>
          <tr><td>Test</td><td>123</td></tr>
        </tbody>
      </table>
    "#;

    let result = html_to_markdown(html);

    assert!(result.contains("| First | Second |"));
    assert!(result.contains("| A | B |"));
    assert!(result.contains("| Name | Value |"));
    assert!(result.contains("| Test | 123 |"));
    assert_eq!(separator_rows(&result), 2);
}

#[test]
fn adjacent_tables_without_text_do_not_merge() {
    let html = "<table><tr><th>a</th></tr></table><table><tr><th>b</th></tr></table>";
    assert_eq!(
        html_to_markdown(html),
        "| a |\n| --- |\n\n| b |\n| --- |"
    );
}
