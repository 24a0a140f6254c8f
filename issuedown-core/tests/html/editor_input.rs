use insta::assert_snapshot;
use issuedown_core::html_to_markdown;

#[test]
fn issue_body_from_editor() {
    let html = concat!(
        "<h2>Summary</h2>",
        "<p>The <code>sync</code> job fails on <strong>large</strong> repos.</p>",
        "<h3>Steps</h3>",
        "<ol><li>Clone</li><li>Run <code>sync --all</code></li></ol>",
        "<pre><code class=\"language-sh\">sync --all\n</code></pre>",
        "<p>See <a href=\"https://example.com/logs\">logs</a>.</p>",
    );

    assert_snapshot!(html_to_markdown(html), @r###"
    ## Summary

    The `sync` job fails on **large** repos.

    ### Steps

    1. Clone
    2. Run `sync --all`

    ```sh
    sync --all
    ```

    See [logs](https://example.com/logs).
    "###);
}

#[test]
fn paragraphs_inside_list_items() {
    let html = "<p>Steps:</p><ol><li><p>Open app</p></li><li><p>Click <strong>Save</strong></p></li></ol>";

    assert_snapshot!(html_to_markdown(html), @r###"
    Steps:

    1. Open app

    2. Click **Save**
    "###);
}

#[test]
fn hard_breaks() {
    assert_eq!(
        html_to_markdown("<p>Line one<br>Line two</p>"),
        "Line one\nLine two"
    );
}

#[test]
fn indented_markup_collapses_to_single_spaces() {
    let html = "<div>\n  <p>\n    Hello\n    <em>world</em>\n  </p>\n</div>";
    assert_eq!(html_to_markdown(html), "Hello _world_");
}

#[test]
fn blank_inline_elements_are_dropped() {
    assert_eq!(html_to_markdown("<p><em> </em>text</p>"), "text");
}

#[test]
fn aligned_table_from_inline_styles() {
    let html = concat!(
        "<table><tbody>",
        "<tr><th style=\"text-align: center\">Status</th><th style=\"text-align:right\">Count</th></tr>",
        "<tr><td>open</td><td>12</td></tr>",
        "</tbody></table>",
    );

    assert_snapshot!(html_to_markdown(html), @r###"
    | Status | Count |
    | :---: | ---: |
    | open | 12 |
    "###);
}

#[test]
fn pipes_in_cells_are_escaped() {
    let html = "<table><tr><th>expr</th></tr><tr><td>a | b</td></tr></table>";
    assert_eq!(html_to_markdown(html), "| expr |\n| --- |\n| a \\| b |");
}

#[test]
fn link_with_title() {
    let html = "<p><a href=\"https://example.com/a_(b)\" title=\"Docs\">docs</a></p>";
    assert_eq!(
        html_to_markdown(html),
        "[docs](https://example.com/a_\\(b\\) \"Docs\")"
    );
}

#[test]
fn inline_code_containing_backtick() {
    assert_eq!(html_to_markdown("<p><code>a`b</code></p>"), "``a`b``");
}

#[test]
fn code_block_containing_fence() {
    let html = "<pre><code>```\nx\n```</code></pre>";
    assert_eq!(html_to_markdown(html), "````\n```\nx\n```\n````");
}

#[test]
fn strikethrough_is_kept() {
    assert_eq!(html_to_markdown("<p><del>gone</del> kept</p>"), "~~gone~~ kept");
    assert_eq!(html_to_markdown("<p><strike>old</strike> <s>stale</s></p>"), "~~old~~ ~~stale~~");
}
