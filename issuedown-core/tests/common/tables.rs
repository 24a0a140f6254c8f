use issuedown_core::common::table::{CellAlignment, TableBuilder};
use issuedown_core::formats::html::dom::{find_element, parse_fragment};

fn model(html: &str) -> issuedown_core::common::table::TableModel {
    let tree = parse_fragment(html);
    let table = find_element(tree.root(), "table").expect("table element");
    TableBuilder::new().build(&table)
}

#[test]
fn header_alignment_comes_from_align_attribute() {
    let table = model(concat!(
        "<table><thead><tr>",
        "<th align=\"left\">L</th><th align=\"center\">C</th><th align=\"right\">R</th><th>D</th>",
        "</tr></thead><tbody><tr><td>1</td><td>2</td><td>3</td><td>4</td></tr></tbody></table>",
    ));
    let alignments: Vec<_> = table
        .header
        .expect("header row")
        .iter()
        .map(|cell| cell.align)
        .collect();
    assert_eq!(
        alignments,
        vec![
            CellAlignment::Left,
            CellAlignment::Center,
            CellAlignment::Right,
            CellAlignment::Default,
        ]
    );
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn style_wins_over_align_attribute() {
    let table = model(
        "<table><tr><th align=\"left\" style=\"color: red; text-align: right\">x</th></tr></table>",
    );
    assert_eq!(table.header.unwrap()[0].align, CellAlignment::Right);
}

#[test]
fn table_without_header_has_only_rows() {
    let table = model("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>");
    assert!(table.header.is_none());
    assert_eq!(table.to_pipe_rows(), "| a | b |\n| c | d |\n");
}

#[test]
fn second_header_row_in_body_is_skipped() {
    let table = model(concat!(
        "<table><tbody>",
        "<tr><th>first</th></tr>",
        "<tr><th>again</th></tr>",
        "<tr><td>data</td></tr>",
        "</tbody></table>",
    ));
    assert_eq!(table.to_pipe_rows(), "| first |\n| --- |\n| data |\n");
}
