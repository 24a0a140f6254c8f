//! HTML table → GFM pipe table
//!
//! Each `<table>` element is read into a [`TableModel`] by a fresh
//! [`TableBuilder`], so header state never leaks from one table into the
//! next. The model is then written as a pipe table:
//!
//! ```text
//! | Left | Center | Right |
//! | :--- | :---: | ---: |
//! | L1 | C1 | R1 |
//! ```
//!
//! Cells are not padded to a common width; the output matches what people
//! type by hand in issue bodies.

use crate::formats::html::dom::{attr, children_named, element_children, tag_name, text_content};
use markup5ever_rcdom::Handle;
use tracing::trace;

/// Column alignment taken from a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlignment {
    Left,
    Center,
    Right,
    #[default]
    Default,
}

impl CellAlignment {
    /// Read alignment from an inline `text-align` style, then from the
    /// legacy `align` attribute.
    fn of(cell: &Handle) -> Self {
        let from_style = attr(cell, "style").and_then(|style| {
            style.split(';').find_map(|declaration| {
                let (property, value) = declaration.split_once(':')?;
                if property.trim().eq_ignore_ascii_case("text-align") {
                    Self::parse(value)
                } else {
                    None
                }
            })
        });
        from_style
            .or_else(|| attr(cell, "align").and_then(|align| Self::parse(&align)))
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    fn separator(self) -> &'static str {
        match self {
            Self::Left => ":---",
            Self::Center => ":---:",
            Self::Right => "---:",
            Self::Default => "---",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    pub align: CellAlignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableModel {
    pub header: Option<Vec<TableCell>>,
    pub rows: Vec<Vec<TableCell>>,
}

impl TableModel {
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }

    /// Write the table as pipe rows, one per line, without surrounding blank lines.
    pub fn to_pipe_rows(&self) -> String {
        let mut output = String::new();
        if let Some(header) = &self.header {
            push_row(&mut output, header.iter().map(|cell| cell.text.as_str()));
            push_row(&mut output, header.iter().map(|cell| cell.align.separator()));
        }
        for row in &self.rows {
            push_row(&mut output, row.iter().map(|cell| cell.text.as_str()));
        }
        output
    }
}

fn push_row<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>) {
    output.push('|');
    for cell in cells {
        output.push(' ');
        output.push_str(cell);
        output.push_str(" |");
    }
    output.push('\n');
}

/// Builds a [`TableModel`] from a single `<table>` element.
#[derive(Default)]
pub struct TableBuilder {
    model: TableModel,
    header_processed: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self, table: &Handle) -> TableModel {
        let sections = element_children(table);
        let section = |name: &str| {
            sections
                .iter()
                .find(|child| tag_name(child) == Some(name))
                .cloned()
        };

        if let Some(row) = section("thead").and_then(|thead| first_row(&thead)) {
            let mut cells = children_named(&row, "th");
            if cells.is_empty() {
                cells = children_named(&row, "td");
            }
            self.set_header(&cells);
        }

        if let Some(tbody) = section("tbody") {
            for row in children_named(&tbody, "tr") {
                self.body_row(&row);
            }
        }
        self.model
    }

    fn set_header(&mut self, cells: &[Handle]) {
        let header = cells
            .iter()
            .map(|cell| TableCell {
                text: cell_text(cell),
                align: CellAlignment::of(cell),
            })
            .collect();
        self.model.header = Some(header);
        self.header_processed = true;
    }

    fn body_row(&mut self, row: &Handle) {
        let header_cells = children_named(row, "th");
        if !header_cells.is_empty() && !self.header_processed {
            self.set_header(&header_cells);
            return;
        }
        let data_cells = children_named(row, "td");
        if data_cells.is_empty() {
            trace!("skipping table row without data cells");
            return;
        }
        let cells = data_cells
            .iter()
            .map(|cell| TableCell {
                text: cell_text(cell),
                align: CellAlignment::Default,
            })
            .collect();
        self.model.rows.push(cells);
    }
}

fn first_row(section: &Handle) -> Option<Handle> {
    children_named(section, "tr").into_iter().next()
}

/// Cell text on one line, pipes escaped so they do not split the cell.
fn cell_text(cell: &Handle) -> String {
    text_content(cell)
        .split_ascii_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

/// Convert one `<table>` element to a pipe table block.
///
/// The block is wrapped in blank lines so it never runs into a neighbouring
/// paragraph or table; a table with no rows at all yields an empty string.
pub fn table_to_markdown(table: &Handle) -> String {
    let model = TableBuilder::new().build(table);
    if model.is_empty() {
        return String::new();
    }
    format!("\n\n{}\n\n", model.to_pipe_rows().trim_end())
}
