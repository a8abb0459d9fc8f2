use maud::{html, Markup};
use serde::Deserialize;
use serde_json::Value;

use crate::Renderer;

#[derive(Deserialize)]
struct ContentTable {
    #[serde(default)]
    rows: Vec<TableRow>,
}

#[derive(Deserialize)]
struct TableRow {
    #[serde(default)]
    cells: Vec<String>,
}

/// Generic data table. The first row is the header row.
pub(super) fn render(_renderer: &Renderer, value: &Value) -> Option<Markup> {
    let table: ContentTable = serde_json::from_value(value.clone()).ok()?;
    if table.rows.is_empty() {
        return None;
    }

    Some(html! {
        div.content-table {
            table {
                tbody {
                    @for (i, row) in table.rows.iter().enumerate() {
                        tr {
                            @for cell in &row.cells {
                                @if i == 0 { th { (cell) } } @else { td { (cell) } }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{blocks, renderer};

    #[test]
    fn first_row_is_header() {
        let input = blocks(
            r#"[{"_type": "table", "rows": [
                {"cells": ["Name", "Score"]},
                {"cells": ["Alpha", "9"]}
            ]}]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains("<th>Name</th>"));
        assert!(html.contains("<td>Alpha</td>"));
    }

    #[test]
    fn no_rows_renders_nothing() {
        let input = blocks(r#"[{"_type": "table", "rows": []}]"#);
        assert!(renderer().render(&input).into_string().is_empty());
    }
}
