use std::fmt::Write;

use super::model::Table;

/// Render `table` as a dataframe-style HTML `<table>`.
///
/// The first column is the row's original position in the upload.
pub fn to_html(table: &Table) -> String {
    let mut html = String::new();
    html.push_str("<table border=\"1\" class=\"dataframe\">\n");

    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n      <th></th>\n");
    for col in &table.columns {
        let _ = writeln!(html, "      <th>{}</th>", escape(col));
    }
    html.push_str("    </tr>\n  </thead>\n");

    html.push_str("  <tbody>\n");
    for record in &table.rows {
        html.push_str("    <tr>\n");
        let _ = writeln!(html, "      <th>{}</th>", record.index);
        for cell in &record.cells {
            let _ = writeln!(html, "      <td>{}</td>", escape(&cell.to_string()));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");

    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Record};

    #[test]
    fn renders_header_and_indexed_rows() {
        let table = Table::new(
            vec!["roe".into(), "company".into()],
            vec![Record {
                index: 3,
                cells: vec![CellValue::Integer(15), CellValue::Null],
            }],
        );
        let html = to_html(&table);
        assert!(html.starts_with("<table border=\"1\" class=\"dataframe\">"));
        assert!(html.contains("<th>roe</th>"));
        assert!(html.contains("<th>company</th>"));
        assert!(html.contains("<th>3</th>"));
        assert!(html.contains("<td>15</td>"));
        assert!(html.contains("<td>NaN</td>"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn escapes_markup() {
        let table = Table::new(
            vec!["<b>name</b>".into()],
            vec![Record {
                index: 0,
                cells: vec![CellValue::String("AT&T \"<script>\"".into())],
            }],
        );
        let html = to_html(&table);
        assert!(html.contains("<th>&lt;b&gt;name&lt;/b&gt;</th>"));
        assert!(html.contains("<td>AT&amp;T &quot;&lt;script&gt;&quot;</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_table_has_empty_body() {
        let table = Table::new(vec!["roe".into()], Vec::new());
        assert!(to_html(&table).contains("<tbody>\n  </tbody>"));
    }
}
