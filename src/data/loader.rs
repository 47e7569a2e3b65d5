use csv::ReaderBuilder;

use super::model::{CellValue, Record, Table};
use crate::error::{Result, ScreenError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse an uploaded CSV body into a [`Table`].
///
/// Layout: a header row with column names, then one record per line.
/// * Blank lines are skipped.
/// * Short rows are padded with [`CellValue::Null`]; long rows are rejected.
/// * Bytes must be UTF-8 (an optional leading BOM is dropped).
pub fn parse_csv(bytes: &[u8]) -> Result<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| ScreenError::Parse(format!("failed to read header row: {e}")))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(ScreenError::Parse("No columns to parse from file".to_string()));
    }

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ScreenError::Parse(format!("row {row_no}: {e}")))?;

        if record.len() > columns.len() {
            return Err(ScreenError::Parse(format!(
                "row {row_no}: expected {} fields, saw {}",
                columns.len(),
                record.len()
            )));
        }

        let mut cells: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
        cells.resize(columns.len(), CellValue::Null);

        rows.push(Record { index: row_no, cells });
    }

    log::debug!("parsed CSV: {} columns, {} rows", columns.len(), rows.len());
    Ok(Table::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let table = parse_csv(b"Company,ROE\nAcme,15\nGlobex,9.5\n").unwrap();
        assert_eq!(table.columns, vec!["Company", "ROE"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].index, 1);
        assert_eq!(table.rows[1].cells[1], CellValue::Float(9.5));
    }

    #[test]
    fn header_only_yields_empty_table() {
        let table = parse_csv(b"ROE,ROCE\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn short_rows_are_padded_with_null() {
        let table = parse_csv(b"a,b,c\n1,2\n").unwrap();
        assert_eq!(table.rows[0].cells[2], CellValue::Null);
    }

    #[test]
    fn long_rows_are_rejected() {
        let err = parse_csv(b"a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(err, ScreenError::Parse(msg) if msg.contains("expected 2 fields")));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_csv(b"").unwrap_err();
        assert!(matches!(err, ScreenError::Parse(msg) if msg == "No columns to parse from file"));
    }

    #[test]
    fn binary_blob_is_rejected() {
        let blob = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0xFF, 0xFE, 0x00, 0xC3];
        assert!(matches!(parse_csv(&blob), Err(ScreenError::Parse(_))));
    }

    #[test]
    fn bom_and_blank_lines_are_ignored() {
        let table = parse_csv(b"\xEF\xBB\xBFROE\n\n12\n\n13\n").unwrap();
        assert_eq!(table.columns, vec!["ROE"]);
        assert_eq!(table.len(), 2);
    }
}
