use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the uploaded table
// ---------------------------------------------------------------------------

/// Tokens read as a missing value: the usual dataframe reader defaults.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A dynamically-typed cell. The type is guessed per cell from its text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Guess the type of a raw CSV field.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() || NA_TOKENS.contains(&s) {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") {
            return CellValue::Bool(s.eq_ignore_ascii_case("true"));
        }
        CellValue::String(raw.to_string())
    }

    /// Numeric view of the cell. Booleans count as 1/0; nulls and text have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_nan() => write!(f, "NaN"),
            CellValue::Float(v) => write!(f, "{v:?}"),
            CellValue::Bool(true) => write!(f, "True"),
            CellValue::Bool(false) => write!(f, "False"),
            CellValue::Null => write!(f, "NaN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one data row
// ---------------------------------------------------------------------------

/// One data row of the uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 0-based position among the data rows of the upload (header excluded).
    pub index: usize,
    /// Cells in column order – same length as `Table::columns`.
    pub cells: Vec<CellValue>,
}

// ---------------------------------------------------------------------------
// Table – the complete parsed upload
// ---------------------------------------------------------------------------

/// The parsed upload: column labels plus rows, both in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Table { columns, rows }
    }

    /// Position of the first column carrying `label`.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_cell_types() {
        assert_eq!(CellValue::parse("15"), CellValue::Integer(15));
        assert_eq!(CellValue::parse(" 0.3 "), CellValue::Float(0.3));
        assert_eq!(CellValue::parse("TRUE"), CellValue::Bool(true));
        assert_eq!(CellValue::parse(""), CellValue::Null);
        assert_eq!(CellValue::parse("N/A"), CellValue::Null);
        assert_eq!(CellValue::parse("Acme Corp"), CellValue::String("Acme Corp".into()));
        assert_eq!(CellValue::parse("#N/A N/A"), CellValue::Null);
        assert_eq!(CellValue::parse("1.#QNAN"), CellValue::Null);
        assert_eq!(CellValue::parse("-"), CellValue::String("-".into()));
    }

    #[test]
    fn whole_floats_keep_their_decimal_point() {
        assert_eq!(CellValue::Float(20.0).to_string(), "20.0");
        assert_eq!(CellValue::Float(0.35).to_string(), "0.35");
        assert_eq!(CellValue::Integer(20).to_string(), "20");
    }

    #[test]
    fn numeric_view() {
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Bool(true).as_f64(), Some(1.0));
        assert_eq!(CellValue::Null.as_f64(), None);
        assert_eq!(CellValue::String("x".into()).as_f64(), None);
    }

    #[test]
    fn column_lookup_uses_first_match() {
        let table = Table::new(
            vec!["a".into(), "b".into(), "a".into()],
            vec![Record {
                index: 0,
                cells: vec![CellValue::Integer(1), CellValue::Integer(2), CellValue::Integer(3)],
            }],
        );
        assert_eq!(table.column_index("a"), Some(0));
        assert_eq!(table.column_index("c"), None);
        assert_eq!(table.len(), 1);
    }
}
