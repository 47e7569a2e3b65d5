use std::collections::{BTreeSet, HashMap};

use super::model::{CellValue, Record, Table};
use crate::error::{Result, ScreenError};

// ---------------------------------------------------------------------------
// Screening criteria
// ---------------------------------------------------------------------------

/// Fields every upload must carry, in normalized form.
pub const REQUIRED_FIELDS: [&str; 4] = ["roe", "debt_to_equity", "roce", "peg_ratio"];

/// How a single criterion compares a cell against its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    Above(f64),
    Below(f64),
}

impl Bound {
    /// Strict comparison; NaN never passes.
    fn admits(self, v: f64) -> bool {
        match self {
            Bound::Above(t) => v > t,
            Bound::Below(t) => v < t,
        }
    }
}

/// `roe > 12`, `debt_to_equity < 0.5`, `roce > 15`, `peg_ratio < 1`.
const CRITERIA: [(&str, Bound); 4] = [
    ("roe", Bound::Above(12.0)),
    ("debt_to_equity", Bound::Below(0.5)),
    ("roce", Bound::Above(15.0)),
    ("peg_ratio", Bound::Below(1.0)),
];

// ---------------------------------------------------------------------------
// Column normalization
// ---------------------------------------------------------------------------

/// Trim, lowercase, then turn internal spaces into underscores.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Rewrite every column label of `table` in normalized form.
///
/// Labels that collide after normalization are all kept; lookups by label
/// resolve to the first of them.
pub fn normalize_columns(table: &mut Table) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (i, col) in table.columns.iter_mut().enumerate() {
        let normalized = normalize_label(col);
        if let Some(first) = seen.get(&normalized) {
            log::warn!(
                "column '{col}' normalizes to '{normalized}', already taken by column {first}; column {i} is ignored for screening"
            );
        } else {
            seen.insert(normalized.clone(), i);
        }
        *col = normalized;
    }
}

/// Required fields absent from the (already normalized) column labels.
pub fn missing_columns(table: &Table) -> BTreeSet<String> {
    let present: BTreeSet<&str> = table.columns.iter().map(String::as_str).collect();
    REQUIRED_FIELDS
        .iter()
        .filter(|f| !present.contains(*f))
        .map(|f| f.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Normalize `table`'s labels, check the required fields and keep the rows
/// meeting all four criteria, in input order.
///
/// A text value anywhere in a required column fails the whole call, even on
/// rows another criterion already rejects. Empty cells simply fail their
/// criterion.
pub fn apply_investing_criteria(mut table: Table) -> Result<Table> {
    normalize_columns(&mut table);

    let missing = missing_columns(&table);
    if !missing.is_empty() {
        let err = ScreenError::MissingColumns(missing);
        log::error!("screening failed: {err}");
        return Err(err);
    }

    // Every required field is present, so each lookup succeeds.
    let criteria: Vec<(usize, &str, Bound)> = CRITERIA
        .iter()
        .filter_map(|&(field, bound)| table.column_index(field).map(|col| (col, field, bound)))
        .collect();

    let Table { columns, rows } = table;
    let total = rows.len();

    let mut kept: Vec<Record> = Vec::new();
    for record in rows {
        let mut passes = true;
        for &(col, field, bound) in &criteria {
            let cell = record.cells.get(col).unwrap_or(&CellValue::Null);
            if cell.is_null() {
                passes = false;
                continue;
            }
            match cell.as_f64() {
                Some(v) => passes &= bound.admits(v),
                None => {
                    let err = ScreenError::Filtering {
                        column: field.to_string(),
                        row: record.index,
                        value: cell.to_string(),
                    };
                    log::error!("screening failed: {err}");
                    return Err(err);
                }
            }
        }
        if passes {
            kept.push(record);
        }
    }

    log::info!("{} of {total} rows meet the screening criteria", kept.len());
    Ok(Table::new(columns, kept))
}
