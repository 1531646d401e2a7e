//! FILENAME: formatter-engine/src/value.rs
//! PURPOSE: Dataset row model and per-column value extraction.
//! CONTEXT: The query-execution layer hands the engine a sequence of rows
//! keyed by column identifier. Rules are evaluated against the full value
//! set of their target column, never against row-local state, so extremes
//! are always derived from the current dataset.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A raw cell value inside a dataset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Returns the numeric content, or None for non-numeric cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// One dataset row: column identifier -> raw value.
pub type DataRecord = HashMap<String, CellValue>;

/// Collect the numeric value set of one column across all rows.
///
/// Missing and non-numeric cells are skipped; they carry no signal for
/// min/max extremes and the renderer never asks the evaluators about them.
pub fn column_values(data: &[DataRecord], column: &str) -> Vec<f64> {
    data.iter()
        .filter_map(|row| row.get(column).and_then(CellValue::as_number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(column: &str, value: CellValue) -> DataRecord {
        let mut record = DataRecord::new();
        record.insert(column.to_string(), value);
        record
    }

    #[test]
    fn test_column_values_skips_non_numeric() {
        let data = vec![
            row("sales", CellValue::Number(10.0)),
            row("sales", CellValue::Text("n/a".to_string())),
            row("sales", CellValue::Empty),
            row("sales", CellValue::Number(-2.5)),
            row("region", CellValue::Number(99.0)),
        ];
        assert_eq!(column_values(&data, "sales"), vec![10.0, -2.5]);
    }

    #[test]
    fn test_column_values_empty_dataset() {
        assert!(column_values(&[], "sales").is_empty());
    }

    #[test]
    fn test_cell_value_from_json() {
        let record: DataRecord =
            serde_json::from_str(r#"{"sales": 12.5, "region": "west", "open": true, "note": null}"#)
                .unwrap();
        assert_eq!(record.get("sales"), Some(&CellValue::Number(12.5)));
        assert_eq!(record.get("region"), Some(&CellValue::Text("west".to_string())));
        assert_eq!(record.get("open"), Some(&CellValue::Bool(true)));
        assert_eq!(record.get("note"), Some(&CellValue::Empty));
    }
}
