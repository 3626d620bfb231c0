// src/data_input/table.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::path::Path;

use crate::types::PlotDataError;

/// A named-column numeric table. By convention the first column holds the
/// time samples; the remaining columns are value series.
///
/// Columns are stored column-major so `get` hands back a contiguous slice.
#[derive(Debug, Clone, Default)]
pub struct TimeTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl TimeTable {
    pub fn new(names: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self, PlotDataError> {
        if names.len() != columns.len() {
            return Err(PlotDataError::shape_mismatch(
                "table columns",
                (names.len(), 0),
                (columns.len(), 0),
            ));
        }
        Ok(TimeTable { names, columns })
    }

    /// Read a table from a CSV file with a header row. Every cell must parse
    /// as f64.
    pub fn from_csv(path: &Path) -> Result<Self, Box<dyn Error>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        let names: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        if names.is_empty() {
            return Err(format!("'{}' has no header row", path.display()).into());
        }

        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
        for (row_idx, record) in rdr.records().enumerate() {
            let record = record?;
            for (col_idx, field) in record.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| {
                    format!(
                        "'{}' row {} column '{}': cannot parse '{}' as a number",
                        path.display(),
                        row_idx + 1,
                        names.get(col_idx).map(String::as_str).unwrap_or("?"),
                        field
                    )
                })?;
                if let Some(col) = columns.get_mut(col_idx) {
                    col.push(value);
                }
            }
        }
        Ok(TimeTable { names, columns })
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Typed column accessor; a missing name is a `KeyNotFound`.
    pub fn get(&self, name: &str) -> Result<&[f64], PlotDataError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| PlotDataError::key_not_found("table columns", name))
    }

    pub fn n_columns(&self) -> usize {
        self.names.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }
}
