// src/data_input/variables.rs
//
// Decision-variable collections handed over by the optimizer: one entry per
// (variable group, trial). Most groups are [component, sample] matrices;
// joint-position bounds arrive as flattened column-major buffers and are
// reshaped on use.

use ndarray::{Array1, Array2, ShapeBuilder};
use std::collections::HashMap;

use crate::types::PlotDataError;

#[derive(Debug, Clone, Default)]
pub struct VariableSet {
    name: String,
    matrices: HashMap<String, HashMap<String, Array2<f64>>>,
    flats: HashMap<String, HashMap<String, Array1<f64>>>,
}

impl VariableSet {
    /// `name` identifies the collection in error messages
    /// (e.g. "lower bounds", "initial guess").
    pub fn new(name: &str) -> Self {
        VariableSet {
            name: name.to_string(),
            matrices: HashMap::new(),
            flats: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert_matrix(&mut self, group: &str, trial: &str, values: Array2<f64>) {
        self.matrices
            .entry(group.to_string())
            .or_default()
            .insert(trial.to_string(), values);
    }

    pub fn insert_flat(&mut self, group: &str, trial: &str, values: Array1<f64>) {
        self.flats
            .entry(group.to_string())
            .or_default()
            .insert(trial.to_string(), values);
    }

    /// Look up a [component, sample] matrix for one variable group and trial.
    pub fn matrix(&self, group: &str, trial: &str) -> Result<&Array2<f64>, PlotDataError> {
        self.matrices
            .get(group)
            .and_then(|trials| trials.get(trial))
            .ok_or_else(|| PlotDataError::key_not_found(&self.name, &format!("{group}/{trial}")))
    }

    /// Look up a flattened column-major buffer for one variable group and trial.
    pub fn flat(&self, group: &str, trial: &str) -> Result<&Array1<f64>, PlotDataError> {
        self.flats
            .get(group)
            .and_then(|trials| trials.get(trial))
            .ok_or_else(|| PlotDataError::key_not_found(&self.name, &format!("{group}/{trial}")))
    }
}

/// Reshape a flattened column-major buffer into a [rows, cols] matrix.
/// The buffer length must be exactly rows * cols.
pub fn reshape_column_major(
    flat: &Array1<f64>,
    rows: usize,
    cols: usize,
    context: &str,
) -> Result<Array2<f64>, PlotDataError> {
    if flat.len() != rows * cols {
        return Err(PlotDataError::shape_mismatch(
            context,
            (rows, cols),
            (flat.len(), 1),
        ));
    }
    Array2::from_shape_vec((rows, cols).f(), flat.to_vec())
        .map_err(|_| PlotDataError::shape_mismatch(context, (rows, cols), (flat.len(), 1)))
}

/// Flatten a matrix back into a column-major buffer (inverse of
/// `reshape_column_major`).
pub fn flatten_column_major(matrix: &Array2<f64>) -> Array1<f64> {
    Array1::from_iter(matrix.t().iter().cloned())
}
