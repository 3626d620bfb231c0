// src/plot_functions/plot_dataframe.rs

use plotters::style::RGBColor;
use std::error::Error;
use std::ops::Range;

use crate::constants::LINE_WIDTH_PLOT;
use crate::data_input::table::TimeTable;
use crate::plot_framework::{
    calculate_range, draw_grid_plot, GridLayout, PlotSeries, SubplotConfig,
};

#[derive(Debug, Clone, Default)]
pub struct DataframePlotOptions {
    /// X column name; defaults to the first column of each table.
    pub x: Option<String>,
    /// Y column names; defaults to every column after the first.
    pub y: Vec<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// One legend label per table.
    pub labels: Option<Vec<String>>,
    pub title: Option<String>,
    /// Display range for the x axis; data outside it is clipped.
    pub x_range: Option<Range<f64>>,
}

/// Legend labels for `n_tables` tables. A supplied list with the wrong
/// length is non-fatal: warn and fall back to generated defaults.
pub(crate) fn resolve_labels(labels: Option<&[String]>, n_tables: usize) -> Vec<String> {
    match labels {
        Some(given) if given.len() == n_tables => given.to_vec(),
        Some(given) => {
            println!(
                "WARNING: The number of labels ({}) does not match the number of input dataframes ({})",
                given.len(),
                n_tables
            );
            (0..n_tables).map(|i| format!("dataframe_{i}")).collect()
        }
        None => (0..n_tables).map(|i| format!("dataframe_{i}")).collect(),
    }
}

/// Rainbow color cycle across `n` tables.
fn table_color(index: usize, n_tables: usize) -> RGBColor {
    let t = if n_tables > 1 {
        index as f64 / (n_tables - 1) as f64
    } else {
        0.0
    };
    let c = colorous::RAINBOW.eval_continuous(t);
    RGBColor(c.r, c.g, c.b)
}

/// Plots one or more time-indexed tables on a shared subplot grid, one
/// subplot per y column, cycling colors across tables. The legend appears in
/// the first subplot only. A y column missing from any table fails the call.
pub fn plot_dataframe(
    tables: &[TimeTable],
    options: &DataframePlotOptions,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let first = tables
        .first()
        .ok_or("plot_dataframe requires at least one input table")?;
    if first.n_columns() == 0 {
        return Err("input table has no columns".into());
    }

    let y_columns: Vec<String> = if options.y.is_empty() {
        first.column_names().iter().skip(1).cloned().collect()
    } else {
        options.y.clone()
    };
    if y_columns.is_empty() {
        return Err("no y columns to plot".into());
    }

    let x_label = options
        .x_label
        .clone()
        .or_else(|| options.x.clone())
        .unwrap_or_else(|| first.column_names()[0].clone());
    let y_label = options.y_label.clone().unwrap_or_else(|| y_columns[0].clone());
    let labels = resolve_labels(options.labels.as_deref(), tables.len());

    // Gather all series up front so column lookups fail before any drawing.
    // per_subplot[i][j] is (x, y) data of table j for y column i.
    let mut per_subplot: Vec<Vec<Vec<(f64, f64)>>> = Vec::with_capacity(y_columns.len());
    for column in &y_columns {
        let mut table_series = Vec::with_capacity(tables.len());
        for table in tables {
            let x_name = match &options.x {
                Some(name) => name.clone(),
                None => table
                    .column_names()
                    .first()
                    .cloned()
                    .ok_or("input table has no columns")?,
            };
            let x_values = table.get(&x_name)?;
            let y_values = table.get(column)?;
            table_series.push(
                x_values
                    .iter()
                    .zip(y_values.iter())
                    .map(|(&x, &y)| (x, y))
                    .collect(),
            );
        }
        per_subplot.push(table_series);
    }

    let layout = GridLayout::near_square(y_columns.len());
    let n_tables = tables.len();
    let x_range_override = options.x_range.clone();
    let title = options.title.clone();
    let n_subplots = y_columns.len();

    draw_grid_plot(
        output_filename,
        title.as_deref(),
        layout,
        n_subplots,
        move |subplot| {
            let table_series = &per_subplot[subplot];

            let mut x_min = f64::INFINITY;
            let mut x_max = f64::NEG_INFINITY;
            let mut val_min = f64::INFINITY;
            let mut val_max = f64::NEG_INFINITY;
            for data in table_series {
                for &(x, y) in data {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                    val_min = val_min.min(y);
                    val_max = val_max.max(y);
                }
            }
            if !x_min.is_finite() || !val_min.is_finite() {
                return None;
            }

            let x_range = x_range_override.clone().unwrap_or_else(|| {
                if x_max > x_min {
                    x_min..x_max
                } else {
                    let (lo, hi) = calculate_range(x_min, x_max);
                    lo..hi
                }
            });
            let (y_min, y_max) = calculate_range(val_min, val_max);

            let series: Vec<PlotSeries> = table_series
                .iter()
                .enumerate()
                .map(|(j, data)| PlotSeries {
                    data: data.clone(),
                    // Legend only in the first subplot.
                    label: if subplot == 0 { labels[j].clone() } else { String::new() },
                    color: table_color(j, n_tables),
                    stroke_width: LINE_WIDTH_PLOT,
                })
                .collect();

            Some(SubplotConfig {
                title: y_columns[subplot].clone(),
                x_range,
                y_range: y_min..y_max,
                series,
                bands: vec![],
                ref_lines: vec![],
                x_label: x_label.clone(),
                y_label: y_label.clone(),
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_label_count_falls_back_to_defaults() {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let resolved = resolve_labels(Some(&labels), 2);
        assert_eq!(resolved, vec!["dataframe_0", "dataframe_1"]);
    }

    #[test]
    fn matching_label_count_is_kept() {
        let labels = vec!["walk".to_string(), "run".to_string()];
        assert_eq!(resolve_labels(Some(&labels), 2), labels);
    }

    #[test]
    fn missing_labels_generate_defaults() {
        assert_eq!(resolve_labels(None, 1), vec!["dataframe_0"]);
    }
}
