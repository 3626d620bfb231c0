// src/plot_functions/plot_dataframe_with_shading.rs

use plotters::style::colors::BLACK;
use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    EXCLUDED_COLUMN_SUBSTRINGS, LINE_WIDTH_PLOT, SD_BAND_ALPHA, SHADED_GRID_COLUMNS,
    VIRIDIS_DARKEN_FACTOR,
};
use crate::data_input::table::TimeTable;
use crate::plot_framework::{
    calculate_range, draw_grid_plot, BandSeries, GridLayout, PlotSeries, SubplotConfig,
};
use crate::types::Side;

/// Drops excluded columns, then applies the side filter: side 'r' removes
/// left-suffixed columns and vice versa. Columns without a side suffix pass
/// through unchanged.
pub fn filter_plot_columns(columns: &[String], side: Option<Side>) -> Vec<String> {
    columns
        .iter()
        .filter(|col| {
            !EXCLUDED_COLUMN_SUBSTRINGS
                .iter()
                .any(|sub| col.contains(sub))
        })
        .filter(|col| match side {
            Some(s) => !col.ends_with(s.opposite_suffix()),
            None => true,
        })
        .cloned()
        .collect()
}

/// Resolves the column to read and the axis label to show for one table.
/// With a side selector, a side-suffixed column is swapped for its
/// side-specific counterpart and labelled with the bare stem.
pub fn side_specific_column(column: &str, side: Option<Side>) -> (String, String) {
    match side {
        Some(s) if column.ends_with("_r") || column.ends_with("_l") => {
            let stem = &column[..column.len() - 2];
            (format!("{stem}{}", s.suffix()), stem.to_string())
        }
        _ => (column.to_string(), column.to_string()),
    }
}

/// Pointwise band edges `mean - sd` and `mean + sd` over the sample index.
pub fn band_edges(mean: &[f64], sd: &[f64]) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let lower = mean
        .iter()
        .zip(sd.iter())
        .enumerate()
        .map(|(i, (&m, &s))| (i as f64, m - s))
        .collect();
    let upper = mean
        .iter()
        .zip(sd.iter())
        .enumerate()
        .map(|(i, (&m, &s))| (i as f64, m + s))
        .collect();
    (lower, upper)
}

/// Viridis sampled across the table count, darkened to avoid the yellow
/// tail; a single table plots in black.
fn series_color(index: usize, n_tables: usize) -> RGBColor {
    if n_tables <= 1 {
        return BLACK;
    }
    let t = index as f64 / (n_tables - 1) as f64;
    let c = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(
        (c.r as f64 * VIRIDIS_DARKEN_FACTOR) as u8,
        (c.g as f64 * VIRIDIS_DARKEN_FACTOR) as u8,
        (c.b as f64 * VIRIDIS_DARKEN_FACTOR) as u8,
    )
}

fn side_for_table(sides: &[Option<Side>], table_index: usize) -> Option<Side> {
    if sides.len() == 1 {
        sides[0]
    } else {
        sides.get(table_index).copied().flatten()
    }
}

/// Plots one or more mean series per anatomical column on a fixed
/// four-column grid, with an optional shaded +/- SD band per series. Columns
/// matching exclusion substrings are dropped; with a side selector only that
/// side's columns survive and side-suffixed names collapse onto their stem.
/// The x axis is the sample index; the x label appears on the bottom row
/// only and legend entries in the first subplot.
#[allow(clippy::too_many_arguments)]
pub fn plot_dataframe_with_shading(
    means: &[TimeTable],
    sds: Option<&[TimeTable]>,
    y: Option<&[String]>,
    sides: &[Option<Side>],
    x_label: Option<&str>,
    title: Option<&str>,
    legend_entries: Option<&[String]>,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let first = means
        .first()
        .ok_or("plot_dataframe_with_shading requires at least one mean table")?;
    if !sides.is_empty() && sides.len() != 1 && sides.len() != means.len() {
        return Err(format!(
            "got {} side selectors for {} tables",
            sides.len(),
            means.len()
        )
        .into());
    }

    let requested: Vec<String> = match y {
        Some(columns) => columns.to_vec(),
        None => first
            .column_names()
            .iter()
            .filter(|c| c.as_str() != "time")
            .cloned()
            .collect(),
    };
    let columns = filter_plot_columns(&requested, side_for_table(sides, 0));
    if columns.is_empty() {
        return Err("no plottable columns left after filtering".into());
    }

    // Resolve all series before drawing so missing columns fail up front.
    struct CellSeries {
        label: String,
        data: Vec<(f64, f64)>,
        band: Option<(Vec<(f64, f64)>, Vec<(f64, f64)>)>,
    }
    let mut cells: Vec<(String, Vec<CellSeries>)> = Vec::with_capacity(columns.len());
    for column in &columns {
        let mut cell = Vec::with_capacity(means.len());
        let mut axis_label = column.clone();
        for (j, mean_table) in means.iter().enumerate() {
            let (col, col_label) = side_specific_column(column, side_for_table(sides, j));
            axis_label = col_label;
            let mean_values = mean_table.get(&col)?;
            let data: Vec<(f64, f64)> = mean_values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect();

            let band = sds
                .and_then(|sd_tables| sd_tables.get(j))
                .filter(|sd_table| sd_table.has_column(&col))
                .map(|sd_table| -> Result<_, Box<dyn Error>> {
                    Ok(band_edges(mean_values, sd_table.get(&col)?))
                })
                .transpose()?;

            let label = legend_entries
                .and_then(|entries| entries.get(j))
                .cloned()
                .unwrap_or_default();
            cell.push(CellSeries { label, data, band });
        }
        cells.push((axis_label, cell));
    }

    let layout = GridLayout::fixed_columns(columns.len(), SHADED_GRID_COLUMNS);
    let n_tables = means.len();
    let n_subplots = columns.len();
    let bottom_row = layout.rows - 1;
    let x_label_owned = x_label.unwrap_or_default().to_string();

    draw_grid_plot(
        output_filename,
        title,
        layout,
        n_subplots,
        move |subplot| {
            let (axis_label, cell) = &cells[subplot];

            let mut x_max = f64::NEG_INFINITY;
            let mut val_min = f64::INFINITY;
            let mut val_max = f64::NEG_INFINITY;
            for series in cell {
                for &(x, v) in &series.data {
                    x_max = x_max.max(x);
                    val_min = val_min.min(v);
                    val_max = val_max.max(v);
                }
                if let Some((lower, upper)) = &series.band {
                    for &(_, v) in lower {
                        val_min = val_min.min(v);
                    }
                    for &(_, v) in upper {
                        val_max = val_max.max(v);
                    }
                }
            }
            if !val_min.is_finite() {
                return None;
            }
            let (y_min, y_max) = calculate_range(val_min, val_max);

            let mut series = Vec::with_capacity(cell.len());
            let mut bands = Vec::new();
            for (j, cell_series) in cell.iter().enumerate() {
                let color = series_color(j, n_tables);
                if let Some((lower, upper)) = &cell_series.band {
                    bands.push(BandSeries {
                        lower: lower.clone(),
                        upper: upper.clone(),
                        color,
                        opacity: SD_BAND_ALPHA,
                    });
                }
                series.push(PlotSeries {
                    data: cell_series.data.clone(),
                    // Legend only in the first subplot.
                    label: if subplot == 0 { cell_series.label.clone() } else { String::new() },
                    color,
                    stroke_width: LINE_WIDTH_PLOT,
                });
            }

            Some(SubplotConfig {
                title: String::new(),
                x_range: 0.0..x_max.max(1.0),
                y_range: y_min..y_max,
                series,
                bands,
                ref_lines: vec![],
                // X label on the bottom row only.
                x_label: if subplot / SHADED_GRID_COLUMNS == bottom_row {
                    x_label_owned.clone()
                } else {
                    String::new()
                },
                y_label: axis_label.clone(),
            })
        },
    )
}
