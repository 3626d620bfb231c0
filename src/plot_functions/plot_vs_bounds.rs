// src/plot_functions/plot_vs_bounds.rs

use ndarray::Array2;
use ndarray_stats::QuantileExt;
use std::error::Error;

use crate::constants::{
    COLOR_LOWER_BOUND, COLOR_TRAJECTORY, COLOR_UPPER_BOUND, LINE_WIDTH_PLOT,
};
use crate::plot_framework::{
    calculate_range, draw_grid_plot, GridLayout, PlotSeries, RefLine, SubplotConfig,
};
use crate::types::PlotDataError;

/// One bound value per trajectory component, extracted from a fixed-bound
/// array. Accepted shapes: [n, 1], [n, samples] (first sample used, the
/// bound is constant over time) or [1, 1] (scalar broadcast to every
/// component). Anything else is a shape mismatch.
pub(crate) fn bound_per_component(
    bounds: &Array2<f64>,
    n_components: usize,
    n_samples: usize,
    context: &str,
) -> Result<Vec<f64>, PlotDataError> {
    let (rows, cols) = bounds.dim();
    let rows_ok = rows == n_components || rows == 1;
    let cols_ok = cols == 1 || cols == n_samples;
    if !rows_ok || !cols_ok || cols == 0 {
        return Err(PlotDataError::shape_mismatch(
            context,
            (n_components, 1),
            (rows, cols),
        ));
    }
    Ok((0..n_components)
        .map(|i| bounds[[if rows == 1 { 0 } else { i }, 0]])
        .collect())
}

/// Renders one chart comparing an observed [component, sample] trajectory
/// against bounds constant over time. Each component gets its own subplot in
/// a near-square grid; bounds are horizontal reference lines (lower red,
/// upper blue) spanning the full sample extent.
pub fn plot_vs_bounds(
    y: &Array2<f64>,
    lower: &Array2<f64>,
    upper: &Array2<f64>,
    title: &str,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let (n_components, n_samples) = y.dim();
    if n_components == 0 || n_samples == 0 {
        return Err(PlotDataError::shape_mismatch(
            "observed trajectory",
            (1, 1),
            (n_components, n_samples),
        )
        .into());
    }

    // Validate everything before a drawing backend exists.
    let lower_values = bound_per_component(lower, n_components, n_samples, "lower bounds")?;
    let upper_values = bound_per_component(upper, n_components, n_samples, "upper bounds")?;

    let x_max = ((n_samples - 1) as f64).max(1.0);
    let layout = GridLayout::near_square(n_components);
    let y_owned = y.to_owned();
    let title_owned = title.to_string();

    draw_grid_plot(
        output_filename,
        Some(title),
        layout,
        n_components,
        move |component| {
            let row = y_owned.row(component);
            let lb = lower_values[component];
            let ub = upper_values[component];

            let value_min = row.min_skipnan().min(lb).min(ub);
            let value_max = row.max_skipnan().max(lb).max(ub);
            let (y_min, y_max) = calculate_range(value_min, value_max);

            let data: Vec<(f64, f64)> = row
                .iter()
                .enumerate()
                .map(|(sample, &v)| (sample as f64, v))
                .collect();

            Some(SubplotConfig {
                title: format!("{title_owned} [{component}]"),
                x_range: 0.0..x_max,
                y_range: y_min..y_max,
                series: vec![PlotSeries {
                    data,
                    label: String::new(),
                    color: *COLOR_TRAJECTORY,
                    stroke_width: LINE_WIDTH_PLOT,
                }],
                bands: vec![],
                ref_lines: vec![
                    RefLine {
                        value: lb,
                        color: *COLOR_LOWER_BOUND,
                    },
                    RefLine {
                        value: ub,
                        color: *COLOR_UPPER_BOUND,
                    },
                ],
                x_label: "Sample".to_string(),
                y_label: String::new(),
            })
        },
    )
}
