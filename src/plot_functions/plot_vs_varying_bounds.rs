// src/plot_functions/plot_vs_varying_bounds.rs

use ndarray::Array2;
use ndarray_stats::QuantileExt;
use std::error::Error;

use crate::constants::{
    COLOR_BOUND_ENVELOPE, COLOR_LOWER_BOUND, COLOR_TRAJECTORY, COLOR_UPPER_BOUND, ENVELOPE_ALPHA,
    LINE_WIDTH_BOUND, LINE_WIDTH_PLOT,
};
use crate::plot_framework::{
    calculate_range, draw_grid_plot, BandSeries, GridLayout, PlotSeries, SubplotConfig,
};
use crate::types::PlotDataError;

fn require_same_shape(
    expected: (usize, usize),
    bounds: &Array2<f64>,
    context: &str,
) -> Result<(), PlotDataError> {
    if bounds.dim() != expected {
        return Err(PlotDataError::shape_mismatch(context, expected, bounds.dim()));
    }
    Ok(())
}

/// Renders one chart comparing an observed [component, sample] trajectory
/// against bounds that change per sample. Each component subplot shows the
/// observed line in black inside a shaded feasible envelope, with the lower
/// boundary in red and the upper in blue. Components are laid out on a
/// near-square grid with trailing cells left blank.
pub fn plot_vs_varying_bounds(
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
    require_same_shape(y.dim(), lower, "lower bounds")?;
    require_same_shape(y.dim(), upper, "upper bounds")?;

    let x_max = ((n_samples - 1) as f64).max(1.0);
    let layout = GridLayout::near_square(n_components);
    let y_owned = y.to_owned();
    let lower_owned = lower.to_owned();
    let upper_owned = upper.to_owned();
    let title_owned = title.to_string();

    draw_grid_plot(
        output_filename,
        Some(title),
        layout,
        n_components,
        move |component| {
            let y_row = y_owned.row(component);
            let lower_row = lower_owned.row(component);
            let upper_row = upper_owned.row(component);

            let value_min = y_row
                .min_skipnan()
                .min(*lower_row.min_skipnan())
                .min(*upper_row.min_skipnan());
            let value_max = y_row
                .max_skipnan()
                .max(*lower_row.max_skipnan())
                .max(*upper_row.max_skipnan());
            let (y_min, y_max) = calculate_range(value_min, value_max);

            let indexed = |row: ndarray::ArrayView1<f64>| -> Vec<(f64, f64)> {
                row.iter()
                    .enumerate()
                    .map(|(sample, &v)| (sample as f64, v))
                    .collect()
            };
            let lower_points = indexed(lower_row);
            let upper_points = indexed(upper_row);

            Some(SubplotConfig {
                title: format!("{title_owned} [{component}]"),
                x_range: 0.0..x_max,
                y_range: y_min..y_max,
                series: vec![
                    PlotSeries {
                        data: lower_points.clone(),
                        label: String::new(),
                        color: *COLOR_LOWER_BOUND,
                        stroke_width: LINE_WIDTH_BOUND,
                    },
                    PlotSeries {
                        data: upper_points.clone(),
                        label: String::new(),
                        color: *COLOR_UPPER_BOUND,
                        stroke_width: LINE_WIDTH_BOUND,
                    },
                    PlotSeries {
                        data: indexed(y_row),
                        label: String::new(),
                        color: *COLOR_TRAJECTORY,
                        stroke_width: LINE_WIDTH_PLOT,
                    },
                ],
                bands: vec![BandSeries {
                    lower: lower_points,
                    upper: upper_points,
                    color: *COLOR_BOUND_ENVELOPE,
                    opacity: ENVELOPE_ALPHA,
                }],
                ref_lines: vec![],
                x_label: "Sample".to_string(),
                y_label: String::new(),
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn mismatched_bound_shape_fails_before_rendering() {
        let y = Array2::<f64>::zeros((4, 10));
        let lower = Array2::<f64>::zeros((4, 9));
        let upper = Array2::<f64>::zeros((4, 10));
        let err = plot_vs_varying_bounds(&y, &lower, &upper, "q", "/nonexistent/out.png")
            .unwrap_err();
        assert!(err.to_string().contains("lower bounds"));
    }

    #[test]
    fn twenty_three_components_use_five_by_five_grid() {
        let layout = GridLayout::near_square(23);
        assert_eq!(layout, GridLayout { rows: 5, cols: 5 });
        assert_eq!(layout.hidden_cells(23), 2);
    }
}
