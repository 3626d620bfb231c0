// src/plot_functions/plot_threshold_bars.rs
//
// Threshold-bar indicators: for each named quantity, a horizontal tri-color
// bar (below / between / above the bound pair) with black vertical markers
// at the observed values.

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};
use std::error::Error;

use crate::constants::{
    COLOR_BAR_GREEN, COLOR_BAR_RED, COLOR_BAR_YELLOW, FONT_SIZE_AXIS_LABEL,
    FONT_SIZE_CHART_TITLE, LINE_WIDTH_BAR_MARKER, PLOT_WIDTH,
};
use crate::plot_framework::GridLayout;

#[derive(Debug, Clone)]
pub struct ThresholdBar {
    pub name: String,
    /// (lower, upper); upper must exceed lower.
    pub bounds: (f64, f64),
    /// Observed values marked with vertical lines.
    pub values: Vec<f64>,
    /// Flip the palette so green sits below the lower bound.
    pub reverse_colors: bool,
}

/// Segment geometry shared with the renderer: the outer segments are twice
/// the width of the [lower, upper] middle segment.
pub(crate) fn bar_extent(lower: f64, upper: f64) -> (f64, f64) {
    let outer = 2.0 * (upper - lower);
    (lower - outer, upper + outer)
}

fn palette(reverse_colors: bool) -> [RGBColor; 3] {
    if reverse_colors {
        [COLOR_BAR_GREEN, COLOR_BAR_YELLOW, COLOR_BAR_RED]
    } else {
        [COLOR_BAR_RED, COLOR_BAR_YELLOW, COLOR_BAR_GREEN]
    }
}

/// Renders one stacked column of threshold bars, one cell per bar. Cells
/// have no axes mesh; the reference bound is annotated beneath each bar.
pub fn plot_threshold_bars(
    bars: &[ThresholdBar],
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    if bars.is_empty() {
        return Err("plot_threshold_bars requires at least one bar spec".into());
    }
    for bar in bars {
        let (lower, upper) = bar.bounds;
        if upper <= lower {
            return Err(format!(
                "threshold bar '{}': upper bound {} must exceed lower bound {}",
                bar.name, upper, lower
            )
            .into());
        }
    }

    let layout = GridLayout::column(bars.len());
    let cell_height: u32 = 200;
    let root_area = BitMapBackend::new(
        output_filename,
        (PLOT_WIDTH / 2, cell_height * layout.rows as u32),
    )
    .into_drawing_area();
    root_area.fill(&WHITE)?;
    let sub_plot_areas = root_area.split_evenly((layout.rows, layout.cols));

    for (bar, area) in bars.iter().zip(sub_plot_areas.iter()) {
        let (lower, upper) = bar.bounds;
        let middle = upper - lower;
        let (x_min, x_max) = bar_extent(lower, upper);
        let colors = palette(bar.reverse_colors);

        let mut chart = ChartBuilder::on(area)
            .caption(&bar.name, ("sans-serif", FONT_SIZE_CHART_TITLE))
            .margin(15)
            .build_cartesian_2d(x_min..x_max, -0.5f64..0.5f64)?;

        // Left, middle, right segments.
        let segments = [
            (x_min, lower, colors[0]),
            (lower, upper, colors[1]),
            (upper, upper + 2.0 * middle, colors[2]),
        ];
        for (start, end, color) in segments {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(start, -0.5), (end, 0.5)],
                color.filled(),
            )))?;
        }

        for &value in &bar.values {
            chart.draw_series(LineSeries::new(
                vec![(value, -0.5), (value, 0.5)],
                BLACK.stroke_width(LINE_WIDTH_BAR_MARKER),
            ))?;
        }

        // Annotate the decision bound (the bound facing the red segment).
        let tick = if bar.reverse_colors { lower } else { upper };
        let (width, height) = area.dim_in_pixel();
        let tick_x = ((tick - x_min) / (x_max - x_min) * width as f64) as i32;
        area.draw(&Text::new(
            format!("{tick:.0}"),
            (tick_x, height as i32 - 18),
            ("sans-serif", FONT_SIZE_AXIS_LABEL).into_font().color(&BLACK),
        ))?;
    }

    root_area.present()?;
    println!("  Plot saved as '{output_filename}'.");
    Ok(())
}
