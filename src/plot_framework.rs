// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Polygon, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_BOUND, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
};

/// Subplot grid dimensions. One value object covers every layout the crate
/// uses (single axes, one row, near-square, fixed-width), so there is a
/// single rendering path regardless of shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    /// Near-square grid for `n` subplots: `cols = ceil(sqrt(n))` and just
    /// enough rows, so at most one row is left incomplete.
    pub fn near_square(n: usize) -> GridLayout {
        let n = n.max(1);
        let mut cols = (n as f64).sqrt().ceil() as usize;
        while cols * cols < n {
            cols += 1;
        }
        let rows = n.div_ceil(cols);
        GridLayout { rows, cols }
    }

    /// Grid with a fixed column count and as many rows as `n` needs.
    pub fn fixed_columns(n: usize, cols: usize) -> GridLayout {
        let n = n.max(1);
        let cols = cols.max(1);
        GridLayout {
            rows: n.div_ceil(cols),
            cols,
        }
    }

    /// Single-column stack of `n` subplots.
    pub fn column(n: usize) -> GridLayout {
        GridLayout {
            rows: n.max(1),
            cols: 1,
        }
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Trailing cells left blank when only `n` subplots are drawn.
    pub fn hidden_cells(&self, n: usize) -> usize {
        self.cells().saturating_sub(n)
    }
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Draw a "Data Unavailable" message on a subplot cell.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    cell_index: usize,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = area.dim_in_pixel();
    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(
        format!("Subplot {cell_index} {plot_type} Data Unavailable:\n{reason}"),
        (width as i32 / 2 - 150, height as i32 / 2 - 20),
        text_style,
    ))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// A horizontal reference line spanning the full x extent (fixed bound).
#[derive(Clone)]
pub struct RefLine {
    pub value: f64,
    pub color: RGBColor,
}

/// A shaded region between two boundary curves (bound envelope or +/- SD
/// band). Drawn without a border line; the opacity applies to the fill.
#[derive(Clone)]
pub struct BandSeries {
    pub lower: Vec<(f64, f64)>,
    pub upper: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub opacity: f64,
}

#[derive(Clone)]
pub struct SubplotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub bands: Vec<BandSeries>,
    pub ref_lines: Vec<RefLine>,
    pub x_label: String,
    pub y_label: String,
}

impl SubplotConfig {
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
            || self.bands.iter().any(|b| !b.lower.is_empty())
            || !self.ref_lines.is_empty()
    }

    pub fn valid_ranges(&self) -> bool {
        self.x_range.end > self.x_range.start && self.y_range.end > self.y_range.start
    }
}

/// Draws one subplot cell: shaded bands first, then reference lines, then
/// line series, with a legend when any series carries a label.
fn draw_cell_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    config: &SubplotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50);
    if !config.title.is_empty() {
        builder.caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE));
    }
    let mut chart = builder.build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(5)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    // Bands go underneath everything else.
    for band in &config.bands {
        if band.lower.is_empty() || band.upper.is_empty() {
            continue;
        }
        let mut polygon: Vec<(f64, f64)> = band.lower.clone();
        polygon.extend(band.upper.iter().rev().cloned());
        chart.draw_series(std::iter::once(Polygon::new(
            polygon,
            band.color.mix(band.opacity).filled(),
        )))?;
    }

    for line in &config.ref_lines {
        chart.draw_series(LineSeries::new(
            vec![
                (config.x_range.start, line.value),
                (config.x_range.end, line.value),
            ],
            line.color.stroke_width(LINE_WIDTH_BOUND),
        ))?;
    }

    let mut labelled_series_count = 0;
    for s in &config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            labelled_series_count += 1;
        }
    }

    if labelled_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }
    Ok(())
}

/// Renders one figure laid out as `layout`, asking `get_cell_config` for each
/// of the first `n_cells` cells. Trailing grid cells beyond `n_cells` stay
/// blank. The backing figure is created here and presented before returning,
/// so no drawing state outlives the call.
pub fn draw_grid_plot<F>(
    output_filename: &str,
    figure_title: Option<&str>,
    layout: GridLayout,
    n_cells: usize,
    mut get_cell_config: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<SubplotConfig>,
{
    if layout.cells() < n_cells {
        return Err(format!(
            "grid layout {}x{} cannot hold {} subplots",
            layout.rows, layout.cols, n_cells
        )
        .into());
    }

    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    if let Some(title) = figure_title {
        root_area.draw(&Text::new(
            title,
            (10, 10),
            ("sans-serif", FONT_SIZE_MAIN_TITLE).into_font().color(&BLACK),
        ))?;
    }
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((layout.rows, layout.cols));
    let plot_type = figure_title.unwrap_or("Plot");
    let mut any_cell_plotted = false;

    for (cell_index, area) in sub_plot_areas.iter().enumerate().take(n_cells) {
        match get_cell_config(cell_index) {
            Some(config) => {
                if config.has_data() && config.valid_ranges() {
                    draw_cell_chart(area, &config)?;
                    any_cell_plotted = true;
                } else {
                    let reason = if !config.has_data() {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, cell_index, plot_type, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, cell_index, plot_type, "Data Extraction Failed")?;
            }
        }
    }

    if any_cell_plotted {
        root_area.present()?;
        println!("  Plot saved as '{output_filename}'.");
    } else {
        root_area.present()?;
        println!(
            "  Skipping '{output_filename}' plot saving: No data available for any subplot, only placeholder messages shown."
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_square_leaves_at_most_one_incomplete_row() {
        for n in 1..=60 {
            let layout = GridLayout::near_square(n);
            assert!(layout.cells() >= n, "grid too small for {n}");
            assert!(
                layout.cells() - n < layout.cols,
                "more than one incomplete row for {n}: {layout:?}"
            );
        }
    }

    #[test]
    fn calculate_range_pads_and_orders() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!(min < 0.0 && max > 10.0);

        // Degenerate span still yields a drawable range.
        let (min, max) = calculate_range(2.0, 2.0);
        assert!(max - min >= 1.0);

        // Inverted input is reordered.
        let (min, max) = calculate_range(5.0, -5.0);
        assert!(min < -5.0 && max > 5.0);
    }
}
