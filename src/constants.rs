// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, LIGHTBLUE, RED};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 30;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// --- Plot Color Assignments ---
pub const COLOR_TRAJECTORY: &RGBColor = &plotters::style::colors::BLACK;
pub const COLOR_LOWER_BOUND: &RGBColor = &RED;
pub const COLOR_UPPER_BOUND: &RGBColor = &BLUE;
pub const COLOR_BOUND_ENVELOPE: &RGBColor = &LIGHTBLUE;

// Threshold-bar segment palette.
pub const COLOR_BAR_RED: RGBColor = RGBColor(0xFF, 0x6B, 0x6B);
pub const COLOR_BAR_YELLOW: RGBColor = RGBColor(0xFF, 0xD1, 0x66);
pub const COLOR_BAR_GREEN: RGBColor = RGBColor(0x06, 0xD6, 0xA0);

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_BOUND: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_BAR_MARKER: u32 = 3;

// Opacity of shaded regions (bound envelopes and +/- SD bands).
pub const ENVELOPE_ALPHA: f64 = 0.15;
pub const SD_BAND_ALPHA: f64 = 0.3;

// Shaded-band plots always use a fixed four-column grid.
pub const SHADED_GRID_COLUMNS: usize = 4;

// Column-name substrings excluded from shaded-band plots.
pub const EXCLUDED_COLUMN_SUBSTRINGS: [&str; 3] = ["_beta", "mtp", "time"];

// Viridis is scaled by this factor to avoid the bright yellow tail.
pub const VIRIDIS_DARKEN_FACTOR: f64 = 0.7;

// src/constants.rs
