// src/plot_functions/mod.rs

pub mod plot_dataframe;
pub mod plot_dataframe_with_shading;
pub mod plot_guess_vs_bounds;
pub mod plot_threshold_bars;
pub mod plot_vs_bounds;
pub mod plot_vs_varying_bounds;

// src/plot_functions/mod.rs
