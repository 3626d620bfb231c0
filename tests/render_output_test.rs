// tests/render_output_test.rs
//
// Success-path rendering: valid input must return Ok and write the output
// file. Chart contents are not inspected.

use ndarray::Array2;

use opensimad_render::plot_functions::plot_vs_bounds::plot_vs_bounds;
use opensimad_render::plot_functions::plot_vs_varying_bounds::plot_vs_varying_bounds;

fn out_path(name: &str) -> (std::path::PathBuf, String) {
    let path = std::env::temp_dir().join(name);
    let _ = std::fs::remove_file(&path);
    let as_string = path.to_string_lossy().into_owned();
    (path, as_string)
}

#[test]
fn fixed_renderer_writes_chart_for_valid_input() {
    let (path, path_str) = out_path("opensimad_render_fixed_ok.png");

    // One component, ten samples: the chart's x extent covers samples 0-9.
    let y = Array2::from_shape_vec(
        (1, 10),
        (0..10).map(|i| 0.1 + 0.05 * i as f64).collect(),
    )
    .unwrap();
    let lower = ndarray::array![[0.0]];
    let upper = ndarray::array![[1.0]];

    plot_vs_bounds(&y, &lower, &upper, "Muscle activation at mesh points", &path_str).unwrap();
    assert!(path.exists(), "successful call must write the output file");
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn varying_renderer_writes_chart_for_23_components() {
    let (path, path_str) = out_path("opensimad_render_varying_ok.png");

    // 23 components exercise the 5x5 grid with two trailing cells hidden.
    let (n_components, n_samples) = (23, 12);
    let y = Array2::from_shape_fn((n_components, n_samples), |(i, j)| {
        (i as f64 * 0.1) + (j as f64 * 0.01)
    });
    let lower = &y - 1.0;
    let upper = &y + 1.0;

    plot_vs_varying_bounds(&y, &lower, &upper, "Joint position at mesh points", &path_str)
        .unwrap();
    assert!(path.exists(), "successful call must write the output file");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn dataframe_plotter_writes_chart_for_valid_tables() {
    use opensimad_render::data_input::table::TimeTable;
    use opensimad_render::plot_functions::plot_dataframe::{plot_dataframe, DataframePlotOptions};

    let (path, path_str) = out_path("opensimad_render_dataframe_ok.png");

    let time: Vec<f64> = (0..20).map(|i| i as f64 * 0.01).collect();
    let knee: Vec<f64> = (0..20).map(|i| (i as f64 * 0.3).sin()).collect();
    let hip: Vec<f64> = (0..20).map(|i| (i as f64 * 0.3).cos()).collect();
    let table = TimeTable::new(
        vec![
            "time".to_string(),
            "knee_angle_r".to_string(),
            "hip_flexion_r".to_string(),
        ],
        vec![time, knee, hip],
    )
    .unwrap();

    let options = DataframePlotOptions::default();
    plot_dataframe(&[table], &options, &path_str).unwrap();
    assert!(path.exists(), "successful call must write the output file");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn crate_version_matches_package_metadata() {
    assert_eq!(opensimad_render::crate_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn sample_index_series_spans_zero_to_n_minus_one() {
    // Sample-indexed series are 0-based: a 10-sample trajectory spans
    // indices 0 through 9.
    let mean: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let sd = vec![0.0; 10];
    let (lower, upper) =
        opensimad_render::plot_functions::plot_dataframe_with_shading::band_edges(&mean, &sd);
    assert_eq!(lower.first().unwrap().0, 0.0);
    assert_eq!(lower.last().unwrap().0, 9.0);
    assert_eq!(upper.last().unwrap().0, 9.0);
}
