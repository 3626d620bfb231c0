// tests/error_propagation_test.rs
//
// Data-validation failures must surface before any drawing backend is
// created: none of these calls may write an output file.

use ndarray::{Array1, Array2};
use std::collections::HashMap;
use std::path::Path;

use opensimad_render::data_input::table::TimeTable;
use opensimad_render::data_input::variables::VariableSet;
use opensimad_render::plot_functions::plot_dataframe::{plot_dataframe, DataframePlotOptions};
use opensimad_render::plot_functions::plot_guess_vs_bounds::plot_guess_vs_bounds;
use opensimad_render::plot_functions::plot_vs_bounds::plot_vs_bounds;
use opensimad_render::plot_functions::plot_vs_varying_bounds::plot_vs_varying_bounds;

fn out_path(name: &str) -> (std::path::PathBuf, String) {
    let path = std::env::temp_dir().join(name);
    let _ = std::fs::remove_file(&path);
    let as_string = path.to_string_lossy().into_owned();
    (path, as_string)
}

#[test]
fn missing_trial_is_key_not_found_and_nothing_rendered() {
    let lower = VariableSet::new("lower bounds");
    let upper = VariableSet::new("upper bounds");
    let guess = VariableSet::new("initial guess");
    let mut mesh_intervals = HashMap::new();
    mesh_intervals.insert("walking1".to_string(), 50usize);

    let qs = Array2::<f64>::zeros((3, 51));
    let qds = Array2::<f64>::zeros((3, 51));

    let err = plot_guess_vs_bounds(
        &lower,
        &upper,
        &guess,
        "running1", // not in any collection
        3,
        &mesh_intervals,
        3,
        &qs,
        &qds,
        true,
        true,
        Path::new("/tmp"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(err.to_string().contains("running1"));
}

#[test]
fn missing_group_names_the_collection() {
    let mut lower = VariableSet::new("lower bounds");
    let upper = VariableSet::new("upper bounds");
    let guess = VariableSet::new("initial guess");
    lower.insert_matrix("A", "walking1", Array2::zeros((2, 10)));
    lower.insert_flat("Qsk", "walking1", Array1::zeros(6));

    let mut mesh_intervals = HashMap::new();
    mesh_intervals.insert("walking1".to_string(), 9usize);

    let qs = Array2::<f64>::zeros((2, 10));
    let qds = Array2::<f64>::zeros((2, 10));

    // Upper bounds have no entries at all, so the first chart's upper lookup
    // fails and names the upper-bounds collection.
    let err = plot_guess_vs_bounds(
        &lower,
        &upper,
        &guess,
        "walking1",
        2,
        &mesh_intervals,
        3,
        &qs,
        &qds,
        false,
        false,
        Path::new("/tmp"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("upper bounds"));
}

#[test]
fn fixed_renderer_rejects_incompatible_bounds_without_output() {
    let (path, path_str) = out_path("opensimad_render_fixed_reject.png");
    let y = Array2::<f64>::zeros((4, 20));
    let lower = Array2::<f64>::zeros((3, 1)); // wrong component count
    let upper = Array2::<f64>::zeros((4, 1));

    let err = plot_vs_bounds(&y, &lower, &upper, "Muscle activation", &path_str).unwrap_err();
    assert!(err.to_string().contains("shape mismatch"));
    assert!(!path.exists(), "failed call must not write an output file");
}

#[test]
fn varying_renderer_rejects_incompatible_bounds_without_output() {
    let (path, path_str) = out_path("opensimad_render_varying_reject.png");
    let y = Array2::<f64>::zeros((5, 12));
    let lower = Array2::<f64>::zeros((5, 12));
    let upper = Array2::<f64>::zeros((5, 13)); // extra sample

    let err =
        plot_vs_varying_bounds(&y, &lower, &upper, "Joint position", &path_str).unwrap_err();
    assert!(err.to_string().contains("upper bounds"));
    assert!(!path.exists(), "failed call must not write an output file");
}

#[test]
fn dataframe_plot_fails_on_missing_column() {
    let (path, path_str) = out_path("opensimad_render_missing_column.png");
    let table = TimeTable::new(
        vec!["time".to_string(), "knee_angle_r".to_string()],
        vec![vec![0.0, 0.01], vec![1.0, 2.0]],
    )
    .unwrap();

    let options = DataframePlotOptions {
        y: vec!["hip_flexion_r".to_string()],
        ..Default::default()
    };
    let err = plot_dataframe(&[table], &options, &path_str).unwrap_err();
    assert!(err.to_string().contains("hip_flexion_r"));
    assert!(!path.exists(), "failed call must not write an output file");
}
