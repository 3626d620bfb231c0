// tests/table_csv_test.rs

use std::io::Write;

use opensimad_render::data_input::table::TimeTable;

fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn reads_headers_and_numeric_columns() {
    let path = write_temp_csv(
        "opensimad_render_table_ok.csv",
        "time,knee_angle_r,knee_angle_l\n0.0,1.5,-1.5\n0.01,2.0,-2.0\n0.02,2.5,-2.5\n",
    );
    let table = TimeTable::from_csv(&path).unwrap();
    assert_eq!(table.column_names(), ["time", "knee_angle_r", "knee_angle_l"]);
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.get("knee_angle_r").unwrap(), &[1.5, 2.0, 2.5]);
    assert_eq!(table.get("time").unwrap(), &[0.0, 0.01, 0.02]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn non_numeric_cell_is_a_descriptive_error() {
    let path = write_temp_csv(
        "opensimad_render_table_bad.csv",
        "time,knee_angle_r\n0.0,1.5\n0.01,n/a\n",
    );
    let err = TimeTable::from_csv(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("knee_angle_r"), "unexpected error: {message}");
    assert!(message.contains("n/a"), "unexpected error: {message}");
    let _ = std::fs::remove_file(&path);
}
