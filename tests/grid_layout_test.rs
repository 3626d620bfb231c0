// tests/grid_layout_test.rs

use opensimad_render::plot_framework::GridLayout;

#[test]
fn near_square_satisfies_capacity_and_compactness() {
    // rows*cols >= n, and never more than one incomplete row.
    for n in 1..=100 {
        let layout = GridLayout::near_square(n);
        assert!(
            layout.rows * layout.cols >= n,
            "layout {layout:?} too small for {n} subplots"
        );
        assert!(
            layout.rows * layout.cols - n < layout.cols,
            "layout {layout:?} wastes a full row for {n} subplots"
        );
    }
}

#[test]
fn near_square_known_shapes() {
    assert_eq!(GridLayout::near_square(1), GridLayout { rows: 1, cols: 1 });
    assert_eq!(GridLayout::near_square(2), GridLayout { rows: 1, cols: 2 });
    assert_eq!(GridLayout::near_square(3), GridLayout { rows: 2, cols: 2 });
    assert_eq!(GridLayout::near_square(4), GridLayout { rows: 2, cols: 2 });
    assert_eq!(GridLayout::near_square(12), GridLayout { rows: 3, cols: 4 });
    // 23 components: 5x5 grid with two trailing cells hidden.
    let layout = GridLayout::near_square(23);
    assert_eq!(layout, GridLayout { rows: 5, cols: 5 });
    assert_eq!(layout.hidden_cells(23), 2);
}

#[test]
fn fixed_columns_rounds_rows_up() {
    let layout = GridLayout::fixed_columns(9, 4);
    assert_eq!(layout, GridLayout { rows: 3, cols: 4 });
    assert_eq!(layout.hidden_cells(9), 3);

    let exact = GridLayout::fixed_columns(8, 4);
    assert_eq!(exact, GridLayout { rows: 2, cols: 4 });
    assert_eq!(exact.hidden_cells(8), 0);
}

#[test]
fn column_layout_stacks_vertically() {
    let layout = GridLayout::column(5);
    assert_eq!(layout, GridLayout { rows: 5, cols: 1 });
}
