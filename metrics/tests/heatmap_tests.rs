use fractal::{Origin, ParamError};
use metrics::{HeatmapConfig, compute_dimension_heatmap, theoretical_dimension};

fn small_sweep() -> HeatmapConfig {
    HeatmapConfig {
        order_min: 50,
        order_max: 100,
        order_step: 50,
        katz_min: 0.2,
        katz_max: 0.4,
        katz_step: 0.2,
        origin: Origin::Corner,
    }
}

#[test]
fn theoretical_formula_spot_checks() {
    // ln(1/1) = 0, so katz = 1 always predicts the full plane.
    assert_eq!(theoretical_dimension(100, 1.0), 2.0);
    // 2 - ln(10)/ln(10) = 1.
    assert!((theoretical_dimension(10, 0.1) - 1.0).abs() < 1e-12);
}

#[test]
fn theoretical_formula_guards_its_domain() {
    assert_eq!(theoretical_dimension(100, 0.0), 0.0);
    assert_eq!(theoretical_dimension(100, -0.5), 0.0);
    assert_eq!(theoretical_dimension(1, 0.5), 0.0);
    assert_eq!(theoretical_dimension(100, f64::NAN), 0.0);
}

#[test]
fn sweep_produces_matching_matrix_shapes() {
    let heatmap = compute_dimension_heatmap(&small_sweep()).expect("valid sweep");
    assert_eq!(heatmap.orders, vec![50, 100]);
    assert_eq!(heatmap.thresholds.len(), 2);

    for matrix in [&heatmap.computed, &heatmap.theoretical, &heatmap.error] {
        assert_eq!(matrix.len(), heatmap.thresholds.len());
        for row in matrix {
            assert_eq!(row.len(), heatmap.orders.len());
        }
    }
}

#[test]
fn error_matrix_is_absolute_difference() {
    let heatmap = compute_dimension_heatmap(&small_sweep()).expect("valid sweep");
    for (row_idx, row) in heatmap.error.iter().enumerate() {
        for (col_idx, &err) in row.iter().enumerate() {
            let expected =
                (heatmap.computed[row_idx][col_idx] - heatmap.theoretical[row_idx][col_idx]).abs();
            assert!((err - expected).abs() < 1e-12);
            assert!(err >= 0.0);
        }
    }
}

#[test]
fn invalid_sweep_ranges_are_rejected() {
    let mut config = small_sweep();
    config.order_step = 0;
    assert!(matches!(
        compute_dimension_heatmap(&config),
        Err(ParamError::InvalidOrder(_))
    ));

    let mut config = small_sweep();
    config.katz_step = 0.0;
    assert!(matches!(
        compute_dimension_heatmap(&config),
        Err(ParamError::InvalidKatz(_))
    ));
}
