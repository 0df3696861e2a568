use serde::Serialize;
use tracing::debug;

use fractal::{FractalParams, Origin, ParamError, generate_fractal_points};

use crate::dimension::fractal_dimension;

/// Analytical approximation of the fractal dimension: 2 - ln(1/K) / ln(N).
///
/// Outside the domain of the approximation (katz <= 0 or order <= 1) the
/// 0.0 sentinel is returned rather than a non-finite value.
pub fn theoretical_dimension(order: i64, katz: f64) -> f64 {
    if order <= 1 || !(katz > 0.0) {
        return 0.0;
    }
    2.0 - (1.0 / katz).ln() / (order as f64).ln()
}

/// Sweep ranges for the dimension comparison over (order, katz) pairs.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub order_min: i64,
    pub order_max: i64,
    pub order_step: i64,
    pub katz_min: f64,
    pub katz_max: f64,
    pub katz_step: f64,
    pub origin: Origin,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            order_min: 50,
            order_max: 500,
            order_step: 50,
            katz_min: 0.1,
            katz_max: 1.0,
            katz_step: 0.1,
            origin: Origin::Corner,
        }
    }
}

/// Computed-versus-theoretical dimension matrices. Rows follow `thresholds`
/// (katz values), columns follow `orders`.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionHeatmap {
    pub orders: Vec<i64>,
    pub thresholds: Vec<f64>,
    pub computed: Vec<Vec<f64>>,
    pub theoretical: Vec<Vec<f64>>,
    pub error: Vec<Vec<f64>>,
}

/// Runs the generation pipeline for every (order, katz) combination in the
/// sweep and records box-counted, theoretical, and absolute-error dimension
/// values.
pub fn compute_dimension_heatmap(config: &HeatmapConfig) -> Result<DimensionHeatmap, ParamError> {
    if config.order_step < 1 || config.order_min < 1 {
        return Err(ParamError::InvalidOrder(config.order_step.min(config.order_min)));
    }
    if !(config.katz_step > 0.0) || config.katz_min < 0.0 {
        return Err(ParamError::InvalidKatz(config.katz_step));
    }

    let orders: Vec<i64> = (config.order_min..=config.order_max)
        .step_by(config.order_step as usize)
        .collect();
    let mut thresholds = Vec::new();
    let mut katz = config.katz_min;
    while katz <= config.katz_max + 1e-9 {
        thresholds.push(katz);
        katz += config.katz_step;
    }

    let mut computed = Vec::with_capacity(thresholds.len());
    let mut theoretical = Vec::with_capacity(thresholds.len());
    let mut error = Vec::with_capacity(thresholds.len());

    for &katz in &thresholds {
        let mut computed_row = Vec::with_capacity(orders.len());
        let mut theoretical_row = Vec::with_capacity(orders.len());
        let mut error_row = Vec::with_capacity(orders.len());

        for &order in &orders {
            let params = FractalParams {
                order,
                katz,
                origin: config.origin,
            };
            let points = generate_fractal_points(&params)?;
            let measured = fractal_dimension(&points);
            let predicted = theoretical_dimension(order, katz);
            debug!(order, katz, measured, predicted, "heatmap cell done");

            computed_row.push(measured);
            theoretical_row.push(predicted);
            error_row.push((measured - predicted).abs());
        }

        computed.push(computed_row);
        theoretical.push(theoretical_row);
        error.push(error_row);
    }

    Ok(DimensionHeatmap {
        orders,
        thresholds,
        computed,
        theoretical,
        error,
    })
}
