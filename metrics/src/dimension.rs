use std::collections::HashSet;

use fractal::LatticePoint;

/// Box-counting estimate of fractal dimension.
///
/// Coordinates are partitioned into square cells at power-of-two sizes
/// 2^1 .. 2^floor(log2 M), where M is the largest absolute coordinate in the
/// set. The slope of ln(count) against -ln(size), fitted by ordinary least
/// squares, is the estimate.
///
/// Degenerate inputs report the 0.0 sentinel instead of failing: an empty
/// set, a set too small in extent to yield two box sizes, or a fit with no
/// variance in the regressor.
pub fn fractal_dimension(points: &[LatticePoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    let mut max_coord = i64::MIN;
    let mut min_coord = i64::MAX;
    for point in points {
        max_coord = max_coord.max(point.x).max(point.y);
        min_coord = min_coord.min(point.x).min(point.y);
    }
    let extent = max_coord.max(min_coord.abs());
    if extent < 2 {
        return 0.0;
    }

    let levels = (extent as f64).log2().floor() as u32;
    let mut log_sizes = Vec::with_capacity(levels as usize);
    let mut log_counts = Vec::with_capacity(levels as usize);
    for level in 1..=levels {
        let size = 1_i64 << level;
        let count = occupied_cells(points, size);
        if count == 0 {
            continue;
        }
        log_sizes.push(-(size as f64).ln());
        log_counts.push((count as f64).ln());
    }

    if log_sizes.len() < 2 {
        return 0.0;
    }
    ols_slope(&log_sizes, &log_counts)
}

/// Number of distinct size x size cells occupied by at least one point.
fn occupied_cells(points: &[LatticePoint], size: i64) -> usize {
    let mut cells: HashSet<(i64, i64)> = HashSet::with_capacity(points.len());
    for point in points {
        cells.insert((point.x.div_euclid(size), point.y.div_euclid(size)));
    }
    cells.len()
}

fn ols_slope(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let numerator: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let denominator: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();

    if denominator.abs() < 1e-12 {
        0.0
    } else {
        numerator / denominator
    }
}
