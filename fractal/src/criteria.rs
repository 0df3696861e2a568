use crate::grid::LatticePoint;

/// Katz criterion: keep the points whose distance from the origin is within
/// `katz` times the maximal coordinate extent of the set.
///
/// The comparison uses squared distances throughout; taking a square root
/// per point is equivalent and slower. An empty input yields an empty
/// output, which also keeps the extent computation away from an empty max.
pub fn apply_katz_criterion(points: &[LatticePoint], katz: f64) -> Vec<LatticePoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let max_x = points.iter().map(|p| p.x.abs()).max().unwrap_or(0);
    let max_y = points.iter().map(|p| p.y.abs()).max().unwrap_or(0);
    let threshold = katz * max_x.max(max_y) as f64;
    let limit = threshold * threshold;

    points
        .iter()
        .copied()
        .filter(|point| point.squared_norm() as f64 <= limit)
        .collect()
}
