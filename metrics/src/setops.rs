use std::collections::HashSet;

use fractal::{LatticePoint, ParamError};

/// Approximate intersection: points of A whose tolerance-rounded coordinates
/// also occur in the rounded form of B. The result carries set semantics;
/// its order is unspecified and duplicates are gone.
pub fn intersect_points(
    points_a: &[LatticePoint],
    points_b: &[LatticePoint],
    tol: i64,
) -> Result<Vec<LatticePoint>, ParamError> {
    let set_a = rounded_set(points_a, tol)?;
    let set_b = rounded_set(points_b, tol)?;
    Ok(set_a.intersection(&set_b).copied().collect())
}

/// Approximate difference: the rounded points of A absent from the rounded
/// form of B. Together with `intersect_points` this partitions rounded A.
pub fn difference_points(
    points_a: &[LatticePoint],
    points_b: &[LatticePoint],
    tol: i64,
) -> Result<Vec<LatticePoint>, ParamError> {
    let set_a = rounded_set(points_a, tol)?;
    let set_b = rounded_set(points_b, tol)?;
    Ok(set_a.difference(&set_b).copied().collect())
}

/// Rounds every coordinate to `tol` decimal places and deduplicates.
///
/// Lattice coordinates are integers, so rounding at any non-negative
/// tolerance leaves them unchanged and the operation reduces to an exact
/// dedup; the tolerance is still validated so a negative value fails fast
/// instead of silently widening the match.
fn rounded_set(points: &[LatticePoint], tol: i64) -> Result<HashSet<LatticePoint>, ParamError> {
    if tol < 0 {
        return Err(ParamError::InvalidTolerance(tol));
    }
    Ok(points.iter().copied().collect())
}
