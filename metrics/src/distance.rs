use std::collections::HashMap;

use fractal::LatticePoint;

/// Symmetric Hausdorff distance between two point collections.
///
/// Returns +infinity when either side is empty: the sets are incomparable,
/// not at any finite distance. Otherwise the result is the larger of the two
/// directed distances (greatest nearest-neighbour distance from one set to
/// the other).
///
/// The nearest-neighbour search runs against a uniform grid bucket index
/// with an expanding ring scan instead of an all-pairs sweep; projected
/// collections reach hundreds of thousands of points at large orders.
pub fn fractal_distance(points_a: &[LatticePoint], points_b: &[LatticePoint]) -> f64 {
    if points_a.is_empty() || points_b.is_empty() {
        return f64::INFINITY;
    }

    let index_a = GridIndex::build(points_a);
    let index_b = GridIndex::build(points_b);

    let directed_ab = directed_squared(points_a, &index_b);
    let directed_ba = directed_squared(points_b, &index_a);
    (directed_ab.max(directed_ba) as f64).sqrt()
}

fn directed_squared(from: &[LatticePoint], to: &GridIndex) -> i64 {
    from.iter()
        .map(|&point| to.nearest_squared(point))
        .max()
        .unwrap_or(0)
}

/// Square-cell spatial index over a non-empty point collection.
struct GridIndex {
    cell: i64,
    buckets: HashMap<(i64, i64), Vec<LatticePoint>>,
    min_key: (i64, i64),
    max_key: (i64, i64),
}

impl GridIndex {
    fn build(points: &[LatticePoint]) -> Self {
        let mut min_coord = i64::MAX;
        let mut max_coord = i64::MIN;
        for point in points {
            min_coord = min_coord.min(point.x).min(point.y);
            max_coord = max_coord.max(point.x).max(point.y);
        }
        // Roughly 64 cells per axis keeps the buckets shallow.
        let span = (max_coord - min_coord).max(1);
        let cell = (span / 64).max(1);

        let mut buckets: HashMap<(i64, i64), Vec<LatticePoint>> = HashMap::new();
        let mut min_key = (i64::MAX, i64::MAX);
        let mut max_key = (i64::MIN, i64::MIN);
        for &point in points {
            let key = (point.x.div_euclid(cell), point.y.div_euclid(cell));
            min_key = (min_key.0.min(key.0), min_key.1.min(key.1));
            max_key = (max_key.0.max(key.0), max_key.1.max(key.1));
            buckets.entry(key).or_default().push(point);
        }

        Self {
            cell,
            buckets,
            min_key,
            max_key,
        }
    }

    /// Squared Euclidean distance from `point` to its nearest indexed point.
    fn nearest_squared(&self, point: LatticePoint) -> i64 {
        let key = (
            point.x.div_euclid(self.cell),
            point.y.div_euclid(self.cell),
        );

        let mut best: Option<i64> = None;
        // Rings closer than the occupied bounding box hold nothing.
        let mut ring = self.rings_to_occupied(key);
        loop {
            for cell_key in ring_cells(key, ring) {
                if let Some(bucket) = self.buckets.get(&cell_key) {
                    for other in bucket {
                        let dx = point.x - other.x;
                        let dy = point.y - other.y;
                        let squared = dx * dx + dy * dy;
                        if best.is_none_or(|b| squared < b) {
                            best = Some(squared);
                        }
                    }
                }
            }
            // Every unscanned ring lies more than ring * cell away, so a
            // candidate at or under that bound cannot be beaten.
            if let Some(b) = best {
                let reach = ring * self.cell;
                if b <= reach * reach {
                    return b;
                }
            }
            ring += 1;
        }
    }

    fn rings_to_occupied(&self, key: (i64, i64)) -> i64 {
        let dx = (self.min_key.0 - key.0).max(key.0 - self.max_key.0).max(0);
        let dy = (self.min_key.1 - key.1).max(key.1 - self.max_key.1).max(0);
        dx.max(dy)
    }
}

/// Cell keys at exact Chebyshev distance `ring` from `center`.
fn ring_cells(center: (i64, i64), ring: i64) -> Vec<(i64, i64)> {
    let (cx, cy) = center;
    if ring == 0 {
        return vec![(cx, cy)];
    }
    let mut cells = Vec::with_capacity(8 * ring as usize);
    for dx in -ring..=ring {
        cells.push((cx + dx, cy - ring));
        cells.push((cx + dx, cy + ring));
    }
    for dy in (-ring + 1)..=(ring - 1) {
        cells.push((cx - ring, cy + dy));
        cells.push((cx + ring, cy + dy));
    }
    cells
}
