use crate::constant::Origin;
use crate::farey::Rational;

/// An integer coordinate on (or outside, before wrapping) the N x N torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    pub x: i64,
    pub y: i64,
}

impl LatticePoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn squared_norm(self) -> i64 {
        self.x * self.x + self.y * self.y
    }
}

/// Maps each fraction a/b to the lattice coordinate (b, a): the denominator
/// becomes x and the numerator becomes y.
pub fn map_to_grid(sequence: &[Rational]) -> Vec<LatticePoint> {
    sequence
        .iter()
        .map(|frac| LatticePoint::new(frac.denom, frac.numer))
        .collect()
}

/// Emits the four sign reflections of every point, then wraps each
/// coordinate onto [0, order) with the origin offset applied before the
/// modulo. Corner keeps the pattern anchored at (0, 0); Centre shifts it to
/// the middle of the square.
pub fn reflect_and_wrap(points: &[LatticePoint], order: i64, origin: Origin) -> Vec<LatticePoint> {
    let offset = origin.offset(order);
    let mut full_points = Vec::with_capacity(points.len() * 4);

    for point in points {
        let reflections = [
            (point.x, point.y),
            (point.x, -point.y),
            (-point.x, point.y),
            (-point.x, -point.y),
        ];
        for (x, y) in reflections {
            full_points.push(LatticePoint::new(
                (x + offset).rem_euclid(order),
                (y + offset).rem_euclid(order),
            ));
        }
    }

    full_points
}

/// Sorts points ascending by Euclidean distance from (0, 0) on the wrapped
/// coordinates. The integer squared norm is monotone in the distance, so no
/// square root is taken; ties keep their incoming order.
///
/// Sorting happens after the wrap on purpose: wrapping folds large
/// coordinates back near the origin, and the Katz threshold is meant to see
/// exactly that folded set.
pub fn sort_by_distance(mut points: Vec<LatticePoint>) -> Vec<LatticePoint> {
    points.sort_by_key(|point| point.squared_norm());
    points
}

/// Expands each seed point (b, a) into `order` points on its periodic line:
/// ((b*i + offset) mod order, (a*i + offset) mod order) for i in 0..order,
/// in ascending i order. Revisited coordinates are kept; deduplication is a
/// consumer decision.
pub fn project_periodic(points: &[LatticePoint], order: i64, origin: Origin) -> Vec<LatticePoint> {
    let offset = origin.offset(order);
    let mut periodic_points = Vec::with_capacity(points.len() * order as usize);

    for point in points {
        for i in 0..order {
            periodic_points.push(LatticePoint::new(
                (point.x * i + offset).rem_euclid(order),
                (point.y * i + offset).rem_euclid(order),
            ));
        }
    }

    periodic_points
}
