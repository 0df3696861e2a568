use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::constant::ParamError;
use crate::utils::gcd;

/// A reduced fraction with positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numer: i64,
    pub denom: i64,
}

impl Rational {
    /// Builds a rational in lowest terms. `denom` must be non-zero; the sign
    /// is normalised onto the numerator.
    pub fn new(numer: i64, denom: i64) -> Self {
        debug_assert!(denom != 0, "rational denominator must be non-zero");
        let sign = if denom < 0 { -1 } else { 1 };
        let divisor = gcd(numer.abs(), denom.abs()).max(1);
        Self {
            numer: sign * numer / divisor,
            denom: sign * denom / divisor,
        }
    }

    pub fn is_reduced(self) -> bool {
        self.denom > 0 && gcd(self.numer.abs(), self.denom) == 1
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-multiplication keeps the comparison exact.
        (self.numer as i128 * other.denom as i128)
            .cmp(&(other.numer as i128 * self.denom as i128))
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// Generates the Farey sequence of the given order: every reduced fraction
/// a/b with 0 <= a <= b <= order, in strictly increasing order from 0/1
/// to 1/1.
///
/// Consecutive Farey neighbours p/q and r/s satisfy r*q - p*s = 1, so each
/// next term is the unique mediant-derived successor
/// ((k*r - p) / (k*s - q) with k = (order + q) / s) and no scan of candidate
/// denominators is needed.
pub fn farey_sequence(order: i64) -> Result<Vec<Rational>, ParamError> {
    if order < 1 {
        return Err(ParamError::InvalidOrder(order));
    }

    let mut sequence = vec![Rational { numer: 0, denom: 1 }];
    let (mut a, mut b) = (0_i64, 1_i64);
    let (mut c, mut d) = (1_i64, order);

    while c <= order {
        sequence.push(Rational { numer: c, denom: d });
        let k = (order + b) / d;
        let (next_c, next_d) = (k * c - a, k * d - b);
        a = c;
        b = d;
        c = next_c;
        d = next_d;
    }

    Ok(sequence)
}
