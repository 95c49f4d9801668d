//! Probability bounds.

use num_traits::{One, Zero};

use crate::algebra::Rational;

/// Clamp a solved probability into `[0, 1]`.
///
/// Values already inside the interval are returned unchanged. Outside it
/// the best response saturates at the nearest pure strategy.
pub fn clamp_probability(x: Rational) -> Rational {
    if x < Rational::zero() {
        Rational::zero()
    } else if x > Rational::one() {
        Rational::one()
    } else {
        x
    }
}

/// Whether `x` lies in `[0, 1]`.
pub fn is_probability(x: &Rational) -> bool {
    *x >= Rational::zero() && *x <= Rational::one()
}
