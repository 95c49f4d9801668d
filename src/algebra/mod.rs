//! Exact symbolic algebra.
//!
//! Strategy probabilities are carried as [`Symbol`]s inside [`Poly`]
//! expressions with [`Rational`] coefficients. The equilibrium solver
//! differentiates and solves these expressions without any floating point.

pub mod poly;
pub mod rational;
pub mod symbol;

pub use poly::{Monomial, Poly};
pub use rational::{int, parse_rational, ratio, to_f64, Rational};
pub use symbol::{Symbol, Symbols};
