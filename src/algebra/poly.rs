//! Sparse multivariate polynomials with exact rational coefficients.
//!
//! This is the small computer-algebra core the equilibrium engine needs:
//! arithmetic, partial derivatives, substitution and solving an equation
//! that is linear in one unknown. The expected value of the AKQ game is
//! bilinear in the two strategy parameters, so nothing more is required.

use std::collections::hash_map::Entry;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Signed, Zero};
use rustc_hash::FxHashMap;

use super::rational::{int, Rational};
use super::symbol::Symbol;
use crate::error::SolveError;

/// Product of symbol powers.
///
/// Factors are sorted by symbol and every exponent is positive; the empty
/// product is the constant monomial `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Monomial(Vec<(Symbol, u32)>);

impl Monomial {
    /// The constant monomial.
    pub fn one() -> Self {
        Self(Vec::new())
    }

    /// A single symbol to the first power.
    pub fn var(symbol: &Symbol) -> Self {
        Self(vec![(symbol.clone(), 1)])
    }

    /// Whether this is the constant monomial.
    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    /// Total degree.
    pub fn degree(&self) -> u32 {
        self.0.iter().map(|(_, e)| e).sum()
    }

    /// Exponent of `symbol` (zero if absent).
    pub fn degree_in(&self, symbol: &Symbol) -> u32 {
        self.0
            .iter()
            .find(|(s, _)| s == symbol)
            .map_or(0, |(_, e)| *e)
    }

    /// Symbols appearing in this monomial.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.0.iter().map(|(s, _)| s)
    }

    fn without(&self, symbol: &Symbol) -> Self {
        Self(self.0.iter().filter(|(s, _)| s != symbol).cloned().collect())
    }

    fn with_exponent(&self, symbol: &Symbol, exponent: u32) -> Self {
        let mut factors = self.without(symbol).0;
        if exponent > 0 {
            factors.push((symbol.clone(), exponent));
            factors.sort();
        }
        Self(factors)
    }

    fn product(&self, other: &Self) -> Self {
        let mut factors = self.0.clone();
        for (symbol, exponent) in &other.0 {
            match factors.iter_mut().find(|(s, _)| s == symbol) {
                Some((_, e)) => *e += exponent,
                None => factors.push((symbol.clone(), *exponent)),
            }
        }
        factors.sort();
        Self(factors)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return f.write_str("1");
        }
        for (i, (symbol, exponent)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("*")?;
            }
            match exponent {
                1 => write!(f, "{}", symbol)?,
                e => write!(f, "{}**{}", symbol, e)?,
            }
        }
        Ok(())
    }
}

/// Polynomial over [`Rational`] in any number of [`Symbol`]s.
///
/// Zero coefficients are never stored, so two polynomials are equal exactly
/// when they are the same mathematical function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Poly {
    terms: FxHashMap<Monomial, Rational>,
}

impl Poly {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant polynomial.
    pub fn constant(value: Rational) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::one(), value);
        poly
    }

    /// The polynomial consisting of a single symbol.
    pub fn symbol(symbol: &Symbol) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::var(symbol), Rational::one());
        poly
    }

    fn add_term(&mut self, monomial: Monomial, coefficient: Rational) {
        if coefficient.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coefficient;
                if entry.get().is_zero() {
                    entry.remove();
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(coefficient);
            }
        }
    }

    /// Whether every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The value of a constant polynomial, `None` if any symbol remains.
    pub fn as_constant(&self) -> Option<Rational> {
        match self.terms.len() {
            0 => Some(Rational::zero()),
            1 => self.terms.get(&Monomial::one()).cloned(),
            _ => None,
        }
    }

    /// Coefficient of a monomial.
    pub fn coefficient(&self, monomial: &Monomial) -> Rational {
        self.terms.get(monomial).cloned().unwrap_or_else(Rational::zero)
    }

    /// Number of non-zero terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Iterate over `(monomial, coefficient)` pairs in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational)> {
        self.terms.iter()
    }

    /// Highest exponent of `symbol` in any term.
    pub fn degree_in(&self, symbol: &Symbol) -> u32 {
        self.terms
            .keys()
            .map(|m| m.degree_in(symbol))
            .max()
            .unwrap_or(0)
    }

    /// Whether `symbol` occurs in the polynomial.
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.degree_in(symbol) > 0
    }

    /// All symbols that occur in the polynomial.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.terms
            .keys()
            .flat_map(|m| m.symbols().cloned())
            .collect()
    }

    /// Partial derivative with respect to `symbol`.
    pub fn diff(&self, symbol: &Symbol) -> Poly {
        let mut result = Poly::zero();
        for (monomial, coefficient) in &self.terms {
            let exponent = monomial.degree_in(symbol);
            if exponent == 0 {
                continue;
            }
            result.add_term(
                monomial.with_exponent(symbol, exponent - 1),
                coefficient * int(exponent as i64),
            );
        }
        result
    }

    /// Integer power.
    pub fn pow(&self, exponent: u32) -> Poly {
        (0..exponent).fold(Poly::constant(Rational::one()), |acc, _| &acc * self)
    }

    /// Replace every occurrence of `symbol` with `value`.
    pub fn subs(&self, symbol: &Symbol, value: &Poly) -> Poly {
        let mut result = Poly::zero();
        for (monomial, coefficient) in &self.terms {
            let exponent = monomial.degree_in(symbol);
            let mut rest = Poly::zero();
            rest.add_term(monomial.without(symbol), coefficient.clone());
            if exponent > 0 {
                rest = &rest * &value.pow(exponent);
            }
            result = result + rest;
        }
        result
    }

    /// Replace `symbol` with a number.
    pub fn subs_value(&self, symbol: &Symbol, value: Rational) -> Poly {
        self.subs(symbol, &Poly::constant(value))
    }

    /// Substitute every binding and require a number as the result.
    pub fn eval(&self, bindings: &[(&Symbol, Rational)]) -> Result<Rational, SolveError> {
        let substituted = bindings
            .iter()
            .fold(self.clone(), |poly, (symbol, value)| poly.subs_value(symbol, value.clone()));
        substituted
            .as_constant()
            .ok_or_else(|| SolveError::Unresolved(substituted.to_string()))
    }

    /// Solve `self = 0` for `symbol`.
    ///
    /// The equation must be linear in `symbol` with a constant, non-zero
    /// coefficient. The solution may still contain other symbols.
    pub fn solve_for(&self, symbol: &Symbol) -> Result<Poly, SolveError> {
        if self.degree_in(symbol) > 1 {
            return Err(SolveError::Nonlinear {
                symbol: symbol.to_string(),
                equation: self.to_string(),
            });
        }

        let slope = self.diff(symbol);
        let intercept = self.subs_value(symbol, Rational::zero());

        if slope.is_zero() {
            return Err(if intercept.is_zero() {
                SolveError::Indeterminate {
                    symbol: symbol.to_string(),
                }
            } else {
                SolveError::NoSolution {
                    symbol: symbol.to_string(),
                    equation: self.to_string(),
                }
            });
        }

        match slope.as_constant() {
            Some(a) => Ok(-intercept / a),
            None => Err(SolveError::Nonlinear {
                symbol: symbol.to_string(),
                equation: self.to_string(),
            }),
        }
    }
}

impl From<Rational> for Poly {
    fn from(value: Rational) -> Self {
        Poly::constant(value)
    }
}

impl From<&Symbol> for Poly {
    fn from(symbol: &Symbol) -> Self {
        Poly::symbol(symbol)
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        let mut result = self.clone();
        for (monomial, coefficient) in &rhs.terms {
            result.add_term(monomial.clone(), coefficient.clone());
        }
        result
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        &self + &rhs
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect(),
        }
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -&self
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        self + &(-rhs)
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        &self - &rhs
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        let mut result = Poly::zero();
        for (lm, lc) in &self.terms {
            for (rm, rc) in &rhs.terms {
                result.add_term(lm.product(rm), lc * rc);
            }
        }
        result
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        &self * &rhs
    }
}

impl Mul<Rational> for Poly {
    type Output = Poly;

    fn mul(self, rhs: Rational) -> Poly {
        if rhs.is_zero() {
            return Poly::zero();
        }
        Poly {
            terms: self.terms.into_iter().map(|(m, c)| (m, c * &rhs)).collect(),
        }
    }
}

impl Div<Rational> for Poly {
    type Output = Poly;

    /// Panics on division by zero, like the underlying rational type.
    fn div(self, rhs: Rational) -> Poly {
        self * rhs.recip()
    }
}

impl Sum for Poly {
    fn sum<I: Iterator<Item = Poly>>(iter: I) -> Poly {
        iter.fold(Poly::zero(), |acc, p| acc + p)
    }
}

impl fmt::Display for Poly {
    /// Terms are printed by descending degree, constant last.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut terms: Vec<_> = self.terms.iter().collect();
        terms.sort_by(|(a, _), (b, _)| b.degree().cmp(&a.degree()).then_with(|| a.cmp(b)));

        for (i, (monomial, coefficient)) in terms.into_iter().enumerate() {
            let negative = coefficient.is_negative();
            match (i, negative) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }

            let magnitude = coefficient.abs();
            let (numer, denom) = (magnitude.numer(), magnitude.denom());
            if monomial.is_one() {
                write!(f, "{}", numer)?;
            } else {
                if !numer.is_one() {
                    write!(f, "{}*", numer)?;
                }
                write!(f, "{}", monomial)?;
            }
            if !denom.is_one() {
                write!(f, "/{}", denom)?;
            }
        }
        Ok(())
    }
}
