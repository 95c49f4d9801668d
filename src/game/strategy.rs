//! Action probabilities and per-player action profiles.

use std::fmt;

use num_traits::{One, Zero};

use crate::algebra::{Poly, Rational, Symbol};
use crate::game::rank::Rank;

/// Source of one action probability: a number or a free parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// A fixed probability.
    Fixed(Rational),
    /// A symbolic probability left for the solver.
    Free(Symbol),
}

impl Strategy {
    /// Always take the action.
    pub fn always() -> Self {
        Strategy::Fixed(Rational::one())
    }

    /// Never take the action.
    pub fn never() -> Self {
        Strategy::Fixed(Rational::zero())
    }

    /// The fixed value, if any.
    pub fn as_fixed(&self) -> Option<Rational> {
        match self {
            Strategy::Fixed(p) => Some(p.clone()),
            Strategy::Free(_) => None,
        }
    }

    /// The probability as a polynomial.
    pub fn to_poly(&self) -> Poly {
        match self {
            Strategy::Fixed(p) => Poly::constant(p.clone()),
            Strategy::Free(symbol) => Poly::symbol(symbol),
        }
    }
}

impl From<Rational> for Strategy {
    fn from(p: Rational) -> Self {
        Strategy::Fixed(p)
    }
}

impl From<Symbol> for Strategy {
    fn from(symbol: Symbol) -> Self {
        Strategy::Free(symbol)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Fixed(p) => write!(f, "{}", p),
            Strategy::Free(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// Rank → probability of the aggressive action (bet for the first player,
/// call for the second).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionProfile {
    entries: [Strategy; 3],
}

impl ActionProfile {
    /// Build a profile from explicit Ace, King and Queen entries.
    pub fn new(ace: Strategy, king: Strategy, queen: Strategy) -> Self {
        Self {
            entries: [ace, king, queen],
        }
    }

    /// First player's profile: value-bet the Ace, check the King, bluff
    /// the Queen with probability `bluff`.
    pub fn bettor(bluff: impl Into<Strategy>) -> Self {
        Self::new(Strategy::always(), Strategy::never(), bluff.into())
    }

    /// Second player's profile: call with the Ace, call with the King with
    /// probability `call`, fold the Queen.
    pub fn caller(call: impl Into<Strategy>) -> Self {
        Self::new(Strategy::always(), call.into(), Strategy::never())
    }

    /// Entry for `rank`.
    pub fn get(&self, rank: Rank) -> &Strategy {
        &self.entries[rank.index()]
    }

    /// Replace the entry for `rank`.
    pub fn with(mut self, rank: Rank, strategy: impl Into<Strategy>) -> Self {
        self.entries[rank.index()] = strategy.into();
        self
    }

    /// Free parameters used by this profile.
    pub fn free_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.iter().filter_map(|s| match s {
            Strategy::Free(symbol) => Some(symbol),
            Strategy::Fixed(_) => None,
        })
    }

    /// Entries as `f64`, failing on the first free parameter.
    pub fn to_probabilities(&self) -> crate::Result<[f64; 3]> {
        let mut out = [0.0; 3];
        for (slot, strategy) in out.iter_mut().zip(&self.entries) {
            *slot = match strategy {
                Strategy::Fixed(p) => crate::algebra::to_f64(p),
                Strategy::Free(symbol) => {
                    return Err(crate::Error::Unbound(symbol.to_string()))
                }
            };
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{int, ratio};

    #[test]
    fn test_default_profiles() {
        let b = Symbol::new("b");
        let c = Symbol::new("c");
        let bettor = ActionProfile::bettor(b.clone());
        let caller = ActionProfile::caller(c.clone());

        assert_eq!(bettor.get(Rank::Ace), &Strategy::always());
        assert_eq!(bettor.get(Rank::King), &Strategy::never());
        assert_eq!(bettor.get(Rank::Queen), &Strategy::Free(b));

        assert_eq!(caller.get(Rank::Ace), &Strategy::always());
        assert_eq!(caller.get(Rank::King), &Strategy::Free(c));
        assert_eq!(caller.get(Rank::Queen), &Strategy::never());
    }

    #[test]
    fn test_with_and_free_symbols() {
        let b = Symbol::new("b");
        let profile = ActionProfile::bettor(int(0)).with(Rank::King, b.clone());
        let free: Vec<_> = profile.free_symbols().cloned().collect();
        assert_eq!(free, vec![b]);
        assert!(profile.to_probabilities().is_err());
    }

    #[test]
    fn test_to_probabilities() {
        let profile = ActionProfile::caller(ratio(1, 4));
        assert_eq!(profile.to_probabilities().unwrap(), [1.0, 0.25, 0.0]);
    }

    #[test]
    fn test_to_poly() {
        let x = Symbol::new("x");
        assert_eq!(Strategy::Free(x.clone()).to_poly(), Poly::symbol(&x));
        assert_eq!(Strategy::always().to_poly(), Poly::constant(int(1)));
        assert_eq!(Strategy::never().to_poly(), Poly::zero());
    }
}
