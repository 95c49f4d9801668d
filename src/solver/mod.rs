//! Equilibrium solver.
//!
//! Builds the expected value E(b, c) through the payoff model, then solves
//! the cross first-order conditions exactly:
//!
//! 1. ∂E/∂b = 0 solved for `c`, clamped to `[0, 1]`
//! 2. ∂E/∂c = 0 solved for `b`, clamped to `[0, 1]`
//! 3. E evaluated at `(b, c)` gives the equilibrium payoff
//!
//! There is no iteration and no floating point: the result for the default
//! game is exactly `b = c = 1/3` with payoff `19/18`.

pub mod clamp;
pub mod equilibrium;

pub use clamp::{clamp_probability, is_probability};
pub use equilibrium::{find_equilibrium, Equilibrium, EquilibriumSolver};
