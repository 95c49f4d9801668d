//! # AKQ Solver
//!
//! Exact Nash equilibrium of the AKQ game: a three-card, one-bet poker game
//! with a fixed ante.
//!
//! ## Features
//!
//! - **Exact Algebra**: Probabilities are symbols, payoffs are polynomials
//!   with rational coefficients
//! - **Closed-Form Payoff Model**: Expected value built from the six deals
//! - **Exact Equilibrium**: Cross-solved first-order conditions with
//!   clamping, no iteration
//! - **Bet-Size Sweeps**: Parallel solves across many bet sizes
//! - **Monte Carlo Check**: Simulated play against the closed form
//!
//! ## Quick Start
//!
//! ```
//! use akq_solver::{find_equilibrium, GameConfig};
//! use akq_solver::algebra::ratio;
//!
//! let eq = find_equilibrium(&GameConfig::default()).unwrap();
//! assert_eq!(eq.bet, ratio(1, 3));
//! assert_eq!(eq.call, ratio(1, 3));
//! assert_eq!(eq.payoff, ratio(19, 18));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                  algebra (Symbol, Poly, Rational)             │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │   game: Rank, ActionProfile, Scenario → PayoffModel → E(b,c)  │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │   solver: ∂E/∂b = 0 → c,  ∂E/∂c = 0 → b,  clamp, substitute   │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//!         ┌─────────────────────┼─────────────────────┐
//!         ▼                     ▼                     ▼
//!    ┌─────────┐         ┌───────────┐         ┌────────────┐
//!    │ output  │         │   sweep   │         │ simulation │
//!    └─────────┘         └───────────┘         └────────────┘
//! ```

#![warn(missing_docs)]

/// Exact symbolic algebra.
pub mod algebra;

/// Error types.
pub mod error;

/// The AKQ game and its payoff model.
pub mod game;

/// Text and JSON presentation of results.
pub mod output;

/// Monte Carlo play.
pub mod simulation;

/// Exact equilibrium solver.
pub mod solver;

/// Equilibria across bet sizes.
pub mod sweep;

pub use error::{Error, Result, SolveError};
pub use game::{expected_value, ActionProfile, GameConfig, PayoffModel, Rank, Strategy};
pub use solver::{find_equilibrium, Equilibrium, EquilibriumSolver};
