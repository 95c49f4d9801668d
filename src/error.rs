//! Error types for the AKQ solver.

use thiserror::Error;

use crate::game::config::ConfigError;

/// Failures while solving an equation for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The equation does not involve the target symbol and is not identically zero.
    #[error("equation {equation} = 0 has no solution for `{symbol}`")]
    NoSolution {
        /// The target symbol.
        symbol: String,
        /// The equation left-hand side.
        equation: String,
    },

    /// The equation is identically zero, every value is a solution.
    #[error("equation for `{symbol}` is identically zero")]
    Indeterminate {
        /// The target symbol.
        symbol: String,
    },

    /// The target symbol appears non-linearly or with a non-constant coefficient.
    #[error("equation {equation} = 0 is not linear in `{symbol}`")]
    Nonlinear {
        /// The target symbol.
        symbol: String,
        /// The equation left-hand side.
        equation: String,
    },

    /// A result still depends on a free symbol where a number is required.
    #[error("expression {0} still contains free symbols")]
    Unresolved(String),
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid game configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Equilibrium equation could not be solved.
    #[error("solve error: {0}")]
    Solve(#[from] SolveError),

    /// A strategy parameter was free where a fixed probability is required.
    #[error("strategy parameter `{0}` must be fixed")]
    Unbound(String),

    /// Malformed rational literal.
    #[error("cannot parse `{0}` as a rational number")]
    Parse(String),

    /// File access failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
