//! Configuration for the AKQ game.
//!
//! The game is fully described by the pot both players are contesting
//! (after antes) and the single bet size the first player may use.

use std::fs;
use std::path::Path;

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algebra::rational::{int, serde_str, Rational};
use crate::error::Result;

/// Pot and bet size for one solve.
///
/// Both values are exact rationals so the equilibrium stays exact.
///
/// # Example
/// ```
/// use akq_solver::GameConfig;
/// use akq_solver::algebra::int;
///
/// let config = GameConfig::default();
/// assert_eq!(config.pot, int(2));
/// assert_eq!(config.bet_size, int(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Chips in the pot before the first player acts.
    #[serde(with = "serde_str", default = "default_pot")]
    pub pot: Rational,

    /// The only bet size available to the first player.
    #[serde(with = "serde_str", default = "default_bet_size")]
    pub bet_size: Rational,
}

fn default_pot() -> Rational {
    int(2)
}

fn default_bet_size() -> Rational {
    int(1)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pot: default_pot(),
            bet_size: default_bet_size(),
        }
    }
}

impl GameConfig {
    /// Create a config with the default pot of 2 and bet of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bet the size of the pot.
    pub fn pot_sized() -> Self {
        Self {
            bet_size: default_pot(),
            ..Default::default()
        }
    }

    /// Bet half the pot.
    pub fn half_pot() -> Self {
        Self::default()
    }

    /// Builder method: set the pot.
    pub fn with_pot(mut self, pot: Rational) -> Self {
        self.pot = pot;
        self
    }

    /// Builder method: set the bet size.
    pub fn with_bet_size(mut self, bet_size: Rational) -> Self {
        self.bet_size = bet_size;
        self
    }

    /// Bet size as a fraction of the pot.
    pub fn bet_to_pot(&self) -> Rational {
        &self.bet_size / &self.pot
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.pot <= Rational::zero() {
            return Err(ConfigError::InvalidPot(self.pot.clone()));
        }
        if self.bet_size < Rational::zero() {
            return Err(ConfigError::InvalidBetSize(self.bet_size.clone()));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Errors that can occur when validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The pot must be positive.
    #[error("pot {0} must be positive")]
    InvalidPot(Rational),
    /// The bet size must not be negative.
    #[error("bet size {0} must not be negative")]
    InvalidBetSize(Rational),
}
