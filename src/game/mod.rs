//! The AKQ game and its payoff model.
//!
//! ## Game Rules
//!
//! - 3 cards: Ace, King, Queen (Ace highest)
//! - 2 players, antes already in the pot (2 chips by default)
//! - Each player receives 1 card
//! - Player 1 checks or bets a fixed amount (1 chip by default)
//! - Player 2 calls or folds facing a bet; a check goes to showdown
//!
//! ## Restricted Strategy Space
//!
//! Dominated choices are fixed: Player 1 always bets the Ace and checks the
//! King, Player 2 always calls with the Ace and folds the Queen. Two free
//! parameters remain:
//!
//! - `b`: Player 1 bluffs with the Queen
//! - `c`: Player 2 calls a bet with the King
//!
//! ## Known Equilibrium (pot 2, bet 1)
//!
//! `b = 1/3`, `c = 1/3`, Player 1 EV = 19/18.

pub mod config;
pub mod payoff;
pub mod rank;
pub mod scenario;
pub mod strategy;

pub use config::{ConfigError, GameConfig};
pub use payoff::{expected_value, symbolic_expected_value, PayoffModel, ScenarioTable};
pub use rank::Rank;
pub use scenario::Scenario;
pub use strategy::{ActionProfile, Strategy};
