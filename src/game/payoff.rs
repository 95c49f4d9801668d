//! Closed-form expected value of the AKQ game.
//!
//! ## Payoff Rule
//!
//! For one deal, with `b` the first player's bet probability for their card
//! and `c` the second player's call probability for theirs:
//!
//! ```text
//!                   bet                       check
//! first wins    pot + bet_size·c              pot
//! first loses   (1−c)·pot − c·bet_size        0
//!
//! value = b·bet + (1−b)·check
//! ```
//!
//! Values are measured after antes, so winning at showdown is worth the
//! whole pot. The expected value is the plain average over the six deals.

use num_traits::One;

use crate::algebra::{int, Poly, Rational, Symbols};
use crate::game::config::GameConfig;
use crate::game::rank::Rank;
use crate::game::scenario::Scenario;
use crate::game::strategy::{ActionProfile, Strategy};

/// Per-deal values laid out as a 3×3 grid.
///
/// Rows are the first player's card, columns the second player's, both in
/// A, K, Q order. The diagonal cannot be dealt and holds zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioTable {
    cells: [[Poly; 3]; 3],
}

impl ScenarioTable {
    fn new() -> Self {
        Self {
            cells: Default::default(),
        }
    }

    /// Value for the given pair of cards.
    pub fn get(&self, first: Rank, second: Rank) -> &Poly {
        &self.cells[first.index()][second.index()]
    }

    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = (Rank, &[Poly; 3])> {
        Rank::ALL.into_iter().zip(self.cells.iter())
    }

    /// Sum over every dealt (off-diagonal) cell.
    pub fn total(&self) -> Poly {
        Scenario::all()
            .map(|s| self.get(s.first(), s.second()).clone())
            .sum()
    }
}

/// Builds expected-value expressions for a fixed pot and bet size.
#[derive(Debug, Clone)]
pub struct PayoffModel {
    pot: Rational,
    bet_size: Rational,
}

impl PayoffModel {
    /// Create a model from a game config.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pot: config.pot.clone(),
            bet_size: config.bet_size.clone(),
        }
    }

    /// First player's value for one deal.
    pub fn scenario_value(
        &self,
        scenario: Scenario,
        bettor: &ActionProfile,
        caller: &ActionProfile,
    ) -> Poly {
        let b = bettor.get(scenario.first()).to_poly();
        let c = caller.get(scenario.second()).to_poly();
        let pot = Poly::constant(self.pot.clone());

        let (bet_value, check_value) = if scenario.first_wins() {
            (&pot + &(c * self.bet_size.clone()), pot)
        } else {
            let fold = Poly::constant(Rational::one()) - c.clone();
            (
                &(fold * self.pot.clone()) - &(c * self.bet_size.clone()),
                Poly::zero(),
            )
        };

        let check_weight = Poly::constant(Rational::one()) - b.clone();
        &(&b * &bet_value) + &(&check_weight * &check_value)
    }

    /// Per-deal values for every matchup.
    pub fn scenario_table(&self, bettor: &ActionProfile, caller: &ActionProfile) -> ScenarioTable {
        let mut table = ScenarioTable::new();
        for scenario in Scenario::all() {
            let value = self.scenario_value(scenario, bettor, caller);
            log::debug!("{}: {}", scenario, value);
            table.cells[scenario.first().index()][scenario.second().index()] = value;
        }
        table
    }

    /// Average value to the first player over all deals.
    pub fn expected_value(&self, bettor: &ActionProfile, caller: &ActionProfile) -> Poly {
        self.expected_value_with_table(bettor, caller).0
    }

    /// Average value together with the per-deal table it was built from.
    pub fn expected_value_with_table(
        &self,
        bettor: &ActionProfile,
        caller: &ActionProfile,
    ) -> (Poly, ScenarioTable) {
        let table = self.scenario_table(bettor, caller);
        // Sum first, divide once: every deal is equally likely.
        let ev = table.total() / int(Scenario::COUNT as i64);
        (ev, table)
    }
}

/// Expected value for the first player's Queen bet probability `bet` and
/// the second player's King call probability `call`.
pub fn expected_value(
    bet: impl Into<Strategy>,
    call: impl Into<Strategy>,
    config: &GameConfig,
) -> Poly {
    let bettor = ActionProfile::bettor(bet);
    let caller = ActionProfile::caller(call);
    PayoffModel::new(config).expected_value(&bettor, &caller)
}

/// Expected value with both parameters left free.
pub fn symbolic_expected_value(symbols: &Symbols, config: &GameConfig) -> Poly {
    expected_value(symbols.bet.clone(), symbols.call.clone(), config)
}
