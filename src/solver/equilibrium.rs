//! Exact equilibrium of the restricted AKQ game.
//!
//! Each player's payoff is linear in their own mixing probability, so at a
//! mixed equilibrium each player's opponent must make them indifferent:
//!
//! ```text
//! ∂E/∂b = 0   solved for c   (caller keeps the bluffer indifferent)
//! ∂E/∂c = 0   solved for b   (bluffer keeps the caller indifferent)
//! ```
//!
//! Solving ∂E/∂b for `b` itself would be meaningless: the bilinear terms
//! cancel and `b` no longer appears. Solutions outside `[0, 1]` are clamped
//! to the nearest pure strategy.

use log::info;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::algebra::rational::serde_str;
use crate::algebra::{Poly, Rational, Symbol, Symbols};
use crate::error::{Result, SolveError};
use crate::game::{ActionProfile, GameConfig, PayoffModel, ScenarioTable};
use crate::solver::clamp::clamp_probability;

/// Solves the two indifference conditions of the AKQ game.
///
/// # Example
/// ```
/// use akq_solver::{EquilibriumSolver, GameConfig};
/// use akq_solver::algebra::ratio;
///
/// let eq = EquilibriumSolver::new(GameConfig::default()).solve().unwrap();
/// assert_eq!(eq.bet, ratio(1, 3));
/// assert_eq!(eq.call, ratio(1, 3));
/// assert_eq!(eq.payoff, ratio(19, 18));
/// ```
#[derive(Debug, Clone)]
pub struct EquilibriumSolver {
    config: GameConfig,
    symbols: Symbols,
    bettor: ActionProfile,
    caller: ActionProfile,
}

impl EquilibriumSolver {
    /// Solver over the standard profiles: Queen bluffs with `b`, King calls with `c`.
    pub fn new(config: GameConfig) -> Self {
        let symbols = Symbols::new();
        let bettor = ActionProfile::bettor(symbols.bet.clone());
        let caller = ActionProfile::caller(symbols.call.clone());
        Self {
            config,
            symbols,
            bettor,
            caller,
        }
    }

    /// Solver over custom profiles.
    ///
    /// `symbols.bet` is the first player's free parameter and
    /// `symbols.call` the second player's, wherever the profiles place them.
    pub fn with_profiles(
        config: GameConfig,
        symbols: Symbols,
        bettor: ActionProfile,
        caller: ActionProfile,
    ) -> Self {
        Self {
            config,
            symbols,
            bettor,
            caller,
        }
    }

    /// The game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The free parameters.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// The unsolved expected value E(b, c).
    pub fn expected_value(&self) -> Poly {
        PayoffModel::new(&self.config).expected_value(&self.bettor, &self.caller)
    }

    /// Per-deal values behind [`expected_value`](Self::expected_value).
    pub fn scenario_table(&self) -> ScenarioTable {
        PayoffModel::new(&self.config).scenario_table(&self.bettor, &self.caller)
    }

    /// Compute the equilibrium.
    ///
    /// # Errors
    /// Returns [`Error::Config`](crate::Error::Config) for an invalid game and
    /// [`Error::Solve`](crate::Error::Solve) when an indifference equation has
    /// no unique numeric solution.
    pub fn solve(&self) -> Result<Equilibrium> {
        self.config.validate()?;

        let ev = self.expected_value();
        info!("raw EV: {}", ev);

        let (b, c) = (&self.symbols.bet, &self.symbols.call);

        let raw_call = solve_constant(&ev.diff(b), c)?;
        let call = clamp_probability(raw_call.clone());

        let raw_bet = solve_constant(&ev.diff(c), b)?;
        let bet = clamp_probability(raw_bet.clone());

        let payoff = ev.eval(&[(b, bet.clone()), (c, call.clone())])?;
        info!(
            "bet size {}: {} = {}, {} = {}, EV = {}",
            self.config.bet_size, b, bet, c, call, payoff
        );

        Ok(Equilibrium {
            config: self.config.clone(),
            expected_value: ev.to_string(),
            raw_bet,
            raw_call,
            bet,
            call,
            payoff,
        })
    }
}

/// Solve `equation = 0` for `symbol` and require a numeric answer.
fn solve_constant(equation: &Poly, symbol: &Symbol) -> std::result::Result<Rational, SolveError> {
    let solution = equation.solve_for(symbol)?;
    solution
        .as_constant()
        .ok_or_else(|| SolveError::Unresolved(solution.to_string()))
}

/// Result of an equilibrium solve. All values are exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equilibrium {
    /// The game that was solved.
    pub config: GameConfig,

    /// The unsolved expected value, as printed.
    pub expected_value: String,

    /// Bluff frequency before clamping.
    #[serde(with = "serde_str")]
    pub raw_bet: Rational,

    /// Call frequency before clamping.
    #[serde(with = "serde_str")]
    pub raw_call: Rational,

    /// First player's equilibrium bluff frequency with the Queen.
    #[serde(with = "serde_str")]
    pub bet: Rational,

    /// Second player's equilibrium call frequency with the King.
    #[serde(with = "serde_str")]
    pub call: Rational,

    /// First player's expected value at the equilibrium.
    #[serde(with = "serde_str")]
    pub payoff: Rational,
}

impl Equilibrium {
    /// Whether the bluff frequency hit a bound.
    pub fn bet_clamped(&self) -> bool {
        self.bet != self.raw_bet
    }

    /// Whether the call frequency hit a bound.
    pub fn call_clamped(&self) -> bool {
        self.call != self.raw_call
    }

    /// Whether both players mix strictly between their pure strategies.
    pub fn is_interior(&self) -> bool {
        let inside = |x: &Rational| *x > Rational::zero() && *x < Rational::one();
        inside(&self.bet) && inside(&self.call)
    }
}

/// Solve the standard AKQ game for `config`.
pub fn find_equilibrium(config: &GameConfig) -> Result<Equilibrium> {
    EquilibriumSolver::new(config.clone()).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{int, ratio, to_f64};
    use crate::game::{Rank, Strategy};
    use crate::solver::clamp::is_probability;
    use crate::Error;

    fn r(n: i64, d: i64) -> Rational {
        ratio(n, d)
    }

    #[test]
    fn test_default_equilibrium() {
        let eq = find_equilibrium(&GameConfig::default()).unwrap();
        assert_eq!(eq.bet, r(1, 3));
        assert_eq!(eq.call, r(1, 3));
        assert_eq!(eq.payoff, r(19, 18));
        assert!(eq.payoff > int(0));
        assert!(is_probability(&eq.bet) && is_probability(&eq.call));
        assert!(eq.is_interior());
        assert!(!eq.bet_clamped() && !eq.call_clamped());
        assert_eq!(eq.expected_value, "-b*c/2 + b/6 + c/6 + 1");
    }

    #[test]
    fn test_matches_closed_form_over_bet_sizes() {
        // c = (pot - s) / (pot + s), b = s / (pot + s)
        let pot = int(2);
        for s in [r(1, 4), r(1, 2), int(1), r(3, 2), int(2), int(3), int(10)] {
            let config = GameConfig::new().with_bet_size(s.clone());
            let eq = find_equilibrium(&config).unwrap();
            let call = (&pot - &s) / (&pot + &s);
            assert_eq!(eq.call, clamp_probability(call.clone()));
            assert_eq!(eq.raw_call, call);
            assert_eq!(eq.bet, &s / (&pot + &s));
        }
    }

    #[test]
    fn test_large_coprime_denominators_stay_exact() {
        let pot = r(1, 3_000_000_017);
        let s = r(1, 3_000_000_019);
        let config = GameConfig::new().with_pot(pot.clone()).with_bet_size(s.clone());
        let eq = find_equilibrium(&config).unwrap();

        let b = &s / (&pot + &s);
        let c = (&pot - &s) / (&pot + &s);
        assert_eq!(eq.bet, b);
        assert_eq!(eq.call, c);
        assert!(eq.is_interior());

        // 6E = 3p + sc - bs + bp - bcp - bcs
        let bc = &b * &c;
        let six_e = int(3) * &pot + &s * &c - &b * &s + &b * &pot - &bc * &pot - &bc * &s;
        assert_eq!(eq.payoff, six_e / int(6));
        assert!((to_f64(&eq.payoff) - 1.6667e-10).abs() < 1e-13);
    }

    #[test]
    fn test_overbet_clamps_call_to_zero() {
        let eq = find_equilibrium(&GameConfig::new().with_bet_size(int(4))).unwrap();
        assert_eq!(eq.raw_call, r(-1, 3));
        assert_eq!(eq.call, int(0));
        assert!(eq.call_clamped());
        assert_eq!(eq.bet, r(2, 3));
        assert_eq!(eq.payoff, r(7, 9));
    }

    #[test]
    fn test_pot_sized_bet() {
        let eq = find_equilibrium(&GameConfig::pot_sized()).unwrap();
        assert_eq!(eq.call, int(0));
        assert!(!eq.call_clamped());
        assert_eq!(eq.bet, r(1, 2));
        assert_eq!(eq.payoff, int(1));
    }

    #[test]
    fn test_zero_bet_size() {
        let eq = find_equilibrium(&GameConfig::new().with_bet_size(int(0))).unwrap();
        assert_eq!(eq.bet, int(0));
        assert_eq!(eq.call, int(1));
        assert_eq!(eq.payoff, int(1));
    }

    #[test]
    fn test_strategies_invariant_under_scaling() {
        let base = find_equilibrium(&GameConfig::default()).unwrap();
        for k in [2, 3, 10] {
            let config = GameConfig::new().with_pot(int(2 * k)).with_bet_size(int(k));
            let eq = find_equilibrium(&config).unwrap();
            assert_eq!(eq.bet, base.bet);
            assert_eq!(eq.call, base.call);
            assert_eq!(eq.payoff, &base.payoff * int(k));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = find_equilibrium(&GameConfig::new().with_pot(int(0))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_king_bet_parameter_has_no_solution() {
        let symbols = Symbols::new();
        let bettor = ActionProfile::bettor(int(0)).with(Rank::King, symbols.bet.clone());
        let caller = ActionProfile::caller(symbols.call.clone());
        let solver =
            EquilibriumSolver::with_profiles(GameConfig::default(), symbols, bettor, caller);

        let err = solver.solve().unwrap_err();
        assert!(matches!(err, Error::Solve(SolveError::NoSolution { .. })));
    }

    #[test]
    fn test_fixed_call_is_indeterminate() {
        let symbols = Symbols::new();
        let bettor = ActionProfile::bettor(symbols.bet.clone());
        let caller = ActionProfile::caller(Strategy::Fixed(r(1, 3)));
        let solver =
            EquilibriumSolver::with_profiles(GameConfig::default(), symbols, bettor, caller);

        let err = solver.solve().unwrap_err();
        assert!(matches!(err, Error::Solve(SolveError::Indeterminate { .. })));
    }

    #[test]
    fn test_table_is_consistent_with_expected_value() {
        let solver = EquilibriumSolver::new(GameConfig::default());
        assert_eq!(solver.scenario_table().total(), solver.expected_value() * int(6));
    }

    #[test]
    fn test_equilibrium_serializes() {
        let eq = find_equilibrium(&GameConfig::default()).unwrap();
        let json = serde_json::to_string(&eq).unwrap();
        assert!(json.contains(r#""payoff":"19/18""#));
        let back: Equilibrium = serde_json::from_str(&json).unwrap();
        assert_eq!(back, eq);
    }
}
