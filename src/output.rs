//! Text and JSON output for solver results.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algebra::to_f64;
use crate::error::Result;
use crate::game::{Rank, ScenarioTable};
use crate::solver::Equilibrium;

const CELL_WIDTH: usize = 12;

/// Render a scenario table as a grid.
///
/// ```text
///        A           K           Q
/// A|     0         c + 2         2
/// ```
pub fn format_table(table: &ScenarioTable) -> String {
    let mut out = String::from("\n  ");
    for rank in Rank::ALL {
        out.push_str(&format!("{:^width$}", rank.label(), width = CELL_WIDTH));
    }
    out.push('\n');

    for (rank, row) in table.rows() {
        out.push(rank.label());
        out.push('|');
        for cell in row {
            out.push_str(&format!("{:^width$}", cell.to_string(), width = CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}

/// Print a scenario table to stdout.
pub fn print_table(table: &ScenarioTable) {
    println!("{}", format_table(table));
}

/// Human-readable summary of an equilibrium.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquilibriumReport {
    /// Solved game and exact values.
    pub equilibrium: Equilibrium,
    /// Bluff frequency as a decimal.
    pub bet_approx: f64,
    /// Call frequency as a decimal.
    pub call_approx: f64,
    /// Payoff as a decimal.
    pub payoff_approx: f64,
}

impl EquilibriumReport {
    /// Build a report from a solved equilibrium.
    pub fn new(equilibrium: Equilibrium) -> Self {
        Self {
            bet_approx: to_f64(&equilibrium.bet),
            call_approx: to_f64(&equilibrium.call),
            payoff_approx: to_f64(&equilibrium.payoff),
            equilibrium,
        }
    }

    /// Print the result lines.
    pub fn print_summary(&self) {
        let eq = &self.equilibrium;
        println!("Raw EV: {}", eq.expected_value);
        println!("Bet with Queen: {}", eq.bet);
        println!("Call with King: {}", eq.call);
        println!("EV: {} ({:.4})", eq.payoff, self.payoff_approx);
    }

    /// Save as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Symbols;
    use crate::game::{ActionProfile, GameConfig, PayoffModel};
    use crate::solver::find_equilibrium;

    #[test]
    fn test_table_layout() {
        let symbols = Symbols::new();
        let table = PayoffModel::new(&GameConfig::default()).scenario_table(
            &ActionProfile::bettor(symbols.bet.clone()),
            &ActionProfile::caller(symbols.call.clone()),
        );
        let text = format_table(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1].trim(), "A           K           Q");
        assert!(lines[2].starts_with("A|"));
        assert!(lines[3].starts_with("K|"));
        assert!(lines[4].starts_with("Q|"));
        assert!(lines[2].contains("c + 2"));
        assert!(lines[4].contains("-b"));
        assert_eq!(lines[2].len(), 2 + 3 * CELL_WIDTH);
    }

    #[test]
    fn test_report() {
        let eq = find_equilibrium(&GameConfig::default()).unwrap();
        let report = EquilibriumReport::new(eq);
        assert!((report.bet_approx - 1.0 / 3.0).abs() < 1e-12);
        assert!((report.payoff_approx - 19.0 / 18.0).abs() < 1e-12);

        let path = std::env::temp_dir().join(format!("akq_report_{}.json", std::process::id()));
        report.save_json(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let back: EquilibriumReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.equilibrium, report.equilibrium);
    }
}
