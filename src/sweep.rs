//! Equilibria across a range of bet sizes.
//!
//! Every bet size is an independent exact solve, so the sweep fans out over
//! rayon's thread pool and collects results in input order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algebra::{int, Rational};
use crate::error::Result;
use crate::game::GameConfig;
use crate::solver::{find_equilibrium, Equilibrium};

/// Evenly spaced bet sizes from `from` to `to` inclusive.
///
/// `steps` is the number of intervals, so `steps + 1` sizes are returned.
/// A zero `steps` yields just `from`.
pub fn bet_sizes(from: Rational, to: Rational, steps: u32) -> Vec<Rational> {
    if steps == 0 {
        return vec![from];
    }
    let width = (to - &from) / int(steps as i64);
    (0..=steps).map(|i| &from + &width * int(i as i64)).collect()
}

/// Solve one equilibrium per bet size, keeping the pot from `base`.
///
/// Fails if any bet size cannot be solved. Sizes are solved in parallel, so
/// when several fail the returned error may come from any of them.
pub fn sweep(
    base: &GameConfig,
    sizes: &[Rational],
    show_progress: bool,
) -> Result<Vec<Equilibrium>> {
    let pb = if show_progress {
        let pb = ProgressBar::new(sizes.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results = sizes
        .par_iter()
        .map(|size| {
            let eq = find_equilibrium(&base.clone().with_bet_size(size.clone()));
            pb.inc(1);
            eq
        })
        .collect::<Result<Vec<_>>>();

    pb.finish_and_clear();
    results
}

/// Serializable sweep output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Pot shared by every point.
    pub pot: String,
    /// One equilibrium per bet size, in sweep order.
    pub points: Vec<Equilibrium>,
}

impl SweepReport {
    /// Wrap sweep results.
    pub fn new(base: &GameConfig, points: Vec<Equilibrium>) -> Self {
        Self {
            pot: base.pot.to_string(),
            points,
        }
    }

    /// Write the report as pretty JSON.
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
    use crate::algebra::ratio;

    #[test]
    fn test_bet_sizes_grid() {
        let sizes = bet_sizes(int(0), int(2), 4);
        assert_eq!(
            sizes,
            vec![int(0), ratio(1, 2), int(1), ratio(3, 2), int(2)]
        );
        assert_eq!(bet_sizes(int(1), int(5), 0), vec![int(1)]);
    }

    #[test]
    fn test_sweep_keeps_order_and_clamps_overbets() {
        let base = GameConfig::default();
        let sizes = bet_sizes(ratio(1, 2), int(4), 7);
        let points = sweep(&base, &sizes, false).unwrap();

        assert_eq!(points.len(), sizes.len());
        for (eq, size) in points.iter().zip(&sizes) {
            assert_eq!(eq.config.bet_size, *size);
            assert_eq!(eq.config.pot, base.pot);
            if *size > base.pot {
                assert_eq!(eq.call, int(0));
            }
        }
        // Bluffing rises and calling falls with the bet size.
        assert!(points.windows(2).all(|w| w[0].bet < w[1].bet));
        assert!(points.windows(2).all(|w| w[0].call >= w[1].call));
    }

    #[test]
    fn test_sweep_propagates_errors() {
        let sizes = vec![int(1), int(-1)];
        assert!(sweep(&GameConfig::default(), &sizes, false).is_err());
    }

    #[test]
    fn test_report_json() {
        let base = GameConfig::default();
        let points = sweep(&base, &[int(1)], false).unwrap();
        let report = SweepReport::new(&base, points);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""pot":"2""#));
        assert!(json.contains(r#""payoff":"19/18""#));
    }
}
