//! Monte Carlo play of the AKQ game.
//!
//! Deals random hands and samples both players' actions from fixed
//! probabilities. The running average converges to the closed-form expected
//! value, which makes this an independent check on the payoff model.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::algebra::to_f64;
use crate::error::Result;
use crate::game::{ActionProfile, GameConfig, Rank};
use crate::solver::Equilibrium;

/// Summary of a simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Hands played.
    pub hands: u64,
    /// Average payoff to the first player.
    pub mean: f64,
    /// Standard error of `mean`.
    pub std_error: f64,
    /// Wall-clock time in seconds.
    pub elapsed_seconds: f64,
}

impl SimulationStats {
    /// Whether `value` is within `sigmas` standard errors of the mean.
    pub fn agrees_with(&self, value: f64, sigmas: f64) -> bool {
        (self.mean - value).abs() <= sigmas * self.std_error
    }
}

/// Plays hands between two fixed strategies.
pub struct Simulator {
    pot: f64,
    bet_size: f64,
    bet_probs: [f64; 3],
    call_probs: [f64; 3],
    rng: StdRng,
}

impl Simulator {
    /// Create a simulator. Every profile entry must be fixed.
    ///
    /// With `seed` set, runs are reproducible.
    pub fn new(
        config: &GameConfig,
        bettor: &ActionProfile,
        caller: &ActionProfile,
        seed: Option<u64>,
    ) -> Result<Self> {
        config.validate()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            pot: to_f64(&config.pot),
            bet_size: to_f64(&config.bet_size),
            bet_probs: bettor.to_probabilities()?,
            call_probs: caller.to_probabilities()?,
            rng,
        })
    }

    /// Simulator playing the strategies of a solved equilibrium.
    pub fn from_equilibrium(eq: &Equilibrium, seed: Option<u64>) -> Result<Self> {
        Self::new(
            &eq.config,
            &ActionProfile::bettor(eq.bet.clone()),
            &ActionProfile::caller(eq.call.clone()),
            seed,
        )
    }

    fn deal(&mut self) -> (Rank, Rank) {
        let mut cards = Rank::ALL;
        // Fisher-Yates
        for i in (1..cards.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            cards.swap(i, j);
        }
        (cards[0], cards[1])
    }

    /// Play one hand and return the first player's payoff.
    pub fn play_hand(&mut self) -> f64 {
        let (first, second) = self.deal();
        let wins = first.beats(second);

        if self.rng.gen::<f64>() < self.bet_probs[first.index()] {
            if self.rng.gen::<f64>() < self.call_probs[second.index()] {
                if wins {
                    self.pot + self.bet_size
                } else {
                    -self.bet_size
                }
            } else {
                self.pot
            }
        } else if wins {
            self.pot
        } else {
            0.0
        }
    }

    /// Play `hands` hands.
    pub fn run(&mut self, hands: u64) -> SimulationStats {
        let start = Instant::now();
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..hands {
            let payoff = self.play_hand();
            sum += payoff;
            sum_sq += payoff * payoff;
        }

        if hands == 0 {
            return SimulationStats::default();
        }
        let n = hands as f64;
        let mean = sum / n;
        let variance = (sum_sq / n - mean * mean).max(0.0);
        SimulationStats {
            hands,
            mean,
            std_error: (variance / n).sqrt(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    }
}
