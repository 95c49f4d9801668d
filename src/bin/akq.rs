//! AKQ equilibrium solver binary.
//!
//! Usage:
//!   akq ev [--bet B] [--call C] [--pot P] [--bet-size S] [--no-table]
//!   akq solve [--pot P] [--bet-size S] [--config FILE] [--table] [--json FILE]
//!   akq sweep --from X --to Y --steps N [--pot P] [--json FILE]
//!   akq simulate [--hands N] [--seed N] [--pot P] [--bet-size S]
//!
//! Numbers accept `n`, `n/d` or decimals. Set `RUST_LOG=debug` to see
//! per-deal values.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};

use akq_solver::algebra::{parse_rational, to_f64, Rational, Symbol, Symbols};
use akq_solver::output::{print_table, EquilibriumReport};
use akq_solver::simulation::Simulator;
use akq_solver::sweep::{bet_sizes, sweep, SweepReport};
use akq_solver::{ActionProfile, EquilibriumSolver, GameConfig, PayoffModel, Result, Strategy};

#[derive(Parser)]
#[command(name = "akq")]
#[command(about = "Exact equilibrium of the AKQ three-card poker game")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Expected value for given (or free) strategies
    Ev {
        /// Queen bluff frequency (free if omitted)
        #[arg(long, value_parser = parse_rational)]
        bet: Option<Rational>,
        /// King call frequency (free if omitted)
        #[arg(long, value_parser = parse_rational)]
        call: Option<Rational>,
        /// Pot after antes
        #[arg(long, value_parser = parse_rational, default_value = "2")]
        pot: Rational,
        /// Bet size
        #[arg(long, value_parser = parse_rational, default_value = "1")]
        bet_size: Rational,
        /// Skip the per-deal table
        #[arg(long)]
        no_table: bool,
    },
    /// Solve the equilibrium for one bet size
    Solve {
        /// JSON config file (overrides --pot and --bet-size)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Pot after antes
        #[arg(long, value_parser = parse_rational, default_value = "2")]
        pot: Rational,
        /// Bet size
        #[arg(long, value_parser = parse_rational, default_value = "1")]
        bet_size: Rational,
        /// Print the per-deal table
        #[arg(long)]
        table: bool,
        /// Write the result as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Solve the equilibrium across a range of bet sizes
    Sweep {
        /// Smallest bet size
        #[arg(long, value_parser = parse_rational)]
        from: Rational,
        /// Largest bet size
        #[arg(long, value_parser = parse_rational)]
        to: Rational,
        /// Number of intervals
        #[arg(long, default_value_t = 10)]
        steps: u32,
        /// Pot after antes
        #[arg(long, value_parser = parse_rational, default_value = "2")]
        pot: Rational,
        /// Write the results as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Check the equilibrium value by simulated play
    Simulate {
        /// Hands to play
        #[arg(long, default_value_t = 1_000_000)]
        hands: u64,
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
        /// Pot after antes
        #[arg(long, value_parser = parse_rational, default_value = "2")]
        pot: Rational,
        /// Bet size
        #[arg(long, value_parser = parse_rational, default_value = "1")]
        bet_size: Rational,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Ev {
            bet,
            call,
            pot,
            bet_size,
            no_table,
        } => {
            let config = GameConfig::new().with_pot(pot).with_bet_size(bet_size);
            config.validate()?;
            let symbols = Symbols::new();
            let bettor = ActionProfile::bettor(strategy(bet, &symbols.bet));
            let caller = ActionProfile::caller(strategy(call, &symbols.call));

            let (ev, table) = PayoffModel::new(&config).expected_value_with_table(&bettor, &caller);
            if !no_table {
                print_table(&table);
            }
            println!("EV: {}", ev);
        }

        Command::Solve {
            config,
            pot,
            bet_size,
            table,
            json,
        } => {
            let config = match config {
                Some(path) => GameConfig::from_json_file(path)?,
                None => GameConfig::new().with_pot(pot).with_bet_size(bet_size),
            };
            let solver = EquilibriumSolver::new(config);
            if table {
                print!("Raw EV Table: ");
                print_table(&solver.scenario_table());
            }

            let report = EquilibriumReport::new(solver.solve()?);
            report.print_summary();

            if let Some(path) = json {
                report.save_json(&path)?;
                println!("Saved JSON: {}", path.display());
            }
        }

        Command::Sweep {
            from,
            to,
            steps,
            pot,
            json,
        } => {
            let base = GameConfig::new().with_pot(pot);
            let sizes = bet_sizes(from, to, steps);
            let start = Instant::now();
            let points = sweep(&base, &sizes, true)?;

            println!("{:>10} {:>12} {:>12} {:>12}", "bet", "bluff Q", "call K", "EV");
            for eq in &points {
                println!(
                    "{:>10} {:>12} {:>12} {:>12}",
                    eq.config.bet_size.to_string(),
                    eq.bet.to_string(),
                    eq.call.to_string(),
                    eq.payoff.to_string()
                );
            }
            println!("Solved {} bet sizes in {:.2}s", points.len(), start.elapsed().as_secs_f64());

            if let Some(path) = json {
                SweepReport::new(&base, points).save_json(&path)?;
                println!("Saved JSON: {}", path.display());
            }
        }

        Command::Simulate {
            hands,
            seed,
            pot,
            bet_size,
        } => {
            let config = GameConfig::new().with_pot(pot).with_bet_size(bet_size);
            let eq = EquilibriumSolver::new(config).solve()?;
            let stats = Simulator::from_equilibrium(&eq, seed)?.run(hands);

            println!("Bet with Queen: {}", eq.bet);
            println!("Call with King: {}", eq.call);
            println!("Exact EV:     {} ({:.4})", eq.payoff, to_f64(&eq.payoff));
            println!(
                "Simulated EV: {:.4} ± {:.4} over {} hands",
                stats.mean, stats.std_error, stats.hands
            );
        }
    }
    Ok(())
}

fn strategy(value: Option<Rational>, symbol: &Symbol) -> Strategy {
    match value {
        Some(p) => Strategy::Fixed(p),
        None => Strategy::Free(symbol.clone()),
    }
}
