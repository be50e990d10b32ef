//! `puzzle8` — solve an 8-puzzle with the genetic algorithm.
//!
//! Settings come from built-in defaults, then an optional TOML file, then
//! command-line flags, later sources overriding earlier ones.

use anyhow::Context;
use clap::Parser;
use puzzle8_ga::puzzle::{solve_with_observer, Heuristic, SolverConfig, State};
use puzzle8_ga::SolverError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "puzzle8")]
#[command(about = "Genetic-algorithm solver for the 8-puzzle", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "PUZZLE8_CONFIG")]
    config: Option<PathBuf>,

    /// Goal arrangement, e.g. "1,2,3,4,5,6,7,8,0"
    #[arg(long)]
    goal: Option<State>,

    /// Fixed initial arrangement placed first in the population
    #[arg(long, conflicts_with = "random_start")]
    initial: Option<State>,

    /// Start from a fully random population
    #[arg(long)]
    random_start: bool,

    /// Fitness heuristic
    #[arg(long, value_enum)]
    heuristic: Option<Heuristic>,

    /// Individuals per generation
    #[arg(short, long)]
    population_size: Option<usize>,

    /// Generation limit
    #[arg(short = 'g', long)]
    max_generations: Option<usize>,

    /// Contestants per tournament
    #[arg(short, long)]
    tournament_size: Option<usize>,

    /// Probability of mutating each child
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate fitness in parallel
    #[arg(long)]
    parallel: bool,

    /// Print only the final outcome
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(SolverConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str::<SolverConfig>(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SolverConfig::default(),
        };

        if let Some(goal) = self.goal {
            config.goal = goal;
        }
        if let Some(initial) = self.initial {
            config.initial_state = Some(initial);
        }
        if self.random_start {
            config.initial_state = None;
        }
        if let Some(heuristic) = self.heuristic {
            config.heuristic = heuristic;
        }
        if let Some(n) = self.population_size {
            config.ga.population_size = n;
        }
        if let Some(n) = self.max_generations {
            config.ga.max_generations = n;
        }
        if let Some(k) = self.tournament_size {
            config.ga.tournament_size = k;
        }
        if let Some(rate) = self.mutation_rate {
            config.ga.mutation_rate = rate;
        }
        if let Some(seed) = self.seed {
            config.ga.seed = Some(seed);
        }
        if self.parallel {
            config.ga.parallel = true;
        }

        Ok((config, self.quiet))
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (config, quiet) = Cli::parse().into_config()?;

    println!("=== Genetic Algorithm for 8-Puzzle ===");
    println!(
        "Using Manhattan Distance: {}",
        config.heuristic == Heuristic::Manhattan
    );
    println!(
        "Using predefined initial state: {}\n",
        config.initial_state.is_some()
    );

    let outcome = solve_with_observer(&config, None, |stats| {
        if !quiet {
            println!(
                "Generation {} | Best fitness: {} | State: {}",
                stats.generation,
                stats.best_fitness,
                stats.best.state()
            );
        }
    });

    let report = match outcome {
        Ok(report) => report,
        Err(SolverError::UnsolvableInitialState { state }) => {
            eprintln!("ERROR: Initial state {state} is not solvable!");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    match report.solution() {
        Some(solution) => {
            println!("Goal reached!");
            println!("\nFinal solution: {solution}");
            println!("{}", solution.grid());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("Goal not reached within the generation limit.");
            println!(
                "Best after {} generation(s): {} (fitness {})",
                report.generations, report.best, report.best_fitness
            );
            Ok(ExitCode::from(2))
        }
    }
}
