//! Tiling puzzle search driver.
//!
//! Drives the single-step primitives of the `tilefit` library with one of
//! three local-search loops: greedy best-step descent, a random walk that
//! remembers the best state seen, or a random-improving hill climb. The
//! library itself never loops; this binary is the search loop.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use tilefit::{Problem, State};

/// Fills a square grid with polyomino blocks via local search.
#[derive(Parser)]
#[command(name = "tilefit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side length of the square grid.
    #[arg(short, long, default_value_t = 8)]
    size: usize,

    /// Block inventory as "name=count" pairs, e.g. "L=2,|=1,+=3".
    /// Defaults to `size` of each standard block.
    #[arg(short, long, value_parser = parse_blocks)]
    blocks: Option<BlockSpec>,

    /// Seed for the random number generator; omit for a random run.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of search steps.
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Repeatedly take the best neighbor until no strict improvement.
    Greedy,
    /// Take uniformly random neighbors, reporting the best state seen.
    Walk,
    /// Repeatedly take a random improving neighbor until none exists.
    Climb,
}

/// Parsed value of `--blocks`.
#[derive(Clone)]
struct BlockSpec(Vec<(char, u32)>);

fn parse_blocks(input: &str) -> Result<BlockSpec, String> {
    let mut pairs = Vec::new();
    for entry in input.split(',') {
        let Some((name, count)) = entry.split_once('=') else {
            return Err(format!("expected 'name=count', got '{entry}'"));
        };
        let mut chars = name.chars();
        let (Some(block), None) = (chars.next(), chars.next()) else {
            return Err(format!("block name must be a single character: '{name}'"));
        };
        let count: u32 = count
            .parse()
            .map_err(|_| format!("invalid count '{count}' for block '{block}'"))?;
        pairs.push((block, count));
    }
    Ok(BlockSpec(pairs))
}

fn main() {
    let cli = Cli::parse();

    let inventory: FxHashMap<char, u32> = match cli.blocks {
        Some(BlockSpec(pairs)) => pairs.into_iter().collect(),
        None => "+|LZT4".chars().map(|b| (b, cli.size as u32)).collect(),
    };

    let problem = match Problem::with_standard_blocks(cli.size, inventory) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("invalid problem: {error}");
            std::process::exit(1);
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let state = match cli.command.unwrap_or(Command::Climb) {
        Command::Greedy => run_greedy(&problem, cli.steps),
        Command::Walk => run_walk(&problem, cli.steps, &mut rng),
        Command::Climb => run_climb(&problem, cli.steps, &mut rng),
    };

    println!("{state}");
}

/// Best-step descent: stops at the first local minimum or when the
/// neighborhood empties out.
fn run_greedy(problem: &Problem, steps: usize) -> State {
    let mut state = problem.initial_state();
    for step in 1..=steps {
        let next = match problem.best_neighbor(&state) {
            Ok(next) => next,
            Err(_) => break,
        };
        if !next.is_better_than(&state) {
            break;
        }
        state = next;
        println!("step {step}: score {}", state.score());
    }
    state
}

/// Unbiased random walk; returns the best state encountered.
fn run_walk<R: Rng>(problem: &Problem, steps: usize, rng: &mut R) -> State {
    let mut state = problem.initial_state();
    let mut best = state.clone();
    for step in 1..=steps {
        state = match problem.random_neighbor(&state, rng) {
            Ok(next) => next,
            Err(_) => break,
        };
        if state.is_better_than(&best) {
            best = state.clone();
            println!("step {step}: score {}", best.score());
        }
    }
    best
}

/// Random-improving hill climb: stops once no neighbor improves.
fn run_climb<R: Rng>(problem: &Problem, steps: usize, rng: &mut R) -> State {
    let mut state = problem.initial_state();
    for step in 1..=steps {
        match problem.random_improving_neighbor(&state, rng) {
            Some(next) => {
                state = next;
                println!("step {step}: score {}", state.score());
            }
            None => break,
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_rendering_snapshot() {
        let inventory: FxHashMap<char, u32> = [('L', 1), ('|', 1)].into_iter().collect();
        let problem = Problem::with_standard_blocks(4, inventory).unwrap();
        let mut state = problem.initial_state();
        state.place('L', 0, 0).unwrap();
        state.place('|', 0, 3).unwrap();

        insta::assert_snapshot!(state.to_string(), @r"
        *..*
        *..*
        ****
        ...*
        Placed: L@(0,0) |@(0,3)
        Score: 7
        Remaining: L:0 |:0
        ");
    }

    #[test]
    fn test_greedy_descent_fills_a_small_grid() {
        let inventory: FxHashMap<char, u32> = [('Z', 4)].into_iter().collect();
        let problem = Problem::with_standard_blocks(4, inventory).unwrap();
        let state = run_greedy(&problem, 100);
        // every step places a 4-cell Z, so the descent ends at a local
        // minimum no worse than one unplaced block
        assert!(state.score() <= 16 - 4);
        let initial = problem.initial_state();
        assert!(state.is_better_than(&initial));
    }

    #[test]
    fn test_climb_is_reproducible_for_a_seed() {
        let inventory: FxHashMap<char, u32> = [('+', 2), ('4', 2)].into_iter().collect();
        let problem = Problem::with_standard_blocks(5, inventory).unwrap();
        let first = run_climb(&problem, 100, &mut StdRng::seed_from_u64(9));
        let second = run_climb(&problem, 100, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_blocks_argument_parsing() {
        let BlockSpec(pairs) = parse_blocks("L=2,|=1").unwrap();
        assert_eq!(pairs, vec![('L', 2), ('|', 1)]);
        assert!(parse_blocks("LL=2").is_err());
        assert!(parse_blocks("L=x").is_err());
        assert!(parse_blocks("L").is_err());
    }
}
