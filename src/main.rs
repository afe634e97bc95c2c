use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};

use eight_puzzle::{
    is_solvable, random_solvable, solve_bidirectional, solve_bidirectional_bounded,
    solve_iterative_deepening, solve_iterative_deepening_bounded, Grid, SearchError, Solution,
    GOAL,
};

#[derive(Parser, Debug)]
#[command(name = "eight-puzzle", version, about = "Solve a 3x3 sliding-tile puzzle")]
struct Cli {
    /// Start grid as nine numbers, 0 for the blank, e.g. "1 2 3/4 5 6/7 0 8"
    #[arg(long, value_name = "TILES", conflicts_with = "interactive")]
    grid: Option<Grid>,
    /// Type the start grid row by row
    #[arg(long)]
    interactive: bool,
    /// Seed for the random start grid
    #[arg(long)]
    seed: Option<u64>,
    /// Which search to run
    #[arg(long, value_enum, default_value_t = Algorithm::Both)]
    algorithm: Algorithm,
    /// Give up iterative deepening past this many moves
    #[arg(long, value_name = "MOVES")]
    max_depth: Option<usize>,
    /// Give up bidirectional search after this many expansions
    #[arg(long, value_name = "NODES")]
    node_budget: Option<usize>,
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Ids,
    Bidirectional,
    Both,
}

#[derive(Clone, Copy, Debug)]
enum Engine {
    IterativeDeepening,
    Bidirectional,
}

impl Algorithm {
    #[auto_enums::auto_enum(Iterator)]
    fn engines(self) -> impl Iterator<Item = Engine> {
        match self {
            Algorithm::Ids => std::iter::once(Engine::IterativeDeepening),
            Algorithm::Bidirectional => std::iter::once(Engine::Bidirectional),
            Algorithm::Both => [Engine::IterativeDeepening, Engine::Bidirectional].into_iter(),
        }
    }
}

impl Engine {
    fn title(self) -> &'static str {
        match self {
            Engine::IterativeDeepening => "Iterative Deepening Search",
            Engine::Bidirectional => "Bidirectional Search",
        }
    }

    fn run(self, start: &Grid, cli: &Cli) -> Result<Solution, SearchError> {
        match (self, cli.max_depth, cli.node_budget) {
            (Engine::IterativeDeepening, Some(max_depth), _) => {
                solve_iterative_deepening_bounded(start, max_depth)
            }
            (Engine::IterativeDeepening, None, _) => solve_iterative_deepening(start),
            (Engine::Bidirectional, _, Some(budget)) => solve_bidirectional_bounded(start, budget),
            (Engine::Bidirectional, _, None) => solve_bidirectional(start),
        }
    }
}

fn read_grid_interactively() -> anyhow::Result<Grid> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut rows = Vec::new();

    println!("Enter your puzzle row by row (use 0 for the blank).");
    for ix in 1..=3 {
        print!("Row {} (3 numbers separated by spaces): ", ix);
        io::stdout().flush()?;

        let line = lines
            .next()
            .context("input ended before the grid was complete")?
            .context("could not read from stdin")?;
        rows.push(line);
    }

    Ok(rows.join("/").parse()?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let start = if let Some(grid) = cli.grid {
        grid
    } else if cli.interactive {
        read_grid_interactively()?
    } else {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        random_solvable(&mut rng)
    };

    if !is_solvable(&start) {
        println!("The puzzle you entered is NOT solvable.");
        println!("{}", start);
        return Ok(());
    }

    println!("Start State:\n{}\n", start);
    println!("Goal State:\n{}\n", GOAL);

    if start.is_goal() {
        println!("Already in goal state.");
        return Ok(());
    }

    for engine in cli.algorithm.engines() {
        println!("----- {} -----", engine.title());

        let started = Instant::now();
        let solution = match engine.run(&start, &cli) {
            Ok(solution) => solution,
            Err(e @ (SearchError::DepthLimitReached { .. }
            | SearchError::NodeBudgetExhausted { .. })) => {
                println!("Gave up: {}\n", e);
                continue;
            }
            Err(e) => bail!("{} failed: {}", engine.title(), e),
        };
        info!("{} finished in {:?}", engine.title(), started.elapsed());

        println!(
            "Moves ({}): {}",
            solution.path.len(),
            solution.path.iter().join(", ")
        );
        println!("Number of nodes expanded: {}\n", solution.expanded);
    }

    Ok(())
}
