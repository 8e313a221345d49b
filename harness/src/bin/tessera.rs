//! `tessera`: solve a sliding-tile puzzle from two grid files.
//!
//! Exit code 0 when every requested run is solved, 1 when any run ends
//! without a solution, 2 on input or configuration errors.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tessera_harness::config::{PuzzleConfig, DEFAULT_TILES};
use tessera_harness::loader::load_grid;
use tessera_harness::render::{heuristic_banner, render_report};
use tessera_harness::runner::run_puzzle;
use tessera_search::heuristic::Heuristic;
use tessera_search::policy::{DedupPolicy, SearchPolicy};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File holding the initial grid, one row per line
    #[arg(long, value_name = "FILE")]
    initial: PathBuf,
    /// File holding the goal grid
    #[arg(long, value_name = "FILE")]
    goal: PathBuf,
    /// Heuristic to search with
    #[arg(long, value_enum, default_value_t = HeuristicArg::Both)]
    heuristic: HeuristicArg,
    /// Number of tiles excluding the blank
    #[arg(long, default_value_t = DEFAULT_TILES, value_name = "NUM")]
    tiles: usize,
    /// Duplicate-state handling
    #[arg(long, value_enum, default_value_t = DedupArg::Off)]
    dedup: DedupArg,
    /// Stop after this many expansions
    #[arg(long, value_name = "NUM")]
    max_expansions: Option<u64>,
    /// Refuse to search when the goal is provably unreachable
    #[arg(long)]
    parity_check: bool,
    /// Record every expansion in the JSON report
    #[arg(long)]
    record_expansions: bool,
    /// Print the canonical JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Misplaced,
    Manhattan,
    Both,
}

impl HeuristicArg {
    fn selected(self) -> &'static [Heuristic] {
        match self {
            Self::Misplaced => &[Heuristic::MisplacedTiles],
            Self::Manhattan => &[Heuristic::Manhattan],
            Self::Both => &Heuristic::ALL,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DedupArg {
    Off,
    BestDepth,
}

impl From<DedupArg> for DedupPolicy {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::Off => Self::Off,
            DedupArg::BestDepth => Self::BestDepth,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every run was solved.
fn run(cli: &Cli) -> Result<bool> {
    let base = PuzzleConfig {
        tiles: cli.tiles,
        heuristic: Heuristic::Manhattan,
        policy: SearchPolicy {
            dedup: cli.dedup.into(),
            max_expansions: cli.max_expansions,
            parity_precheck: cli.parity_check,
            record_expansions: cli.record_expansions,
        },
    };
    let dimension = base.dimension()?;
    let initial = load_grid(&cli.initial, dimension)
        .with_context(|| format!("loading initial state from {}", cli.initial.display()))?;
    let goal = load_grid(&cli.goal, dimension)
        .with_context(|| format!("loading goal state from {}", cli.goal.display()))?;

    let mut all_solved = true;
    for &heuristic in cli.heuristic.selected() {
        let report = run_puzzle(&initial, &goal, &base.with_heuristic(heuristic))?;
        all_solved &= report.result.is_solved();
        if cli.json {
            println!("{}", String::from_utf8_lossy(&report.report_bytes));
        } else {
            println!("{}", heuristic_banner(heuristic));
            println!("{}", render_report(&report));
        }
    }
    Ok(all_solved)
}
