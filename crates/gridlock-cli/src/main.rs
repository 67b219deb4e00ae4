// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command line driver.
//!
//! Reads a scenario stream from stdin or a file, solves each scenario
//! sequentially with the selected strategy, and prints one report line
//! per scenario.

use clap::{Parser, ValueEnum};
use gridlock_model::{loading::ScenarioLoader, scenario::Scenario};
use gridlock_search::result::{SolverResult, TerminationReason};
use gridlock_solver::solver::{PuzzleSolver, SearchStrategy, SolveOutcome, SolverBuilder};
use std::{io::BufReader, path::PathBuf, process::ExitCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Breadth-first search with deduplication.
    Bfs,
    /// Depth-first branch-and-bound.
    Bnb,
}

#[derive(Parser)]
#[command(
    name = "gridlock",
    version,
    about = "Solves gridlock sliding-vehicle puzzles with the minimum number of moves"
)]
struct Args {
    /// Scenario file to read; stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Search strategy to run.
    #[arg(short, long, value_enum, default_value = "bfs")]
    strategy: StrategyArg,

    /// Initial bound for the branch-and-bound strategy. Derived from a
    /// breadth-first probe when omitted. Ignored by the bfs strategy.
    #[arg(short, long, value_name = "MOVES")]
    bound: Option<u32>,

    /// Print the winning move sequence for each solved scenario.
    #[arg(long)]
    show_moves: bool,

    /// Print solver statistics after each scenario.
    #[arg(long)]
    stats: bool,

    /// Print periodic search progress lines.
    #[arg(long)]
    log: bool,

    /// Stop each search after this many expanded nodes.
    #[arg(long, value_name = "N")]
    node_limit: Option<u64>,
}

fn load_scenarios(args: &Args) -> Result<Vec<Scenario>, String> {
    let loader = ScenarioLoader::new();
    match &args.input {
        Some(path) => loader
            .from_path(path)
            .map_err(|e| format!("{}: {}", path.display(), e)),
        None => loader
            .from_bufread(BufReader::new(std::io::stdin()))
            .map_err(|e| format!("stdin: {}", e)),
    }
}

fn build_solver(args: &Args) -> PuzzleSolver<u32> {
    let strategy = match args.strategy {
        StrategyArg::Bfs => SearchStrategy::BreadthFirst,
        StrategyArg::Bnb => SearchStrategy::BranchAndBound { bound: args.bound },
    };

    let mut builder = SolverBuilder::new()
        .with_strategy(strategy)
        .with_search_log(args.log);
    if let Some(limit) = args.node_limit {
        builder = builder.with_node_limit(limit);
    }
    builder.build()
}

fn report(scenario_number: usize, outcome: &SolveOutcome<u32>, args: &Args) {
    match outcome.result() {
        SolverResult::Optimal(solution) => {
            println!(
                "Scenario {} requires {} moves",
                scenario_number,
                solution.move_count()
            );
            if args.show_moves {
                for (i, slide) in solution.moves().iter().enumerate() {
                    println!("  {:>3}. {}", i + 1, slide);
                }
            }
        }
        SolverResult::Feasible(solution) => {
            println!(
                "Scenario {} is solvable in {} moves (minimality not proven: {})",
                scenario_number,
                solution.move_count(),
                outcome.termination_reason()
            );
        }
        SolverResult::Infeasible => {
            println!("Scenario {} is unsolvable", scenario_number);
        }
        SolverResult::Unknown => match outcome.termination_reason() {
            TerminationReason::BoundExhausted => println!(
                "Scenario {} has no solution within the supplied bound",
                scenario_number
            ),
            reason => println!("Scenario {} was not solved ({})", scenario_number, reason),
        },
    }

    if args.stats {
        print!("{}", outcome.statistics());
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let scenarios = match load_scenarios(&args) {
        Ok(scenarios) => scenarios,
        Err(message) => {
            eprintln!("error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let mut solver = build_solver(&args);
    for (i, scenario) in scenarios.iter().enumerate() {
        let outcome = solver.solve(scenario);
        report(i + 1, &outcome, &args);
    }

    ExitCode::SUCCESS
}
