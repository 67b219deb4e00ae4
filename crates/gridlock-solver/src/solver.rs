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

//! # Strategy-Selecting Puzzle Solver
//!
//! A facade that runs one search per scenario with the configured
//! strategy and monitor stack.
//!
//! ## Strategies
//!
//! - [`SearchStrategy::BreadthFirst`]: complete and bound-free; proves
//!   optimality or infeasibility on every run.
//! - [`SearchStrategy::BranchAndBound`]: the depth-first engine. With an
//!   explicit bound the caller takes responsibility for its size; without
//!   one, the facade first runs a breadth-first probe and hands the
//!   proven optimum (plus one) to the depth-first search, so the bound is
//!   always safe. The probe also settles infeasibility outright — the
//!   depth-first engine alone cannot distinguish "no solution" from
//!   "bound too small".
//!
//! ## Usage
//!
//! ```rust
//! use gridlock_model::scenario::Scenario;
//! use gridlock_model::vehicle::{Orientation, Vehicle, VehicleLength};
//! use gridlock_solver::solver::{SearchStrategy, SolverBuilder};
//!
//! let scenario = Scenario::new(vec![Vehicle::new(
//!     2,
//!     0,
//!     VehicleLength::Car,
//!     Orientation::Horizontal,
//! )])
//! .unwrap();
//!
//! let mut solver = SolverBuilder::<u32>::new()
//!     .with_strategy(SearchStrategy::BreadthFirst)
//!     .build();
//!
//! let outcome = solver.solve(&scenario);
//! assert!(outcome.result().is_optimal());
//! ```

use gridlock_bfs::{bfs::BfsSolver, stats::BfsSolverStatistics};
use gridlock_bnb::{bnb::BnbSolver, stats::BnbSolverStatistics};
use gridlock_model::scenario::Scenario;
use gridlock_search::{
    monitor::{
        composite::CompositeMonitor, log::LogMonitor, node_limit::NodeLimitMonitor,
    },
    num::SolverNumeric,
    result::{SolverResult, TerminationReason},
};
use std::time::Duration;

/// The search strategy to run for each scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy<T> {
    /// Breadth-first search with deduplication.
    BreadthFirst,
    /// Depth-first branch-and-bound. With `bound: None`, a safe bound is
    /// derived from a breadth-first probe before the search runs.
    BranchAndBound { bound: Option<T> },
}

/// Statistics of one facade solve, shaped by the strategy that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatistics {
    BreadthFirst(BfsSolverStatistics),
    BranchAndBound(BnbSolverStatistics),
    /// Branch-and-bound preceded by the bound-deriving breadth-first
    /// probe.
    DerivedBound {
        probe: BfsSolverStatistics,
        search: BnbSolverStatistics,
    },
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BreadthFirst(stats) => write!(f, "{}", stats),
            Self::BranchAndBound(stats) => write!(f, "{}", stats),
            Self::DerivedBound { probe, search } => {
                writeln!(f, "Bound-deriving probe:")?;
                write!(f, "{}", probe)?;
                write!(f, "{}", search)
            }
        }
    }
}

/// Result of one facade solve.
#[derive(Debug, Clone)]
pub struct SolveOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: SolveStatistics,
}

impl<T> SolveOutcome<T> {
    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the statistics of the run.
    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }
}

/// Builder for [`PuzzleSolver`].
#[derive(Debug, Clone)]
pub struct SolverBuilder<T> {
    strategy: SearchStrategy<T>,
    node_limit: Option<u64>,
    log_search: bool,
}

impl<T> SolverBuilder<T>
where
    T: SolverNumeric,
{
    /// Creates a builder configured for breadth-first search with no
    /// limits and no logging.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategy: SearchStrategy::BreadthFirst,
            node_limit: None,
            log_search: false,
        }
    }

    /// Selects the search strategy.
    #[inline]
    pub fn with_strategy(mut self, strategy: SearchStrategy<T>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Stops any search after the given number of expanded nodes. The
    /// limit applies per phase: a bound-deriving probe and the search it
    /// feeds each get the full budget.
    #[inline]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Prints periodic progress lines during each search.
    #[inline]
    pub fn with_search_log(mut self, yes: bool) -> Self {
        self.log_search = yes;
        self
    }

    /// Builds the solver.
    #[inline]
    pub fn build(self) -> PuzzleSolver<T> {
        PuzzleSolver {
            strategy: self.strategy,
            node_limit: self.node_limit,
            log_search: self.log_search,
            bfs: BfsSolver::new(),
            bnb: BnbSolver::new(),
        }
    }
}

impl<T> Default for SolverBuilder<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A configured solver running one search (or probe + search) per
/// scenario.
#[derive(Debug)]
pub struct PuzzleSolver<T> {
    strategy: SearchStrategy<T>,
    node_limit: Option<u64>,
    log_search: bool,
    bfs: BfsSolver,
    bnb: BnbSolver,
}

impl<T> PuzzleSolver<T>
where
    T: SolverNumeric + 'static,
{
    /// Solves one scenario with the configured strategy.
    pub fn solve(&mut self, scenario: &Scenario) -> SolveOutcome<T> {
        match self.strategy {
            SearchStrategy::BreadthFirst => self.solve_breadth_first(scenario),
            SearchStrategy::BranchAndBound { bound: Some(bound) } => {
                self.solve_branch_and_bound(scenario, bound)
            }
            SearchStrategy::BranchAndBound { bound: None } => {
                self.solve_with_derived_bound(scenario)
            }
        }
    }

    fn build_monitor(&self) -> CompositeMonitor<T> {
        let mut monitor = CompositeMonitor::new();
        if let Some(limit) = self.node_limit {
            monitor.add_monitor(NodeLimitMonitor::new(limit));
        }
        if self.log_search {
            monitor.add_monitor(LogMonitor::new(Duration::from_millis(500)));
        }
        monitor
    }

    fn solve_breadth_first(&mut self, scenario: &Scenario) -> SolveOutcome<T> {
        let monitor = self.build_monitor();
        let (result, termination_reason, statistics) =
            self.bfs.solve(scenario, monitor).into_parts();
        SolveOutcome {
            result,
            termination_reason,
            statistics: SolveStatistics::BreadthFirst(statistics),
        }
    }

    fn solve_branch_and_bound(&mut self, scenario: &Scenario, bound: T) -> SolveOutcome<T> {
        let monitor = self.build_monitor();
        let (result, termination_reason, statistics) = self
            .bnb
            .solve_with_bound(scenario, bound, monitor)
            .into_parts();
        SolveOutcome {
            result,
            termination_reason,
            statistics: SolveStatistics::BranchAndBound(statistics),
        }
    }

    fn solve_with_derived_bound(&mut self, scenario: &Scenario) -> SolveOutcome<T> {
        let probe_monitor = self.build_monitor();
        let (probe_result, probe_reason, probe_stats) =
            self.bfs.solve(scenario, probe_monitor).into_parts();

        let optimum = match probe_result {
            SolverResult::Optimal(solution) => solution.move_count(),
            SolverResult::Infeasible => {
                return SolveOutcome {
                    result: SolverResult::Infeasible,
                    termination_reason: TerminationReason::InfeasibilityProven,
                    statistics: SolveStatistics::BreadthFirst(probe_stats),
                };
            }
            // The probe was aborted; without it there is no safe bound.
            _ => {
                return SolveOutcome {
                    result: SolverResult::Unknown,
                    termination_reason: probe_reason,
                    statistics: SolveStatistics::BreadthFirst(probe_stats),
                };
            }
        };

        let bound = optimum + T::one();
        let monitor = self.build_monitor();
        let (result, termination_reason, statistics) = self
            .bnb
            .solve_with_bound(scenario, bound, monitor)
            .into_parts();
        SolveOutcome {
            result,
            termination_reason,
            statistics: SolveStatistics::DerivedBound {
                probe: probe_stats,
                search: statistics,
            },
        }
    }
}
