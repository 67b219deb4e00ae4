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

//! The branch-and-bound search engine.
//!
//! The engine owns no per-scenario state; each call to
//! [`BnbSolver::solve_with_bound`] spins up a search session around a
//! fresh [`PuzzleState`] and drives the recursion. The state is mutated
//! in place and restored by applying the inverse slide after every
//! recursive call — invertibility of slides is what makes this correct
//! without snapshots.
//!
//! Expansion order is deterministic: vehicles in index order, forward
//! before backward. This matches the breadth-first solver's tie-breaking,
//! so the two strategies disagree at most about which optimal path they
//! report, never about its length.

use crate::{result::BnbSolverOutcome, stats::BnbSolverStatistics};
use gridlock_model::{
    index::VehicleIndex,
    scenario::Scenario,
    solution::Solution,
    state::{PuzzleState, Slide, SlideDirection},
};
use gridlock_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
};

/// A depth-first branch-and-bound solver.
///
/// The solver keeps its path buffer between runs so repeated solves do
/// not reallocate. One instance can solve any number of scenarios
/// sequentially.
#[derive(Debug, Clone, Default)]
pub struct BnbSolver {
    path: Vec<Slide>,
}

impl BnbSolver {
    /// Creates a new solver.
    #[inline]
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Explores every move sequence shorter than `bound` and returns the
    /// best solution found.
    ///
    /// `bound` is an exclusive upper limit on non-goal path length: a
    /// sequence of exactly `bound` moves is still accepted when its last
    /// move reaches the goal, so a bound equal to the true optimum
    /// suffices. With a bound below the optimum the outcome is
    /// [`BnbSolverOutcome::bound_exhausted`], never a wrong answer.
    pub fn solve_with_bound<T, S>(
        &mut self,
        scenario: &Scenario,
        bound: T,
        mut monitor: S,
    ) -> BnbSolverOutcome<T>
    where
        T: SolverNumeric,
        S: SearchMonitor<T>,
    {
        let session = BnbSearchSession {
            state: scenario.initial_state(),
            path: &mut self.path,
            monitor: &mut monitor,
            incumbent: bound,
            best: None,
            stats: BnbSolverStatistics::default(),
            abort: None,
        };
        let outcome = session.run(scenario);
        self.path.clear();
        outcome
    }
}

/// Per-run state of one branch-and-bound search.
struct BnbSearchSession<'a, T, S> {
    state: PuzzleState,
    path: &'a mut Vec<Slide>,
    monitor: &'a mut S,
    /// Exclusive bound on non-goal path length; tightened to the best
    /// known solution length as solutions are found.
    incumbent: T,
    best: Option<Solution<T>>,
    stats: BnbSolverStatistics,
    abort: Option<String>,
}

impl<'a, T, S> BnbSearchSession<'a, T, S>
where
    T: SolverNumeric,
    S: SearchMonitor<T>,
{
    fn run(mut self, scenario: &Scenario) -> BnbSolverOutcome<T> {
        let start_time = std::time::Instant::now();
        self.monitor.on_enter_search(scenario);

        self.explore(T::zero());

        self.stats.set_total_time(start_time.elapsed());
        self.monitor.on_exit_search();

        match (self.abort, self.best) {
            (Some(reason), best) => BnbSolverOutcome::aborted(best, reason, self.stats),
            (None, Some(solution)) => BnbSolverOutcome::optimal(solution, self.stats),
            (None, None) => BnbSolverOutcome::bound_exhausted(self.stats),
        }
    }

    fn explore(&mut self, moves_so_far: T) {
        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.abort = Some(reason);
            return;
        }

        self.stats.on_node_explored();
        self.stats
            .on_depth_update(moves_so_far.to_u64().unwrap_or(u64::MAX));
        self.monitor.on_step();

        // Goal first, bound second: a path of exactly `incumbent` moves is
        // accepted when it ends at the goal, so a bound equal to the true
        // optimum still finds it.
        // A frame that was entered before the incumbent tightened can
        // still reach goal states at or beyond it; those are simply not
        // improvements.
        if self.state.is_solved() {
            if self.best.is_none() || moves_so_far < self.incumbent {
                self.record_solution(moves_so_far);
            }
            return;
        }

        if moves_so_far >= self.incumbent {
            self.stats.on_pruning_bound();
            return;
        }

        let next = moves_so_far + T::one();
        for vehicle in 0..self.state.num_vehicles() {
            for direction in [SlideDirection::Forward, SlideDirection::Backward] {
                let slide = Slide::new(VehicleIndex::new(vehicle), direction);
                if !self.state.can_slide(slide) {
                    self.stats.on_slide_rejected();
                    continue;
                }

                self.state.apply_slide(slide);
                self.path.push(slide);

                self.explore(next);

                self.path.pop();
                self.state.undo_slide(slide);
                self.stats.on_backtrack();

                if self.abort.is_some() {
                    return;
                }
            }
        }
    }

    fn record_solution(&mut self, moves_so_far: T) {
        self.incumbent = moves_so_far;
        let solution = Solution::new(moves_so_far, self.path.clone());
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&solution);
        self.best = Some(solution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_model::vehicle::{Orientation, Vehicle, VehicleLength};
    use gridlock_search::monitor::{no_op::NoOperationMonitor, node_limit::NodeLimitMonitor};
    use gridlock_search::result::{SolverResult, TerminationReason};

    fn car_h(row: usize, col: usize) -> Vehicle {
        Vehicle::new(row, col, VehicleLength::Car, Orientation::Horizontal)
    }

    fn car_v(row: usize, col: usize) -> Vehicle {
        Vehicle::new(row, col, VehicleLength::Car, Orientation::Vertical)
    }

    fn truck_v(row: usize, col: usize) -> Vehicle {
        Vehicle::new(row, col, VehicleLength::Truck, Orientation::Vertical)
    }

    fn solve(vehicles: Vec<Vehicle>, bound: u32) -> BnbSolverOutcome<u32> {
        let scenario = Scenario::new(vehicles).expect("test scenario should be valid");
        BnbSolver::new().solve_with_bound(&scenario, bound, NoOperationMonitor::new())
    }

    #[test]
    fn test_unobstructed_target_needs_four_moves() {
        // The target car starts against the left wall; its trailing edge
        // reaches column 5 after four forward slides.
        let outcome = solve(vec![car_h(2, 0)], 10);
        let solution = match outcome.result() {
            SolverResult::Optimal(solution) => solution,
            other => panic!("expected Optimal, got {other:?}"),
        };
        assert_eq!(solution.move_count(), 4);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_blocking_vehicle_costs_one_extra_move() {
        // A vertical car covers (1, 4) and (2, 4); it must retreat once
        // before the target can pass.
        let outcome = solve(vec![car_h(2, 0), car_v(1, 4)], 10);
        let solution = outcome.result().solution().expect("should solve");
        assert_eq!(solution.move_count(), 5);
    }

    #[test]
    fn test_bound_equal_to_optimum_still_finds_it() {
        let outcome = solve(vec![car_h(2, 0)], 4);
        let solution = outcome.result().solution().expect("should solve");
        assert_eq!(solution.move_count(), 4);
    }

    #[test]
    fn test_insufficient_bound_reports_bound_exhausted() {
        let outcome = solve(vec![car_h(2, 0)], 3);
        assert_eq!(outcome.result(), &SolverResult::Unknown);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::BoundExhausted
        );
        assert!(outcome.statistics().prunings_bound > 0);
    }

    #[test]
    fn test_already_solved_scenario_requires_zero_moves() {
        let outcome = solve(vec![car_h(2, 4)], 10);
        let solution = outcome.result().solution().expect("should solve");
        assert_eq!(solution.move_count(), 0);
        assert!(solution.is_trivial());
        // The goal check precedes expansion, so only the root is visited.
        assert_eq!(outcome.statistics().nodes_explored, 1);
    }

    #[test]
    fn test_immovable_wall_exhausts_bound() {
        // Two vertical trucks fill column 2 completely; nothing can move.
        let outcome = solve(vec![car_h(2, 0), truck_v(0, 2), truck_v(3, 2)], 8);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::BoundExhausted
        );
    }

    #[test]
    fn test_solution_path_replays_to_goal() {
        let scenario = Scenario::new(vec![car_h(2, 0), car_v(1, 4)]).unwrap();
        let outcome =
            BnbSolver::new().solve_with_bound(&scenario, 10u32, NoOperationMonitor::new());
        let solution = outcome.result().solution().expect("should solve");

        let mut state = scenario.initial_state();
        for slide in solution.moves() {
            assert!(state.can_slide(*slide), "solution contains illegal slide");
            state.apply_slide(*slide);
        }
        assert!(state.is_solved());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_node_limit_aborts_search() {
        let outcome = {
            let scenario = Scenario::new(vec![car_h(2, 0), car_v(1, 4)]).unwrap();
            BnbSolver::new().solve_with_bound(&scenario, 10u32, NodeLimitMonitor::new(1))
        };
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
    }
}
