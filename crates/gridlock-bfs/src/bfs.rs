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

//! The breadth-first search engine.
//!
//! Successor generation reuses the popped state as a scratch buffer: each
//! candidate slide is applied, the resulting canonical key is probed
//! against the visited map, a value copy is enqueued only for fresh keys,
//! and the slide is reverted before the next candidate. Queued states are
//! therefore fully independent of each other, as the level-order
//! invariant requires.
//!
//! The visited map stores, for every reached key, the key and slide it
//! was first reached from. Walking those links backward from the goal key
//! yields the winning move sequence without storing a path per state.

use crate::{result::BfsSolverOutcome, stats::BfsSolverStatistics};
use gridlock_model::{
    board::BoardKey,
    index::VehicleIndex,
    scenario::Scenario,
    solution::Solution,
    state::{PuzzleState, Slide, SlideDirection},
};
use gridlock_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
};
use rustc_hash::FxHashMap;
use std::collections::{hash_map::Entry, VecDeque};

/// How a visited configuration was first reached. The starting
/// configuration has no parent.
type ParentLink = Option<(BoardKey, Slide)>;

/// A breadth-first solver with visited-state deduplication.
///
/// Needs no bound parameter: the first goal state popped from the FIFO
/// frontier is minimal because the frontier processes states in
/// non-decreasing move-count order.
#[derive(Debug, Clone, Default)]
pub struct BfsSolver;

impl BfsSolver {
    /// Creates a new solver.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Explores the move graph level by level until the goal is reached
    /// or the reachable state space is exhausted.
    pub fn solve<T, S>(&mut self, scenario: &Scenario, mut monitor: S) -> BfsSolverOutcome<T>
    where
        T: SolverNumeric,
        S: SearchMonitor<T>,
    {
        let start_time = std::time::Instant::now();
        let mut stats = BfsSolverStatistics::default();
        monitor.on_enter_search(scenario);

        let mut frontier: VecDeque<(PuzzleState, T)> = VecDeque::new();
        let mut visited: FxHashMap<BoardKey, ParentLink> = FxHashMap::default();

        let root = scenario.initial_state();
        visited.insert(root.board_key(), None);
        frontier.push_back((root, T::zero()));
        stats.on_frontier_size(frontier.len());

        while let Some((mut state, move_count)) = frontier.pop_front() {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                stats.set_total_time(start_time.elapsed());
                monitor.on_exit_search();
                return BfsSolverOutcome::aborted(reason, stats);
            }

            stats.on_state_expanded();
            monitor.on_step();

            if state.is_solved() {
                let moves = reconstruct_path(&visited, state.board_key());
                debug_assert_eq!(move_count.to_usize(), Some(moves.len()));
                let solution = Solution::new(move_count, moves);
                stats.set_total_time(start_time.elapsed());
                monitor.on_solution_found(&solution);
                monitor.on_exit_search();
                return BfsSolverOutcome::optimal(solution, stats);
            }

            let parent_key = state.board_key();
            let next_count = move_count + T::one();

            for vehicle in 0..state.num_vehicles() {
                for direction in [SlideDirection::Forward, SlideDirection::Backward] {
                    let slide = Slide::new(VehicleIndex::new(vehicle), direction);
                    if !state.can_slide(slide) {
                        stats.on_slide_rejected();
                        continue;
                    }

                    state.apply_slide(slide);
                    match visited.entry(state.board_key()) {
                        Entry::Vacant(entry) => {
                            entry.insert(Some((parent_key, slide)));
                            frontier.push_back((state.clone(), next_count));
                            stats.on_state_enqueued();
                            stats.on_frontier_size(frontier.len());
                        }
                        Entry::Occupied(_) => {
                            stats.on_state_deduplicated();
                        }
                    }
                    state.undo_slide(slide);
                }
            }
        }

        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_search();
        BfsSolverOutcome::infeasible(stats)
    }
}

/// Walks the parent links backward from `goal_key` and returns the slides
/// in forward order.
fn reconstruct_path(visited: &FxHashMap<BoardKey, ParentLink>, goal_key: BoardKey) -> Vec<Slide> {
    let mut moves = Vec::new();
    let mut key = goal_key;
    while let Some(Some((parent_key, slide))) = visited.get(&key) {
        moves.push(*slide);
        key = *parent_key;
    }
    moves.reverse();
    moves
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

    fn solve(vehicles: Vec<Vehicle>) -> BfsSolverOutcome<u32> {
        let scenario = Scenario::new(vehicles).expect("test scenario should be valid");
        BfsSolver::new().solve(&scenario, NoOperationMonitor::new())
    }

    #[test]
    fn test_unobstructed_target_needs_four_moves() {
        let outcome = solve(vec![car_h(2, 0)]);
        let solution = match outcome.result() {
            SolverResult::Optimal(solution) => solution,
            other => panic!("expected Optimal, got {other:?}"),
        };
        assert_eq!(solution.move_count(), 4);
    }

    #[test]
    fn test_blocking_vehicle_costs_one_extra_move() {
        let outcome = solve(vec![car_h(2, 0), car_v(1, 4)]);
        let solution = outcome.result().solution().expect("should solve");
        assert_eq!(solution.move_count(), 5);
    }

    #[test]
    fn test_already_solved_scenario_expands_only_the_root() {
        let outcome = solve(vec![car_h(2, 4)]);
        let solution = outcome.result().solution().expect("should solve");
        assert!(solution.is_trivial());
        assert_eq!(outcome.statistics().states_expanded, 1);
    }

    #[test]
    fn test_immovable_wall_is_infeasible() {
        let outcome = solve(vec![car_h(2, 0), truck_v(0, 2), truck_v(3, 2)]);
        assert!(outcome.result().is_infeasible());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::InfeasibilityProven
        );
        // Only the root configuration is reachable.
        assert_eq!(outcome.statistics().states_expanded, 1);
    }

    #[test]
    fn test_solution_path_replays_to_goal() {
        let scenario = Scenario::new(vec![car_h(2, 0), car_v(1, 4), car_v(4, 0)]).unwrap();
        let outcome: BfsSolverOutcome<u32> =
            BfsSolver::new().solve(&scenario, NoOperationMonitor::new());
        let solution = outcome.result().solution().expect("should solve");

        let mut state = scenario.initial_state();
        for slide in solution.moves() {
            assert!(state.can_slide(*slide), "solution contains illegal slide");
            state.apply_slide(*slide);
        }
        assert!(state.is_solved());
        assert!(state.is_consistent());
        assert_eq!(solution.moves().len() as u32, solution.move_count());
    }

    #[test]
    fn test_revisited_states_are_deduplicated() {
        // Two vehicles shuffling in an open grid quickly revisit
        // configurations; the dedup counter must fire.
        let outcome = solve(vec![car_h(2, 0), car_v(0, 0)]);
        assert!(outcome.result().solution().is_some());
        assert!(outcome.statistics().states_deduplicated > 0);
    }

    #[test]
    fn test_node_limit_aborts_search() {
        let scenario = Scenario::new(vec![car_h(2, 0), car_v(1, 4)]).unwrap();
        let outcome: BfsSolverOutcome<u32> =
            BfsSolver::new().solve(&scenario, NodeLimitMonitor::new(1));
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
        assert_eq!(outcome.result(), &SolverResult::Unknown);
    }
}
