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

use crate::stats::BfsSolverStatistics;
use gridlock_model::solution::Solution;
use gridlock_search::result::{SolverResult, TerminationReason};

/// Result of the breadth-first solver after termination.
#[derive(Debug, Clone)]
pub struct BfsSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BfsSolverStatistics,
}

impl<T> BfsSolverOutcome<T> {
    /// The first goal state was popped from the frontier; its move count
    /// is minimal by the level-order invariant.
    #[inline]
    pub fn optimal(solution: Solution<T>, statistics: BfsSolverStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(solution),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// The frontier emptied without reaching the goal: the puzzle has no
    /// solution.
    #[inline]
    pub fn infeasible(statistics: BfsSolverStatistics) -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// The search was stopped by a monitor before completing.
    #[inline]
    pub fn aborted<R>(reason: R, statistics: BfsSolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Unknown,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

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

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BfsSolverStatistics {
        &self.statistics
    }

    /// Decomposes the outcome into its parts.
    #[inline]
    pub fn into_parts(self) -> (SolverResult<T>, TerminationReason, BfsSolverStatistics) {
        (self.result, self.termination_reason, self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_outcome() {
        let outcome = BfsSolverOutcome::<u32>::infeasible(BfsSolverStatistics::default());
        assert!(outcome.result().is_infeasible());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::InfeasibilityProven
        );
    }

    #[test]
    fn test_aborted_outcome_is_unknown() {
        let outcome = BfsSolverOutcome::<u32>::aborted("stopped", BfsSolverStatistics::default());
        assert_eq!(outcome.result(), &SolverResult::Unknown);
    }
}
