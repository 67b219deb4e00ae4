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

use crate::stats::BnbSolverStatistics;
use gridlock_model::solution::Solution;
use gridlock_search::result::{SolverResult, TerminationReason};

/// Result of the branch-and-bound solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics,
}

impl<T> BnbSolverOutcome<T> {
    /// The search found a solution and explored every shorter alternative
    /// under the bound.
    #[inline]
    pub fn optimal(solution: Solution<T>, statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(solution),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// The search exhausted every branch under the initial bound without
    /// reaching the goal. The puzzle may still be solvable with a larger
    /// bound.
    #[inline]
    pub fn bound_exhausted(statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Unknown,
            termination_reason: TerminationReason::BoundExhausted,
            statistics,
        }
    }

    /// The search was stopped by a monitor before completing.
    #[inline]
    pub fn aborted<R>(
        solution: Option<Solution<T>>,
        reason: R,
        statistics: BnbSolverStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        let result = match solution {
            Some(solution) => SolverResult::Feasible(solution),
            None => SolverResult::Unknown,
        };
        Self {
            result,
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
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }

    /// Decomposes the outcome into its parts.
    #[inline]
    pub fn into_parts(self) -> (SolverResult<T>, TerminationReason, BnbSolverStatistics) {
        (self.result, self.termination_reason, self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_outcome() {
        let outcome = BnbSolverOutcome::optimal(
            Solution::new(0u32, Vec::new()),
            BnbSolverStatistics::default(),
        );
        assert!(outcome.result().is_optimal());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_bound_exhausted_is_unknown_not_infeasible() {
        let outcome = BnbSolverOutcome::<u32>::bound_exhausted(BnbSolverStatistics::default());
        assert_eq!(outcome.result(), &SolverResult::Unknown);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::BoundExhausted
        );
    }

    #[test]
    fn test_aborted_with_solution_is_feasible() {
        let outcome = BnbSolverOutcome::aborted(
            Some(Solution::new(0u32, Vec::new())),
            "node limit",
            BnbSolverStatistics::default(),
        );
        assert!(matches!(outcome.result(), SolverResult::Feasible(_)));
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "node limit"),
            other => panic!("expected Aborted, got {other:?}"),
        }
    }
}
