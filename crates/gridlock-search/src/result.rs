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

use gridlock_model::solution::Solution;
use num_traits::{PrimInt, Unsigned};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// We have proven that the puzzle has no solution.
    Infeasible,
    /// We have found a solution and proven its minimality.
    Optimal(Solution<T>),
    /// We have found a solution, but not proven its minimality.
    Feasible(Solution<T>),
    /// The solver terminated without finding a solution and without
    /// proving infeasibility.
    Unknown,
}

impl<T> SolverResult<T> {
    /// Returns the contained solution, if any.
    #[inline]
    pub fn solution(&self) -> Option<&Solution<T>> {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => Some(solution),
            _ => None,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolverResult::Infeasible)
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(solution) => {
                write!(f, "Optimal(moves={})", solution.move_count())
            }
            SolverResult::Feasible(solution) => {
                write!(f, "Feasible(moves={})", solution.move_count())
            }
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The solver found a solution and proved it minimal.
    OptimalityProven,
    /// The solver exhausted the reachable state space without finding a
    /// solution.
    InfeasibilityProven,
    /// The branch-and-bound solver exhausted every branch under its
    /// initial bound without reaching the goal. The answer is unknown —
    /// a larger bound may still find a solution.
    BoundExhausted,
    /// The solver was stopped by a monitor (node limit, external stop).
    /// The string contains information about the reason for abortion.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::BoundExhausted => write!(f, "Bound Exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}
