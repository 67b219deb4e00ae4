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

//! Depth-first branch-and-bound search for the gridlock puzzle.
//!
//! The solver explores every legal move sequence recursively over a single
//! shared [`gridlock_model::state::PuzzleState`], mutating it in place and
//! undoing each slide after the recursive call returns. Branches whose
//! move count reaches the incumbent bound are pruned; each improving goal
//! hit tightens the incumbent and snapshots the current path.
//!
//! The initial bound is part of the contract: with a bound at least as
//! large as the true optimum the result is the minimum move count
//! (`Optimal`); when the tree under the bound is exhausted without a
//! solution the outcome says so explicitly (`BoundExhausted`) instead of
//! pretending the puzzle is unsolvable. Callers that cannot produce a
//! safe bound should use the facade in `gridlock-solver`, which derives
//! one from a breadth-first probe.

pub mod bnb;
pub mod result;
pub mod stats;
