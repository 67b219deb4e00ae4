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

//! Breadth-first search with visited-state deduplication.
//!
//! The solver explores the move graph level by level: every state in the
//! frontier is reachable in the same or one fewer move than every state
//! behind it, so the first time the goal condition is met the move count
//! is minimal — no bound parameter is needed. A visited map keyed by the
//! canonical board key prevents re-expansion of configurations already
//! reached by another move sequence, and doubles as the parent-pointer
//! store from which the winning path is reconstructed.
//!
//! Unlike the depth-first solver, frontier exhaustion here is a proof:
//! the reachable configuration space is finite, so an empty frontier
//! means the puzzle has no solution.

pub mod bfs;
pub mod result;
pub mod stats;
