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

//! Data model for the gridlock sliding-vehicle puzzle.
//!
//! This crate holds everything the solvers agree on: the fixed 6×6 board,
//! the vehicles placed on it, the single-cell slide moves they may perform,
//! the canonical board key used for visited-state deduplication, the
//! validated `Scenario` describing one puzzle instance, the `Solution`
//! reported by a successful search, and the loader that turns a
//! whitespace-delimited scenario stream into validated instances.
//!
//! Invariants enforced here so the solvers do not have to:
//! - a vehicle's footprint always lies within the grid,
//! - the board's occupied cells exactly mirror the vehicle records,
//! - no two vehicles overlap,
//! - applying a slide and then its inverse restores the prior state
//!   bit-for-bit.

pub mod board;
pub mod index;
pub mod loading;
pub mod scenario;
pub mod solution;
pub mod state;
pub mod vehicle;

/// Side length of the square playing field.
pub const GRID_SIZE: usize = 6;

/// Total number of cells on the board.
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Maximum number of vehicles a scenario may place on the board.
pub const MAX_VEHICLES: usize = 25;
