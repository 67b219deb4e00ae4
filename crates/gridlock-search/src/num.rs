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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the move-count type threaded through both
//! solvers. Move counts are cardinalities, so unsigned primitive integers
//! are the natural domain; the search engines additionally need
//! conversions from `usize` (path lengths) and formatting for reports.
//! Collecting the bounds into one alias keeps generic signatures short
//! and consistent across crates.

use num_traits::{FromPrimitive, PrimInt, Unsigned};

/// A trait alias for numeric types that can carry move counts.
///
/// These are usually the unsigned integer types `u8`, `u16`, `u32`, `u64`
/// and `usize`. `u32` is a good default: no reachable 6×6 configuration
/// graph comes anywhere near its range.
pub trait SolverNumeric:
    PrimInt
    + Unsigned
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Unsigned
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_solver_numeric<T: SolverNumeric>() {}

    #[test]
    fn test_unsigned_primitives_qualify() {
        assert_solver_numeric::<u8>();
        assert_solver_numeric::<u16>();
        assert_solver_numeric::<u32>();
        assert_solver_numeric::<u64>();
        assert_solver_numeric::<usize>();
    }
}
