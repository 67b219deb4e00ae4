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

use crate::state::Slide;
use num_traits::{PrimInt, Unsigned};

/// The outcome of a successful search: the minimal move count and the
/// slide sequence that achieves it.
///
/// The move count is kept alongside the sequence (rather than derived from
/// its length) so the numeric type matches the solver's move-count type
/// throughout; the constructor asserts the two agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    move_count: T,
    moves: Vec<Slide>,
}

impl<T> Solution<T>
where
    T: PrimInt + Unsigned,
{
    /// Constructs a new `Solution`.
    ///
    /// # Panics
    ///
    /// Panics if `move_count` does not equal the number of moves.
    pub fn new(move_count: T, moves: Vec<Slide>) -> Self {
        assert!(
            move_count.to_usize() == Some(moves.len()),
            "called `Solution::new` with inconsistent move count: {} moves recorded",
            moves.len()
        );
        Self { move_count, moves }
    }

    /// Returns the minimal number of single-cell slides.
    #[inline]
    pub fn move_count(&self) -> T {
        self.move_count
    }

    /// Returns the winning slide sequence, first move first.
    #[inline]
    pub fn moves(&self) -> &[Slide] {
        &self.moves
    }

    /// Returns `true` if the scenario was already solved at its starting
    /// configuration.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.moves.is_empty()
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution({} moves)", self.move_count)?;
        for (i, slide) in self.moves.iter().enumerate() {
            writeln!(f, "  {:>3}. {}", i + 1, slide)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::VehicleIndex;
    use crate::state::SlideDirection;

    fn fwd(i: usize) -> Slide {
        Slide::new(VehicleIndex::new(i), SlideDirection::Forward)
    }

    #[test]
    fn test_new_and_accessors() {
        let moves = vec![fwd(0), fwd(1), fwd(0)];
        let solution = Solution::new(3u32, moves.clone());

        assert_eq!(solution.move_count(), 3);
        assert_eq!(solution.moves(), &moves[..]);
        assert!(!solution.is_trivial());
    }

    #[test]
    fn test_trivial_solution() {
        let solution = Solution::new(0u32, Vec::new());
        assert!(solution.is_trivial());
        assert_eq!(solution.move_count(), 0);
    }

    #[test]
    #[should_panic(expected = "inconsistent move count")]
    fn test_new_rejects_mismatched_count() {
        let _ = Solution::new(2u32, vec![fwd(0)]);
    }
}
