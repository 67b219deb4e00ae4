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

/// A strongly typed index identifying a vehicle within a scenario.
///
/// Wraps the vehicle's position in the scenario's vehicle list. Index `0`
/// is always the target vehicle, the one that must reach the exit.
/// `#[repr(transparent)]` keeps this a zero-cost wrapper over `usize`.
///
/// # Examples
///
/// ```rust
/// # use gridlock_model::index::VehicleIndex;
///
/// let v = VehicleIndex::new(3);
/// assert_eq!(v.get(), 3);
/// assert!(!v.is_target());
/// assert!(VehicleIndex::TARGET.is_target());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleIndex(usize);

impl VehicleIndex {
    /// The index of the target vehicle.
    pub const TARGET: VehicleIndex = VehicleIndex(0);

    /// Creates a new `VehicleIndex` from its position in the vehicle list.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Returns `true` if this index names the target vehicle.
    #[inline(always)]
    pub const fn is_target(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Debug for VehicleIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VehicleIndex({})", self.0)
    }
}

impl std::fmt::Display for VehicleIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VehicleIndex({})", self.0)
    }
}

impl From<usize> for VehicleIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<VehicleIndex> for usize {
    fn from(index: VehicleIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let v = VehicleIndex::new(7);
        assert_eq!(v.get(), 7);
        assert_eq!(usize::from(v), 7);
        assert_eq!(VehicleIndex::from(7), v);
    }

    #[test]
    fn test_target_index_is_zero() {
        assert!(VehicleIndex::TARGET.is_target());
        assert!(VehicleIndex::new(0).is_target());
        assert!(!VehicleIndex::new(1).is_target());
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", VehicleIndex::new(4)), "VehicleIndex(4)");
    }
}
