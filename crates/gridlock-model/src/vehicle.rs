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

use crate::GRID_SIZE;

/// The axis a vehicle is constrained to slide along.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Orientation {
    /// The vehicle occupies cells in one row and slides along columns.
    Horizontal,
    /// The vehicle occupies cells in one column and slides along rows.
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "H"),
            Orientation::Vertical => write!(f, "V"),
        }
    }
}

/// How many cells a vehicle covers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum VehicleLength {
    /// A two-cell vehicle.
    Car,
    /// A three-cell vehicle.
    Truck,
}

impl VehicleLength {
    /// Returns the number of cells this length covers.
    #[inline(always)]
    pub const fn cells(&self) -> usize {
        match self {
            VehicleLength::Car => 2,
            VehicleLength::Truck => 3,
        }
    }

    /// Maps a raw cell count to a length, or `None` for anything
    /// other than 2 or 3.
    #[inline]
    pub const fn from_cells(cells: usize) -> Option<Self> {
        match cells {
            2 => Some(VehicleLength::Car),
            3 => Some(VehicleLength::Truck),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cells())
    }
}

/// A rigid vehicle on the board.
///
/// The anchor `(row, col)` is the front-most occupied cell, i.e. the one
/// with the lowest row (vertical) or column (horizontal). The remaining
/// cells extend toward increasing row/column along the orientation axis.
///
/// Invariant: the full footprint lies within the grid. `Vehicle::new`
/// does not enforce this on its own (the anchor fields are plain data);
/// scenario construction validates it via [`Vehicle::in_bounds`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vehicle {
    row: usize,
    col: usize,
    length: VehicleLength,
    orientation: Orientation,
}

impl Vehicle {
    /// Creates a new vehicle from its anchor position, length, and
    /// orientation.
    #[inline]
    pub const fn new(
        row: usize,
        col: usize,
        length: VehicleLength,
        orientation: Orientation,
    ) -> Self {
        Self {
            row,
            col,
            length,
            orientation,
        }
    }

    /// Returns the anchor row.
    #[inline(always)]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the anchor column.
    #[inline(always)]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns the vehicle length.
    #[inline(always)]
    pub const fn length(&self) -> VehicleLength {
        self.length
    }

    /// Returns the orientation.
    #[inline(always)]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the cell at the trailing edge, i.e. the occupied cell with
    /// the highest row/column along the orientation axis.
    #[inline]
    pub fn trailing_edge(&self) -> (usize, usize) {
        let offset = self.length.cells() - 1;
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + offset),
            Orientation::Vertical => (self.row + offset, self.col),
        }
    }

    /// Iterates over all cells covered by this vehicle, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length.cells()).map(move |offset| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + offset),
            Orientation::Vertical => (self.row + offset, self.col),
        })
    }

    /// Returns `true` if the whole footprint lies within the grid.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        let (tail_row, tail_col) = self.trailing_edge();
        tail_row < GRID_SIZE && tail_col < GRID_SIZE
    }

    /// Shifts the anchor one cell toward increasing row/column.
    /// The caller is responsible for having checked legality.
    #[inline(always)]
    pub(crate) fn advance(&mut self) {
        match self.orientation {
            Orientation::Horizontal => self.col += 1,
            Orientation::Vertical => self.row += 1,
        }
    }

    /// Shifts the anchor one cell toward decreasing row/column.
    /// The caller is responsible for having checked legality.
    #[inline(always)]
    pub(crate) fn retreat(&mut self) {
        match self.orientation {
            Orientation::Horizontal => self.col -= 1,
            Orientation::Vertical => self.row -= 1,
        }
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vehicle({} {} at ({}, {}))",
            self.length, self.orientation, self.row, self.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_cell_counts() {
        assert_eq!(VehicleLength::Car.cells(), 2);
        assert_eq!(VehicleLength::Truck.cells(), 3);
        assert_eq!(VehicleLength::from_cells(2), Some(VehicleLength::Car));
        assert_eq!(VehicleLength::from_cells(3), Some(VehicleLength::Truck));
        assert_eq!(VehicleLength::from_cells(4), None);
        assert_eq!(VehicleLength::from_cells(0), None);
    }

    #[test]
    fn test_horizontal_footprint() {
        let v = Vehicle::new(2, 1, VehicleLength::Truck, Orientation::Horizontal);
        let cells: Vec<_> = v.cells().collect();
        assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(v.trailing_edge(), (2, 3));
        assert!(v.in_bounds());
    }

    #[test]
    fn test_vertical_footprint() {
        let v = Vehicle::new(4, 5, VehicleLength::Car, Orientation::Vertical);
        let cells: Vec<_> = v.cells().collect();
        assert_eq!(cells, vec![(4, 5), (5, 5)]);
        assert_eq!(v.trailing_edge(), (5, 5));
        assert!(v.in_bounds());
    }

    #[test]
    fn test_out_of_bounds_footprint() {
        let v = Vehicle::new(4, 0, VehicleLength::Truck, Orientation::Vertical);
        assert!(!v.in_bounds());
        let v = Vehicle::new(0, 5, VehicleLength::Car, Orientation::Horizontal);
        assert!(!v.in_bounds());
    }

    #[test]
    fn test_advance_and_retreat_are_inverses() {
        let original = Vehicle::new(3, 2, VehicleLength::Car, Orientation::Vertical);
        let mut v = original;
        v.advance();
        assert_eq!(v.row(), 4);
        v.retreat();
        assert_eq!(v, original);
    }
}
