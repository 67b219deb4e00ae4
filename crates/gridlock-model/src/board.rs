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

//! The fixed 6×6 occupancy grid and its canonical key.
//!
//! The board is a derived view over a scenario's vehicle list: cell `(r, c)`
//! holds the index of the vehicle covering it, or an empty marker. Because
//! the grid dimensions are compile-time constants, the whole board is one
//! flat `[u8; 36]` and copies are trivially cheap. The same byte array,
//! wrapped as [`BoardKey`], is the canonical visited-state key consumed by
//! the breadth-first solver's deduplication map; no per-state allocation
//! is involved.

use crate::{index::VehicleIndex, vehicle::Vehicle, GRID_SIZE, NUM_CELLS};

/// Marker byte for an unoccupied cell.
const EMPTY_CELL: u8 = u8::MAX;

/// An error produced when a vehicle list cannot be placed on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A vehicle's footprint extends beyond the grid.
    OutOfBounds { vehicle: VehicleIndex },
    /// Two vehicles cover the same cell.
    Overlap {
        vehicle: VehicleIndex,
        row: usize,
        col: usize,
    },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { vehicle } => {
                write!(f, "{} extends beyond the {}x{} grid", vehicle, GRID_SIZE, GRID_SIZE)
            }
            Self::Overlap { vehicle, row, col } => {
                write!(f, "{} overlaps another vehicle at ({}, {})", vehicle, row, col)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// A canonical, fixed-width serialization of a board configuration.
///
/// Two search states with equal keys describe the same configuration even
/// when reached via different move sequences, which is exactly the
/// equivalence the breadth-first solver's visited set needs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey([u8; NUM_CELLS]);

impl BoardKey {
    /// Returns the raw row-major cell bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; NUM_CELLS] {
        &self.0
    }
}

impl std::fmt::Debug for BoardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoardKey({:?})", &self.0[..])
    }
}

/// The 6×6 occupancy grid.
///
/// Stored row-major; each cell holds the occupying vehicle's index or the
/// empty marker. The board is fully determined by the vehicle list it was
/// built from, and the slide operations in [`crate::state`] keep the two
/// in lockstep.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [u8; NUM_CELLS],
}

impl Board {
    /// Creates a board with every cell empty.
    #[inline]
    pub fn empty() -> Self {
        Self {
            cells: [EMPTY_CELL; NUM_CELLS],
        }
    }

    /// Builds the occupancy grid for the given vehicle list.
    ///
    /// Fails if any footprint leaves the grid or if two vehicles cover the
    /// same cell. Vehicle indices in the produced board correspond to
    /// positions in `vehicles`.
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Result<Self, PlacementError> {
        debug_assert!(
            vehicles.len() <= EMPTY_CELL as usize,
            "called `Board::from_vehicles` with {} vehicles, which collides with the empty marker",
            vehicles.len()
        );

        let mut board = Self::empty();
        for (i, vehicle) in vehicles.iter().enumerate() {
            let index = VehicleIndex::new(i);
            if !vehicle.in_bounds() {
                return Err(PlacementError::OutOfBounds { vehicle: index });
            }
            for (row, col) in vehicle.cells() {
                if !board.is_empty_cell(row, col) {
                    return Err(PlacementError::Overlap {
                        vehicle: index,
                        row,
                        col,
                    });
                }
                board.set_occupied(row, col, index);
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn cell_index(row: usize, col: usize) -> usize {
        debug_assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "called `Board::cell_index` with cell ({}, {}) out of the {}x{} grid",
            row,
            col,
            GRID_SIZE,
            GRID_SIZE
        );
        row * GRID_SIZE + col
    }

    /// Returns the vehicle occupying `(row, col)`, or `None` for an empty
    /// cell.
    #[inline]
    pub fn vehicle_at(&self, row: usize, col: usize) -> Option<VehicleIndex> {
        match self.cells[Self::cell_index(row, col)] {
            EMPTY_CELL => None,
            id => Some(VehicleIndex::new(id as usize)),
        }
    }

    /// Returns `true` if `(row, col)` is unoccupied.
    #[inline]
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.cells[Self::cell_index(row, col)] == EMPTY_CELL
    }

    /// Marks `(row, col)` as occupied by `vehicle`.
    #[inline(always)]
    pub(crate) fn set_occupied(&mut self, row: usize, col: usize, vehicle: VehicleIndex) {
        self.cells[Self::cell_index(row, col)] = vehicle.get() as u8;
    }

    /// Marks `(row, col)` as empty.
    #[inline(always)]
    pub(crate) fn set_empty(&mut self, row: usize, col: usize) {
        self.cells[Self::cell_index(row, col)] = EMPTY_CELL;
    }

    /// Returns the canonical key for this configuration.
    #[inline]
    pub fn key(&self) -> BoardKey {
        BoardKey(self.cells)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match self.cells[Self::cell_index(row, col)] {
                    EMPTY_CELL => write!(f, ".")?,
                    id => write!(f, "{}", (b'A' + id) as char)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        std::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{Orientation, VehicleLength};

    fn vi(i: usize) -> VehicleIndex {
        VehicleIndex::new(i)
    }

    #[test]
    fn test_empty_board_has_no_occupied_cells() {
        let board = Board::empty();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                assert!(board.is_empty_cell(row, col));
                assert_eq!(board.vehicle_at(row, col), None);
            }
        }
    }

    #[test]
    fn test_from_vehicles_marks_footprints() {
        let vehicles = [
            Vehicle::new(2, 0, VehicleLength::Car, Orientation::Horizontal),
            Vehicle::new(0, 4, VehicleLength::Truck, Orientation::Vertical),
        ];
        let board = Board::from_vehicles(&vehicles).expect("placement should succeed");

        assert_eq!(board.vehicle_at(2, 0), Some(vi(0)));
        assert_eq!(board.vehicle_at(2, 1), Some(vi(0)));
        assert_eq!(board.vehicle_at(0, 4), Some(vi(1)));
        assert_eq!(board.vehicle_at(1, 4), Some(vi(1)));
        assert_eq!(board.vehicle_at(2, 4), Some(vi(1)));
        assert!(board.is_empty_cell(2, 2));
        assert!(board.is_empty_cell(5, 5));
    }

    #[test]
    fn test_from_vehicles_rejects_out_of_bounds() {
        let vehicles = [Vehicle::new(4, 0, VehicleLength::Truck, Orientation::Vertical)];
        assert_eq!(
            Board::from_vehicles(&vehicles),
            Err(PlacementError::OutOfBounds { vehicle: vi(0) })
        );
    }

    #[test]
    fn test_from_vehicles_rejects_overlap() {
        let vehicles = [
            Vehicle::new(2, 0, VehicleLength::Truck, Orientation::Horizontal),
            Vehicle::new(0, 2, VehicleLength::Truck, Orientation::Vertical),
        ];
        assert_eq!(
            Board::from_vehicles(&vehicles),
            Err(PlacementError::Overlap {
                vehicle: vi(1),
                row: 2,
                col: 2
            })
        );
    }

    #[test]
    fn test_key_distinguishes_configurations() {
        let a = Board::from_vehicles(&[Vehicle::new(
            2,
            0,
            VehicleLength::Car,
            Orientation::Horizontal,
        )])
        .unwrap();
        let b = Board::from_vehicles(&[Vehicle::new(
            2,
            1,
            VehicleLength::Car,
            Orientation::Horizontal,
        )])
        .unwrap();

        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), a.key());
    }
}
