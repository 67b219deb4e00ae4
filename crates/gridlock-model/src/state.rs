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

//! Mutable puzzle state and the single-cell slide move generator.
//!
//! [`PuzzleState`] pairs the vehicle list with its derived occupancy board
//! and keeps the two consistent under moves. A slide shifts one vehicle by
//! exactly one cell along its own axis, so only two board cells ever
//! change: the cell vacated at one edge and the cell claimed at the other.
//!
//! Forward and backward slides are exact structural inverses. The
//! depth-first solver relies on this to backtrack by applying the inverse
//! move instead of snapshotting state; the breadth-first solver relies on
//! it to reuse one working state while generating successor candidates.

use crate::{
    board::{Board, BoardKey},
    index::VehicleIndex,
    vehicle::{Orientation, Vehicle},
    GRID_SIZE, MAX_VEHICLES,
};
use smallvec::SmallVec;

/// The direction of a slide along a vehicle's own axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SlideDirection {
    /// Toward increasing row/column.
    Forward,
    /// Toward decreasing row/column.
    Backward,
}

impl SlideDirection {
    /// Returns the opposite direction.
    #[inline(always)]
    pub const fn inverse(&self) -> Self {
        match self {
            SlideDirection::Forward => SlideDirection::Backward,
            SlideDirection::Backward => SlideDirection::Forward,
        }
    }
}

impl std::fmt::Display for SlideDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlideDirection::Forward => write!(f, "forward"),
            SlideDirection::Backward => write!(f, "backward"),
        }
    }
}

/// One single-cell move of one vehicle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Slide {
    vehicle: VehicleIndex,
    direction: SlideDirection,
}

impl Slide {
    /// Creates a new slide.
    #[inline(always)]
    pub const fn new(vehicle: VehicleIndex, direction: SlideDirection) -> Self {
        Self { vehicle, direction }
    }

    /// Returns the vehicle being moved.
    #[inline(always)]
    pub const fn vehicle(&self) -> VehicleIndex {
        self.vehicle
    }

    /// Returns the slide direction.
    #[inline(always)]
    pub const fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Returns the slide that exactly undoes this one.
    #[inline(always)]
    pub const fn inverse(&self) -> Self {
        Self {
            vehicle: self.vehicle,
            direction: self.direction.inverse(),
        }
    }
}

impl std::fmt::Display for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vehicle {} {}", self.vehicle.get(), self.direction)
    }
}

/// A board configuration under search: the vehicle list plus its derived
/// occupancy grid.
///
/// The vehicle list lives in a fixed-capacity inline buffer, so cloning a
/// state (as the breadth-first solver does for every enqueued successor)
/// performs no heap allocation.
#[derive(Clone, PartialEq, Eq)]
pub struct PuzzleState {
    board: Board,
    vehicles: SmallVec<[Vehicle; MAX_VEHICLES]>,
}

impl PuzzleState {
    /// Creates a state from an already validated board/vehicle pair.
    #[inline]
    pub(crate) fn new(board: Board, vehicles: SmallVec<[Vehicle; MAX_VEHICLES]>) -> Self {
        Self { board, vehicles }
    }

    /// Returns the number of vehicles on the board.
    #[inline]
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns the current record for the given vehicle.
    ///
    /// # Panics
    ///
    /// Panics if `vehicle` is not in `0..num_vehicles()`.
    #[inline]
    pub fn vehicle(&self, vehicle: VehicleIndex) -> Vehicle {
        debug_assert!(
            vehicle.get() < self.vehicles.len(),
            "called `PuzzleState::vehicle` with vehicle index out of bounds: the len is {} but the index is {}",
            self.vehicles.len(),
            vehicle.get()
        );
        self.vehicles[vehicle.get()]
    }

    /// Returns the current occupancy grid.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the canonical key of the current configuration.
    #[inline]
    pub fn board_key(&self) -> BoardKey {
        self.board.key()
    }

    /// Tests whether the given slide is legal: the vehicle must not sit at
    /// the grid boundary in that direction, and the single cell beyond its
    /// moving edge must be empty.
    pub fn can_slide(&self, slide: Slide) -> bool {
        let vehicle = self.vehicle(slide.vehicle());
        let len = vehicle.length().cells();
        match (vehicle.orientation(), slide.direction()) {
            (Orientation::Horizontal, SlideDirection::Forward) => {
                vehicle.col() + len < GRID_SIZE
                    && self.board.is_empty_cell(vehicle.row(), vehicle.col() + len)
            }
            (Orientation::Horizontal, SlideDirection::Backward) => {
                vehicle.col() > 0 && self.board.is_empty_cell(vehicle.row(), vehicle.col() - 1)
            }
            (Orientation::Vertical, SlideDirection::Forward) => {
                vehicle.row() + len < GRID_SIZE
                    && self.board.is_empty_cell(vehicle.row() + len, vehicle.col())
            }
            (Orientation::Vertical, SlideDirection::Backward) => {
                vehicle.row() > 0 && self.board.is_empty_cell(vehicle.row() - 1, vehicle.col())
            }
        }
    }

    /// Applies a slide known to be legal, updating the vehicle anchor and
    /// exactly two board cells.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the slide is illegal.
    pub fn apply_slide(&mut self, slide: Slide) {
        debug_assert!(
            self.can_slide(slide),
            "called `PuzzleState::apply_slide` with illegal slide: {}",
            slide
        );

        let index = slide.vehicle();
        let vehicle = self.vehicles[index.get()];
        let len = vehicle.length().cells();

        match (vehicle.orientation(), slide.direction()) {
            (Orientation::Horizontal, SlideDirection::Forward) => {
                self.board.set_occupied(vehicle.row(), vehicle.col() + len, index);
                self.board.set_empty(vehicle.row(), vehicle.col());
                self.vehicles[index.get()].advance();
            }
            (Orientation::Horizontal, SlideDirection::Backward) => {
                self.board.set_occupied(vehicle.row(), vehicle.col() - 1, index);
                self.board.set_empty(vehicle.row(), vehicle.col() + len - 1);
                self.vehicles[index.get()].retreat();
            }
            (Orientation::Vertical, SlideDirection::Forward) => {
                self.board.set_occupied(vehicle.row() + len, vehicle.col(), index);
                self.board.set_empty(vehicle.row(), vehicle.col());
                self.vehicles[index.get()].advance();
            }
            (Orientation::Vertical, SlideDirection::Backward) => {
                self.board.set_occupied(vehicle.row() - 1, vehicle.col(), index);
                self.board.set_empty(vehicle.row() + len - 1, vehicle.col());
                self.vehicles[index.get()].retreat();
            }
        }
    }

    /// Undoes a previously applied slide by applying its exact inverse.
    #[inline]
    pub fn undo_slide(&mut self, slide: Slide) {
        self.apply_slide(slide.inverse());
    }

    /// Applies the slide if it is legal. Returns whether it was applied.
    #[inline]
    pub fn try_slide(&mut self, slide: Slide) -> bool {
        if self.can_slide(slide) {
            self.apply_slide(slide);
            true
        } else {
            false
        }
    }

    /// Returns `true` if the target vehicle's trailing edge has reached the
    /// rightmost column.
    #[inline]
    pub fn is_solved(&self) -> bool {
        let target = self.vehicles[VehicleIndex::TARGET.get()];
        debug_assert_eq!(
            target.orientation(),
            Orientation::Horizontal,
            "target vehicle must be horizontal; scenario validation should have rejected this"
        );
        let (_, tail_col) = target.trailing_edge();
        tail_col == GRID_SIZE - 1
    }

    /// Checks that the board exactly mirrors the vehicle records and that
    /// no two vehicles overlap. Intended for tests and debug assertions.
    pub fn is_consistent(&self) -> bool {
        match Board::from_vehicles(&self.vehicles) {
            Ok(rebuilt) => rebuilt == self.board,
            Err(_) => false,
        }
    }
}

impl std::fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleState")
            .field("board", &self.board)
            .field("vehicles", &self.vehicles)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use crate::vehicle::VehicleLength;

    fn vi(i: usize) -> VehicleIndex {
        VehicleIndex::new(i)
    }

    fn state(vehicles: Vec<Vehicle>) -> PuzzleState {
        Scenario::new(vehicles)
            .expect("test scenario should be valid")
            .initial_state()
    }

    fn fwd(i: usize) -> Slide {
        Slide::new(vi(i), SlideDirection::Forward)
    }

    fn back(i: usize) -> Slide {
        Slide::new(vi(i), SlideDirection::Backward)
    }

    #[test]
    fn test_slide_legality_at_boundaries() {
        // Target car parked against the left wall.
        let s = state(vec![Vehicle::new(
            2,
            0,
            VehicleLength::Car,
            Orientation::Horizontal,
        )]);
        assert!(s.can_slide(fwd(0)));
        assert!(!s.can_slide(back(0)));

        // Same car against the right wall.
        let s = state(vec![Vehicle::new(
            2,
            4,
            VehicleLength::Car,
            Orientation::Horizontal,
        )]);
        assert!(!s.can_slide(fwd(0)));
        assert!(s.can_slide(back(0)));
    }

    #[test]
    fn test_slide_blocked_by_other_vehicle() {
        let s = state(vec![
            Vehicle::new(2, 0, VehicleLength::Car, Orientation::Horizontal),
            Vehicle::new(1, 2, VehicleLength::Car, Orientation::Vertical),
        ]);
        // Cell (2, 2) is covered by vehicle 1.
        assert!(!s.can_slide(fwd(0)));
        // Vehicle 1 can clear the row by moving up, not down past the car.
        assert!(s.can_slide(back(1)));
        assert!(s.can_slide(fwd(1)));
    }

    #[test]
    fn test_apply_slide_updates_two_cells() {
        let mut s = state(vec![Vehicle::new(
            2,
            1,
            VehicleLength::Truck,
            Orientation::Horizontal,
        )]);
        s.apply_slide(fwd(0));

        assert_eq!(s.vehicle(vi(0)).col(), 2);
        assert!(s.board().is_empty_cell(2, 1));
        assert_eq!(s.board().vehicle_at(2, 4), Some(vi(0)));
        // Interior cells untouched.
        assert_eq!(s.board().vehicle_at(2, 2), Some(vi(0)));
        assert_eq!(s.board().vehicle_at(2, 3), Some(vi(0)));
        assert!(s.is_consistent());
    }

    #[test]
    fn test_apply_then_undo_restores_state() {
        let mut s = state(vec![
            Vehicle::new(2, 0, VehicleLength::Car, Orientation::Horizontal),
            Vehicle::new(0, 3, VehicleLength::Truck, Orientation::Vertical),
        ]);
        let before = s.clone();

        for slide in [fwd(0), back(1), fwd(1)] {
            if !s.can_slide(slide) {
                continue;
            }
            s.apply_slide(slide);
            assert!(s.is_consistent());
            s.undo_slide(slide);
            assert_eq!(s, before);
        }
    }

    #[test]
    fn test_goal_requires_trailing_edge_at_rightmost_column() {
        let s = state(vec![Vehicle::new(
            2,
            4,
            VehicleLength::Car,
            Orientation::Horizontal,
        )]);
        assert!(s.is_solved());

        let s = state(vec![Vehicle::new(
            2,
            3,
            VehicleLength::Car,
            Orientation::Horizontal,
        )]);
        assert!(!s.is_solved());

        // A truck's trailing edge reaches column 5 from column 3.
        let s = state(vec![Vehicle::new(
            2,
            3,
            VehicleLength::Truck,
            Orientation::Horizontal,
        )]);
        assert!(s.is_solved());
    }

    #[test]
    fn test_random_walk_is_invertible() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut s = state(vec![
            Vehicle::new(2, 0, VehicleLength::Car, Orientation::Horizontal),
            Vehicle::new(0, 2, VehicleLength::Truck, Orientation::Vertical),
            Vehicle::new(0, 3, VehicleLength::Car, Orientation::Vertical),
            Vehicle::new(4, 2, VehicleLength::Truck, Orientation::Horizontal),
            Vehicle::new(3, 5, VehicleLength::Truck, Orientation::Vertical),
        ]);
        let initial = s.clone();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut applied = Vec::new();

        for _ in 0..1_000 {
            let vehicle = vi(rng.gen_range(0..s.num_vehicles()));
            let direction = if rng.gen_bool(0.5) {
                SlideDirection::Forward
            } else {
                SlideDirection::Backward
            };
            let slide = Slide::new(vehicle, direction);
            if s.try_slide(slide) {
                applied.push(slide);
                assert!(s.is_consistent());
            }
        }

        for slide in applied.iter().rev() {
            s.undo_slide(*slide);
        }
        assert_eq!(s, initial);
    }
}
