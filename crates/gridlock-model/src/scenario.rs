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

use crate::{
    board::{Board, PlacementError},
    state::PuzzleState,
    vehicle::{Orientation, Vehicle},
    MAX_VEHICLES,
};
use smallvec::SmallVec;

/// An error produced when a vehicle list does not describe a valid puzzle
/// instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// A scenario must place at least the target vehicle.
    NoVehicles,
    /// More vehicles than the fixed capacity.
    TooManyVehicles { count: usize },
    /// The target vehicle must slide horizontally toward the exit column.
    MisalignedTarget,
    /// A vehicle could not be placed on the board.
    Placement(PlacementError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoVehicles => write!(f, "scenario contains no vehicles"),
            Self::TooManyVehicles { count } => write!(
                f,
                "scenario contains {} vehicles but at most {} are supported",
                count, MAX_VEHICLES
            ),
            Self::MisalignedTarget => {
                write!(f, "target vehicle must be horizontal to reach the exit")
            }
            Self::Placement(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<PlacementError> for ScenarioError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

/// One validated puzzle instance: the ordered vehicle list (index 0 is the
/// target) and the occupancy board derived from it.
///
/// A scenario is constructed once per puzzle, handed to exactly one solve
/// invocation, and discarded after the result is reported. Construction
/// validates everything the solvers assume: at least one vehicle, at most
/// [`MAX_VEHICLES`], a horizontal target, in-bounds footprints, and no
/// overlaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    vehicles: SmallVec<[Vehicle; MAX_VEHICLES]>,
    board: Board,
}

impl Scenario {
    /// Validates the vehicle list and builds the scenario.
    pub fn new<I>(vehicles: I) -> Result<Self, ScenarioError>
    where
        I: IntoIterator<Item = Vehicle>,
    {
        let vehicles: SmallVec<[Vehicle; MAX_VEHICLES]> = vehicles.into_iter().collect();

        if vehicles.is_empty() {
            return Err(ScenarioError::NoVehicles);
        }
        if vehicles.len() > MAX_VEHICLES {
            return Err(ScenarioError::TooManyVehicles {
                count: vehicles.len(),
            });
        }
        if vehicles[0].orientation() != Orientation::Horizontal {
            return Err(ScenarioError::MisalignedTarget);
        }

        let board = Board::from_vehicles(&vehicles)?;
        Ok(Self { vehicles, board })
    }

    /// Returns the number of vehicles in this scenario.
    #[inline]
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns the vehicle list, target first.
    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Returns the starting board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Produces a fresh mutable search state at the starting configuration.
    #[inline]
    pub fn initial_state(&self) -> PuzzleState {
        PuzzleState::new(self.board, self.vehicles.clone())
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Scenario with {} vehicles:", self.num_vehicles())?;
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleLength;

    #[test]
    fn test_valid_scenario_builds_board() {
        let scenario = Scenario::new(vec![
            Vehicle::new(2, 0, VehicleLength::Car, Orientation::Horizontal),
            Vehicle::new(0, 4, VehicleLength::Truck, Orientation::Vertical),
        ])
        .expect("scenario should be valid");

        assert_eq!(scenario.num_vehicles(), 2);
        let state = scenario.initial_state();
        assert!(state.is_consistent());
        assert!(!state.is_solved());
    }

    #[test]
    fn test_empty_vehicle_list_is_rejected() {
        assert_eq!(Scenario::new(vec![]), Err(ScenarioError::NoVehicles));
    }

    #[test]
    fn test_vertical_target_is_rejected() {
        let result = Scenario::new(vec![Vehicle::new(
            0,
            2,
            VehicleLength::Car,
            Orientation::Vertical,
        )]);
        assert_eq!(result, Err(ScenarioError::MisalignedTarget));
    }

    #[test]
    fn test_too_many_vehicles_are_rejected() {
        // Capacity-only check: placement is validated after the count, so
        // use trivially overlapping vehicles and expect the count error.
        let vehicles =
            vec![Vehicle::new(0, 0, VehicleLength::Car, Orientation::Horizontal); MAX_VEHICLES + 1];
        assert_eq!(
            Scenario::new(vehicles),
            Err(ScenarioError::TooManyVehicles {
                count: MAX_VEHICLES + 1
            })
        );
    }

    #[test]
    fn test_overlap_is_rejected() {
        let result = Scenario::new(vec![
            Vehicle::new(2, 0, VehicleLength::Truck, Orientation::Horizontal),
            Vehicle::new(1, 1, VehicleLength::Car, Orientation::Vertical),
        ]);
        assert!(matches!(
            result,
            Err(ScenarioError::Placement(PlacementError::Overlap { .. }))
        ));
    }
}
