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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use gridlock_model::{scenario::Scenario, solution::Solution};
use num_traits::{PrimInt, Unsigned};

/// A monitor that terminates the search after a fixed number of expanded
/// nodes.
///
/// Unlike a wall-clock limit, a node limit is deterministic: the same
/// scenario with the same limit always stops at the same point.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeLimitMonitor<T>
where
    T: PrimInt + Unsigned,
{
    limit: u64,
    steps: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NodeLimitMonitor<T>
where
    T: PrimInt + Unsigned,
{
    /// Creates a monitor that allows at most `limit` expanded nodes.
    #[inline]
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            steps: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the number of nodes observed so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<T> SearchMonitor<T> for NodeLimitMonitor<T>
where
    T: PrimInt + Unsigned,
{
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _scenario: &Scenario) {
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _solution: &Solution<T>) {}

    #[inline]
    fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline]
    fn search_command(&self) -> SearchCommand {
        if self.steps >= self.limit {
            SearchCommand::Terminate(format!("node limit of {} reached", self.limit))
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_once_limit_is_reached() {
        let mut monitor = NodeLimitMonitor::<u32>::new(2);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);

        monitor.on_step();
        assert_eq!(monitor.search_command(), SearchCommand::Continue);

        monitor.on_step();
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_enter_search_resets_counter() {
        let mut monitor = NodeLimitMonitor::<u32>::new(1);
        monitor.on_step();
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));

        let scenario = gridlock_model::scenario::Scenario::new(vec![
            gridlock_model::vehicle::Vehicle::new(
                2,
                0,
                gridlock_model::vehicle::VehicleLength::Car,
                gridlock_model::vehicle::Orientation::Horizontal,
            ),
        ])
        .unwrap();
        monitor.on_enter_search(&scenario);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }
}
