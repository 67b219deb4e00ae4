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

use std::time::Duration;

/// Statistics collected during a breadth-first run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BfsSolverStatistics {
    /// States popped from the frontier and expanded.
    pub states_expanded: u64,
    /// Fresh states enqueued onto the frontier.
    pub states_enqueued: u64,
    /// Candidate states dropped because their canonical key was already
    /// visited.
    pub states_deduplicated: u64,
    /// Candidate slides rejected as illegal (boundary or blocked cell).
    pub slides_rejected: u64,
    /// The largest frontier size observed.
    pub frontier_peak: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl BfsSolverStatistics {
    #[inline]
    pub fn on_state_expanded(&mut self) {
        self.states_expanded = self.states_expanded.saturating_add(1);
    }

    #[inline]
    pub fn on_state_enqueued(&mut self) {
        self.states_enqueued = self.states_enqueued.saturating_add(1);
    }

    #[inline]
    pub fn on_state_deduplicated(&mut self) {
        self.states_deduplicated = self.states_deduplicated.saturating_add(1);
    }

    #[inline]
    pub fn on_slide_rejected(&mut self) {
        self.slides_rejected = self.slides_rejected.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_size(&mut self, size: usize) {
        self.frontier_peak = self.frontier_peak.max(size as u64);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for BfsSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Breadth-First Solver Statistics:")?;
        writeln!(f, "  States expanded:      {}", self.states_expanded)?;
        writeln!(f, "  States enqueued:      {}", self.states_enqueued)?;
        writeln!(f, "  States deduplicated:  {}", self.states_deduplicated)?;
        writeln!(f, "  Slides rejected:      {}", self.slides_rejected)?;
        writeln!(f, "  Frontier peak:        {}", self.frontier_peak)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_peak_tracks_maximum() {
        let mut stats = BfsSolverStatistics::default();
        stats.on_frontier_size(3);
        stats.on_frontier_size(7);
        stats.on_frontier_size(2);
        assert_eq!(stats.frontier_peak, 7);
    }
}
