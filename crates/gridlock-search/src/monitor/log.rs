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
use std::time::{Duration, Instant};

/// A monitor that prints periodic progress lines and found solutions to
/// stdout.
#[derive(Debug, Clone)]
pub struct LogMonitor<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    steps: u64,
    best_move_count: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    /// Creates a monitor printing at most one progress line per
    /// `log_interval`.
    pub fn new(log_interval: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            steps: 0,
            best_move_count: None,
        }
    }

    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<14}",
            "Elapsed", "Nodes", "Best Solution"
        );
        println!("{}", "-".repeat(44));
    }

    fn log_line(&mut self) {
        let elapsed = self.start_time.elapsed().as_secs_f32();
        let best = match &self.best_move_count {
            Some(count) => format!("{}", count),
            None => "Inf".to_string(),
        };
        println!(
            "{:<9} | {:<14} | {:<14}",
            format!("{:.1}s", elapsed),
            self.steps,
            best
        );
    }
}

impl<T> Default for LogMonitor<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, scenario: &Scenario) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.best_move_count = None;
        println!("Searching scenario with {} vehicles", scenario.num_vehicles());
        self.print_header();
    }

    fn on_exit_search(&mut self) {
        self.log_line();
    }

    fn on_solution_found(&mut self, solution: &Solution<T>) {
        self.best_move_count = Some(solution.move_count());
        println!("Found solution with {} moves", solution.move_count());
    }

    fn on_step(&mut self) {
        self.steps += 1;
        if self.last_log_time.elapsed() >= self.log_interval {
            self.last_log_time = Instant::now();
            self.log_line();
        }
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
