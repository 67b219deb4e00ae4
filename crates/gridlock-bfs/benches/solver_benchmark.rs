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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gridlock_bfs::bfs::BfsSolver;
use gridlock_model::{
    scenario::Scenario,
    vehicle::{Orientation, Vehicle, VehicleLength},
};
use gridlock_search::monitor::no_op::NoOperationMonitor;
use std::hint::black_box;

fn car(row: usize, col: usize, orientation: Orientation) -> Vehicle {
    Vehicle::new(row, col, VehicleLength::Car, orientation)
}

fn truck(row: usize, col: usize, orientation: Orientation) -> Vehicle {
    Vehicle::new(row, col, VehicleLength::Truck, orientation)
}

/// A sparse board solved in a handful of moves.
fn easy_scenario() -> Scenario {
    Scenario::new(vec![
        car(2, 0, Orientation::Horizontal),
        car(1, 4, Orientation::Vertical),
    ])
    .expect("scenario should be valid")
}

/// A dense board in the style of the harder card-deck puzzles.
fn dense_scenario() -> Scenario {
    Scenario::new(vec![
        car(2, 0, Orientation::Horizontal),
        car(0, 0, Orientation::Vertical),
        car(0, 1, Orientation::Horizontal),
        truck(0, 3, Orientation::Vertical),
        car(1, 4, Orientation::Horizontal),
        car(3, 0, Orientation::Horizontal),
        truck(3, 2, Orientation::Vertical),
        car(4, 4, Orientation::Vertical),
        car(4, 0, Orientation::Horizontal),
        car(5, 0, Orientation::Horizontal),
    ])
    .expect("scenario should be valid")
}

fn bench_breadth_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("breadth_first");

    for (name, scenario) in [("easy", easy_scenario()), ("dense", dense_scenario())] {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &scenario,
            |b, scenario| {
                let mut solver = BfsSolver::new();
                b.iter(|| {
                    let outcome =
                        solver.solve::<u32, _>(black_box(scenario), NoOperationMonitor::new());
                    black_box(outcome)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_breadth_first);
criterion_main!(benches);
