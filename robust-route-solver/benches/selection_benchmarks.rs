//! Criterion benchmarks for the robust route solver.
//!
//! Compares materialised and streaming selection across customer counts to
//! show where holding every evaluated candidate starts to cost more than it
//! saves.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package robust-route-solver
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use robust_route_core::test_support::{complete_catalogue, registry};
use robust_route_core::{
    DisruptionConfig, EvaluationMode, RouteSelector, SelectionRequest, StopRegistry,
    UniformDisruptionModel,
};
use robust_route_solver::{RobustRouteSolver, SolverConfig};

/// Customer counts to benchmark.
const CUSTOMER_COUNTS: &[usize] = &[3, 4, 5];

/// Planned paths offered per leg.
const PLANNED_PER_LEG: usize = 2;

/// Seed for the disruption model so every iteration draws the same costs.
const BENCHMARK_SEED: u64 = 42;

fn build_registry(customers: usize) -> StopRegistry {
    let names: Vec<String> = (1..=customers).map(|index| format!("PV{index}")).collect();
    let mut entries = vec![("A", 0)];
    entries.extend(names.iter().map(|name| (name.as_str(), 1)));
    registry(&entries)
}

fn bench_selection_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(5));

    let disruption = DisruptionConfig::default();
    let request = SelectionRequest { capacity: 100 };

    for &customers in CUSTOMER_COUNTS {
        let stops = build_registry(customers);
        let catalogue = complete_catalogue(&stops, PLANNED_PER_LEG);

        for (label, mode) in [
            ("materialise", EvaluationMode::Materialise),
            ("stream", EvaluationMode::Stream),
        ] {
            let config = SolverConfig {
                mode,
                ..SolverConfig::default()
            };
            let solver = RobustRouteSolver::with_config(stops.clone(), catalogue.clone(), config);
            let Ok(volume) = solver.candidate_volume() else {
                continue;
            };
            group.throughput(Throughput::Elements(volume.candidates));
            group.bench_with_input(BenchmarkId::new(label, customers), &customers, |b, _| {
                b.iter(|| {
                    let Ok(mut model) = UniformDisruptionModel::seeded(&disruption, BENCHMARK_SEED)
                    else {
                        return;
                    };
                    #[expect(
                        clippy::let_underscore_must_use,
                        reason = "Benchmarking selection performance, result is intentionally discarded"
                    )]
                    let _ = solver.select(&request, &mut model);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_selection_modes);
criterion_main!(benches);
