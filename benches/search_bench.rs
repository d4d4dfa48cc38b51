//! Criterion benchmarks for the branch-and-bound search.
//!
//! Random complete courses of increasing size, with and without pruning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_orienteering::io::Network;
use u_orienteering::models::{Control, Course, TimeWindow};
use u_orienteering::search::{BranchAndBound, SearchConfig};

// ===========================================================================
// Instances
// ===========================================================================

/// Builds a course where every pair of vertices is connected both ways.
fn random_course(n: usize, seed: u64) -> (Network, Course) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = Network::new();
    let mut course = Course::new(15.0 * n as f64, 2.0).expect("valid limits");

    let mut ids = vec![net.start()];
    for i in 1..=n {
        let code = format!("C{i}");
        ids.push(net.ensure_vertex(&code));

        let open = rng.random_range(0.0..10.0 * n as f64);
        let close = open + rng.random_range(20.0..60.0);
        let window = TimeWindow::new(open, close).expect("open before close");
        course.push_control(Control::new(code, rng.random_range(5..40), window));
    }

    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            let forward = rng.random_range(2.0..15.0);
            let reverse = forward + rng.random_range(0.0..3.0);
            net.connect(a, b, forward, reverse).expect("distinct endpoints");
        }
    }
    (net, course)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_pruned(c: &mut Criterion) {
    let mut group = c.benchmark_group("branch_bound_pruned");
    group.sample_size(10);

    for &n in &[6usize, 8, 10] {
        let instance = random_course(n, 42);
        let config = SearchConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, (net, course)| {
            b.iter(|| {
                let result =
                    BranchAndBound::run(net.graph(), black_box(course), net.start(), &config);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("branch_bound_exhaustive");
    group.sample_size(10);

    for &n in &[5usize, 6, 7] {
        let instance = random_course(n, 42);
        let config = SearchConfig::default().with_pruning(false);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, (net, course)| {
            b.iter(|| {
                let result =
                    BranchAndBound::run(net.graph(), black_box(course), net.start(), &config);
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pruned, bench_exhaustive);
criterion_main!(benches);
