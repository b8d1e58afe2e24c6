//! Generator benchmarks.
//!
//! Measures Watts–Strogatz generation (ring lattice plus rewiring, and the
//! rewiring pass alone) and Barabási–Albert preferential attachment across
//! graph sizes.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use netgen_benches::{
    error::BenchSetupError,
    params::GeneratorBenchParams,
    reference::{SEED, seeded_rng},
};
use netgen_core::{
    BarabasiAlbertParams, WattsStrogatzParams, barabasi_albert_graph, build_ring_lattice, rewire,
    watts_strogatz_graph,
};

/// Graph sizes to benchmark.
const NODE_COUNTS: &[usize] = &[1_000, 10_000, 50_000];

/// Lattice degree of the Watts–Strogatz runs.
const DEGREE: usize = 10;

/// Rewiring probability of the Watts–Strogatz runs.
const BETA: f64 = 0.1;

/// Attachment count of the Barabási–Albert runs.
const EDGES_PER_NODE: usize = 5;

fn watts_strogatz_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("watts_strogatz");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let params = WattsStrogatzParams::new(node_count, DEGREE, BETA)?.with_rng_seed(SEED);
        let bench_params = GeneratorBenchParams {
            node_count,
            degree: DEGREE,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(bench_params),
            &params,
            |b, params| {
                b.iter(|| watts_strogatz_graph(params));
            },
        );
    }

    group.finish();
    Ok(())
}

fn rewire_only_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("rewire");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let lattice = build_ring_lattice(node_count, DEGREE)?;
        let bench_params = GeneratorBenchParams {
            node_count,
            degree: DEGREE,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(bench_params),
            &lattice,
            |b, lattice| {
                b.iter_batched(
                    || (lattice.clone(), seeded_rng()),
                    |(input, mut rng)| rewire(input, BETA, &mut rng),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
    Ok(())
}

fn barabasi_albert_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("barabasi_albert");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let params = BarabasiAlbertParams::new(node_count, EDGES_PER_NODE)?.with_rng_seed(SEED);
        let bench_params = GeneratorBenchParams {
            node_count,
            degree: EDGES_PER_NODE,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(bench_params),
            &params,
            |b, params| {
                b.iter(|| barabasi_albert_graph(params));
            },
        );
    }

    group.finish();
    Ok(())
}

fn watts_strogatz(c: &mut Criterion) {
    if let Err(err) = watts_strogatz_impl(c) {
        panic!("watts_strogatz benchmark setup failed: {err}");
    }
}

fn rewire_only(c: &mut Criterion) {
    if let Err(err) = rewire_only_impl(c) {
        panic!("rewire benchmark setup failed: {err}");
    }
}

fn barabasi_albert(c: &mut Criterion) {
    if let Err(err) = barabasi_albert_impl(c) {
        panic!("barabasi_albert benchmark setup failed: {err}");
    }
}

criterion_group!(benches, watts_strogatz, rewire_only, barabasi_albert);
criterion_main!(benches);
