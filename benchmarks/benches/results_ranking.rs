use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use election_sim::{ElectionRegistry, LogStructure};
use std::hint::black_box;

/// Election with `candidates` candidates and one ballot per voter, spread
/// unevenly so the ranking has both ties and distinct counts
fn populated_registry(candidates: usize, voters: usize) -> ElectionRegistry {
    let mut registry = ElectionRegistry::new();
    for c in 0..candidates {
        registry.register_candidate(&format!("candidate-{c}"));
    }
    for v in 0..voters {
        let voter = format!("voter-{v}");
        registry.register_voter(&voter);
        let candidate = format!("candidate-{}", (v * v) % candidates);
        registry
            .cast_vote(&voter, &candidate, LogStructure::ALL[v % 3])
            .unwrap();
    }
    registry
}

fn bench_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("results");

    for candidates in [10, 100, 1_000] {
        let registry = populated_registry(candidates, 10_000);
        group.bench_with_input(
            BenchmarkId::new("ranked_results", candidates),
            &registry,
            |b, registry| b.iter(|| black_box(registry.results())),
        );
    }

    let registry = populated_registry(100, 10_000);
    group.bench_function("summary", |b| b.iter(|| black_box(registry.summary())));

    group.bench_function("log_traversal", |b| {
        b.iter(|| {
            for structure in LogStructure::ALL {
                black_box(registry.log(structure).iter().count());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_results);
criterion_main!(benches);
