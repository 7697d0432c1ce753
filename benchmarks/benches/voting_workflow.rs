use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use election_sim::{ElectionRegistry, LogStructure, SharedRegistry};
use std::hint::black_box;
use std::time::Duration;

/// Registry with `voters` registered voters and a handful of candidates
fn seeded_registry(voters: usize) -> ElectionRegistry {
    let mut registry = ElectionRegistry::new();
    for candidate in ["alpha", "beta", "gamma", "delta"] {
        registry.register_candidate(candidate);
    }
    for i in 0..voters {
        registry.register_voter(&format!("voter-{i}"));
    }
    registry
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");
    group.warm_up_time(Duration::from_millis(100));

    group.bench_function("register_new_voter", |b| {
        b.iter_batched(
            || seeded_registry(1_000),
            |mut registry| {
                black_box(registry.register_voter(black_box("fresh")));
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("register_duplicate_voter", |b| {
        let mut registry = seeded_registry(1_000);
        b.iter(|| black_box(registry.register_voter(black_box("voter-500"))));
    });

    group.finish();
}

fn bench_cast_vote(c: &mut Criterion) {
    let mut group = c.benchmark_group("cast_vote");

    for structure in LogStructure::ALL {
        group.bench_with_input(
            BenchmarkId::new("accepted", structure.name()),
            &structure,
            |b, &structure| {
                b.iter_batched(
                    || seeded_registry(1_000),
                    |mut registry| {
                        for i in 0..1_000 {
                            let voter = format!("voter-{i}");
                            registry
                                .cast_vote(black_box(&voter), black_box("beta"), structure)
                                .unwrap();
                        }
                        black_box(registry.total_votes())
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.bench_function("rejected_already_voted", |b| {
        let mut registry = seeded_registry(1);
        registry
            .cast_vote("voter-0", "alpha", LogStructure::Queue)
            .unwrap();
        b.iter(|| {
            black_box(
                registry
                    .cast_vote(black_box("voter-0"), black_box("alpha"), LogStructure::Stack)
                    .is_err(),
            )
        });
    });

    group.bench_function("shared_registry_cast", |b| {
        b.iter_batched(
            || SharedRegistry::new(seeded_registry(100)),
            |shared| {
                for i in 0..100 {
                    let voter = format!("voter-{i}");
                    shared
                        .cast_vote(&voter, "gamma", LogStructure::LinkedList)
                        .unwrap();
                }
                black_box(shared)
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_registration, bench_cast_vote);
criterion_main!(benches);
