use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rust_job_pool::{args, prelude::*};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn benchmark_pool_creation(c: &mut Criterion) {
    c.bench_function("pool_creation", |b| {
        b.iter(|| {
            let pool: Pool<u64, u64> = Pool::new(4).expect("Failed to create pool");
            pool.shutdown().expect("Failed to shutdown pool");
        });
    });
}

fn benchmark_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    // Lightweight jobs
    group.bench_function("lightweight_jobs_100", |b| {
        b.iter_batched(
            || Pool::<u64, u64>::new(4).expect("Failed to create pool"),
            |pool| {
                for n in 0..100 {
                    pool.add(|n: &u64| Ok(black_box(n + 1)), n)
                        .expect("Failed to submit job");
                }
                for _ in 0..100 {
                    black_box(pool.result().expect("Failed to get result"));
                }
            },
            BatchSize::SmallInput,
        );
    });

    // Medium workload
    group.bench_function("medium_jobs_100", |b| {
        b.iter_batched(
            || Pool::<u64, u64>::new(4).expect("Failed to create pool"),
            |pool| {
                for n in 0..100 {
                    pool.add(
                        |n: &u64| {
                            let mut sum = 0u64;
                            for i in 0..1000 {
                                sum = sum.wrapping_add(i ^ n);
                            }
                            Ok(sum)
                        },
                        n,
                    )
                    .expect("Failed to submit job");
                }
                for _ in 0..100 {
                    black_box(pool.result().expect("Failed to get result"));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_queue_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_layout");
    let layouts = [
        ("unbounded", PoolConfig::new(4)),
        ("handshake", PoolConfig::handshake(4)),
        (
            "bounded_64",
            PoolConfig::new(4)
                .with_inbound(QueueCapacity::Bounded(64))
                .with_outbound(QueueCapacity::Bounded(64)),
        ),
    ];

    for (name, config) in layouts {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter_batched(
                || Pool::<u64, u64>::with_config(config.clone()).expect("Failed to create pool"),
                |pool| {
                    // A concurrent reader keeps the bounded layouts moving
                    thread::scope(|s| {
                        s.spawn(|| {
                            for _ in 0..500 {
                                black_box(pool.result().expect("Failed to get result"));
                            }
                        });
                        for n in 0..500 {
                            pool.add(|n: &u64| Ok(*n), n).expect("Failed to submit job");
                        }
                    });
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_concurrent_submission(c: &mut Criterion) {
    c.bench_function("concurrent_submission_4_threads", |b| {
        b.iter_batched(
            || Arc::new(Pool::<u64, u64>::new(4).expect("Failed to create pool")),
            |pool| {
                let handles: Vec<_> = (0..4)
                    .map(|_| {
                        let pool = Arc::clone(&pool);
                        thread::spawn(move || {
                            for n in 0..25 {
                                pool.add(|n: &u64| Ok(*n), n).expect("Failed to submit job");
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().expect("Thread panicked");
                }
                for _ in 0..100 {
                    black_box(pool.result().expect("Failed to get result"));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn benchmark_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("jobs_per_second", |b| {
        b.iter_batched(
            || Pool::<u64, u64>::new(8).expect("Failed to create pool"),
            |pool| {
                for n in 0..1000 {
                    pool.add(|n: &u64| Ok(*n), n).expect("Failed to submit job");
                }
                let completed = pool.finish();
                assert_eq!(completed.len(), 1000, "Not all jobs completed");
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_dynamic_args(c: &mut Criterion) {
    c.bench_function("dynamic_args_100", |b| {
        b.iter_batched(
            || DynPool::new(4).expect("Failed to create pool"),
            |pool| {
                for n in 0..100u64 {
                    pool.add(
                        |a: &Args| {
                            let n: &u64 = a.get(0)?;
                            let label: &&str = a.get(1)?;
                            Ok(Box::new(format!("{}-{}", label, n)) as DynValue)
                        },
                        args![n, "job"],
                    )
                    .expect("Failed to submit job");
                }
                for _ in 0..100 {
                    black_box(pool.result().expect("Failed to get result"));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    benchmark_pool_creation,
    benchmark_round_trip,
    benchmark_queue_layouts,
    benchmark_concurrent_submission,
    benchmark_throughput,
    benchmark_dynamic_args
);
criterion_main!(benches);
