//! Basic benchmarks comparing recycled items against fresh allocations.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use recycle_pool::{Generator, Pool, Template, array_generator};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const BUFFER_CAPACITY: usize = 4096;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("rp_basic");

    group.bench_function("vec_fresh", |b| {
        b.iter(|| {
            let mut buffer = Vec::<u8>::with_capacity(BUFFER_CAPACITY);
            buffer.push(black_box(1));
            black_box(buffer);
        });
    });

    group.bench_function("pool_get_release", |b| {
        let mut pool: Pool<Vec<u8>> = (0..16)
            .map(|_| Vec::with_capacity(BUFFER_CAPACITY))
            .collect();

        b.iter(|| {
            let mut buffer = pool.get().unwrap_or_default();
            buffer.push(black_box(1));
            buffer.clear();
            pool.release(buffer);
        });
    });

    group.bench_function("generator_get_release", |b| {
        let mut generator =
            Generator::builder(Template::constructor(|| Vec::<u8>::with_capacity(BUFFER_CAPACITY)))
                .count(16)
                .clear(Vec::clear)
                .regenerate(16)
                .build();

        b.iter(|| {
            let mut buffer = generator.get().unwrap_or_default();
            buffer.push(black_box(1));
            generator.release(buffer);
        });
    });

    group.bench_function("array_generator_get_release", |b| {
        let mut generator = array_generator::<u8>();

        b.iter(|| {
            let mut buffer = generator.get().unwrap_or_default();
            buffer.push(black_box(1));
            generator.release(buffer);
        });
    });

    group.bench_function("generator_create_delete", |b| {
        let mut generator = Generator::builder(Template::value([0_u64; 8])).build();

        b.iter(|| {
            generator.create(black_box(64));
            generator.delete(64_usize);
        });
    });

    group.finish();
}
