use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use underbar_memo::memoize;

fn slow_fib(n: &u64) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..*n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    a
}

fn bench_cached_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_call");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("fib_hit", |b| {
        let fib = memoize(slow_fib);

        // Warm the cache
        for n in 0..100 {
            fib.call(n);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(fib.call(counter % 100));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_uncached_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncached_call");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("fib_miss", |b| {
        // Fresh wrapper per iteration, so every call computes and stores
        b.iter_batched(
            || memoize(slow_fib),
            |fib| black_box(fib.call(black_box(50))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("fib_direct", |b| {
        b.iter(|| black_box(slow_fib(black_box(&50))));
    });

    group.finish();
}

criterion_group!(benches, bench_cached_call, bench_uncached_call);
criterion_main!(benches);
