use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrucache::Lru;

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key-{i}")).collect()
}

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_hit", |b| {
        let mut cache = Lru::new(1000).unwrap();
        let keys = keys(100);
        let data = vec![b'x'; 1024];

        for key in &keys {
            cache.add(key.as_str(), data.clone());
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&keys[counter % 100]));
            counter += 1;
        });
    });

    group.bench_function("get_miss", |b| {
        let mut cache = Lru::new(10).unwrap();
        let keys = keys(100);

        // Only the last 10 keys survive
        for key in &keys {
            cache.add(key.as_str(), 0u64);
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&keys[counter % 90]));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_add_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("add_evicting", |b| {
        let mut cache = Lru::new(1000).unwrap();
        let keys = keys(10_000);

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.add(keys[counter % 10_000].as_str(), counter));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = Lru::new(1000).unwrap();
        let keys = keys(2000);

        for key in keys.iter().take(1000) {
            cache.add(key.as_str(), 0usize);
        }

        let mut counter = 0usize;
        b.iter(|| {
            let key = &keys[counter % 2000];
            if counter % 2 == 0 {
                black_box(cache.get(key));
            } else {
                black_box(cache.add(key.as_str(), counter));
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_add_evicting, bench_mixed_50_50);
criterion_main!(benches);
