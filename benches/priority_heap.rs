use criterion::{criterion_group, criterion_main, Criterion};
use prio_heap::PriorityHeap;
use rand::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("insert", |b| {
        let mut heap = PriorityHeap::min_heap();
        let mut rng = rand::thread_rng();
        b.iter(|| {
            heap.insert(rng.gen::<i32>());
        })
    });

    c.bench_function("insert_pop", |b| {
        let mut rng = rand::thread_rng();
        let mut heap = PriorityHeap::min_heap();
        heap.extend((0..1000).map(|_| rng.gen::<i32>()));
        b.iter(|| {
            heap.insert(rng.gen::<i32>());
            heap.pop()
        })
    });

    c.bench_function("remove_at_random", |b| {
        let mut rng = rand::thread_rng();
        let mut heap = PriorityHeap::min_heap();
        heap.extend((0..1000).map(|_| rng.gen::<i32>()));
        b.iter(|| {
            heap.insert(rng.gen::<i32>());
            let i = rng.gen_range(0..heap.size());
            heap.remove_at(i)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
