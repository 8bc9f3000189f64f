// Copyright © 2023, 2024 Andrea Corbellini and contributors
// SPDX-License-Identifier: BSD-3-Clause

use circular_deque::CircularBuffer;
use criterion::BenchmarkGroup;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;

const CAPACITIES: [usize; 3] = [10, 100, 1000];

fn filled(capacity: usize) -> CircularBuffer<u32> {
    CircularBuffer::from_elem(capacity, 0).unwrap()
}

/// Returns a full buffer whose elements wrap around the end of the storage.
fn wrapped(capacity: usize) -> CircularBuffer<u32> {
    let mut buf = CircularBuffer::with_capacity(capacity).unwrap();
    buf.extend(0..(capacity + capacity / 2) as u32);
    buf
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    fn do_bench<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, buf: &mut CircularBuffer<u32>) {
        group.throughput(Throughput::Elements(buf.capacity() as u64));
        group.bench_function(format!("push_back/{}", buf.capacity()), |b| b.iter(|| {
            buf.push_back(1).unwrap();
        }));
        group.bench_function(format!("push_front/{}", buf.capacity()), |b| b.iter(|| {
            buf.push_front(1).unwrap();
        }));
    }

    for capacity in CAPACITIES {
        do_bench(&mut group, &mut CircularBuffer::with_capacity(capacity).unwrap());
    }

    group.finish();
}

fn bench_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop");

    fn do_bench<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, buf: &CircularBuffer<u32>) {
        group.throughput(Throughput::Elements(buf.capacity() as u64));
        group.bench_function(format!("pop_back/{}", buf.capacity()), |b| b.iter(|| {
            let mut buf = buf.clone();
            for _ in 0..buf.capacity() {
                buf.pop_back().unwrap();
            }
        }));
        group.bench_function(format!("pop_front/{}", buf.capacity()), |b| b.iter(|| {
            let mut buf = buf.clone();
            for _ in 0..buf.capacity() {
                buf.pop_front().unwrap();
            }
        }));
    }

    for capacity in CAPACITIES {
        do_bench(&mut group, &filled(capacity));
    }

    group.finish();
}

fn bench_insert_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase");

    fn do_bench<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, buf: &mut CircularBuffer<u32>) {
        let middle = buf.len() / 2;
        group.bench_function(format!("insert/{}", buf.capacity()), |b| b.iter(|| {
            buf.insert(middle, 1).unwrap();
        }));
        group.bench_function(format!("erase/{}", buf.capacity()), |b| b.iter(|| {
            let mut buf = buf.clone();
            buf.erase(middle..middle + 1).unwrap();
        }));
    }

    for capacity in CAPACITIES {
        do_bench(&mut group, &mut wrapped(capacity));
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    fn do_bench<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, buf: &CircularBuffer<u32>) {
        group.throughput(Throughput::Elements(buf.capacity() as u64));
        group.bench_function(format!("linearize/{}", buf.capacity()), |b| b.iter(|| {
            let mut buf = buf.clone();
            buf.linearize().len()
        }));
        group.bench_function(format!("rotate/{}", buf.capacity()), |b| b.iter(|| {
            let mut buf = buf.clone();
            buf.rotate(buf.len() / 3).unwrap();
        }));
        group.bench_function(format!("set_capacity/{}", buf.capacity()), |b| b.iter(|| {
            let mut buf = buf.clone();
            buf.set_capacity(buf.capacity() * 2).unwrap();
        }));
    }

    for capacity in CAPACITIES {
        do_bench(&mut group, &wrapped(capacity));
    }

    group.finish();
}

criterion_group!(benches, bench_push, bench_pop, bench_insert_erase, bench_layout);
criterion_main!(benches);
